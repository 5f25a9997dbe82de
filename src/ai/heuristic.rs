//! Greedy one-ply strategy for the line game.

use super::{place, random};
use crate::error::EngineError;
use crate::games::{tictactoe, Board, Side};
use rand::rngs::StdRng;
use tracing::debug;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Finds the first cell, in index order, that completes a triple for
/// `side` when played there.
fn winning_probe(board: &Board<{ tictactoe::SIZE }>, side: Side) -> Option<usize> {
    (0..Board::<{ tictactoe::SIZE }>::CELLS).find(|&pos| {
        place(board, pos, side).is_some_and(|probe| tictactoe::winner(&probe) == Some(side))
    })
}

/// Chooses by a fixed priority list: win, block, center, corner, edge,
/// then uniform among whatever remains.
///
/// The list looks one move ahead only and cannot see forks, so it can
/// still lose a round it might have saved.
pub(crate) fn choose(
    board: &Board<{ tictactoe::SIZE }>,
    mover: Side,
    rng: &mut StdRng,
) -> Result<usize, EngineError> {
    if let Some(pos) = winning_probe(board, mover) {
        debug!(position = pos, "Taking winning cell");
        return Ok(pos);
    }
    if let Some(pos) = winning_probe(board, mover.opponent()) {
        debug!(position = pos, "Blocking opposing win");
        return Ok(pos);
    }
    if board.is_empty(CENTER) {
        debug!(position = CENTER, "Taking center");
        return Ok(CENTER);
    }
    if let Some(&pos) = CORNERS.iter().find(|&&pos| board.is_empty(pos)) {
        debug!(position = pos, "Taking corner");
        return Ok(pos);
    }
    if let Some(&pos) = EDGES.iter().find(|&&pos| board.is_empty(pos)) {
        debug!(position = pos, "Taking edge");
        return Ok(pos);
    }
    random::choose(&tictactoe::legal_moves(board), rng)
}
