//! Capture-game rules on an 8x8 grid.

use super::{Board, Cell, Outcome, Side};
use crate::error::EngineError;
use std::cmp::Ordering;
use tracing::{debug, instrument, warn};

/// Board dimension of the capture game.
pub const SIZE: usize = 8;

/// Scan offsets for the eight surrounding directions.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Creates the starting position: four center pieces in an
/// alternating pattern.
pub fn initial_board() -> Board<SIZE> {
    let mut rows = [[Cell::Empty; SIZE]; SIZE];
    rows[3][3] = Cell::Taken(Side::Machine);
    rows[3][4] = Cell::Taken(Side::Human);
    rows[4][3] = Cell::Taken(Side::Human);
    rows[4][4] = Cell::Taken(Side::Machine);
    Board::from_rows(rows)
}

/// Collects every opponent position flipped by placing `side` at `pos`.
///
/// A direction contributes its run of contiguous opponent cells only
/// when the run ends at a cell already held by `side`; a board edge or
/// an empty cell discards that direction. Empty when the destination
/// is occupied, out of range, or captures nothing.
fn flips(board: &Board<SIZE>, pos: usize, side: Side) -> Vec<usize> {
    if !board.is_empty(pos) {
        return Vec::new();
    }
    let row = (pos / SIZE) as isize;
    let col = (pos % SIZE) as isize;
    let size = SIZE as isize;
    let mut flipped = Vec::new();
    for (dr, dc) in DIRECTIONS {
        let mut run = Vec::new();
        let mut r = row + dr;
        let mut c = col + dc;
        while r >= 0 && r < size && c >= 0 && c < size {
            let probe = (r * size + c) as usize;
            match board.get(probe) {
                Ok(Cell::Taken(owner)) if owner == side.opponent() => run.push(probe),
                Ok(Cell::Taken(_)) => {
                    flipped.append(&mut run);
                    break;
                }
                _ => break,
            }
            r += dr;
            c += dc;
        }
    }
    flipped
}

/// Lists every legal destination for `side` in index order.
pub fn legal_moves(board: &Board<SIZE>, side: Side) -> Vec<usize> {
    (0..Board::<SIZE>::CELLS)
        .filter(|&pos| !flips(board, pos, side).is_empty())
        .collect()
}

/// Places `side` at `pos` and flips every captured line.
///
/// All captures are computed before any cell is written, so a rejected
/// move leaves the board untouched. Returns the number of flipped
/// pieces.
#[instrument(skip(board))]
pub fn apply(board: &mut Board<SIZE>, pos: usize, side: Side) -> Result<usize, EngineError> {
    if board.get(pos)? != Cell::Empty {
        warn!(position = pos, "Destination is occupied");
        return Err(EngineError::IllegalMove);
    }
    let flipped = flips(board, pos, side);
    if flipped.is_empty() {
        warn!(position = pos, "Move captures nothing");
        return Err(EngineError::IllegalMove);
    }
    board.set(pos, Cell::Taken(side))?;
    for &capture in &flipped {
        board.set(capture, Cell::Taken(side))?;
    }
    debug!(
        position = pos,
        captured = flipped.len(),
        "Applied capture move"
    );
    Ok(flipped.len())
}

/// Checks for a finished round.
///
/// The game ends only when neither side has a legal move; the higher
/// piece count then wins and equal counts draw.
pub fn outcome(board: &Board<SIZE>) -> Option<Outcome> {
    if !legal_moves(board, Side::Human).is_empty()
        || !legal_moves(board, Side::Machine).is_empty()
    {
        return None;
    }
    let human = board.count(Side::Human);
    let machine = board.count(Side::Machine);
    let outcome = match human.cmp(&machine) {
        Ordering::Greater => Outcome::Winner(Side::Human),
        Ordering::Less => Outcome::Winner(Side::Machine),
        Ordering::Equal => Outcome::Draw,
    };
    Some(outcome)
}
