//! Machine-opponent strategies.

mod heuristic;
mod minimax;
pub(crate) mod random;

use crate::error::EngineError;
use crate::games::{tictactoe, Board, Cell, GameKind, Side};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Opponent strength offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Difficulty {
    /// Uniform-random play.
    Easy,
    /// Greedy one-ply priority list.
    Medium,
    /// Exhaustive search; wins or draws every round.
    Hard,
}

impl Difficulty {
    /// Difficulties offered for the given rule set.
    ///
    /// The capture game ships only the random opponent; the line game
    /// offers all three.
    pub fn choices(kind: GameKind) -> Vec<Difficulty> {
        match kind {
            GameKind::Reversi => vec![Difficulty::Easy],
            GameKind::TicTacToe => <Difficulty as strum::IntoEnumIterator>::iter().collect(),
        }
    }

    /// Checks whether this difficulty is offered for the rule set.
    pub fn available_for(self, kind: GameKind) -> bool {
        Self::choices(kind).contains(&self)
    }

    /// The strategy backing this difficulty.
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::Heuristic,
            Difficulty::Hard => Strategy::Minimax,
        }
    }
}

/// Move-selection policy for the machine side of the line game.
///
/// Strategies are stateless; the caller threads the session RNG in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform choice among the legal moves.
    Random,
    /// Win, block, center, corner, edge, in that order.
    Heuristic,
    /// Minimax with alpha-beta pruning.
    Minimax,
}

impl Strategy {
    /// Chooses a move for `mover` on the given board.
    ///
    /// Fails with [`EngineError::PreconditionViolated`] when no legal
    /// move exists; terminal detection upstream makes that a caller
    /// bug.
    pub fn choose(
        self,
        board: &Board<{ tictactoe::SIZE }>,
        mover: Side,
        rng: &mut StdRng,
    ) -> Result<usize, EngineError> {
        match self {
            Strategy::Random => random::choose(&tictactoe::legal_moves(board), rng),
            Strategy::Heuristic => heuristic::choose(board, mover, rng),
            Strategy::Minimax => minimax::choose(board, mover),
        }
    }
}

/// Copies the board with `side` placed at `pos`, or `None` when the
/// cell is not open.
pub(crate) fn place(
    board: &Board<{ tictactoe::SIZE }>,
    pos: usize,
    side: Side,
) -> Option<Board<{ tictactoe::SIZE }>> {
    if !board.is_empty(pos) {
        return None;
    }
    let mut probe = *board;
    probe.set(pos, Cell::Taken(side)).ok()?;
    Some(probe)
}
