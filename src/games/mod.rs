//! Board model and the two rule engines.

mod board;
pub mod reversi;
pub mod tictactoe;

pub use board::Board;

#[cfg(test)]
pub(crate) use board::parse_board;

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// A player in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The person at the other end of the conversation.
    Human,
    /// The engine's built-in opponent.
    Machine,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Machine,
            Side::Machine => Side::Human,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    Empty,
    /// A piece belonging to the given side.
    Taken(Side),
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The given side won the round.
    Winner(Side),
    /// Neither side won.
    Draw,
}

/// Which rule set a session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// Capture game on an 8x8 grid.
    Reversi,
    /// Line game on a 3x3 grid.
    TicTacToe,
}

/// A board paired with its rule set.
///
/// Dispatches the per-game rule functions behind one surface so the
/// session does not branch on the kind for routine checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameBoard {
    /// Capture game state.
    Reversi(Board<{ reversi::SIZE }>),
    /// Line game state.
    TicTacToe(Board<{ tictactoe::SIZE }>),
}

impl GameBoard {
    /// Creates the initial position for the given rule set.
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::Reversi => GameBoard::Reversi(reversi::initial_board()),
            GameKind::TicTacToe => GameBoard::TicTacToe(tictactoe::initial_board()),
        }
    }

    /// Returns the rule set this board plays.
    pub fn kind(&self) -> GameKind {
        match self {
            GameBoard::Reversi(_) => GameKind::Reversi,
            GameBoard::TicTacToe(_) => GameKind::TicTacToe,
        }
    }

    /// Lists the legal destinations for the given side.
    pub fn legal_moves(&self, side: Side) -> Vec<usize> {
        match self {
            GameBoard::Reversi(board) => reversi::legal_moves(board, side),
            GameBoard::TicTacToe(board) => tictactoe::legal_moves(board),
        }
    }

    /// Applies a move for the given side, rejecting illegal ones untouched.
    pub fn apply(&mut self, pos: usize, side: Side) -> Result<(), EngineError> {
        match self {
            GameBoard::Reversi(board) => reversi::apply(board, pos, side).map(|_| ()),
            GameBoard::TicTacToe(board) => tictactoe::apply(board, pos, side),
        }
    }

    /// Checks for a finished round.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameBoard::Reversi(board) => reversi::outcome(board),
            GameBoard::TicTacToe(board) => tictactoe::outcome(board),
        }
    }

    /// Copies the grid into rows for rendering.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        match self {
            GameBoard::Reversi(board) => board.snapshot(),
            GameBoard::TicTacToe(board) => board.snapshot(),
        }
    }
}
