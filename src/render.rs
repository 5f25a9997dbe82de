//! State handed back to the caller for rendering.
//!
//! The engine never formats user-facing text. Everything it wants said
//! is a key the dispatch layer maps to its own wording and language.

use crate::ai::Difficulty;
use crate::games::{Cell, Outcome, Side};
use serde::{Deserialize, Serialize};

/// Prompt the caller should put to the player next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptKey {
    /// Offer the difficulty choices.
    ChooseDifficulty,
    /// A fresh round started and the human moves first.
    HumanMovesFirst,
    /// A fresh round started and the machine already moved.
    MachineMovedFirst,
    /// The machine replied; the human is up.
    YourTurn,
    /// The machine had no legal move and passed; the human is up again.
    MachinePassed,
    /// The human had no legal move; the machine moved again.
    HumanPassed,
    /// The round is over; offer a rematch.
    PlayAgain,
}

/// Running win counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Rounds won by the human.
    pub human_wins: u32,
    /// Rounds won by the machine.
    pub machine_wins: u32,
}

/// Snapshot of a session after an operation, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableState {
    /// The grid, row by row.
    pub board: Vec<Vec<Cell>>,
    /// Side expected to act next, if a round is running.
    pub to_move: Option<Side>,
    /// Whether the current round has ended.
    pub terminal: bool,
    /// What to ask the player.
    pub prompt: PromptKey,
    /// How the round ended, when it did.
    pub outcome: Option<Outcome>,
    /// Difficulties the player may pick right now.
    pub choices: Vec<Difficulty>,
    /// Running score.
    pub tally: SummaryStats,
}
