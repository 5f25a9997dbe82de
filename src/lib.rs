//! Parlor games - turn-based board games against a machine opponent
//!
//! This library keeps one board-game session per conversation and
//! plays the machine side itself. Callers feed it raw move indices
//! and render whatever comes back.
//!
//! # Architecture
//!
//! - **Games**: an inert grid plus two rule sets (8x8 capture game,
//!   3x3 line game)
//! - **AI**: three machine strategies (random, greedy heuristic,
//!   exhaustive search)
//! - **Session**: one player's rounds, score, and turn order
//! - **Registry**: per-conversation sessions with serialized access
//!
//! # Example
//!
//! ```no_run
//! use parlor_games::{Difficulty, GameKind, SessionRegistry};
//!
//! # async fn example() -> Result<(), parlor_games::EngineError> {
//! // One registry per game offered
//! let registry = SessionRegistry::new(GameKind::TicTacToe);
//!
//! // A conversation starts a session, picks a difficulty, and moves
//! registry.start_session(42);
//! registry.select_difficulty(42, Difficulty::Hard).await?;
//! let state = registry.apply_move(42, 4).await?;
//! assert!(!state.terminal);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod config;
mod error;
mod games;
mod registry;
mod render;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Errors
pub use error::EngineError;

// Crate-level exports - Boards and rules
pub use games::{reversi, tictactoe, Board, Cell, GameBoard, GameKind, Outcome, Side};

// Crate-level exports - Machine strategies
pub use ai::{Difficulty, Strategy};

// Crate-level exports - Session and registry
pub use registry::{ChatId, SessionRegistry};
pub use render::{PromptKey, RenderableState, SummaryStats};
pub use session::GameSession;
