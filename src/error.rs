//! Error type shared across the engine.

/// Errors produced by board, rule, and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The position lies outside the board grid.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The move was rejected by the rules or the session phase.
    /// Nothing was changed; the caller should re-prompt.
    #[display("Move is not allowed")]
    IllegalMove,

    /// No session exists for the addressed identity.
    #[display("No active session")]
    NoSession,

    /// The engine was driven outside its preconditions, such as a
    /// strategy invoked with zero legal moves. Indicates a caller bug.
    #[display("No legal moves available to the strategy")]
    PreconditionViolated,
}

impl std::error::Error for EngineError {}
