//! Uniform-random move selection.

use crate::error::EngineError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::warn;

/// Draws one of the legal moves uniformly at random.
pub(crate) fn choose(moves: &[usize], rng: &mut StdRng) -> Result<usize, EngineError> {
    match moves.choose(rng) {
        Some(&pos) => Ok(pos),
        None => {
            warn!("Strategy invoked with no legal moves");
            Err(EngineError::PreconditionViolated)
        }
    }
}
