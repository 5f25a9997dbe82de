//! Exhaustive search for the line game.

use super::place;
use crate::error::EngineError;
use crate::games::{tictactoe, Board, Side};
use tracing::{debug, warn};

/// Chooses by full minimax with alpha-beta pruning.
///
/// Root candidates are probed in index order, each against a fresh
/// full window, and only a strictly better score replaces the running
/// best; ties keep the earliest cell, so an empty board yields 0.
pub(crate) fn choose(
    board: &Board<{ tictactoe::SIZE }>,
    mover: Side,
) -> Result<usize, EngineError> {
    let mut best: Option<(usize, i32)> = None;
    for pos in 0..Board::<{ tictactoe::SIZE }>::CELLS {
        let Some(probe) = place(board, pos, mover) else {
            continue;
        };
        let score = search(&probe, mover, mover.opponent(), 1, i32::MIN, i32::MAX);
        debug!(position = pos, score, "Scored candidate");
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((pos, score)),
        }
    }
    match best {
        Some((pos, score)) => {
            debug!(position = pos, score, "Search settled on a move");
            Ok(pos)
        }
        None => {
            warn!("Strategy invoked with no legal moves");
            Err(EngineError::PreconditionViolated)
        }
    }
}

/// Scores a position for `maximizer` with `to_move` to play.
///
/// Terminals score `10 - depth` when the maximizer holds the triple,
/// `depth - 10` when the opponent does, and 0 on a full board, so
/// faster wins and slower losses rank higher. A branch is cut as soon
/// as `beta <= alpha`.
fn search(
    board: &Board<{ tictactoe::SIZE }>,
    maximizer: Side,
    to_move: Side,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = tictactoe::winner(board) {
        return if winner == maximizer {
            10 - depth
        } else {
            depth - 10
        };
    }
    if board.is_full() {
        return 0;
    }
    if to_move == maximizer {
        let mut best = i32::MIN;
        for pos in 0..Board::<{ tictactoe::SIZE }>::CELLS {
            let Some(probe) = place(board, pos, to_move) else {
                continue;
            };
            let score = search(&probe, maximizer, to_move.opponent(), depth + 1, alpha, beta);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in 0..Board::<{ tictactoe::SIZE }>::CELLS {
            let Some(probe) = place(board, pos, to_move) else {
                continue;
            };
            let score = search(&probe, maximizer, to_move.opponent(), depth + 1, alpha, beta);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
