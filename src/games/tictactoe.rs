//! Line-game rules on a 3x3 grid.

use super::{Board, Cell, Outcome, Side};
use crate::error::EngineError;
use tracing::{debug, instrument, warn};

/// Board dimension of the line game.
pub const SIZE: usize = 3;

/// The eight winning triples.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Creates the starting position: an empty grid.
pub fn initial_board() -> Board<SIZE> {
    Board::new()
}

/// Lists every empty cell in index order.
pub fn legal_moves(board: &Board<SIZE>) -> Vec<usize> {
    board.empty_positions()
}

/// Places `side` at `pos` if the cell is empty.
#[instrument(skip(board))]
pub fn apply(board: &mut Board<SIZE>, pos: usize, side: Side) -> Result<(), EngineError> {
    if board.get(pos)? != Cell::Empty {
        warn!(position = pos, "Cell is occupied");
        return Err(EngineError::IllegalMove);
    }
    board.set(pos, Cell::Taken(side))?;
    debug!(position = pos, "Applied line move");
    Ok(())
}

/// Finds a side occupying all three cells of any winning triple.
pub fn winner(board: &Board<SIZE>) -> Option<Side> {
    for line in &LINES {
        for side in [Side::Human, Side::Machine] {
            if line
                .iter()
                .all(|&pos| board.get(pos) == Ok(Cell::Taken(side)))
            {
                return Some(side);
            }
        }
    }
    None
}

/// Checks for a finished round: a completed triple wins, a full board
/// without one draws.
pub fn outcome(board: &Board<SIZE>) -> Option<Outcome> {
    if let Some(side) = winner(board) {
        return Some(Outcome::Winner(side));
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::parse_board;

    #[test]
    fn test_initial_board_is_open() {
        let board = initial_board();
        assert_eq!(legal_moves(&board), (0..9).collect::<Vec<_>>());
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_legal_moves_are_empty_cells() {
        let board = parse_board::<SIZE>("X.O .X. ..O");
        assert_eq!(legal_moves(&board), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_apply_rejections() {
        let mut board = parse_board::<SIZE>("X.. ... ...");
        let before = board;
        assert_eq!(
            apply(&mut board, 0, Side::Machine),
            Err(EngineError::IllegalMove)
        );
        assert_eq!(
            apply(&mut board, 9, Side::Machine),
            Err(EngineError::OutOfBounds(9))
        );
        assert_eq!(board, before);
        apply(&mut board, 4, Side::Machine).expect("Open cell failed");
        assert_eq!(board.get(4), Ok(Cell::Taken(Side::Machine)));
    }

    #[test]
    fn test_winner_on_sample_lines() {
        assert_eq!(winner(&parse_board::<SIZE>("XXX .O. ..O")), Some(Side::Human));
        assert_eq!(
            winner(&parse_board::<SIZE>("OX. OX. O..")),
            Some(Side::Machine)
        );
        assert_eq!(winner(&parse_board::<SIZE>("X.O .X. O.X")), Some(Side::Human));
        assert_eq!(winner(&parse_board::<SIZE>("XO. .O. XOX")), Some(Side::Machine));
        assert_eq!(winner(&parse_board::<SIZE>("XO. OX. ..O")), None);
    }

    #[test]
    fn test_winner_over_full_single_side_lattice() {
        // Triples restated from the grid geometry rather than LINES.
        let mut triples = Vec::new();
        for i in 0..3 {
            triples.push([3 * i, 3 * i + 1, 3 * i + 2]);
            triples.push([i, i + 3, i + 6]);
        }
        triples.push([0, 4, 8]);
        triples.push([2, 4, 6]);

        for side in [Side::Human, Side::Machine] {
            for mask in 0u16..512 {
                let mut board = initial_board();
                for pos in 0..9 {
                    if mask & (1 << pos) != 0 {
                        board
                            .set(pos, Cell::Taken(side))
                            .expect("Set in range failed");
                    }
                }
                let expected = triples
                    .iter()
                    .any(|line| line.iter().all(|&pos| mask & (1 << pos) != 0));
                assert_eq!(
                    winner(&board),
                    expected.then_some(side),
                    "mask {:#011b} side {:?}",
                    mask,
                    side
                );
            }
        }
    }

    #[test]
    fn test_draw_on_full_board_without_triple() {
        let board = parse_board::<SIZE>("XOX XOO OXX");
        assert_eq!(winner(&board), None);
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_outcome_prefers_winner_over_draw() {
        let board = parse_board::<SIZE>("XXX OOX OXO");
        assert_eq!(outcome(&board), Some(Outcome::Winner(Side::Human)));
    }
}
