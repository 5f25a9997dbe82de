//! Inert board grid shared by both game variants.

use super::{Cell, Side};
use crate::error::EngineError;
use std::fmt;

/// Fixed N×N grid of cells addressed by row-major linear index.
///
/// Carries no rules; the rule modules decide legality and layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Number of cells on the board.
    pub const CELLS: usize = N * N;

    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Cell; N]; N]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given linear position.
    pub fn get(&self, pos: usize) -> Result<Cell, EngineError> {
        if pos >= Self::CELLS {
            return Err(EngineError::OutOfBounds(pos));
        }
        Ok(self.cells[pos / N][pos % N])
    }

    /// Sets the cell at the given linear position.
    pub fn set(&mut self, pos: usize, cell: Cell) -> Result<(), EngineError> {
        if pos >= Self::CELLS {
            return Err(EngineError::OutOfBounds(pos));
        }
        self.cells[pos / N][pos % N] = cell;
        Ok(())
    }

    /// Checks that the position is on the board and empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Ok(Cell::Empty))
    }

    /// Counts the cells held by the given side.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Taken(side))
            .count()
    }

    /// Checks whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Lists the positions of all empty cells in index order.
    pub fn empty_positions(&self) -> Vec<usize> {
        (0..Self::CELLS).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Copies the grid into rows for rendering.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Taken(Side::Human) => 'X',
                    Cell::Taken(Side::Machine) => 'O',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// Parses a board from the `Display` notation: `.` empty, `X` human,
/// `O` machine. Whitespace separates rows; other characters are invalid.
#[cfg(test)]
pub(crate) fn parse_board<const N: usize>(art: &str) -> Board<N> {
    let mut board = Board::new();
    let mut pos = 0;
    for symbol in art.chars().filter(|c| !c.is_whitespace()) {
        let cell = match symbol {
            '.' => Cell::Empty,
            'X' => Cell::Taken(Side::Human),
            'O' => Cell::Taken(Side::Machine),
            other => panic!("unexpected board symbol {:?}", other),
        };
        board.set(pos, cell).expect("board art larger than board");
        pos += 1;
    }
    assert_eq!(pos, Board::<N>::CELLS, "board art smaller than board");
    board
}
