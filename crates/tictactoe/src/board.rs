//! The 3x3 grid and its cell-level legality rules.

use crate::types::{CELLS, Marker, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a placement or lookup was refused.
///
/// Both cases are ordinary outcomes of user input, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum Rejection {
    /// Index lies outside 0-8.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
    /// Cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// 3x3 board stored row-major: index = row * 3 + column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// True iff `index` names a cell on the board.
    pub fn is_valid(&self, index: usize) -> bool {
        index < CELLS
    }

    /// Returns the square at `index`.
    pub fn get(&self, index: usize) -> Result<Square, Rejection> {
        self.squares
            .get(index)
            .copied()
            .ok_or(Rejection::OutOfRange(index))
    }

    /// True iff `index` is on the board and holds no marker.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Ok(Square::Empty))
    }

    /// Writes `marker` at `index` if the cell exists and is empty.
    ///
    /// Knows nothing about turns or wins; the board is left untouched on
    /// rejection.
    #[must_use = "a rejected placement leaves the board unchanged"]
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, marker: Marker) -> Result<(), Rejection> {
        let square = self
            .squares
            .get_mut(index)
            .ok_or(Rejection::OutOfRange(index))?;
        if *square != Square::Empty {
            debug!(index, "Cell already occupied");
            return Err(Rejection::Occupied(index));
        }
        *square = Square::Marked(marker);
        Ok(())
    }

    /// True iff every cell holds a marker.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Read-only view of all nine cells, row-major.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of empty cells, ascending.
    pub fn available(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    /// How many cells hold `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.squares.iter().filter(|s| s.holds(marker)).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Marked(marker) => write!(f, "{}", marker.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELLS).all(|i| board.is_empty(i)));
        assert_eq!(board.available().len(), 9);
    }

    #[test]
    fn test_place_then_occupied() {
        let mut board = Board::new();
        assert_eq!(board.place(0, Marker::X), Ok(()));
        assert_eq!(board.place(0, Marker::O), Err(Rejection::Occupied(0)));
        assert_eq!(board.get(0), Ok(Square::Marked(Marker::X)));
    }

    #[test]
    fn test_out_of_range_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(4, Marker::O).unwrap();
        let before = board.clone();
        for index in [9, 10, 100, usize::MAX] {
            assert_eq!(board.place(index, Marker::X), Err(Rejection::OutOfRange(index)));
            assert_eq!(board.get(index), Err(Rejection::OutOfRange(index)));
            assert!(!board.is_empty(index));
            assert!(!board.is_valid(index));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_cells() {
        let mut board = Board::new();
        board.place(2, Marker::X).unwrap();
        board.place(6, Marker::O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, Marker::X).unwrap();
        board.place(4, Marker::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::OutOfRange(9).to_string(),
            "Cell 9 is off the board (must be 0-8)"
        );
        assert_eq!(Rejection::Occupied(3).to_string(), "Cell 3 is already occupied");
    }
}
