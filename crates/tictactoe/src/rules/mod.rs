//! Win and tie rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. The move path only ever asks
//! [`evaluate`], which looks at the lines through the cell just played
//! instead of scanning the whole board.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{ANTI_DIAGONAL, MAIN_DIAGONAL, completes_line, lines_through, winner};

use crate::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of judging the move just made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// The mover owns a complete line.
    Win,
    /// Board is full and nobody won.
    Tie,
    /// Play continues.
    Ongoing,
}

/// Judges the board after `marker` was placed at `index`.
///
/// A line completed on the last free cell is a win, never a tie.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, index: usize, marker: Marker) -> Evaluation {
    if completes_line(board, index, marker) {
        Evaluation::Win
    } else if is_full(board) {
        Evaluation::Tie
    } else {
        Evaluation::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Marker)]) -> Board {
        let mut board = Board::new();
        for &(index, marker) in marks {
            board.place(index, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_win_beats_tie_on_last_cell() {
        // X O O / O X X / X O X, last X on 8 closes the main diagonal
        let board = board_from(&[
            (0, Marker::X),
            (1, Marker::O),
            (2, Marker::O),
            (3, Marker::O),
            (4, Marker::X),
            (5, Marker::X),
            (6, Marker::X),
            (7, Marker::O),
            (8, Marker::X),
        ]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board, 8, Marker::X), Evaluation::Win);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = board_from(&[
            (0, Marker::X),
            (1, Marker::O),
            (2, Marker::X),
            (3, Marker::O),
            (4, Marker::X),
            (5, Marker::O),
            (6, Marker::O),
            (7, Marker::X),
            (8, Marker::O),
        ]);
        assert_eq!(evaluate(&board, 8, Marker::O), Evaluation::Tie);
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        let board = board_from(&[(0, Marker::X), (4, Marker::O)]);
        assert_eq!(evaluate(&board, 4, Marker::O), Evaluation::Ongoing);
    }
}
