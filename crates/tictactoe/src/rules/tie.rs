//! Full-board detection for tic-tac-toe.

use crate::{Board, Square};

/// True when every cell holds a marker.
///
/// A full board is a tie only if the last move did not also complete a line.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_eight_cells_not_full() {
        let mut board = Board::new();
        for index in 0..8 {
            let marker = if index % 2 == 0 { Marker::X } else { Marker::O };
            board.place(index, marker).unwrap();
        }
        assert!(!is_full(&board));
        board.place(8, Marker::X).unwrap();
        assert!(is_full(&board));
    }
}
