//! Win detection for tic-tac-toe.

use crate::{Board, Marker, Square};
use tracing::{debug, instrument};

/// Top-left to bottom-right.
pub const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];

/// Top-right to bottom-left.
pub const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// All eight lines: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    MAIN_DIAGONAL,
    ANTI_DIAGONAL,
];

fn row_through(index: usize) -> [usize; 3] {
    let start = (index / 3) * 3;
    [start, start + 1, start + 2]
}

fn column_through(index: usize) -> [usize; 3] {
    let column = index % 3;
    [column, column + 3, column + 6]
}

/// Lines that contain `index`: its row, its column, and each diagonal it is
/// a member of. Empty for indices off the board.
///
/// Diagonal membership is exact set inclusion. The centre belongs to both
/// diagonals; edge cells 1, 3, 5, 7 belong to neither.
pub fn lines_through(index: usize) -> Vec<[usize; 3]> {
    if index >= 9 {
        return Vec::new();
    }
    let mut lines = vec![row_through(index), column_through(index)];
    if MAIN_DIAGONAL.contains(&index) {
        lines.push(MAIN_DIAGONAL);
    }
    if ANTI_DIAGONAL.contains(&index) {
        lines.push(ANTI_DIAGONAL);
    }
    lines
}

fn line_holds(board: &Board, line: &[usize; 3], marker: Marker) -> bool {
    line.iter()
        .all(|&i| board.get(i).is_ok_and(|square| square.holds(marker)))
}

/// True if a line through `index` is filled entirely with `marker`.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, index: usize, marker: Marker) -> bool {
    let found = lines_through(index)
        .iter()
        .find(|line| line_holds(board, line, marker))
        .copied();
    if let Some(line) = found {
        debug!(?line, "Line completed");
    }
    found.is_some()
}

/// Scans all eight lines and returns the marker owning a complete one.
///
/// Not used on the move path; [`completes_line`] covers that in constant
/// time. Useful for checking arbitrary positions.
pub fn winner(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|line| match board.get(line[0]) {
        Ok(Square::Marked(marker)) if line_holds(board, line, marker) => Some(marker),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_has_three_lines() {
        assert_eq!(lines_through(0), vec![[0, 1, 2], [0, 3, 6], MAIN_DIAGONAL]);
        assert_eq!(lines_through(6), vec![[6, 7, 8], [0, 3, 6], ANTI_DIAGONAL]);
    }

    #[test]
    fn test_centre_has_both_diagonals() {
        assert_eq!(
            lines_through(4),
            vec![[3, 4, 5], [1, 4, 7], MAIN_DIAGONAL, ANTI_DIAGONAL]
        );
    }

    #[test]
    fn test_edges_are_on_no_diagonal() {
        // Cells 1 and 7 are two away from the centre yet on no diagonal.
        for index in [1, 3, 5, 7] {
            let lines = lines_through(index);
            assert_eq!(lines.len(), 2, "index {index}");
            assert!(!lines.contains(&MAIN_DIAGONAL));
            assert!(!lines.contains(&ANTI_DIAGONAL));
        }
    }

    #[test]
    fn test_off_board_has_no_lines() {
        assert!(lines_through(9).is_empty());
    }

    #[test]
    fn test_edge_does_not_win_through_diagonal() {
        let mut board = Board::new();
        for index in ANTI_DIAGONAL {
            board.place(index, Marker::X).unwrap();
        }
        board.place(1, Marker::X).unwrap();
        assert!(!completes_line(&board, 1, Marker::X));
        assert!(completes_line(&board, 4, Marker::X));
    }

    #[test]
    fn test_winner_scan() {
        let mut board = Board::new();
        assert_eq!(winner(&board), None);
        for index in [2, 5, 8] {
            board.place(index, Marker::O).unwrap();
        }
        assert_eq!(winner(&board), Some(Marker::O));
    }
}
