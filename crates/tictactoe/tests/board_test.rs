//! Tests for board placement rules.

use tictactoe::{Board, CELLS, Marker, Rejection, Square};

#[test]
fn test_out_of_range_rejected_everywhere() {
    let mut board = Board::new();
    for index in CELLS..CELLS + 20 {
        assert_eq!(board.place(index, Marker::X), Err(Rejection::OutOfRange(index)));
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_place_nine_out_of_range() {
    let mut board = Board::new();
    assert_eq!(board.place(9, Marker::X), Err(Rejection::OutOfRange(9)));
}

#[test]
fn test_every_occupied_cell_rejects() {
    let mut board = Board::new();
    for index in 0..CELLS {
        board.place(index, Marker::O).unwrap();
        assert_eq!(board.place(index, Marker::X), Err(Rejection::Occupied(index)));
        assert_eq!(board.place(index, Marker::O), Err(Rejection::Occupied(index)));
        assert_eq!(board.get(index), Ok(Square::Marked(Marker::O)));
    }
    assert!(board.is_full());
    assert!(board.available().is_empty());
}

#[test]
fn test_available_tracks_placements() {
    let mut board = Board::new();
    board.place(0, Marker::X).unwrap();
    board.place(8, Marker::O).unwrap();
    assert_eq!(board.available(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(board.count(Marker::X), 1);
    assert_eq!(board.count(Marker::O), 1);
}
