//! Keyboard handling.

use crossterm::event::KeyCode;
use tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Start a new game.
    Restart,
    /// Place at the cursor.
    PlaceAtCursor,
    /// Place at a board index.
    Place(usize),
    /// Move the cursor.
    MoveCursor(Position),
    /// Ignore the key.
    None,
}

/// Maps a key to an action given the cursor position.
///
/// Digits 1-9 address cells 0-8 in reading order.
pub fn action_for(key: KeyCode, cursor: Position) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Action::Place(digit as usize - 1),
            _ => Action::None,
        },
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::MoveCursor(move_cursor(cursor, key))
        }
        _ => Action::None,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::at(r, c))
        .unwrap_or(cursor)
}
