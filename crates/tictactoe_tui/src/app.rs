//! Application state and logic.

use tictactoe::{GameController, GameStatus, Position, Round};
use tracing::{debug, instrument, warn};

/// Main application state.
///
/// Holds the controller by value and never touches its board directly;
/// everything shown on screen is re-read from the controller after each call.
#[derive(Debug, Clone)]
pub struct App {
    game: GameController,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates an application around a fresh game.
    pub fn new(game: GameController) -> Self {
        let status_message = start_message(&game);
        Self {
            game,
            cursor: Position::Center,
            status_message,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Cell the cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Moves the cursor without playing.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Plays at the cursor.
    pub fn play_cursor(&mut self) {
        self.play(self.cursor.to_index());
    }

    /// Plays at a board index.
    ///
    /// Rejections only change the status line.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        if let Some(position) = Position::from_index(index) {
            self.cursor = position;
        }

        match self.game.play_round(index) {
            Ok(Round::Played(GameStatus::InProgress)) => {
                self.status_message = self.game.turn_message();
            }
            Ok(Round::Played(_)) => {
                self.status_message = format!(
                    "{} Press 'r' to restart or 'q' to quit.",
                    self.game.status()
                );
            }
            Ok(Round::Ignored) => {
                debug!("Move after game over");
                self.status_message = format!(
                    "{} Press 'r' to restart or 'q' to quit.",
                    self.game.status()
                );
            }
            Err(rejection) => {
                warn!(%rejection, "Move rejected");
                self.status_message = format!(
                    "Invalid move: {}. {}",
                    rejection,
                    self.game.turn_message()
                );
            }
        }
    }

    /// Restarts the game with the same players.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.status_message = start_message(&self.game);
    }
}

fn start_message(game: &GameController) -> String {
    format!(
        "{}. Arrows + Enter or 1-9 to move.",
        game.turn_message()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe::{Marker, Square};

    fn app() -> App {
        App::new(GameController::new("Ada", "Grace"))
    }

    #[test]
    fn test_play_updates_status() {
        let mut app = app();
        assert!(app.status_message().starts_with("Ada's turn"));
        app.play(0);
        assert_eq!(app.status_message(), "Grace's turn");
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_rejection_leaves_board() {
        let mut app = app();
        app.play(4);
        let board = app.game().board().clone();
        app.play(4);
        assert_eq!(app.game().board(), &board);
        assert_eq!(
            app.status_message(),
            "Invalid move: Cell 4 is already occupied. Grace's turn"
        );
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = app();
        for index in [0, 3, 1, 4, 2] {
            app.play(index);
        }
        assert!(app.game().is_game_over());
        assert!(app.status_message().starts_with("Ada wins!"));

        app.play(8);
        assert_eq!(app.game().board().get(8), Ok(Square::Empty));

        app.restart();
        assert!(!app.game().is_game_over());
        assert_eq!(app.cursor(), Position::Center);
        assert!(app.status_message().starts_with("Ada's turn"));
    }

    #[test]
    fn test_play_cursor() {
        let mut app = app();
        app.set_cursor(Position::BottomRight);
        app.play_cursor();
        assert_eq!(app.game().board().get(8), Ok(Square::Marked(Marker::X)));
    }
}
