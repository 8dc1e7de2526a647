//! End-to-end tests for scripted play with file configuration.

use std::io::Write;
use tictactoe::{GameController, GameStatus, Rejection};
use tictactoe_tui::{GameConfig, run_script};

#[test]
fn test_configured_names_reach_the_result() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_one = \"Ada\"\nplayer_two = \"Grace\"").unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();

    let game = GameController::new(config.player_one(), config.player_two());
    let report = run_script(game, &[4, 0, 8, 2, 1, 6, 3, 5, 7]);

    // The ninth move fills the board and closes the 1-4-7 column.
    assert!(report.game().is_game_over());
    assert!(report.render_text().ends_with("Ada wins!\n"));
}

#[test]
fn test_tie_script() {
    let report = run_script(GameController::default(), &[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    assert_eq!(report.game().status(), &GameStatus::Tied);
    assert!(report.rejected().is_empty());
    assert!(report.render_text().ends_with("Tie game.\n"));
}

#[test]
fn test_out_of_range_is_reported_not_played() {
    let report = run_script(GameController::default(), &[9]);
    assert_eq!(report.rejected(), &vec![(0, Rejection::OutOfRange(9))]);
    assert_eq!(report.game().board().available().len(), 9);
}
