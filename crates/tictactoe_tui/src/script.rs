//! Non-interactive play from a list of moves.

use derive_getters::Getters;
use tictactoe::{GameController, Position, Rejection, Round};
use tracing::{info, instrument, warn};

/// What happened while replaying a list of moves.
#[derive(Debug, Clone, Getters)]
pub struct ScriptReport {
    /// Game after the last move.
    game: GameController,
    /// Moves that were refused, with their position in the list.
    rejected: Vec<(usize, Rejection)>,
    /// Moves that arrived after the game had ended.
    ignored: Vec<usize>,
}

impl ScriptReport {
    /// Text board followed by the result line, and the open cells while the
    /// game is still running.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.game.board(), self.game.turn_message());
        if !self.game.is_game_over() {
            let open = Position::valid_moves(self.game.board())
                .iter()
                .map(|pos| format!("{} ({})", pos, pos.to_index()))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("Open cells: {}\n", open));
        }
        for (step, rejection) in &self.rejected {
            out.push_str(&format!("Move #{} rejected: {}\n", step + 1, rejection));
        }
        if !self.ignored.is_empty() {
            out.push_str(&format!(
                "{} move(s) after the game ended were ignored\n",
                self.ignored.len()
            ));
        }
        out
    }

    /// Pretty JSON snapshot of the final game.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.game.snapshot())
    }
}

/// Plays `moves` in order on `game`.
///
/// Rejected and ignored moves are recorded and skipped; play carries on
/// with the same player to move.
#[instrument(skip(game), fields(count = moves.len()))]
pub fn run_script(mut game: GameController, moves: &[usize]) -> ScriptReport {
    let mut rejected = Vec::new();
    let mut ignored = Vec::new();

    for (step, &index) in moves.iter().enumerate() {
        match game.play_round(index) {
            Ok(Round::Played(status)) => {
                info!(step, index, %status, "Move played");
            }
            Ok(Round::Ignored) => ignored.push(index),
            Err(rejection) => {
                warn!(step, %rejection, "Move rejected");
                rejected.push((step, rejection));
            }
        }
    }

    ScriptReport {
        game,
        rejected,
        ignored,
    }
}
