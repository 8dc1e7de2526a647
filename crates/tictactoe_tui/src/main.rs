//! tictactoe - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::GameController;
use tictactoe_tui::{Cli, Command, GameConfig, logging, run_script, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .context("Failed to load configuration")?
        .with_overrides(cli.player_one, cli.player_two, cli.log_file);
    let game = GameController::new(config.player_one(), config.player_two());

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            logging::init_file_tracing(config.log_file(), config.log_filter())?;
            tui::run_tui(game)
        }
        Command::Script { moves, json } => {
            logging::init_stderr_tracing(config.log_filter());
            info!(count = moves.len(), "Running scripted game");
            let report = run_script(game, &moves);
            if json {
                println!("{}", report.render_json()?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(())
        }
    }
}
