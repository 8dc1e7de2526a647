//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Position;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name for player 1 (X), overrides the config file
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name for player 2 (O), overrides the config file
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Log file for the terminal UI, overrides the config file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in a full-screen terminal UI
    Tui,

    /// Play a fixed list of moves and print the result
    Script {
        /// Cells played in order starting with player 1: an index (0-8) or
        /// a label such as `center` or `top-left`
        #[arg(required = true, num_args = 1.., value_parser = parse_move)]
        moves: Vec<usize>,

        /// Print a JSON snapshot instead of the text board
        #[arg(long)]
        json: bool,
    },
}

/// Parses a move as a board index or a cell label.
///
/// Any unsigned number is passed through so the engine can report indices
/// of 9 and above as off the board.
pub fn parse_move(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if let Ok(index) = s.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is neither a cell index nor a cell label", s))
}
