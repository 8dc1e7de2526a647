//! Terminal front end for the tic-tac-toe engine.
//!
//! Calls into [`tictactoe::GameController`] on user input and re-reads its
//! board, current player, and game-over flag after every call.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod script;
pub mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use script::{ScriptReport, run_script};
