//! Tic-tac-toe game-state engine.
//!
//! Two layers, strictly stacked:
//!
//! - [`Board`] owns the nine cells and refuses placements on occupied or
//!   off-board cells.
//! - [`GameController`] owns the players, whose turn it is, and whether the
//!   game is over. It drives the board through a move and then asks
//!   [`rules::evaluate`] whether that move won or filled the board.
//!
//! Front ends call into the controller and re-read its state after every
//! call; they never touch the board directly.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameController, GameStatus, Round};
//!
//! let mut game = GameController::new("Ada", "Grace");
//! for index in [0, 3, 1, 4] {
//!     game.play_round(index).unwrap();
//! }
//! let round = game.play_round(2).unwrap();
//! assert!(matches!(round, Round::Played(GameStatus::Won(ref p)) if p.name() == "Ada"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use board::{Board, Rejection};
pub use controller::{GameController, GameSnapshot, GameStatus, Round};
pub use position::Position;
pub use rules::Evaluation;
pub use types::{CELLS, Marker, Player, PlayerSlot, Square};
