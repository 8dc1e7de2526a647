//! Turn order, move gating, and game termination.

use crate::board::{Board, Rejection};
use crate::rules::{self, Evaluation};
use crate::types::{Marker, Player, PlayerSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board filled with no line completed.
    Tied,
}

impl GameStatus {
    /// True once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins!", player),
            GameStatus::Tied => write!(f, "Tie game."),
        }
    }
}

/// What a call to [`GameController::play_round`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Round {
    /// The marker was placed; carries the status afterwards.
    Played(GameStatus),
    /// The game was already over; nothing changed.
    Ignored,
}

/// Serializable picture of a game for front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cells, row-major.
    pub board: Board,
    /// Whose turn it is (or whose winning move ended the game).
    pub current_player: Player,
    /// Where the game stands.
    pub status: GameStatus,
}

/// Runs one game between two players over an owned board.
///
/// Player 1 places `X` and always moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    board: Board,
    players: [Player; 2],
    current: PlayerSlot,
    status: GameStatus,
}

impl GameController {
    /// Starts a game between `player_one` (X) and `player_two` (O).
    #[instrument(
        skip_all,
        fields(player_one = %player_one.as_ref(), player_two = %player_two.as_ref())
    )]
    pub fn new(player_one: impl AsRef<str>, player_two: impl AsRef<str>) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(player_one, PlayerSlot::One.marker()),
                Player::new(player_two, PlayerSlot::Two.marker()),
            ],
            current: PlayerSlot::One,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's marker at `index` and advances the game.
    ///
    /// A rejected placement changes nothing, including whose turn it is.
    /// Calls made after the game ended return [`Round::Ignored`]; use
    /// [`reset`](Self::reset) to play again.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_round(&mut self, index: usize) -> Result<Round, Rejection> {
        if self.status.is_over() {
            debug!(status = %self.status, "Game over, move ignored");
            return Ok(Round::Ignored);
        }

        info!("{}'s turn", self.current_player());
        let marker = self.current_marker();
        self.board.place(index, marker)?;

        match rules::evaluate(&self.board, index, marker) {
            Evaluation::Win => {
                self.status = GameStatus::Won(self.current_player().clone());
                info!(winner = %self.current_player(), "Game won");
            }
            Evaluation::Tie => {
                self.status = GameStatus::Tied;
                info!("Game tied");
            }
            Evaluation::Ongoing => {
                self.current = self.current.other();
            }
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(Round::Played(self.status.clone()))
    }

    /// Clears the board and hands the first move back to player 1.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = PlayerSlot::One;
        self.status = GameStatus::InProgress;
        debug!("Game reset");
    }

    /// Player whose marker the next move places.
    ///
    /// After a win this stays on the winner.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Slot of the current player.
    pub fn current_slot(&self) -> PlayerSlot {
        self.current
    }

    /// Player sitting in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Both players, player 1 first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// True once the game has been won or tied.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Current status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One-line summary for a status bar: whose turn, or the result.
    pub fn turn_message(&self) -> String {
        match &self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_player()),
            finished => finished.to_string(),
        }
    }

    /// Copies the observable state out for rendering or serialization.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player().clone(),
            status: self.status.clone(),
        }
    }

    fn current_marker(&self) -> Marker {
        *self.current_player().marker()
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use crate::invariants::{ControllerInvariants, InvariantSet};

        if let Err(violations) = ControllerInvariants::check_all(self) {
            for violation in &violations {
                tracing::warn!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "game invariants violated");
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}
