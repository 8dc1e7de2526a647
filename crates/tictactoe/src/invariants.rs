//! Properties that must hold between moves.
//!
//! Checked after every successful placement in debug builds. They are also
//! usable on their own from tests.

use crate::{Board, GameController, GameStatus, Marker, PlayerSlot};

/// A logical property of a state.
pub trait Invariant<S> {
    /// True if the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the property.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked together.
pub trait InvariantSet<S> {
    /// Collects every violated invariant.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X moves first, so X is never behind O and never more than one ahead.
pub struct MarkerBalance;

impl Invariant<Board> for MarkerBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Marker::X);
        let o = board.count(Marker::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

impl Invariant<GameController> for MarkerBalance {
    fn holds(game: &GameController) -> bool {
        <MarkerBalance as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <MarkerBalance as Invariant<Board>>::description()
    }
}

/// While a game is running, player 1 is to move exactly when both markers
/// appear equally often.
pub struct TurnConsistency;

impl Invariant<GameController> for TurnConsistency {
    fn holds(game: &GameController) -> bool {
        if *game.status() != GameStatus::InProgress {
            return true;
        }
        let board = game.board();
        let balanced = board.count(Marker::X) == board.count(Marker::O);
        balanced == (game.current_slot() == PlayerSlot::One)
    }

    fn description() -> &'static str {
        "Player 1 is to move iff both markers are equally frequent"
    }
}

/// Invariants checked on the controller after each move.
pub type ControllerInvariants = (MarkerBalance, TurnConsistency);
