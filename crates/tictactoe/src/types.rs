//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// One of the two symbols a player leaves on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Marker {
    /// Cross, always held by player 1.
    X,
    /// Nought, always held by player 2.
    O,
}

impl Marker {
    /// Character drawn for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No marker placed yet.
    #[default]
    Empty,
    /// Holds a marker. Never reverts to empty except through a reset.
    Marked(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }

    /// True if this square holds `marker`.
    pub fn holds(self, marker: Marker) -> bool {
        self == Square::Marked(marker)
    }
}

/// Which of the two seats a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// First to move, plays `X`.
    One,
    /// Second to move, plays `O`.
    Two,
}

impl PlayerSlot {
    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// The marker assigned to whoever sits in this slot.
    pub fn marker(self) -> Marker {
        match self {
            PlayerSlot::One => Marker::X,
            PlayerSlot::Two => Marker::O,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// A named participant and the marker they place.
///
/// Created once when a game starts and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_more::Display)]
#[display("{}", name)]
pub struct Player {
    /// Display label.
    name: String,
    /// Marker this player places.
    marker: Marker,
}

impl Player {
    /// Creates a player.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, marker: Marker) -> Self {
        Self {
            name: name.as_ref().to_string(),
            marker,
        }
    }
}
