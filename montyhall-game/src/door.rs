//! Door indices for the three-door game.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a door index falls outside the stage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DoorError {
    #[error("door index {0} is out of range (expected 0..=2)")]
    OutOfRange(u8),
}

/// One of the three doors on stage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

impl Door {
    pub const COUNT: usize = 3;
    pub const ALL: [Self; Self::COUNT] = [Self(0), Self(1), Self(2)];

    /// Build a door from its index.
    ///
    /// # Errors
    ///
    /// Returns [`DoorError::OutOfRange`] when `index` is not 0, 1, or 2.
    pub const fn new(index: u8) -> Result<Self, DoorError> {
        if index < 3 {
            Ok(Self(index))
        } else {
            Err(DoorError::OutOfRange(index))
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Draw a door uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::COUNT)]
    }

    /// The two doors other than `self`, in ascending order.
    #[must_use]
    pub const fn others(self) -> [Self; 2] {
        match self.0 {
            0 => [Self(1), Self(2)],
            1 => [Self(0), Self(2)],
            _ => [Self(0), Self(1)],
        }
    }
}

impl TryFrom<u8> for Door {
    type Error = DoorError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> Self {
        door.0
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "door {}", self.0)
    }
}
