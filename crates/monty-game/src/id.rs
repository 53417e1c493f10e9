//! Identifier newtypes shared across the game and store layers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a game.
///
/// Issued by the store, monotonically increasing, and used as the sole
/// external handle to a game. `#[serde(transparent)]` makes it serialize
/// as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

/// A door's identifier, unique within its game.
///
/// Doors are numbered 1..=3 at game creation and keep their ids for the
/// game's lifetime. The numbering carries no meaning beyond addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoorId(pub u32);

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D-{}", self.0)
    }
}
