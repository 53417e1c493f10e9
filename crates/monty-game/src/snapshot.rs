//! Serializable read models for external callers.
//!
//! These are what an adapter (HTTP layer, CLI, test harness) serializes
//! back to its clients. They expose door statuses always, and a door's
//! prize flag only once that door is open.

use serde::{Deserialize, Serialize};

use crate::{DoorId, DoorStatus, GameId, GamePhase};

/// A point-in-time view of one door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSnapshot {
    /// The door's identifier.
    pub id: DoorId,
    /// Current status.
    pub status: DoorStatus,
    /// The prize flag, present only once the door is open.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub prize: Option<bool>,
}

/// A point-in-time view of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The game's identifier.
    pub id: GameId,
    /// Current phase.
    pub phase: GamePhase,
    /// All three doors, in id order.
    pub doors: Vec<DoorSnapshot>,
}
