//! Game domain model for Monty.
//!
//! One game is three closed doors, one of which hides the prize. The player
//! selects a door, the host immediately opens a non-prize door the player
//! did not pick, and the player then opens either their own door ("stay")
//! or the remaining closed one ("switch"). Every other requested move is
//! illegal and rejected without touching the doors.
//!
//! # Key types
//!
//! - [`Game`] — owns the doors, enforces the transition rules
//! - [`Door`] — a single slot with a status and a concealed prize flag
//! - [`DoorStatus`] — per-door state machine
//! - [`GamePhase`] — game-level phase derived from the doors
//! - [`GameSnapshot`] — serializable read model for external callers

mod door;
mod error;
mod game;
mod id;
mod phase;
mod snapshot;
mod status;

pub use door::Door;
pub use error::GameError;
pub use game::{DOOR_COUNT, Game};
pub use id::{DoorId, GameId};
pub use phase::GamePhase;
pub use snapshot::{DoorSnapshot, GameSnapshot};
pub use status::{DoorStatus, StatusParseError};
