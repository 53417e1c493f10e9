//! # Monty
//!
//! A stateful "Let's Make a Deal" (Monty Hall) game core: three closed
//! doors, one prize, and a strict transition state machine. Selecting a
//! door makes the host open a non-prize door in the same move; the player
//! then opens their own door ("stay") or the remaining closed one
//! ("switch") to resolve the game.
//!
//! This meta-crate re-exports the domain ([`monty_game`]) and the game
//! store ([`monty_store`]) behind one surface, plus a unified error type
//! with the [`ErrorKind`] classification adapters pattern-match.
//!
//! ## Quick Start
//!
//! ```
//! use monty::prelude::*;
//!
//! let store = GameStore::new();
//! let game = store.create();
//!
//! game.select(DoorId(1))?;
//!
//! // The host revealed a non-prize door; switch to the one still closed.
//! let closed = game
//!     .snapshot()
//!     .doors
//!     .iter()
//!     .find(|d| d.status == DoorStatus::Closed)
//!     .map(|d| d.id)
//!     .expect("one door is still closed after the reveal");
//! game.open(closed)?;
//!
//! assert!(game.won().is_some());
//! # Ok::<(), monty::MontyError>(())
//! ```

mod error;

pub use error::{ErrorKind, MontyError};
pub use monty_game::{
    DOOR_COUNT, Door, DoorId, DoorSnapshot, DoorStatus, Game, GameError, GameId,
    GamePhase, GameSnapshot, StatusParseError,
};
pub use monty_store::{GameHandle, GameStore, StoreError};

/// The commonly used names, for glob import.
pub mod prelude {
    pub use crate::{
        DoorId, DoorStatus, ErrorKind, GameHandle, GameId, GamePhase, GameStore,
        MontyError,
    };
}
