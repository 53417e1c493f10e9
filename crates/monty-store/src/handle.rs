//! Per-game handle: a cheap-clone wrapper around one stored game.

use std::sync::Arc;

use parking_lot::Mutex;

use monty_game::{DoorId, DoorStatus, Game, GameError, GameId, GamePhase, GameSnapshot};

/// Handle to one game in the store.
///
/// Cloning is cheap: an `Arc` around the game and its lock. Each
/// mutation takes the game's own lock for just that call, so two callers
/// racing a `select` on the same game cannot both pass the "nothing
/// selected yet" check, while games never contend with each other.
#[derive(Clone, Debug)]
pub struct GameHandle {
    id: GameId,
    game: Arc<Mutex<Game>>,
}

impl GameHandle {
    pub(crate) fn new(game: Game) -> Self {
        Self {
            id: game.id(),
            game: Arc::new(Mutex::new(game)),
        }
    }

    /// The game's unique id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Selects a door; the host reveal happens inside the same call.
    /// See [`Game::select`].
    pub fn select(&self, door: DoorId) -> Result<(), GameError> {
        self.game.lock().select(door)
    }

    /// Opens a door as the player's final move. See [`Game::open`].
    pub fn open(&self, door: DoorId) -> Result<(), GameError> {
        self.game.lock().open(door)
    }

    /// Dispatches a requested status to the right mutator.
    /// See [`Game::transition`].
    pub fn transition(&self, door: DoorId, to: DoorStatus) -> Result<(), GameError> {
        self.game.lock().transition(door, to)
    }

    /// The game's current phase.
    pub fn phase(&self) -> GamePhase {
        self.game.lock().phase()
    }

    /// Whether the player won, once resolved.
    pub fn won(&self) -> Option<bool> {
        self.game.lock().won()
    }

    /// A consistent point-in-time view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.lock().snapshot()
    }
}
