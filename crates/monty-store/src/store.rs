//! The game store: creates, tracks, and removes game instances.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use rand::SeedableRng;
use rand::rngs::StdRng;

use monty_game::{Game, GameId};

use crate::{GameHandle, StoreError};

/// Manages all live games, keyed by id.
///
/// This is the entry point for game operations from higher layers (a web
/// adapter, a CLI, a test harness). The map lock is held only to insert,
/// look up, or delete an entry, never across a game mutation, so a
/// `remove` racing a `retrieve` sees either the whole game or nothing.
pub struct GameStore {
    /// Live games, keyed by game id.
    games: RwLock<HashMap<GameId, GameHandle>>,

    /// Next id to hand out. Ids are unique and monotonic, starting at 1.
    next_id: AtomicU64,

    /// Master RNG from which each game's own generator is derived. Seeding
    /// this makes every game in the store deterministic.
    rng: Mutex<StdRng>,
}

impl GameStore {
    /// Creates an empty store seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an empty store with the given master RNG.
    ///
    /// Tests pass a seeded generator here to make prize placement and the
    /// host's tie-breaks reproducible across the whole store.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            rng: Mutex::new(rng),
        }
    }

    /// Creates a new game in the initial phase and returns its handle.
    /// Never fails.
    pub fn create(&self) -> GameHandle {
        let id = GameId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let game_rng = StdRng::from_rng(&mut *self.rng.lock());
        let handle = GameHandle::new(Game::new(id, game_rng));
        self.games.write().insert(id, handle.clone());
        tracing::info!(game_id = %id, "game created");
        handle
    }

    /// Returns the handle for `id`.
    ///
    /// # Errors
    /// [`StoreError::GameDoesNotExist`] if no such game is stored.
    pub fn retrieve(&self, id: GameId) -> Result<GameHandle, StoreError> {
        self.games
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::GameDoesNotExist(id))
    }

    /// Deletes the game for `id`, doors and all.
    ///
    /// # Errors
    /// [`StoreError::GameDoesNotExist`] if no such game is stored;
    /// removing the same id twice fails the second time rather than
    /// passing silently.
    pub fn remove(&self, id: GameId) -> Result<(), StoreError> {
        self.games
            .write()
            .remove(&id)
            .ok_or(StoreError::GameDoesNotExist(id))?;
        tracing::info!(game_id = %id, "game removed");
        Ok(())
    }

    /// Returns the number of live games.
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    /// Returns `true` if no games are stored.
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// Lists all live game ids.
    pub fn game_ids(&self) -> Vec<GameId> {
        self.games.read().keys().copied().collect()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
