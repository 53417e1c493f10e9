//! The game itself: three doors and the transition state machine.

use rand::Rng;
use rand::rngs::StdRng;

use crate::{Door, DoorId, DoorStatus, GameError, GameId, GamePhase, GameSnapshot};

/// Every game has exactly this many doors.
pub const DOOR_COUNT: usize = 3;

/// One game session.
///
/// A game owns its three doors and is the only thing that mutates them.
/// The two public mutators are [`select`](Game::select) and
/// [`open`](Game::open); everything else is a read. The host's reveal is
/// not a separate operation; it happens inside `select`, atomically.
///
/// Randomness (prize placement, reveal tie-break) comes from an owned
/// generator fixed at construction, so a game never re-randomizes and a
/// seeded game behaves deterministically.
#[derive(Debug)]
pub struct Game {
    id: GameId,
    doors: [Door; DOOR_COUNT],
    /// The player's selected door, if any.
    selected: Option<DoorId>,
    /// The door the host auto-opened, if any. Never the prize door.
    revealed: Option<DoorId>,
    /// The door the player opened to resolve the game, if any.
    opened: Option<DoorId>,
    rng: StdRng,
}

impl Game {
    /// Creates a game in the initial phase: three closed doors, the prize
    /// placed uniformly at random behind one of them.
    pub fn new(id: GameId, mut rng: StdRng) -> Self {
        let prize = rng.random_range(0..DOOR_COUNT);
        let doors =
            std::array::from_fn(|i| Door::new(DoorId(i as u32 + 1), i == prize));
        Self {
            id,
            doors,
            selected: None,
            revealed: None,
            opened: None,
            rng,
        }
    }

    /// The game's identifier.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// All doors, in id order.
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Looks up a door by id.
    pub fn door(&self, door: DoorId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id() == door)
    }

    /// The game's current phase.
    pub fn phase(&self) -> GamePhase {
        if self.opened.is_some() {
            GamePhase::Resolved
        } else if self.selected.is_some() {
            GamePhase::Selected
        } else {
            GamePhase::Initial
        }
    }

    /// Whether the player won, once the game is resolved.
    ///
    /// `None` until the player's final open; afterwards, the prize flag of
    /// the door they opened.
    pub fn won(&self) -> Option<bool> {
        let opened = self.opened?;
        self.door(opened).map(Door::hides_prize)
    }

    /// A serializable view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            phase: self.phase(),
            doors: self.doors.iter().map(Door::snapshot).collect(),
        }
    }

    /// Selects a door and, in the same move, has the host open one door
    /// that is neither selected nor hiding the prize (ties broken
    /// uniformly at random).
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalTransition`] if a door is already selected or
    ///   the target is not closed
    /// - [`GameError::DoorDoesNotExist`] if the id is unknown
    ///
    /// On error nothing is mutated.
    pub fn select(&mut self, door: DoorId) -> Result<(), GameError> {
        if self.selected.is_some() {
            return Err(self.illegal(door, DoorStatus::Selected));
        }
        let target = self.index_of(door)?;
        if self.doors[target].status() != DoorStatus::Closed {
            return Err(self.illegal(door, DoorStatus::Selected));
        }

        // Pick the reveal before mutating anything. At least one door is
        // neither the selection nor the prize: two when the player took
        // the prize door, one otherwise.
        let candidates: Vec<usize> = (0..DOOR_COUNT)
            .filter(|&i| i != target && !self.doors[i].hides_prize())
            .collect();
        let reveal = candidates[self.rng.random_range(0..candidates.len())];

        self.doors[target].transition(DoorStatus::Selected);
        self.doors[reveal].transition(DoorStatus::Open);
        self.selected = Some(door);
        self.revealed = Some(self.doors[reveal].id());

        tracing::debug!(
            game_id = %self.id,
            door = %door,
            revealed = %self.doors[reveal].id(),
            "door selected, host revealed"
        );
        Ok(())
    }

    /// Opens a door as the player's final move: their own door ("stay")
    /// or the remaining closed one ("switch"). The opened door's prize
    /// flag, readable afterwards, decides the game.
    ///
    /// # Errors
    ///
    /// - [`GameError::IllegalTransition`] if no selection has happened
    ///   yet, the game is already resolved, or the target is already open
    ///   (in particular the host's revealed door)
    /// - [`GameError::DoorDoesNotExist`] if the id is unknown
    ///
    /// On error nothing is mutated.
    pub fn open(&mut self, door: DoorId) -> Result<(), GameError> {
        if !self.phase().is_openable() {
            return Err(self.illegal(door, DoorStatus::Open));
        }
        let target = self.index_of(door)?;
        if self.doors[target].status() == DoorStatus::Open {
            return Err(self.illegal(door, DoorStatus::Open));
        }

        self.doors[target].transition(DoorStatus::Open);
        self.opened = Some(door);

        tracing::debug!(
            game_id = %self.id,
            door = %door,
            won = self.doors[target].hides_prize(),
            "door opened, game resolved"
        );
        Ok(())
    }

    /// The mutation entry point for callers that carry a requested status:
    /// dispatches `Selected` to [`select`](Game::select) and `Open` to
    /// [`open`](Game::open).
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalTransition`] for any status a caller cannot
    /// drive a door to (`Closed`), plus whatever the dispatched operation
    /// signals.
    pub fn transition(&mut self, door: DoorId, to: DoorStatus) -> Result<(), GameError> {
        match to {
            DoorStatus::Selected => self.select(door),
            DoorStatus::Open => self.open(door),
            DoorStatus::Closed => Err(self.illegal(door, to)),
        }
    }

    fn index_of(&self, door: DoorId) -> Result<usize, GameError> {
        self.doors
            .iter()
            .position(|d| d.id() == door)
            .ok_or(GameError::DoorDoesNotExist {
                game: self.id,
                door,
            })
    }

    fn illegal(&self, door: DoorId, requested: DoorStatus) -> GameError {
        GameError::IllegalTransition {
            game: self.id,
            door,
            requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn game_from_seed(seed: u64) -> Game {
        Game::new(GameId(1), StdRng::seed_from_u64(seed))
    }

    fn prize_door(game: &Game) -> DoorId {
        game.doors
            .iter()
            .find(|d| d.hides_prize())
            .map(Door::id)
            .expect("every game has a prize door")
    }

    /// Finds a seed whose prize lands on the given door. Seeds are probed
    /// in order, so the result is deterministic across runs.
    fn game_with_prize_on(door: DoorId) -> Game {
        (0..)
            .map(game_from_seed)
            .find(|g| prize_door(g) == door)
            .expect("some seed places the prize on every door")
    }

    fn statuses(game: &Game) -> Vec<DoorStatus> {
        game.doors.iter().map(Door::status).collect()
    }

    #[test]
    fn test_new_game_has_three_closed_doors_and_one_prize() {
        for seed in 0..50 {
            let game = game_from_seed(seed);
            assert_eq!(game.phase(), GamePhase::Initial);
            assert_eq!(
                statuses(&game),
                vec![DoorStatus::Closed; DOOR_COUNT]
            );
            assert_eq!(
                game.doors.iter().filter(|d| d.hides_prize()).count(),
                1
            );
        }
    }

    #[test]
    fn test_new_game_numbers_doors_from_one() {
        let game = game_from_seed(0);
        let ids: Vec<DoorId> = game.doors().iter().map(Door::id).collect();
        assert_eq!(ids, vec![DoorId(1), DoorId(2), DoorId(3)]);
    }

    #[test]
    fn test_prize_placement_reaches_every_door() {
        for id in 1..=3 {
            let game = game_with_prize_on(DoorId(id));
            assert_eq!(prize_door(&game), DoorId(id));
        }
    }

    #[test]
    fn test_select_marks_door_and_reveals_a_goat() {
        for seed in 0..50 {
            let mut game = game_from_seed(seed);
            let prize = prize_door(&game);
            game.select(DoorId(1)).unwrap();

            assert_eq!(game.phase(), GamePhase::Selected);
            assert_eq!(
                game.door(DoorId(1)).unwrap().status(),
                DoorStatus::Selected
            );

            let open: Vec<&Door> = game
                .doors()
                .iter()
                .filter(|d| d.status() == DoorStatus::Open)
                .collect();
            assert_eq!(open.len(), 1);
            let revealed = open[0];
            assert_ne!(revealed.id(), DoorId(1));
            assert_ne!(revealed.id(), prize);
            assert_eq!(revealed.prize(), Some(false));
        }
    }

    #[test]
    fn test_select_prize_door_breaks_tie_both_ways() {
        // When the selection takes the prize door both other doors
        // qualify for the reveal; over enough seeds each side must come up.
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            let mut game = game_from_seed(seed);
            let prize = prize_door(&game);
            game.select(prize).unwrap();
            let revealed = game.revealed.expect("select reveals a door");
            seen.insert((prize, revealed));
        }
        let sides = seen
            .iter()
            .filter(|(prize, _)| *prize == DoorId(2))
            .count();
        assert_eq!(sides, 2, "reveal never alternated for prize door 2");
    }

    #[test]
    fn test_select_twice_fails_and_leaves_state_unchanged() {
        let mut game = game_from_seed(0);
        game.select(DoorId(1)).unwrap();
        let before = statuses(&game);

        for id in 1..=3 {
            let err = game.select(DoorId(id)).unwrap_err();
            assert!(matches!(err, GameError::IllegalTransition { .. }));
        }
        assert_eq!(statuses(&game), before);
    }

    #[test]
    fn test_select_unknown_door_fails_not_found() {
        let mut game = game_from_seed(0);
        let err = game.select(DoorId(7)).unwrap_err();
        assert!(matches!(
            err,
            GameError::DoorDoesNotExist {
                door: DoorId(7),
                ..
            }
        ));
        assert_eq!(game.phase(), GamePhase::Initial);
    }

    #[test]
    fn test_open_before_select_fails() {
        let mut game = game_from_seed(0);
        for id in 1..=3 {
            let err = game.open(DoorId(id)).unwrap_err();
            assert!(matches!(err, GameError::IllegalTransition { .. }));
        }
        assert_eq!(statuses(&game), vec![DoorStatus::Closed; DOOR_COUNT]);
    }

    #[test]
    fn test_open_revealed_door_fails() {
        let mut game = game_from_seed(0);
        game.select(DoorId(1)).unwrap();
        let revealed = game.revealed.unwrap();
        let before = statuses(&game);

        let err = game.open(revealed).unwrap_err();
        assert!(matches!(err, GameError::IllegalTransition { .. }));
        assert_eq!(statuses(&game), before);
        assert_eq!(game.phase(), GamePhase::Selected);
    }

    #[test]
    fn test_open_unknown_door_fails_not_found() {
        let mut game = game_from_seed(0);
        game.select(DoorId(1)).unwrap();
        let err = game.open(DoorId(0)).unwrap_err();
        assert!(matches!(err, GameError::DoorDoesNotExist { .. }));
    }

    #[test]
    fn test_switch_to_prize_door_wins() {
        // Prize on door 2, player selects door 1: the host can only
        // reveal door 3. Switching to door 2 wins.
        let mut game = game_with_prize_on(DoorId(2));
        game.select(DoorId(1)).unwrap();
        assert_eq!(game.revealed, Some(DoorId(3)));
        assert_eq!(
            game.door(DoorId(3)).unwrap().status(),
            DoorStatus::Open
        );

        game.open(DoorId(2)).unwrap();
        assert_eq!(game.phase(), GamePhase::Resolved);
        assert_eq!(game.door(DoorId(2)).unwrap().prize(), Some(true));
        assert_eq!(game.won(), Some(true));

        // The game is consumed: no further open succeeds, anywhere.
        for id in 1..=3 {
            let err = game.open(DoorId(id)).unwrap_err();
            assert!(matches!(err, GameError::IllegalTransition { .. }));
        }
    }

    #[test]
    fn test_switch_away_from_prize_door_loses() {
        let mut game = game_with_prize_on(DoorId(2));
        game.select(DoorId(2)).unwrap();
        let revealed = game.revealed.unwrap();
        let other = [DoorId(1), DoorId(3)]
            .into_iter()
            .find(|&d| d != revealed)
            .unwrap();

        game.open(other).unwrap();
        assert_eq!(game.won(), Some(false));
    }

    #[test]
    fn test_stay_on_prize_door_wins() {
        let mut game = game_with_prize_on(DoorId(2));
        game.select(DoorId(2)).unwrap();
        game.open(DoorId(2)).unwrap();
        assert_eq!(game.won(), Some(true));
        assert_eq!(
            game.door(DoorId(2)).unwrap().status(),
            DoorStatus::Open
        );
    }

    #[test]
    fn test_stay_and_switch_are_mutually_exclusive() {
        // Once one of the two final opens lands, the other must fail.
        let mut game = game_with_prize_on(DoorId(2));
        game.select(DoorId(2)).unwrap();
        let revealed = game.revealed.unwrap();
        let closed = [DoorId(1), DoorId(3)]
            .into_iter()
            .find(|&d| d != revealed)
            .unwrap();

        game.open(DoorId(2)).unwrap();
        let err = game.open(closed).unwrap_err();
        assert!(matches!(err, GameError::IllegalTransition { .. }));
        assert_eq!(
            game.door(closed).unwrap().status(),
            DoorStatus::Closed
        );
    }

    #[test]
    fn test_won_is_none_until_resolved() {
        let mut game = game_from_seed(0);
        assert_eq!(game.won(), None);
        game.select(DoorId(1)).unwrap();
        assert_eq!(game.won(), None);
    }

    #[test]
    fn test_transition_dispatches_requested_status() {
        let mut game = game_from_seed(0);
        game.transition(DoorId(1), DoorStatus::Selected).unwrap();
        assert_eq!(game.phase(), GamePhase::Selected);

        game.transition(DoorId(1), DoorStatus::Open).unwrap();
        assert_eq!(game.phase(), GamePhase::Resolved);
    }

    #[test]
    fn test_transition_rejects_closed_as_target() {
        let mut game = game_from_seed(0);
        let err = game.transition(DoorId(1), DoorStatus::Closed).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalTransition {
                requested: DoorStatus::Closed,
                ..
            }
        ));
        assert_eq!(game.phase(), GamePhase::Initial);
    }

    #[test]
    fn test_snapshot_tracks_reveal_and_resolution() {
        let mut game = game_with_prize_on(DoorId(2));
        game.select(DoorId(1)).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Selected);
        assert_eq!(snapshot.doors.len(), DOOR_COUNT);
        assert_eq!(snapshot.doors[0].status, DoorStatus::Selected);
        assert_eq!(snapshot.doors[0].prize, None);
        assert_eq!(snapshot.doors[2].status, DoorStatus::Open);
        assert_eq!(snapshot.doors[2].prize, Some(false));

        game.open(DoorId(2)).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Resolved);
        assert_eq!(snapshot.doors[1].prize, Some(true));
    }
}
