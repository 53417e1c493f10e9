//! Error types for the game layer.

use crate::{DoorId, DoorStatus, GameId};

/// Errors that can occur while mutating a game.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GameError {
    /// The referenced door id does not belong to this game.
    #[error("game {game} has no door {door}")]
    DoorDoesNotExist { game: GameId, door: DoorId },

    /// The request is well-formed but the state machine does not allow it
    /// in the game's current phase: selecting twice, opening before a
    /// selection, re-opening an open door, or requesting a status no
    /// caller can drive a door to.
    #[error("cannot move door {door} of game {game} to {requested}")]
    IllegalTransition {
        game: GameId,
        door: DoorId,
        requested: DoorStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_identifying_context() {
        let err = GameError::DoorDoesNotExist {
            game: GameId(4),
            door: DoorId(9),
        };
        assert_eq!(err.to_string(), "game G-4 has no door D-9");

        let err = GameError::IllegalTransition {
            game: GameId(4),
            door: DoorId(2),
            requested: DoorStatus::Open,
        };
        assert_eq!(err.to_string(), "cannot move door D-2 of game G-4 to OPEN");
    }
}
