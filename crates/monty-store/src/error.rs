//! Error types for the store layer.

use monty_game::GameId;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The game does not exist: never created, or already removed.
    #[error("game {0} does not exist")]
    GameDoesNotExist(GameId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_the_game() {
        let err = StoreError::GameDoesNotExist(GameId(12));
        assert_eq!(err.to_string(), "game G-12 does not exist");
    }
}
