//! Unified error type for the Monty core.

use monty_game::{GameError, StatusParseError};
use monty_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `monty` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum MontyError {
    /// A game-level error (illegal transition, unknown door).
    #[error(transparent)]
    Game(#[from] GameError),

    /// A store-level error (unknown game).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A boundary error (unrecognized requested status).
    #[error(transparent)]
    Status(#[from] StatusParseError),
}

/// The closed set of failure kinds an adapter maps to its own outcomes.
///
/// An HTTP adapter, for example, maps `NotFound` to 404, `IllegalTransition`
/// to 409, and `InvalidInput` to 400. The mapping itself is the adapter's
/// business; the core only promises the kinds stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced game or door id does not exist.
    NotFound,
    /// A well-formed request the state machine does not allow right now.
    IllegalTransition,
    /// Raw input that never reached the state machine.
    InvalidInput,
}

impl MontyError {
    /// Classifies this error for adapter-side mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Game(GameError::DoorDoesNotExist { .. }) => ErrorKind::NotFound,
            Self::Game(GameError::IllegalTransition { .. }) => {
                ErrorKind::IllegalTransition
            }
            Self::Store(StoreError::GameDoesNotExist(_)) => ErrorKind::NotFound,
            Self::Status(_) => ErrorKind::InvalidInput,
        }
    }
}
