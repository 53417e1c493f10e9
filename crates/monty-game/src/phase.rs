//! Game-level phase, derived from the doors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The phase of a game.
///
/// Phases are strictly ordered, with no skipping and no going back:
///
/// ```text
/// Initial → Selected → Resolved
/// ```
///
/// - **Initial**: three closed doors, nothing has happened.
/// - **Selected**: the player picked a door and the host opened one
///   non-prize door in the same move. One closed door remains.
/// - **Resolved**: the player opened their final door; the game is over
///   and the opened doors' prize flags are readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Initial,
    Selected,
    Resolved,
}

impl GamePhase {
    /// Returns `true` if a `select` is legal in this phase.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Initial)
    }

    /// Returns `true` if a player `open` is legal in this phase.
    pub fn is_openable(&self) -> bool {
        matches!(self, Self::Selected)
    }

    /// Returns `true` once the final door has been opened.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// The phase that follows this one, or `None` at the end.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Initial => Some(Self::Selected),
            Self::Selected => Some(Self::Resolved),
            Self::Resolved => None,
        }
    }

    /// Returns `true` if moving straight to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "Initial"),
            Self::Selected => write!(f, "Selected"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}
