//! The per-door status state machine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The status of a single door.
///
/// Transitions form a small DAG; `Closed` is the initial status and is
/// never re-entered:
///
/// ```text
/// Closed → Selected → Open
/// Closed → Open
/// ```
///
/// `Closed → Open` covers both the host reveal and the player's final
/// "switch"; which of the two a given transition is gets decided at the
/// game level, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorStatus {
    Closed,
    Selected,
    Open,
}

impl DoorStatus {
    /// Returns `true` if a door may move from `self` to `target`.
    pub fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Closed, Self::Selected)
                | (Self::Closed, Self::Open)
                | (Self::Selected, Self::Open)
        )
    }

    /// Returns `true` if a caller may request this status through the
    /// mutation entry point.
    ///
    /// Only `Selected` and `Open` are reachable on request; `Closed` is
    /// where doors start and nothing drives them back.
    pub fn is_requestable(self) -> bool {
        matches!(self, Self::Selected | Self::Open)
    }
}

impl fmt::Display for DoorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "CLOSED"),
            Self::Selected => write!(f, "SELECTED"),
            Self::Open => write!(f, "OPEN"),
        }
    }
}

/// The raw value did not name a door status.
///
/// Produced when translating external input (e.g. a request body's status
/// field) into a [`DoorStatus`], before the state machine is ever
/// consulted. Adapters map this to their bad-request outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a recognized door status")]
pub struct StatusParseError {
    /// The offending raw value, verbatim.
    pub value: String,
}

impl FromStr for DoorStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CLOSED" => Ok(Self::Closed),
            "SELECTED" => Ok(Self::Selected),
            "OPEN" => Ok(Self::Open),
            _ => Err(StatusParseError {
                value: s.to_string(),
            }),
        }
    }
}
