//! A single door: status plus a concealed prize flag.

use crate::{DoorId, DoorSnapshot, DoorStatus};

/// One addressable slot in a game.
///
/// A door has no behavior of its own beyond holding state; all mutation
/// goes through [`Game`](crate::Game), which checks the composite rules
/// (whose turn the state machine is in, which door the host revealed)
/// before touching any door.
#[derive(Debug, Clone)]
pub struct Door {
    id: DoorId,
    status: DoorStatus,
    /// Set once at creation, immutable afterwards. Exposed to callers only
    /// through [`Door::prize`] once the door is open.
    prize: bool,
}

impl Door {
    pub(crate) fn new(id: DoorId, prize: bool) -> Self {
        Self {
            id,
            status: DoorStatus::Closed,
            prize,
        }
    }

    /// The door's identifier, stable for the game's lifetime.
    pub fn id(&self) -> DoorId {
        self.id
    }

    /// The door's current status.
    pub fn status(&self) -> DoorStatus {
        self.status
    }

    /// The prize flag, revealed only once the door is open.
    ///
    /// Returns `None` while the door is closed or merely selected; the
    /// only ways to learn the flag are opening this door or eliminating
    /// the others.
    pub fn prize(&self) -> Option<bool> {
        match self.status {
            DoorStatus::Open => Some(self.prize),
            _ => None,
        }
    }

    /// Reads the concealed flag. Crate-private: the game needs it to pick
    /// the host's reveal and to report the outcome.
    pub(crate) fn hides_prize(&self) -> bool {
        self.prize
    }

    /// Moves the door to `to`.
    ///
    /// The game validates the full transition before calling this, so an
    /// illegal pair here is a bug in the caller, not a user error.
    pub(crate) fn transition(&mut self, to: DoorStatus) {
        debug_assert!(
            self.status.can_transition_to(to),
            "door {} cannot move {} -> {}",
            self.id,
            self.status,
            to
        );
        self.status = to;
    }

    pub(crate) fn snapshot(&self) -> DoorSnapshot {
        DoorSnapshot {
            id: self.id,
            status: self.status,
            prize: self.prize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door(prize: bool) -> Door {
        Door::new(DoorId(1), prize)
    }

    #[test]
    fn test_new_door_is_closed() {
        assert_eq!(door(true).status(), DoorStatus::Closed);
    }

    #[test]
    fn test_prize_concealed_until_open() {
        let mut d = door(true);
        assert_eq!(d.prize(), None);

        d.transition(DoorStatus::Selected);
        assert_eq!(d.prize(), None);

        d.transition(DoorStatus::Open);
        assert_eq!(d.prize(), Some(true));
    }

    #[test]
    fn test_prize_flag_of_empty_door() {
        let mut d = door(false);
        d.transition(DoorStatus::Open);
        assert_eq!(d.prize(), Some(false));
    }

    #[test]
    #[should_panic(expected = "cannot move")]
    fn test_transition_rejects_illegal_pair() {
        let mut d = door(false);
        d.transition(DoorStatus::Open);
        d.transition(DoorStatus::Selected);
    }
}
