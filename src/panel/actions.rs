//! Semantic action IDs for the panel's click targets.
//!
//! Render registers these during each frame; the mouse handler dispatches
//! them as `InputEvent::Click`. `decode` turns a raw ID back into the
//! discrete `Action` message the dispatcher consumes.

/// Clear the persisted call history.
pub const CLEAR_HISTORY: u16 = 1;

// Per-service actions: base + service index.
pub const FAVORITE_BASE: u16 = 100;
pub const CALL_BASE: u16 = 200;
pub const COPY_BASE: u16 = 300;

/// Width of each per-service ID band.
const BAND: u16 = 100;

/// A discrete user action, decoupled from the display surface so the
/// dispatcher can be unit-tested without one.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ToggleFavorite(usize),
    PlaceCall(usize),
    CopyNumber(usize),
    ClearHistory,
}

/// Map a click target's action ID to its message. Unknown IDs are ignored.
pub fn decode(action_id: u16) -> Option<Action> {
    match action_id {
        CLEAR_HISTORY => Some(Action::ClearHistory),
        id if (FAVORITE_BASE..FAVORITE_BASE + BAND).contains(&id) => {
            Some(Action::ToggleFavorite((id - FAVORITE_BASE) as usize))
        }
        id if (CALL_BASE..CALL_BASE + BAND).contains(&id) => {
            Some(Action::PlaceCall((id - CALL_BASE) as usize))
        }
        id if (COPY_BASE..COPY_BASE + BAND).contains(&id) => {
            Some(Action::CopyNumber((id - COPY_BASE) as usize))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_bands() {
        assert_eq!(decode(CLEAR_HISTORY), Some(Action::ClearHistory));
        assert_eq!(decode(FAVORITE_BASE), Some(Action::ToggleFavorite(0)));
        assert_eq!(decode(FAVORITE_BASE + 8), Some(Action::ToggleFavorite(8)));
        assert_eq!(decode(CALL_BASE + 3), Some(Action::PlaceCall(3)));
        assert_eq!(decode(COPY_BASE + 5), Some(Action::CopyNumber(5)));
    }

    #[test]
    fn decode_rejects_unknown_ids() {
        assert_eq!(decode(0), None);
        assert_eq!(decode(2), None);
        assert_eq!(decode(99), None);
        assert_eq!(decode(COPY_BASE + BAND), None);
    }
}
