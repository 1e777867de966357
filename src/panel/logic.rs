//! Call panel state transitions — pure functions, fully testable.
//!
//! Every user action funnels into one of these; nothing here touches the
//! display surface, the clock, or the browser. Failures surface as toasts on
//! the state and never propagate past the handler.

use crate::panel::history::{self, CallMoment, CallRecord};
use crate::panel::state::{PanelState, ToastKind, CALL_COST};

/// The two outcomes of a call attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CallOutcome {
    Placed,
    InsufficientCoins,
}

/// Flip a service's heart. The hearts counter counts clicks, not favorites:
/// un-favoriting still increments it (longstanding panel behavior, kept on
/// purpose — see the toggle tests).
pub fn toggle_favorite(state: &mut PanelState, idx: usize) -> bool {
    let Some(service) = state.services.get_mut(idx) else {
        return false;
    };
    service.favorited = !service.favorited;
    state.hearts_count += 1;
    true
}

/// Attempt a call. Success deducts the cost and logs a record; failure
/// changes nothing but the toast list. Unknown indices are ignored.
pub fn place_call(state: &mut PanelState, idx: usize, now: &CallMoment) -> Option<CallOutcome> {
    let Some(service) = state.services.get(idx) else {
        return None;
    };

    if state.coins_count < CALL_COST {
        state.add_toast("Not enough coins to place this call", ToastKind::Error);
        return Some(CallOutcome::InsufficientCoins);
    }

    let name = service.name.clone();
    let number = service.number.clone();
    state.coins_count -= CALL_COST;
    history::push_record(
        &mut state.history,
        CallRecord {
            service: name.clone(),
            number: number.clone(),
            time: now.time.clone(),
            date: now.date.clone(),
            id: now.epoch_ms,
        },
    );
    state.add_toast(&format!("📞 Calling {name} ({number})"), ToastKind::Success);
    Some(CallOutcome::Placed)
}

/// Look up the number a copy click should write. State is untouched until
/// the clipboard outcome arrives via `resolve_copy`.
pub fn copy_number(state: &PanelState, idx: usize) -> Option<String> {
    state.services.get(idx).map(|s| s.number.clone())
}

/// Apply a finished clipboard write. Only a fulfilled write moves the
/// counter.
pub fn resolve_copy(state: &mut PanelState, ok: bool, number: &str) {
    if ok {
        state.copy_count += 1;
        state.add_toast(&format!("Copied {number} to clipboard"), ToastKind::Success);
    } else {
        state.add_toast("Could not copy the number", ToastKind::Error);
    }
}

/// Empty the history unconditionally. The caller drops the persisted key.
pub fn clear_history(state: &mut PanelState) {
    state.history.clear();
    state.add_toast("Call history cleared", ToastKind::Success);
}

/// Advance toast countdowns and the animation frame. Expired toasts are
/// dropped; live ones keep their own timers.
pub fn tick(state: &mut PanelState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);
    for toast in &mut state.toasts {
        toast.ticks_left = toast.ticks_left.saturating_sub(delta_ticks);
    }
    state.toasts.retain(|t| t.ticks_left > 0);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::panel::history::HISTORY_CAP;
    use crate::panel::state::STARTING_COINS;
    use proptest::prelude::*;

    fn moment(epoch_ms: u64) -> CallMoment {
        CallMoment {
            epoch_ms,
            time: "1:00:00 PM".to_string(),
            date: "1/1/2026".to_string(),
        }
    }

    proptest! {
        /// Hearts count N clicks regardless of which hearts were clicked or
        /// what visual state they ended in.
        #[test]
        fn prop_hearts_equal_click_count(clicks in prop::collection::vec(0usize..9, 0..60)) {
            let mut state = PanelState::new();
            for &idx in &clicks {
                toggle_favorite(&mut state, idx);
            }
            prop_assert_eq!(state.hearts_count as usize, clicks.len());
        }

        /// An even number of clicks on one heart restores its visual state.
        #[test]
        fn prop_paired_toggles_restore_visual(idx in 0usize..9, pairs in 0u32..20) {
            let mut state = PanelState::new();
            for _ in 0..pairs * 2 {
                toggle_favorite(&mut state, idx);
            }
            prop_assert!(!state.services[idx].favorited);
            prop_assert_eq!(state.hearts_count, pairs * 2);
        }

        /// A call either deducts exactly the cost and prepends exactly one
        /// record, or leaves both coins and history untouched.
        #[test]
        fn prop_call_is_all_or_nothing(coins in 0u32..200, idx in 0usize..9) {
            let mut state = PanelState::new();
            state.coins_count = coins;
            let len_before = state.history.len();

            match place_call(&mut state, idx, &moment(7)) {
                Some(CallOutcome::Placed) => {
                    prop_assert!(coins >= CALL_COST);
                    prop_assert_eq!(state.coins_count, coins - CALL_COST);
                    prop_assert_eq!(state.history.len(), len_before + 1);
                    prop_assert_eq!(&state.history[0].service, &state.services[idx].name);
                }
                Some(CallOutcome::InsufficientCoins) => {
                    prop_assert!(coins < CALL_COST);
                    prop_assert_eq!(state.coins_count, coins);
                    prop_assert_eq!(state.history.len(), len_before);
                }
                None => prop_assert!(false, "directory index {} rejected", idx),
            }
        }

        /// However many calls are attempted, coins never underflow and the
        /// history never exceeds its cap.
        #[test]
        fn prop_invariants_hold_for_any_call_sequence(
            idxs in prop::collection::vec(0usize..9, 0..40),
        ) {
            let mut state = PanelState::new();
            for (n, &idx) in idxs.iter().enumerate() {
                place_call(&mut state, idx, &moment(n as u64));
                prop_assert!(state.history.len() <= HISTORY_CAP);
            }
            // 100 starting coins fund exactly 5 calls
            let placed = idxs.len().min((STARTING_COINS / CALL_COST) as usize);
            prop_assert_eq!(state.history.len(), placed.min(HISTORY_CAP));
            prop_assert_eq!(state.coins_count, STARTING_COINS - placed as u32 * CALL_COST);
        }

        /// Copy outcomes only ever move the counter forward, and only on
        /// fulfillment.
        #[test]
        fn prop_copy_counter_counts_fulfillments(outcomes in prop::collection::vec(any::<bool>(), 0..30)) {
            let mut state = PanelState::new();
            for &ok in &outcomes {
                resolve_copy(&mut state, ok, "16216");
            }
            let expected = outcomes.iter().filter(|&&ok| ok).count();
            prop_assert_eq!(state.copy_count as usize, expected);
        }

        /// Ticking never panics and eventually drains every toast.
        #[test]
        fn prop_toasts_always_drain(
            toasts in 0usize..10,
            steps in prop::collection::vec(1u32..20, 1..40),
        ) {
            let mut state = PanelState::new();
            for i in 0..toasts {
                state.add_toast(&format!("t{i}"), ToastKind::Success);
            }
            let total: u32 = steps.iter().sum();
            for s in steps {
                tick(&mut state, s);
            }
            if total >= crate::panel::state::TOAST_DWELL_TICKS
                + 2 * crate::panel::state::TOAST_SLIDE_TICKS
            {
                prop_assert!(state.toasts.is_empty());
            }
        }
    }
}
