//! Call panel controller: one dispatcher over explicit state.
//!
//! Every user affordance becomes an `Action` message handled here. The
//! dispatcher mutates state through `logic`, mirrors history mutations to the
//! persistent store, and hands asynchronous work (the clipboard write) back
//! to the entry point as an `Effect` so the core stays deterministic.

pub mod actions;
pub mod history;
pub mod logic;
pub mod render;
pub mod save;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use actions::Action;
use history::CallMoment;
use logic::CallOutcome;
use state::PanelState;

/// Side work the dispatcher cannot run itself. The entry point executes it
/// and reports back through [`CallPanel::resolve_copy`].
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    CopyToClipboard(String),
}

pub struct CallPanel {
    pub state: PanelState,
}

impl CallPanel {
    pub fn new() -> Self {
        Self {
            state: PanelState::new(),
        }
    }

    /// Load the persisted history into a fresh state. Called once at startup.
    #[cfg(target_arch = "wasm32")]
    pub fn restore_history(&mut self) {
        self.state.history = save::load_history();
    }

    /// Handle a normalized input event. `now` is the wall-clock reading used
    /// if the event places a call.
    pub fn handle_input(&mut self, event: &InputEvent, now: &CallMoment) -> Option<Effect> {
        let action = match event {
            InputEvent::Click(id) => actions::decode(*id)?,
            InputEvent::Key(c) => match c {
                '1'..='9' => Action::PlaceCall(*c as usize - '1' as usize),
                'x' => Action::ClearHistory,
                _ => return None,
            },
        };
        self.dispatch(action, now)
    }

    fn dispatch(&mut self, action: Action, now: &CallMoment) -> Option<Effect> {
        match action {
            Action::ToggleFavorite(idx) => {
                logic::toggle_favorite(&mut self.state, idx);
                None
            }
            Action::PlaceCall(idx) => {
                if logic::place_call(&mut self.state, idx, now) == Some(CallOutcome::Placed) {
                    #[cfg(target_arch = "wasm32")]
                    save::store_history(&self.state.history);
                }
                None
            }
            Action::CopyNumber(idx) => {
                logic::copy_number(&self.state, idx).map(Effect::CopyToClipboard)
            }
            Action::ClearHistory => {
                logic::clear_history(&mut self.state);
                #[cfg(target_arch = "wasm32")]
                save::remove_history();
                None
            }
        }
    }

    /// Feed a completed clipboard write back into the state.
    pub fn resolve_copy(&mut self, ok: bool, number: &str) {
        logic::resolve_copy(&mut self.state, ok, number);
    }

    /// Advance toast timers by `delta_ticks`.
    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
