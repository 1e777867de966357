mod input;
mod panel;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use panel::history::CallMoment;
use panel::state::TICKS_PER_SEC;
use panel::{CallPanel, Effect};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::TickClock;

/// Query the grid container's bounding rect and convert mouse pixel
/// coordinates to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Route one input event through the dispatcher and run any side effect.
fn dispatch(panel: &Rc<RefCell<CallPanel>>, event: &InputEvent) {
    let effect = panel.borrow_mut().handle_input(event, &CallMoment::now());
    if let Some(Effect::CopyToClipboard(number)) = effect {
        copy_to_clipboard(panel, number);
    }
}

/// Kick off the async clipboard write; the outcome re-enters the dispatcher
/// on the same event loop via `resolve_copy`.
#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(panel: &Rc<RefCell<CallPanel>>, number: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&number);
    let panel = panel.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let ok = wasm_bindgen_futures::JsFuture::from(promise).await.is_ok();
        panel.borrow_mut().resolve_copy(ok, &number);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(_panel: &Rc<RefCell<CallPanel>>, _number: String) {}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let panel = Rc::new(RefCell::new(CallPanel::new()));
    #[cfg(target_arch = "wasm32")]
    panel.borrow_mut().restore_history();

    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch handler
    terminal.on_mouse_event({
        let panel = panel.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.kind != MouseEventKind::ButtonDown(MouseButton::Left) {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let (col, row) = (mouse_event.col, mouse_event.row);
            let matched = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = matched {
                dispatch(&panel, &InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let panel = panel.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                dispatch(&panel, &InputEvent::Key(c));
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        let clock = RefCell::new(TickClock::new(TICKS_PER_SEC));
        move |f| {
            let now_ms = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or(0.0);
            let ticks = clock.borrow_mut().update(now_ms);
            panel.borrow_mut().tick(ticks);

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            panel.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
