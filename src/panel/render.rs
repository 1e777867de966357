//! Call panel rendering: header counters, service cards, history, toasts.
//!
//! Render is a pure projection of `PanelState`; the only side channel is the
//! click target registry rebuilt each frame.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::panel::actions::{CALL_BASE, CLEAR_HISTORY, COPY_BASE, FAVORITE_BASE};
use crate::panel::state::{PanelState, Toast, ToastKind, TOAST_SLIDE_TICKS};
use crate::widgets::ButtonRow;

/// Rows each service card occupies (title row + button row).
const CARD_ROWS: u16 = 2;

/// Columns a toast slides per tick at either end of its life.
const TOAST_SLIDE_COLS: u32 = 3;

pub fn render(state: &PanelState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    render_header(state, f, chunks[0]);

    if is_narrow_layout(area.width) {
        let stacked = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(chunks[1]);
        render_services(state, f, stacked[0], click_state);
        render_history(state, f, stacked[1], click_state);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        render_services(state, f, columns[0], click_state);
        render_history(state, f, columns[1], click_state);
    }

    // Toasts draw last so they sit on top of everything.
    render_toasts(state, f, area);
}

/// Slow pulse phase for the hearts counter, half-second period at the panel
/// tick rate.
fn heart_pulse(anim_frame: u32) -> bool {
    (anim_frame / 5) % 2 == 0
}

fn render_header(state: &PanelState, f: &mut Frame, area: Rect) {
    let heart_color = if heart_pulse(state.anim_frame) {
        Color::Red
    } else {
        Color::LightRed
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" ♥ {}", state.hearts_count),
            Style::default().fg(heart_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("◉ {} coins", state.coins_count),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("⧉ {} copied", state.copy_count),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" ☎ Emergency Hotline "),
    );
    f.render_widget(header, area);
}

/// Heart glyph for a service's favorite flag.
fn heart_glyph(favorited: bool) -> (&'static str, Style) {
    if favorited {
        ("♥", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        ("♡", Style::default().fg(Color::DarkGray))
    }
}

fn render_services(
    state: &PanelState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Services ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut cs = click_state.borrow_mut();
    for (idx, service) in state.services.iter().enumerate() {
        let y = inner.y + idx as u16 * CARD_ROWS;
        if y + CARD_ROWS > inner.y + inner.height {
            break;
        }

        let title = Line::from(vec![
            Span::styled(
                service.name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(service.number.as_str(), Style::default().fg(Color::Yellow)),
        ]);
        f.render_widget(
            Paragraph::new(title),
            Rect::new(inner.x, y, inner.width, 1),
        );

        let (heart, heart_style) = heart_glyph(service.favorited);
        ButtonRow::new(1)
            .button(heart, heart_style, FAVORITE_BASE + idx as u16)
            .button(
                "CALL",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                CALL_BASE + idx as u16,
            )
            .button("COPY", Style::default().fg(Color::Cyan), COPY_BASE + idx as u16)
            .render(f, Rect::new(inner.x + 1, y + 1, inner.width.saturating_sub(1), 1), &mut cs);
    }
}

fn render_history(
    state: &PanelState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Call History ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mut cs = click_state.borrow_mut();
    clear_row_target(&mut cs, inner);
    ButtonRow::new(0)
        .button(
            "CLEAR",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            CLEAR_HISTORY,
        )
        .render(f, Rect::new(inner.x, inner.y, inner.width, 1), &mut cs);

    let list_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );

    if state.history.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No calls yet",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))),
            list_area,
        );
        return;
    }

    // Newest first, two rows per record, clipped to the panel.
    let mut lines: Vec<Line> = Vec::new();
    for rec in &state.history {
        lines.push(Line::from(Span::styled(
            rec.service.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", rec.number), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("  {} {}", rec.time, rec.date),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines), list_area);
}

/// The whole history header row clears on tap, not just the label — easier
/// to hit on mobile. The button's own target overlays it with the same ID.
fn clear_row_target(cs: &mut ClickState, inner: Rect) {
    cs.add_row_target(inner, inner.y, CLEAR_HISTORY);
}

/// Horizontal offset (columns) a toast is displaced by while sliding in or
/// out. Zero through the dwell window.
fn toast_offset(toast: &Toast) -> u32 {
    let age = toast.max_ticks - toast.ticks_left;
    let slide = if age < TOAST_SLIDE_TICKS {
        TOAST_SLIDE_TICKS - age
    } else if toast.ticks_left < TOAST_SLIDE_TICKS {
        TOAST_SLIDE_TICKS - toast.ticks_left
    } else {
        0
    };
    slide * TOAST_SLIDE_COLS
}

fn render_toasts(state: &PanelState, f: &mut Frame, area: Rect) {
    for (i, toast) in state.toasts.iter().enumerate() {
        let y = area.y + 1 + i as u16;
        if y >= area.y + area.height {
            break;
        }

        let text = format!(" {} ", toast.text);
        let width = (Line::from(text.as_str()).width() as u16).min(area.width);
        let visible = width.saturating_sub(toast_offset(toast) as u16);
        if visible == 0 {
            continue;
        }

        let style = match toast.kind {
            ToastKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
            ToastKind::Error => Style::default().fg(Color::White).bg(Color::Red),
        };
        let rect = Rect::new(area.x + area.width - visible, y, visible, 1);
        f.render_widget(Paragraph::new(text).style(style), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::state::TOAST_DWELL_TICKS;

    fn toast_with_life(ticks_left: u32) -> Toast {
        Toast {
            text: "x".to_string(),
            kind: ToastKind::Success,
            ticks_left,
            max_ticks: TOAST_DWELL_TICKS + 2 * TOAST_SLIDE_TICKS,
        }
    }

    #[test]
    fn toast_slides_in_then_rests() {
        let fresh = toast_with_life(TOAST_DWELL_TICKS + 2 * TOAST_SLIDE_TICKS);
        assert_eq!(toast_offset(&fresh), TOAST_SLIDE_TICKS * TOAST_SLIDE_COLS);

        let settled = toast_with_life(TOAST_DWELL_TICKS);
        assert_eq!(toast_offset(&settled), 0);
    }

    #[test]
    fn toast_slides_out_at_end_of_life() {
        let leaving = toast_with_life(1);
        assert_eq!(toast_offset(&leaving), (TOAST_SLIDE_TICKS - 1) * TOAST_SLIDE_COLS);
    }

    #[test]
    fn heart_glyph_tracks_flag() {
        assert_eq!(heart_glyph(true).0, "♥");
        assert_eq!(heart_glyph(false).0, "♡");
    }

    #[test]
    fn heart_pulse_alternates_every_half_second() {
        assert!(heart_pulse(0));
        assert!(heart_pulse(4));
        assert!(!heart_pulse(5));
        assert!(!heart_pulse(9));
        assert!(heart_pulse(10));
    }

    #[test]
    fn clear_header_row_is_clickable_full_width() {
        let mut cs = ClickState::new();
        let inner = Rect::new(5, 3, 30, 10);
        clear_row_target(&mut cs, inner);

        assert_eq!(cs.hit_test(5, 3), Some(CLEAR_HISTORY));
        assert_eq!(cs.hit_test(34, 3), Some(CLEAR_HISTORY));
        // only the header row, not the record list below it
        assert_eq!(cs.hit_test(5, 4), None);
        assert_eq!(cs.hit_test(4, 3), None);
    }
}
