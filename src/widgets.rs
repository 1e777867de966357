//! Reusable clickable UI components.
//!
//! Rendering and click-target registration are co-located so a button can
//! never be drawn without also being tappable.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

/// A horizontal row of labeled buttons.
///
/// Each button renders as its bracketed label and registers a click target
/// covering the label's actual display width (unicode-aware, so emoji and
/// wide glyphs hit-test correctly).
///
/// # Example
/// ```ignore
/// ButtonRow::new(2)
///     .button("♥", heart_style, FAVORITE_BASE + idx)
///     .button("CALL", call_style, CALL_BASE + idx)
///     .render(f, row_area, &mut cs);
/// ```
pub struct ButtonRow {
    buttons: Vec<(String, Style, u16)>,
    /// Columns between adjacent buttons.
    gap: u16,
}

impl ButtonRow {
    pub fn new(gap: u16) -> Self {
        Self {
            buttons: Vec::new(),
            gap,
        }
    }

    pub fn button(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.buttons.push((label.into(), style, action_id));
        self
    }

    /// Render the row on the first line of `area` and register one click
    /// target per button. Buttons that would overflow the area are clipped
    /// by the renderer but still registered only for their visible columns.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans: Vec<Span> = Vec::new();
        let mut cursor: u16 = 0;
        for (i, (label, style, action_id)) in self.buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(self.gap as usize)));
                cursor += self.gap;
            }
            let text = format!("[{label}]");
            let width = Line::from(text.as_str()).width() as u16;
            let visible = width.min(area.width.saturating_sub(cursor));
            if visible > 0 {
                cs.add_click_target(
                    Rect::new(area.x + cursor, area.y, visible, 1),
                    *action_id,
                );
            }
            spans.push(Span::styled(text, *style));
            cursor += width;
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
