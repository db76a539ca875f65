use crate::ui::field::state::FieldState;
use crate::ui::theme::{CONTROL_BG, CONTROL_TEXT, VALUE_TEXT};
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Label of the activatable control.
pub const UPDATE_LABEL: &str = "[ update ]";

/// The body row: the update control followed by the current text.
pub fn field_line(state: &FieldState) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            UPDATE_LABEL,
            Style::default().fg(CONTROL_TEXT).bg(CONTROL_BG),
        ),
        Span::raw("  "),
        Span::styled(state.text.clone(), Style::default().fg(VALUE_TEXT)),
    ])
}

/// Clickable rect of the update control inside the body region.
///
/// Derived from layout alone, so mouse hit-testing does not depend on the
/// renderer having run first. Must stay in step with how `render::draw`
/// places the row (one cell inside the body border).
pub fn update_control_rect(body: Rect) -> Rect {
    let inner = body.inner(Margin::new(1, 1));
    Rect {
        x: inner.x,
        y: inner.y,
        width: (UPDATE_LABEL.len() as u16).min(inner.width),
        height: inner.height.min(1),
    }
}
