use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATE_INITIAL, STATE_UPDATED,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, is_initial: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (badge, badge_color) = if is_initial {
            ("initial", STATE_INITIAL)
        } else {
            ("updated", STATE_UPDATED)
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("tickspan", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("●", Style::default().fg(badge_color)),
            Span::styled(" ", text_style),
            Span::styled(badge, Style::default().fg(badge_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
