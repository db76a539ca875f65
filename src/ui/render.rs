use crate::ui::app::App;
use crate::ui::field::field_line;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::layout::Margin;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the whole frame from the current state.
///
/// Pure with respect to `app`: the loop re-invokes this after every store
/// notification, so the frame always reflects the most recent completed
/// mutation.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.is_initial()), header);

    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        body,
    );
    let state = app.field_store().get();
    let inner = body.inner(Margin::new(1, 1));
    frame.render_widget(Paragraph::new(field_line(&state)), inner);

    frame.render_widget(Footer::new().widget(footer), footer);
}
