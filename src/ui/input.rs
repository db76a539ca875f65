use crate::ui::app::App;
use crate::ui::field::update_control_rect;
use crate::ui::layout::layout_regions;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('u') => {
            app.activate();
        }
        _ => {}
    }
}

/// Left-click on the update control activates the field.
///
/// The control rect is recomputed from the last known size; clicks anywhere
/// else are ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
    let control = update_control_rect(body);
    if control.contains(Position::new(mouse.column, mouse.row)) {
        app.activate();
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};
    use crossterm::event::{KeyEventState, MouseEventKind};
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config)
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn enter_activates() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Enter));
        assert!(!app.is_initial());
    }

    #[test]
    fn q_quits_without_activating() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Char('q')));
        assert!(app.should_quit());
        assert!(app.is_initial());
    }

    #[test]
    fn release_events_ignored() {
        let mut app = make_app();
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, key);
        assert!(app.is_initial());
    }

    #[test]
    fn click_on_control_activates() {
        let mut app = make_app();
        app.on_resize(80, 24);
        // Body starts below the 3-row header; control sits one cell inside.
        handle_mouse(&mut app, left_click(2, 4));
        assert!(!app.is_initial());
    }

    #[test]
    fn click_outside_control_ignored() {
        let mut app = make_app();
        app.on_resize(80, 24);
        handle_mouse(&mut app, left_click(60, 20));
        assert!(app.is_initial());
    }

    #[test]
    fn click_before_first_resize_ignored() {
        let mut app = make_app();
        handle_mouse(&mut app, left_click(2, 4));
        assert!(app.is_initial());
    }
}
