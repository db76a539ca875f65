//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use tickspan::config::{Config, ConfigStore};
use tickspan::ui::app::App;
use tickspan::ui::field::UPDATE_LABEL;

pub fn make_app() -> App {
    let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
    App::new(config)
}

/// Mount the component into a throwaway in-memory terminal.
pub fn mount(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("failed to mount test terminal")
}

/// All visible cells of the test terminal, row by row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

/// The text displayed next to the update control.
pub fn displayed_value(screen: &str) -> String {
    let line = screen
        .lines()
        .find(|line| line.contains(UPDATE_LABEL))
        .expect("field row rendered");
    let after = line
        .split(UPDATE_LABEL)
        .nth(1)
        .expect("text after the control");
    after
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_matches('│')
        .to_string()
}
