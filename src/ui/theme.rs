use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATE_INITIAL: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATE_UPDATED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CONTROL_TEXT: Color = Color::Rgb(0x11, 0x18, 0x27);
pub const CONTROL_BG: Color = Color::Rgb(0x7a, 0xa2, 0xf7);
pub const VALUE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
