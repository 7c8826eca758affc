use ratatui::style::Color;

pub const TEA_AMBER: Color = Color::Rgb(0xd9, 0x8c, 0x3f);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ALERT_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PURE_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const IMPURE_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const FOCUS_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const CONSOLE_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
