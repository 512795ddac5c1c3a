use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_BG: Color = Color::Rgb(0x00, 0x7b, 0xff);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const RESULT_BG: Color = Color::Rgb(0x1f, 0x1f, 0x1f);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_BUSY: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
