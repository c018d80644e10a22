use ratatui::style::Color;

pub const BRAND_BLUE: Color = Color::Rgb(0x01, 0x57, 0x9b);
pub const LOGO_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const LOGO_TEXT: Color = Color::Rgb(0x01, 0x57, 0x9b);
pub const LOGO_SUBTITLE: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PRODUCT_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const NOT_FOUND: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SEARCHING: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const ERROR_TEXT: Color = Color::Rgb(0xfc, 0xa5, 0xa5);
