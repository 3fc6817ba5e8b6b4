use colored::Color;

pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };

pub const STATUS_UP: Color = Color::Green;
pub const STATUS_DOWN: Color = Color::Red;
pub const STATUS_FLAPPING: Color = Color::Yellow;
