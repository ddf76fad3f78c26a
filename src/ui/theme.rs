use crossterm::style::{Color, Stylize};

/// Design tokens for blockcheck output.
///
/// Only semantic colors live here; views never pick raw colors.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

/// Paint a whole line, or return it untouched when color is off.
pub fn paint(text: &str, color: Color, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.with(color))
}
