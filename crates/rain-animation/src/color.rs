//! Fade-to-black color ramp.

use ratatui::style::Color;

/// Display color for a glyph: green channel only, red and blue fixed at zero.
pub const fn glyph_color(brightness: u8) -> Color {
    Color::Rgb(0, brightness, 0)
}
