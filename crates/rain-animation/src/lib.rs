//! Falling glyph animation.
//!
//! [`RainState`] owns the per-column state and the pool of live glyphs and is
//! advanced one tick at a time. [`RainWidget`] draws it into a ratatui buffer.

mod chars;
mod color;
mod column;
mod glyph;
mod render;
mod state;

pub use chars::Alphabet;
pub use color::glyph_color;
pub use column::Column;
pub use glyph::{Glyph, GlyphPool};
pub use render::RainWidget;
pub use state::RainState;
