//! Live glyphs and their fade.

/// One drawn character with its own fade state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub x: u32,
    pub y: u32,
    pub ch: char,
    pub brightness: u8,
}

/// Glyphs currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct GlyphPool {
    glyphs: Vec<Glyph>,
}

impl GlyphPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// Dim every glyph by `step` and drop the ones that reach zero.
    /// Returns the number of glyphs removed.
    pub fn fade(&mut self, step: u8) -> usize {
        let before = self.glyphs.len();
        self.glyphs.retain_mut(|glyph| {
            glyph.brightness = glyph.brightness.saturating_sub(step);
            glyph.brightness > 0
        });
        before - self.glyphs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
