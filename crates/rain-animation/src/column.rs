//! Per-column fall state.

use std::ops::RangeInclusive;

use rand::Rng;

/// One vertical lane of falling glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Vertical offset of the next glyph, in canvas units.
    pub position: u32,
    /// Canvas units advanced per tick.
    pub speed: u32,
}

impl Column {
    /// A column at a random height in `[0, height)` with a random speed.
    pub fn random<R: Rng>(rng: &mut R, height: u32, speeds: &RangeInclusive<u32>) -> Self {
        let position = if height == 0 {
            0
        } else {
            rng.random_range(0..height)
        };
        Self {
            position,
            speed: rng.random_range(speeds.clone()),
        }
    }

    /// Move down by `speed`, wrapping to the top once the canvas height is reached.
    pub fn advance(&mut self, height: u32) {
        self.position = self.position.saturating_add(self.speed);
        if self.position >= height {
            self.position = 0;
        }
    }
}

/// Grow or shrink `columns` to `count`, leaving surviving columns untouched.
pub fn reconcile<R: Rng>(
    columns: &mut Vec<Column>,
    count: usize,
    height: u32,
    speeds: &RangeInclusive<u32>,
    rng: &mut R,
) {
    if count > columns.len() {
        let missing = count - columns.len();
        columns.extend((0..missing).map(|_| Column::random(rng, height, speeds)));
    } else {
        columns.truncate(count);
    }
}
