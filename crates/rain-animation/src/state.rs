//! The animation driver.

use rain_core::{AnimationSettings, CanvasSize, CellMetrics};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::chars::Alphabet;
use crate::column::{self, Column};
use crate::glyph::{Glyph, GlyphPool};
use crate::render::RainWidget;

/// Column state and live glyphs for one canvas.
#[derive(Debug)]
pub struct RainState<R = SmallRng> {
    settings: AnimationSettings,
    alphabet: Alphabet,
    canvas: CanvasSize,
    columns: Vec<Column>,
    glyphs: GlyphPool,
    rng: R,
    ticks: u64,
}

impl RainState<SmallRng> {
    /// Create a driver seeded from the operating system.
    pub fn new(settings: AnimationSettings, canvas: CanvasSize) -> Self {
        Self::with_rng(settings, canvas, SmallRng::from_os_rng())
    }
}

impl<R: Rng> RainState<R> {
    /// Create a driver with one randomly placed column per `column_width` units.
    pub fn with_rng(settings: AnimationSettings, canvas: CanvasSize, mut rng: R) -> Self {
        let alphabet = Alphabet::new(&settings.alphabet);
        let mut columns = Vec::new();
        column::reconcile(
            &mut columns,
            canvas.column_count(settings.column_width),
            canvas.height,
            &settings.speed_range(),
            &mut rng,
        );
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            columns = columns.len(),
            "rain initialized"
        );

        Self {
            settings,
            alphabet,
            canvas,
            columns,
            glyphs: GlyphPool::new(),
            rng,
            ticks: 0,
        }
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn glyphs(&self) -> &GlyphPool {
        &self.glyphs
    }

    /// Widget drawing the live glyphs with the given cell metrics.
    pub fn widget(&self, cell: CellMetrics) -> RainWidget<'_> {
        RainWidget::new(&self.glyphs, cell)
    }

    /// Ticks run since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Adopt a new canvas size, appending or truncating columns as needed.
    pub fn resize(&mut self, canvas: CanvasSize) {
        if canvas == self.canvas {
            return;
        }
        let before = self.columns.len();
        self.canvas = canvas;
        column::reconcile(
            &mut self.columns,
            canvas.column_count(self.settings.column_width),
            canvas.height,
            &self.settings.speed_range(),
            &mut self.rng,
        );
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            before,
            after = self.columns.len(),
            "rain resized"
        );
    }

    /// Advance the animation by one step.
    ///
    /// Every column drops a fresh glyph at its current position and moves
    /// down, then every live glyph (new ones included) fades one step.
    pub fn tick(&mut self) {
        let column_width = self.settings.column_width;
        let brightness = self.settings.spawn_brightness;

        for (i, col) in self.columns.iter_mut().enumerate() {
            let ch = self.alphabet.sample(&mut self.rng);
            self.glyphs.spawn(Glyph {
                x: (i as u32).saturating_mul(column_width),
                y: col.position,
                ch,
                brightness,
            });
            col.advance(self.canvas.height);
        }

        let removed = self.glyphs.fade(self.settings.fade_step);
        self.ticks += 1;
        tracing::trace!(
            tick = self.ticks,
            live = self.glyphs.len(),
            removed,
            "rain tick"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(width: u32, height: u32) -> RainState<SmallRng> {
        RainState::with_rng(
            AnimationSettings::default(),
            CanvasSize::new(width, height),
            SmallRng::seed_from_u64(42),
        )
    }

    #[test]
    fn test_default_window_has_forty_columns() {
        let rain = seeded(800, 600);
        assert_eq!(rain.columns().len(), 40);
        for col in rain.columns() {
            assert!(col.position < 600);
            assert!((15..=25).contains(&col.speed));
        }
        assert!(rain.glyphs().is_empty());
    }

    #[test]
    fn test_tick_spawns_one_glyph_per_column() {
        let mut rain = seeded(800, 600);
        let before: Vec<Column> = rain.columns().to_vec();
        rain.tick();

        assert_eq!(rain.ticks(), 1);
        assert_eq!(rain.glyphs().len(), 40);
        for (i, glyph) in rain.glyphs().iter().enumerate() {
            assert_eq!(glyph.x, i as u32 * 20);
            assert_eq!(glyph.y, before[i].position);
            assert_eq!(glyph.brightness, 208);
        }
        for (col, old) in rain.columns().iter().zip(&before) {
            let expected = old.position + old.speed;
            let expected = if expected >= 600 { 0 } else { expected };
            assert_eq!(col.position, expected);
        }
    }

    #[test]
    fn test_glyph_population_reaches_steady_state() {
        let mut rain = seeded(800, 600);
        for _ in 0..100 {
            rain.tick();
        }
        // 26 ticks' worth of glyphs survive the fade
        assert_eq!(rain.glyphs().len(), 40 * 26);
    }

    #[test]
    fn test_resize_grow_preserves_existing() {
        let mut rain = seeded(800, 600);
        rain.tick();
        let before: Vec<Column> = rain.columns().to_vec();

        rain.resize(CanvasSize::new(1210, 900));
        assert_eq!(rain.columns().len(), 60);
        assert_eq!(&rain.columns()[..40], before.as_slice());
        for col in &rain.columns()[40..] {
            assert!(col.position < 900);
        }
    }

    #[test]
    fn test_resize_shrink_truncates() {
        let mut rain = seeded(800, 600);
        let before: Vec<Column> = rain.columns().to_vec();
        rain.resize(CanvasSize::new(300, 600));
        assert_eq!(rain.columns(), &before[..15]);
    }

    #[test]
    fn test_wrap_uses_new_height() {
        let mut rain = seeded(800, 600);
        rain.resize(CanvasSize::new(800, 40));
        for _ in 0..5 {
            rain.tick();
            assert!(rain.columns().iter().all(|c| c.position < 40));
        }
    }

    #[test]
    fn test_zero_width_canvas() {
        let mut rain = seeded(0, 0);
        assert!(rain.columns().is_empty());
        rain.tick();
        assert!(rain.glyphs().is_empty());
    }
}
