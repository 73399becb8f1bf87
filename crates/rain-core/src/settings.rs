//! User-tunable settings.

use std::{ops::RangeInclusive, time::Duration};

use serde::{Deserialize, Serialize};

use crate::canvas::{CanvasSize, CellMetrics};

/// Characters sampled for new glyphs.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()";

/// Top-level settings, one section per concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub animation: AnimationSettings,
    pub window: WindowSettings,
}

/// Parameters of the falling-glyph animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Milliseconds between animation ticks.
    pub tick_ms: u64,
    /// Horizontal distance between columns, in canvas units.
    pub column_width: u32,
    /// Slowest column fall speed, in canvas units per tick.
    pub min_speed: u32,
    /// Fastest column fall speed, in canvas units per tick.
    pub max_speed: u32,
    /// Brightness a glyph starts with.
    pub spawn_brightness: u8,
    /// Brightness lost by every glyph on every tick.
    pub fade_step: u8,
    /// Characters glyphs are drawn from.
    pub alphabet: String,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            tick_ms: 40,
            column_width: 20,
            min_speed: 15,
            max_speed: 25,
            spawn_brightness: 216,
            fade_step: 8,
            alphabet: DEFAULT_ALPHABET.to_string(),
        }
    }
}

impl AnimationSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn speed_range(&self) -> RangeInclusive<u32> {
        self.min_speed..=self.max_speed
    }
}

/// Initial window geometry and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Canvas width in canvas units.
    pub width: u32,
    /// Canvas height in canvas units.
    pub height: u32,
    /// Canvas units covered by one terminal cell horizontally.
    pub cell_width: u32,
    /// Canvas units covered by one terminal cell vertically.
    pub cell_height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        let cell = CellMetrics::default();
        Self {
            title: "Matrix Effect".to_string(),
            width: 800,
            height: 600,
            cell_width: cell.width,
            cell_height: cell.height,
            fullscreen: false,
        }
    }
}

impl WindowSettings {
    pub fn cell(&self) -> CellMetrics {
        CellMetrics::new(self.cell_width, self.cell_height)
    }

    pub fn canvas(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}
