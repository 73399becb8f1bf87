//! Core types shared by the rain crates.
//!
//! Geometry is expressed in abstract canvas units; [`CellMetrics`] maps those
//! units onto terminal cells.

mod canvas;
mod settings;
mod window;

pub use canvas::{CanvasSize, CellMetrics};
pub use settings::{AnimationSettings, DEFAULT_ALPHABET, Settings, WindowSettings};
pub use window::{Drag, WindowState};
