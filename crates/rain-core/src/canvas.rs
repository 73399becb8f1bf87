//! Canvas geometry.

use ratatui::layout::{Rect, Size};

/// Size of the drawing surface in canvas units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of whole columns of `column_width` units that fit across.
    pub fn column_count(self, column_width: u32) -> usize {
        if column_width == 0 {
            return 0;
        }
        (self.width / column_width) as usize
    }
}

/// How many canvas units a single terminal cell covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u32,
    pub height: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
        }
    }
}

impl CellMetrics {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas covered by a terminal area, saturating at `u32::MAX`.
    pub fn canvas_for(self, area: Rect) -> CanvasSize {
        CanvasSize::new(
            u32::from(area.width).saturating_mul(self.width),
            u32::from(area.height).saturating_mul(self.height),
        )
    }

    /// Terminal cells needed to show a canvas, rounding up partial cells.
    pub fn cells_for(self, canvas: CanvasSize) -> Size {
        let cols = canvas.width.div_ceil(self.width.max(1));
        let rows = canvas.height.div_ceil(self.height.max(1));
        Size::new(
            cols.min(u32::from(u16::MAX)) as u16,
            rows.min(u32::from(u16::MAX)) as u16,
        )
    }

    /// Cell offset (column, row) containing the canvas point `(x, y)`.
    pub fn cell_at(self, x: u32, y: u32) -> (u32, u32) {
        (x / self.width.max(1), y / self.height.max(1))
    }
}
