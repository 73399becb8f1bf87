//! Drawing the rain into a terminal buffer.

use rain_core::CellMetrics;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::color::glyph_color;
use crate::glyph::GlyphPool;

/// Paints live glyphs over a black background.
///
/// Glyph positions are mapped from canvas units to cells with `cell`; glyphs
/// outside `area` are clipped and newer glyphs overwrite older ones.
#[derive(Debug, Clone, Copy)]
pub struct RainWidget<'a> {
    glyphs: &'a GlyphPool,
    cell: CellMetrics,
}

impl<'a> RainWidget<'a> {
    pub fn new(glyphs: &'a GlyphPool, cell: CellMetrics) -> Self {
        Self { glyphs, cell }
    }
}

impl Widget for RainWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::new().bg(Color::Black));

        for glyph in self.glyphs.iter() {
            let (cx, cy) = self.cell.cell_at(glyph.x, glyph.y);
            if cx >= u32::from(area.width) || cy >= u32::from(area.height) {
                continue;
            }
            let x = area.x + cx as u16;
            let y = area.y + cy as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(glyph.ch).set_fg(glyph_color(glyph.brightness));
            }
        }
    }
}
