//! Glyph rasterizers.
//!
//! [`GlyphRasterizer`] is the seam between the sampler and whatever draws
//! glyphs. The built-in [`BitmapFont`] scales the classic 8×8 console face
//! and needs no font files, which keeps layouts identical on every machine.
//! TrueType fonts are available through `TtfFont` with the `ttf` feature.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use glam::Vec2;

use super::mask::CoverageMask;

/// Draws single lines of text into a [`CoverageMask`].
pub trait GlyphRasterizer {
    /// Width in pixels of `text` drawn at `size`.
    fn measure(&self, text: &str, size: f32) -> f32;

    /// Draw `text` with the middle of its em box at `center`.
    fn draw_line(&self, mask: &mut CoverageMask, text: &str, center: Vec2, size: f32);
}

impl<T: GlyphRasterizer + ?Sized> GlyphRasterizer for Box<T> {
    fn measure(&self, text: &str, size: f32) -> f32 {
        (**self).measure(text, size)
    }

    fn draw_line(&self, mask: &mut CoverageMask, text: &str, center: Vec2, size: f32) {
        (**self).draw_line(mask, text, center, size)
    }
}

/// Thickening applied to strokes of fonts without a bold face, as a
/// fraction of the font size.
pub(crate) const BOLD_FRACTION: f32 = 0.08;

const CELL: u32 = 8;
// Blank columns between glyphs and the width of a space, in cells
const GAP_COLUMNS: f32 = 1.0;
const SPACE_COLUMNS: f32 = 4.0;
// 2×2 supersampling offsets within a pixel
const SUBSAMPLES: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

#[derive(Debug, Clone, Copy)]
struct Glyph {
    rows: [u8; 8],
    first_col: u32,
    last_col: u32,
}

impl Glyph {
    fn lookup(ch: char) -> Option<Self> {
        let rows = BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| BASIC_FONTS.get('?'))?;
        let ink = rows.iter().fold(0u8, |acc, row| acc | row);
        if ink == 0 {
            return None;
        }
        Some(Self {
            rows,
            first_col: ink.trailing_zeros(),
            last_col: 7 - ink.leading_zeros(),
        })
    }

    fn columns(&self) -> u32 {
        self.last_col - self.first_col + 1
    }

    // Bit 0 of each row is the leftmost pixel
    fn lit(&self, x: f32, y: f32, scale: f32) -> bool {
        if x < 0.0 || y < 0.0 {
            return false;
        }
        let col = self.first_col + (x / scale) as u32;
        let row = (y / scale) as usize;
        row < CELL as usize && col <= self.last_col && self.rows[row] & (1 << col) != 0
    }
}

/// Built-in 8×8 bitmap face, scaled to the requested size.
///
/// Glyphs are packed proportionally (blank side columns trimmed) so text
/// reads like a sans-serif rather than a terminal.
#[derive(Debug, Clone, Copy)]
pub struct BitmapFont {
    bold: bool,
}

impl BitmapFont {
    pub fn new(bold: bool) -> Self {
        Self { bold }
    }

    fn scale(size: f32) -> f32 {
        size / CELL as f32
    }

    fn bold_width(&self, size: f32) -> f32 {
        if !self.bold {
            return 0.0;
        }
        // Never wider than one cell, so dilated strokes stay solid
        (size * BOLD_FRACTION).max(1.0).min(Self::scale(size).max(1.0))
    }

    /// Pen offset and glyph for every inked character, plus total width.
    fn layout(&self, text: &str, size: f32) -> (Vec<(f32, Glyph)>, f32) {
        let scale = Self::scale(size);
        let bold = self.bold_width(size);
        let mut placed = Vec::new();
        let mut pen = 0.0;

        for (i, ch) in text.chars().enumerate() {
            if i > 0 {
                pen += GAP_COLUMNS * scale;
            }
            match Glyph::lookup(ch) {
                Some(glyph) => {
                    placed.push((pen, glyph));
                    pen += glyph.columns() as f32 * scale + bold;
                }
                None => pen += SPACE_COLUMNS * scale,
            }
        }
        (placed, pen)
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GlyphRasterizer for BitmapFont {
    fn measure(&self, text: &str, size: f32) -> f32 {
        if !(size > 0.0) {
            return 0.0;
        }
        self.layout(text, size).1
    }

    fn draw_line(&self, mask: &mut CoverageMask, text: &str, center: Vec2, size: f32) {
        if !(size > 0.0) {
            return;
        }
        let scale = Self::scale(size);
        let bold = self.bold_width(size);
        let (placed, width) = self.layout(text, size);
        let left = center.x - width / 2.0;
        let top = center.y - size / 2.0;

        for (offset, glyph) in placed {
            let x0 = left + offset;
            let glyph_width = glyph.columns() as f32 * scale + bold;

            for py in top.floor() as i64..(top + size).ceil() as i64 {
                for px in x0.floor() as i64..(x0 + glyph_width).ceil() as i64 {
                    let hits = SUBSAMPLES
                        .iter()
                        .filter(|(sx, sy)| {
                            let lx = px as f32 + sx - x0;
                            let ly = py as f32 + sy - top;
                            glyph.lit(lx, ly, scale) || (bold > 0.0 && glyph.lit(lx - bold, ly, scale))
                        })
                        .count();
                    if hits > 0 {
                        let alpha = (hits * 255 / SUBSAMPLES.len()) as u8;
                        mask.cover(px, py, alpha);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_and_degenerate() {
        let font = BitmapFont::default();
        assert_eq!(font.measure("", 40.0), 0.0);
        assert_eq!(font.measure("Hello", 0.0), 0.0);
        assert_eq!(font.measure("Hello", -3.0), 0.0);
    }

    #[test]
    fn test_proportional_widths() {
        let font = BitmapFont::new(false);
        assert!(font.measure("i", 80.0) < font.measure("W", 80.0));
        assert!(font.measure("Hello World", 80.0) > font.measure("Hello", 80.0));
    }

    #[test]
    fn test_bold_widens() {
        let regular = BitmapFont::new(false);
        let bold = BitmapFont::new(true);
        assert!(bold.measure("Hi", 80.0) > regular.measure("Hi", 80.0));
    }

    #[test]
    fn test_measure_scales_linearly() {
        let font = BitmapFont::new(false);
        let small = font.measure("Hello", 40.0);
        let large = font.measure("Hello", 80.0);
        assert!((large - 2.0 * small).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_glyph_falls_back() {
        let font = BitmapFont::default();
        assert!(font.measure("\u{4e16}", 40.0) > 0.0);
    }

    #[test]
    fn test_draw_fills_inside_line_box() {
        let font = BitmapFont::default();
        let size = 64.0;
        let width = font.measure("Hi", size).ceil() as u32;
        let mut mask = CoverageMask::new(width, 100);
        font.draw_line(&mut mask, "Hi", Vec2::new(width as f32 / 2.0, 50.0), size);

        assert!(mask.covered_count(128) > 0);
        for y in 0..100 {
            let inside = (18..=82).contains(&y);
            if !inside {
                for x in 0..width {
                    assert_eq!(mask.alpha_at(x, y), 0, "ink outside line box at {x},{y}");
                }
            }
        }
    }
}
