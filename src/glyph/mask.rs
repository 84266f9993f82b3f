//! Alpha-only bitmap that text is rasterized into.

use glam::Vec2;

use super::font::GlyphRasterizer;

/// Coverage mask: one alpha byte per pixel, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl CoverageMask {
    /// Fully transparent mask. Zero-sized masks are valid and empty.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![0; width as usize * height as usize],
        }
    }

    /// Rasterize `lines` centered, one per `line_height`, into a mask sized
    /// to the widest line and `lines × line_height × padding` tall.
    pub fn from_lines<F: GlyphRasterizer + ?Sized>(
        font: &F,
        lines: &[String],
        font_size: f32,
        line_height: f32,
        padding: f32,
    ) -> Self {
        if lines.is_empty() || !(font_size > 0.0) || !font_size.is_finite() {
            return Self::default();
        }

        let max_width = lines
            .iter()
            .map(|line| font.measure(line, font_size))
            .fold(0.0_f32, f32::max);
        let block_height = line_height * lines.len() as f32;

        let width = max_width.ceil() as u32;
        let height = (block_height * padding).ceil() as u32;
        let mut mask = Self::new(width, height);
        if mask.is_empty() {
            return mask;
        }

        let center_x = width as f32 / 2.0;
        let first_y = height as f32 / 2.0 - (lines.len() - 1) as f32 * line_height / 2.0;
        for (i, line) in lines.iter().enumerate() {
            let center = Vec2::new(center_x, first_y + i as f32 * line_height);
            font.draw_line(&mut mask, line, center, font_size);
        }
        mask
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// Alpha at `(x, y)`, 0 outside the mask.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    /// Raise the alpha at `(x, y)` to at least `alpha`. Out-of-range writes
    /// are ignored so glyphs may overhang the mask edges.
    #[inline]
    pub fn cover(&mut self, x: i64, y: i64, alpha: u8) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let px = &mut self.alpha[y as usize * self.width as usize + x as usize];
        *px = (*px).max(alpha);
    }

    /// Number of pixels whose alpha exceeds `threshold`.
    pub fn covered_count(&self, threshold: u8) -> usize {
        self.alpha.iter().filter(|&&a| a > threshold).count()
    }
}
