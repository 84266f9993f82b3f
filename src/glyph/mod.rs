//! Target points from rasterized text.
//!
//! The sampler picks a line layout and font size for the viewport, draws the
//! text into an off-screen [`CoverageMask`], then walks the mask on a fixed
//! stride grid. Every grid cell whose coverage is above the alpha threshold
//! becomes a [`TargetPoint`], offset so the whole text block is centered in
//! the viewport.
//!
//! ```ignore
//! let sampler = GlyphSampler::new(LayoutConfig::default().with_lines(["Hi"]));
//! let layout = sampler.sample(Viewport::new(800, 600));
//! field.rebuild(&layout.points, Viewport::new(800, 600));
//! ```

mod font;
mod mask;
#[cfg(feature = "ttf")]
mod ttf;

pub use font::{BitmapFont, GlyphRasterizer};
pub use mask::CoverageMask;
#[cfg(feature = "ttf")]
pub use ttf::TtfFont;

use glam::Vec2;

use crate::config::{FontFit, LayoutConfig};
use crate::viewport::Viewport;

/// A home position for one particle, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPoint {
    pub x: f32,
    pub y: f32,
}

impl From<TargetPoint> for Vec2 {
    fn from(p: TargetPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Targets in row-major sampling order.
    pub points: Vec<TargetPoint>,
    pub font_size: f32,
    pub line_count: usize,
    pub mask_width: u32,
    pub mask_height: u32,
    pub stride: u32,
    /// Whether the narrow (multi-line) layout was chosen.
    pub narrow: bool,
}

/// Turns text into target points for a given viewport.
pub struct GlyphSampler {
    config: LayoutConfig,
    font: Box<dyn GlyphRasterizer>,
}

impl GlyphSampler {
    /// Sampler using the built-in bitmap font.
    pub fn new(config: LayoutConfig) -> Self {
        let font = BitmapFont::new(config.bold);
        Self::with_font(config, Box::new(font))
    }

    /// Sampler drawing with a custom rasterizer.
    pub fn with_font(config: LayoutConfig, font: Box<dyn GlyphRasterizer>) -> Self {
        Self { config, font }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Swap the layout parameters, keeping the font. Takes effect on the
    /// next [`sample`](Self::sample).
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Narrow viewports get more, shorter lines.
    pub fn is_narrow(&self, viewport: Viewport) -> bool {
        viewport.width < self.config.narrow_width_threshold
    }

    pub fn lines(&self, viewport: Viewport) -> &[String] {
        if self.is_narrow(viewport) {
            &self.config.narrow_lines
        } else {
            &self.config.wide_lines
        }
    }

    fn fit(&self, viewport: Viewport) -> FontFit {
        if self.is_narrow(viewport) {
            self.config.narrow_fit
        } else {
            self.config.wide_fit
        }
    }

    /// Font size for `viewport`: the fit divisors first, then shrunk if the
    /// widest line would exceed `max_width_fraction` of the viewport width.
    pub fn font_size(&self, viewport: Viewport) -> f32 {
        let size = viewport.size();
        let font_size = self.fit(viewport).font_size(size.x, size.y);
        if !(font_size > 0.0) {
            return 0.0;
        }

        let widest = self
            .lines(viewport)
            .iter()
            .map(|line| self.font.measure(line, font_size))
            .fold(0.0_f32, f32::max);
        let max_width = size.x * self.config.max_width_fraction;
        if widest > max_width {
            font_size * max_width / widest
        } else {
            font_size
        }
    }

    /// Sampling stride: denser on narrow viewports. Never below 1.
    pub fn stride(&self, viewport: Viewport) -> u32 {
        let stride = if self.is_narrow(viewport) {
            self.config.narrow_stride
        } else {
            self.config.wide_stride
        };
        stride.max(1)
    }

    /// Draw the text block for `viewport` into a fresh coverage mask.
    pub fn rasterize(&self, viewport: Viewport) -> CoverageMask {
        self.rasterize_at(viewport, self.font_size(viewport))
    }

    fn rasterize_at(&self, viewport: Viewport, font_size: f32) -> CoverageMask {
        CoverageMask::from_lines(
            &self.font,
            self.lines(viewport),
            font_size,
            font_size * self.config.line_height,
            self.config.vertical_padding,
        )
    }

    /// Run a full layout pass for `viewport`.
    pub fn sample(&self, viewport: Viewport) -> Layout {
        let font_size = self.font_size(viewport);
        let mask = self.rasterize_at(viewport, font_size);
        let stride = self.stride(viewport);
        let size = viewport.size();
        let offset = Vec2::new(
            (size.x - mask.width() as f32) / 2.0,
            (size.y - mask.height() as f32) / 2.0,
        );

        Layout {
            points: sample_mask(&mask, stride, self.config.alpha_threshold, offset),
            font_size,
            line_count: self.lines(viewport).len(),
            mask_width: mask.width(),
            mask_height: mask.height(),
            stride,
            narrow: self.is_narrow(viewport),
        }
    }
}

impl Default for GlyphSampler {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl std::fmt::Debug for GlyphSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSampler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Walk `mask` every `stride` pixels from the top-left corner and emit a
/// point, shifted by `offset`, for each cell with alpha above `threshold`.
pub fn sample_mask(mask: &CoverageMask, stride: u32, threshold: u8, offset: Vec2) -> Vec<TargetPoint> {
    let stride = stride.max(1) as usize;
    let mut points = Vec::new();
    for y in (0..mask.height()).step_by(stride) {
        for x in (0..mask.width()).step_by(stride) {
            if mask.alpha_at(x, y) > threshold {
                points.push(TargetPoint {
                    x: offset.x + x as f32,
                    y: offset.y + y as f32,
                });
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_layout_switches_at_threshold() {
        let sampler = GlyphSampler::default();
        assert!(sampler.is_narrow(Viewport::new(599, 800)));
        assert!(!sampler.is_narrow(Viewport::new(600, 800)));
        assert_eq!(sampler.lines(Viewport::new(400, 800)).len(), 2);
        assert_eq!(sampler.lines(Viewport::new(1280, 720)).len(), 1);
        assert_eq!(sampler.stride(Viewport::new(400, 800)), 4);
        assert_eq!(sampler.stride(Viewport::new(1280, 720)), 6);
    }

    #[test]
    fn test_font_size_fits_viewport() {
        let sampler = GlyphSampler::default();
        assert_eq!(sampler.font_size(Viewport::new(1200, 600)), 100.0);
        assert_eq!(sampler.font_size(Viewport::new(1200, 300)), 50.0);

        // Narrow "World" at 590 / 4 would overflow, so it shrinks to fit
        let vp = Viewport::new(590, 900);
        let size = sampler.font_size(vp);
        assert!(size < 590.0 / 4.0);
        let widest = sampler
            .lines(vp)
            .iter()
            .map(|line| sampler.font.measure(line, size))
            .fold(0.0_f32, f32::max);
        assert!(widest <= 590.0 * 0.9 + 1.0, "{widest}");
    }

    #[test]
    fn test_sample_measures_each_line_twice() {
        use std::cell::Cell;
        use std::rc::Rc;

        // Counts measure calls, drawing with the bitmap face
        struct Counting(Rc<Cell<usize>>, BitmapFont);

        impl GlyphRasterizer for Counting {
            fn measure(&self, text: &str, size: f32) -> f32 {
                self.0.set(self.0.get() + 1);
                self.1.measure(text, size)
            }

            fn draw_line(&self, mask: &mut CoverageMask, text: &str, center: Vec2, size: f32) {
                self.1.draw_line(mask, text, center, size)
            }
        }

        let calls = Rc::new(Cell::new(0));
        let font = Counting(calls.clone(), BitmapFont::default());
        let sampler = GlyphSampler::with_font(LayoutConfig::default(), Box::new(font));
        let vp = Viewport::new(400, 800);
        let lines = sampler.lines(vp).len();

        let layout = sampler.sample(vp);
        // Once to fit the font size, once to size the mask
        assert_eq!(calls.get(), 2 * lines);
        assert_eq!(layout.font_size, sampler.font_size(vp));
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let sampler = GlyphSampler::default();
        let a = sampler.sample(Viewport::new(1024, 768));
        let b = sampler.sample(Viewport::new(1024, 768));
        assert!(!a.points.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_points_are_centered_in_viewport() {
        let sampler = GlyphSampler::default();
        let vp = Viewport::new(1280, 720);
        let layout = sampler.sample(vp);
        let left = (1280.0 - layout.mask_width as f32) / 2.0;
        let top = (720.0 - layout.mask_height as f32) / 2.0;

        for p in &layout.points {
            assert!(p.x >= left && p.x < left + layout.mask_width as f32);
            assert!(p.y >= top && p.y < top + layout.mask_height as f32);
            // On the stride grid
            assert_eq!((p.x - left) as u32 % layout.stride, 0);
            assert_eq!((p.y - top) as u32 % layout.stride, 0);
        }

        let (min_x, max_x) = layout
            .points
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
        let middle = (min_x + max_x) / 2.0;
        assert!((middle - 640.0).abs() < 2.0 * layout.stride as f32 + layout.font_size * 0.1);
    }

    #[test]
    fn test_degenerate_viewports_yield_no_points() {
        let sampler = GlyphSampler::default();
        for vp in [Viewport::new(0, 0), Viewport::new(0, 600), Viewport::new(800, 0)] {
            let layout = sampler.sample(vp);
            assert!(layout.points.is_empty(), "{vp:?}");
        }
        // Tiny but non-empty: whatever the stride finds, without panicking
        let _ = sampler.sample(Viewport::new(3, 2));
    }

    #[test]
    fn test_blank_text_yields_no_points() {
        let sampler = GlyphSampler::new(LayoutConfig::default().with_lines(["   "]));
        assert!(sampler.sample(Viewport::new(800, 600)).points.is_empty());
    }

    #[test]
    fn test_sample_mask_respects_threshold_and_stride() {
        let mut mask = CoverageMask::new(10, 10);
        mask.cover(0, 0, 255);
        mask.cover(2, 0, 128);
        mask.cover(4, 4, 129);
        mask.cover(5, 5, 255);

        let points = sample_mask(&mask, 2, 128, Vec2::new(100.0, 50.0));
        assert_eq!(
            points,
            vec![
                TargetPoint { x: 100.0, y: 50.0 },
                TargetPoint { x: 104.0, y: 54.0 },
            ]
        );
        assert_eq!(sample_mask(&mask, 0, 128, Vec2::ZERO).len(), 3);
    }
}
