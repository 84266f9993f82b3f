//! TrueType/OpenType glyphs via `fontdue`.

use std::path::Path;

use glam::Vec2;

use super::font::{GlyphRasterizer, BOLD_FRACTION};
use super::mask::CoverageMask;
use crate::error::FontError;

/// A scalable font loaded from a `.ttf`/`.otf` file.
pub struct TtfFont {
    font: fontdue::Font,
    embolden: bool,
}

impl TtfFont {
    /// Parse font data. Set `embolden` for regular faces to thicken strokes.
    pub fn from_bytes(data: &[u8], embolden: bool) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self { font, embolden })
    }

    pub fn load(path: impl AsRef<Path>, embolden: bool) -> Result<Self, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded font {}", path.display());
        Self::from_bytes(&data, embolden)
    }

    fn bold_width(&self, size: f32) -> f32 {
        if self.embolden {
            (size * BOLD_FRACTION).max(1.0)
        } else {
            0.0
        }
    }
}

impl GlyphRasterizer for TtfFont {
    fn measure(&self, text: &str, size: f32) -> f32 {
        if !(size > 0.0) || text.is_empty() {
            return 0.0;
        }
        let advance: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum();
        advance + self.bold_width(size)
    }

    fn draw_line(&self, mask: &mut CoverageMask, text: &str, center: Vec2, size: f32) {
        if !(size > 0.0) {
            return;
        }
        let bold = self.bold_width(size);
        let width = self.measure(text, size);
        let (ascent, descent) = self
            .font
            .horizontal_line_metrics(size)
            .map_or((size * 0.8, -size * 0.2), |m| (m.ascent, m.descent));
        // Baseline that puts the middle of the em box at center.y
        let baseline = center.y + (ascent + descent) / 2.0;
        let mut pen = center.x - width / 2.0;

        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, size);
            let left = (pen + metrics.xmin as f32).round() as i64;
            let top = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i64;

            for (row, line) in bitmap.chunks(metrics.width.max(1)).enumerate() {
                for (col, &alpha) in line.iter().enumerate() {
                    if alpha == 0 {
                        continue;
                    }
                    let x = left + col as i64;
                    let y = top + row as i64;
                    mask.cover(x, y, alpha);
                    // Smear right by the bold width
                    for dx in 1..=bold.round() as i64 {
                        mask.cover(x + dx, y, alpha);
                    }
                }
            }
            pen += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let result = TtfFont::from_bytes(b"not a font", false);
        assert!(matches!(result, Err(FontError::Parse(_))));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join("glyph-swarm-no-such-font.ttf");
        match TtfFont::load(&path, true) {
            Err(FontError::Io { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("loaded a font that does not exist"),
        }
    }
}
