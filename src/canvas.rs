//! Software renderer for headless snapshots.
//!
//! Paints frames the same way the GPU renderer does: wash the previous frame
//! with a translucent background, then fill every disc in one colour.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::config::StyleConfig;
use crate::particle::Disc;
use crate::scene::Scene;
use crate::viewport::Viewport;

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn blend(dst: u8, src: u8, alpha: f32) -> u8 {
    (dst as f32 + (src as f32 - dst as f32) * alpha).round() as u8
}

pub struct Canvas {
    image: RgbaImage,
    background: Rgba<u8>,
    fill: Rgba<u8>,
    fill_alpha: f32,
    trail_fade: f32,
}

impl Canvas {
    /// Canvas of `width × height` cleared to the background colour.
    pub fn new(width: u32, height: u32, style: &StyleConfig) -> Self {
        let [r, g, b] = style.background.map(to_u8);
        let background = Rgba([r, g, b, 255]);
        let [fr, fg, fb, _] = style.fill.map(to_u8);
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            background,
            fill: Rgba([fr, fg, fb, 255]),
            fill_alpha: style.fill[3].clamp(0.0, 1.0),
            trail_fade: style.trail_fade.clamp(0.0, 1.0),
        }
    }

    /// Wash the previous frame with the background at `trail_fade` opacity.
    pub fn fade(&mut self) {
        let alpha = self.trail_fade;
        let bg = self.background;
        for px in self.image.pixels_mut() {
            for c in 0..3 {
                px[c] = blend(px[c], bg[c], alpha);
            }
        }
    }

    /// Fill each disc; a pixel is inside when its center is within `size`.
    pub fn draw_discs(&mut self, discs: &[Disc]) {
        let (width, height) = self.image.dimensions();
        for disc in discs {
            let r = disc.size.max(0.0);
            let x0 = (disc.x - r).floor().max(0.0) as u32;
            let y0 = (disc.y - r).floor().max(0.0) as u32;
            let x1 = ((disc.x + r).ceil().max(0.0) as u32).min(width);
            let y1 = ((disc.y + r).ceil().max(0.0) as u32).min(height);

            for y in y0..y1 {
                for x in x0..x1 {
                    let dx = x as f32 + 0.5 - disc.x;
                    let dy = y as f32 + 0.5 - disc.y;
                    if dx * dx + dy * dy <= r * r {
                        let px = self.image.get_pixel_mut(x, y);
                        for c in 0..3 {
                            px[c] = blend(px[c], self.fill[c], self.fill_alpha);
                        }
                    }
                }
            }
        }
    }

    /// Fade, then draw: one full frame.
    pub fn paint(&mut self, discs: &[Disc]) {
        self.fade();
        self.draw_discs(discs);
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.image.save(path)
    }
}

/// Lay `scene` out for `viewport`, run `frames` ticks and paint each one.
///
/// The result is what the windowed driver would show after the same number
/// of refreshes with the pointer where `scene` has it.
pub fn snapshot(scene: &mut Scene, viewport: Viewport, frames: u32) -> Canvas {
    let mut canvas = Canvas::new(viewport.width, viewport.height, &scene.config().style);
    scene.resize(viewport);
    for _ in 0..frames {
        canvas.paint(scene.frame());
    }
    log::debug!(
        "snapshot {}x{} after {} frame(s): {}/{} settled",
        viewport.width,
        viewport.height,
        frames,
        scene.field().settled_count(),
        scene.field().len(),
    );
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> StyleConfig {
        StyleConfig::default()
    }

    #[test]
    fn test_starts_with_background() {
        let canvas = Canvas::new(4, 4, &style());
        assert!(canvas.image().pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_disc_is_filled() {
        let mut canvas = Canvas::new(20, 20, &style());
        canvas.draw_discs(&[Disc {
            x: 10.0,
            y: 10.0,
            size: 2.0,
        }]);
        assert_eq!(*canvas.image().get_pixel(10, 10), Rgba([255, 255, 255, 255]));
        assert_eq!(*canvas.image().get_pixel(15, 10), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_fade_leaves_trail() {
        let mut canvas = Canvas::new(20, 20, &style());
        let disc = Disc {
            x: 10.0,
            y: 10.0,
            size: 2.0,
        };
        canvas.paint(&[disc]);
        canvas.paint(&[]);
        let once = canvas.image().get_pixel(10, 10)[0];
        assert_eq!(once, 204);

        canvas.paint(&[]);
        assert!(canvas.image().get_pixel(10, 10)[0] < once);
    }

    #[test]
    fn test_snapshot_draws_settled_text() {
        let mut config = crate::config::SceneConfig::default();
        config.seed = Some(3);
        config.style.trail_fade = 1.0;
        let mut scene = Scene::new(config);
        let canvas = snapshot(&mut scene, Viewport::new(320, 200), 600);

        assert!(scene.field().all_settled());
        let lit = canvas.image().pixels().filter(|p| p[0] == 255).count();
        assert!(lit > 0);
        // Every lit pixel is near some target
        let targets: Vec<_> = scene.layout().points.clone();
        for (x, y, p) in canvas.image().enumerate_pixels() {
            if p[0] == 255 {
                let near = targets
                    .iter()
                    .any(|t| (t.x - x as f32).abs() < 4.0 && (t.y - y as f32).abs() < 4.0);
                assert!(near, "stray pixel at {x},{y}");
            }
        }
    }

    #[test]
    fn test_offscreen_discs_are_clipped() {
        let mut canvas = Canvas::new(10, 10, &style());
        canvas.draw_discs(&[
            Disc {
                x: -1000.0,
                y: -1000.0,
                size: 2.0,
            },
            Disc {
                x: 11.0,
                y: 5.0,
                size: 2.5,
            },
        ]);
        assert_eq!(*canvas.image().get_pixel(9, 5), Rgba([255, 255, 255, 255]));
    }
}
