//! Tunable constants for a scene.
//!
//! Every constant the motion model and sampler recognise lives here, grouped
//! by concern. All sections deserialize with defaults, so a JSON file only
//! needs the values it changes:
//!
//! ```json
//! {
//!     "layout": { "wide_lines": ["Rust"], "wide_stride": 5 },
//!     "pointer": { "influence_radius": 80.0 },
//!     "seed": 7
//! }
//! ```

use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Divisors applied to the viewport when fitting the font size.
///
/// The font size is `min(width / width_divisor, height / height_divisor)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FontFit {
    pub width_divisor: f32,
    pub height_divisor: f32,
}

impl FontFit {
    pub fn font_size(&self, width: f32, height: f32) -> f32 {
        (width / self.width_divisor).min(height / self.height_divisor)
    }
}

/// Text layout and coverage sampling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Lines drawn on viewports at least `narrow_width_threshold` wide.
    pub wide_lines: Vec<String>,
    /// Lines drawn on narrow viewports (more, shorter lines).
    pub narrow_lines: Vec<String>,
    /// Viewport widths below this use the narrow layout.
    pub narrow_width_threshold: u32,
    pub wide_fit: FontFit,
    pub narrow_fit: FontFit,
    /// The widest line is shrunk to at most this fraction of the viewport width.
    pub max_width_fraction: f32,
    /// Line height as a multiple of font size.
    pub line_height: f32,
    /// Extra vertical room in the coverage mask, as a multiple of block height.
    pub vertical_padding: f32,
    /// Sampling grid stride in pixels on wide viewports.
    pub wide_stride: u32,
    /// Sampling grid stride in pixels on narrow viewports.
    pub narrow_stride: u32,
    /// Cells whose coverage alpha exceeds this become targets.
    pub alpha_threshold: u8,
    /// Thicken strokes for fonts without a bold face.
    pub bold: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_lines: vec!["Hello World".to_string()],
            narrow_lines: vec!["Hello".to_string(), "World".to_string()],
            narrow_width_threshold: 600,
            wide_fit: FontFit {
                width_divisor: 6.0,
                height_divisor: 6.0,
            },
            narrow_fit: FontFit {
                width_divisor: 4.0,
                height_divisor: 6.0,
            },
            max_width_fraction: 0.9,
            line_height: 1.2,
            vertical_padding: 1.2,
            wide_stride: 6,
            narrow_stride: 4,
            alpha_threshold: 128,
            bold: true,
        }
    }
}

impl LayoutConfig {
    /// Use the same lines for both wide and narrow viewports.
    pub fn with_lines<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.wide_lines = lines.into_iter().map(Into::into).collect();
        self.narrow_lines = self.wide_lines.clone();
        self
    }
}

/// Per-particle motion constants shared by the whole population.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// Velocity multiplier applied every settled step.
    pub friction: f32,
    /// Spring coefficient pulling a settled particle back to its target.
    pub return_force: f32,
    /// Pointer push strength at zero distance.
    pub push_gain: f32,
    /// Distance below which a seeking particle counts as arrived.
    pub arrival_threshold: f32,
    /// Homing speed range, units per step.
    pub speed_range: Range<f32>,
    /// Disc radius range.
    pub size_range: Range<f32>,
    /// Particles this far outside the viewport are frozen.
    pub out_of_bounds_margin: f32,
    /// Spawn distance beyond the viewport edge.
    pub spawn_edge_offset: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            friction: 0.85,
            return_force: 0.08,
            push_gain: 3.0,
            arrival_threshold: 5.0,
            speed_range: 2.0..6.0,
            size_range: 1.0..2.5,
            out_of_bounds_margin: 50.0,
            spawn_edge_offset: 10.0,
        }
    }
}

/// Pointer interaction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    /// Distance within which the pointer repels settled particles.
    pub influence_radius: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            influence_radius: 50.0,
        }
    }
}

/// Colours and frame clearing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    /// Background RGB, 0.0-1.0.
    pub background: [f32; 3],
    /// Disc fill RGBA, 0.0-1.0.
    pub fill: [f32; 4],
    /// Opacity of the background wash laid over the previous frame.
    /// 1.0 clears every frame; lower values leave motion trails.
    pub trail_fade: f32,
    pub window_title: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0],
            fill: [1.0, 1.0, 1.0, 1.0],
            trail_fade: 0.2,
            window_title: "glyph-swarm".to_string(),
        }
    }
}

/// Complete scene configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub layout: LayoutConfig,
    pub particles: ParticleConfig,
    pub pointer: PointerConfig,
    pub style: StyleConfig,
    /// Seed for spawn positions, speeds and sizes. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Multiply strides, influence radius and particle sizes by the window
    /// scale factor. Off by default: everything is in physical pixels.
    pub scale_by_dpi: bool,
}

impl SceneConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the motion model cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::Invalid { field, reason });

        let p = &self.particles;
        if !(p.friction > 0.0 && p.friction <= 1.0) {
            return invalid("particles.friction", "must be in (0, 1]");
        }
        if !(p.return_force >= 0.0 && p.return_force.is_finite()) {
            return invalid("particles.return_force", "must be finite and non-negative");
        }
        if !(p.push_gain >= 0.0 && p.push_gain.is_finite()) {
            return invalid("particles.push_gain", "must be finite and non-negative");
        }
        if !(p.arrival_threshold > 0.0) {
            return invalid("particles.arrival_threshold", "must be positive");
        }
        if !(p.speed_range.start > 0.0 && p.speed_range.start <= p.speed_range.end) {
            return invalid("particles.speed_range", "must be positive with start <= end");
        }
        if !(p.size_range.start > 0.0 && p.size_range.start <= p.size_range.end) {
            return invalid("particles.size_range", "must be positive with start <= end");
        }
        if !(p.out_of_bounds_margin >= 0.0) {
            return invalid("particles.out_of_bounds_margin", "must be non-negative");
        }
        if !(self.pointer.influence_radius >= 0.0 && self.pointer.influence_radius.is_finite()) {
            return invalid("pointer.influence_radius", "must be finite and non-negative");
        }

        let l = &self.layout;
        if l.wide_lines.is_empty() || l.narrow_lines.is_empty() {
            return invalid("layout.lines", "at least one line is required");
        }
        for fit in [l.wide_fit, l.narrow_fit] {
            if !(fit.width_divisor > 0.0 && fit.height_divisor > 0.0) {
                return invalid("layout.fit", "divisors must be positive");
            }
        }
        if !(l.max_width_fraction > 0.0 && l.max_width_fraction <= 1.0) {
            return invalid("layout.max_width_fraction", "must be in (0, 1]");
        }
        if !(l.line_height > 0.0 && l.vertical_padding >= 1.0) {
            return invalid(
                "layout.line_height",
                "line height must be positive and padding at least 1.0",
            );
        }
        if l.wide_stride == 0 || l.narrow_stride == 0 {
            return invalid("layout.stride", "must be at least 1");
        }

        if !(0.0..=1.0).contains(&self.style.trail_fade) {
            return invalid("style.trail_fade", "must be in [0, 1]");
        }
        Ok(())
    }

    /// Apply the window scale factor to pixel-sized constants.
    ///
    /// Returns `self` unchanged unless `scale_by_dpi` is set.
    pub fn scaled(&self, scale_factor: f64) -> Self {
        let mut scaled = self.clone();
        if !self.scale_by_dpi || !(scale_factor > 0.0) {
            return scaled;
        }
        let s = scale_factor as f32;
        let stride = |v: u32| ((v as f32 * s).round() as u32).max(1);
        scaled.layout.wide_stride = stride(self.layout.wide_stride);
        scaled.layout.narrow_stride = stride(self.layout.narrow_stride);
        scaled.pointer.influence_radius *= s;
        scaled.particles.size_range =
            self.particles.size_range.start * s..self.particles.size_range.end * s;
        scaled
    }
}
