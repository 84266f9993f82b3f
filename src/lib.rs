//! # glyph-swarm
//!
//! Particles that swarm into the shape of text, scatter from the pointer and
//! drift back into formation.
//!
//! Text is rasterized into an off-screen coverage mask and sampled on a
//! coarse grid; every covered cell becomes the home of one particle. Each
//! particle spawns just outside a random edge of the viewport, flies straight
//! home, then settles. Settled particles are pushed away by a nearby pointer
//! and pulled back by a damped spring.
//!
//! ## Quick Start
//!
//! ```ignore
//! use glyph_swarm::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     let config = SceneConfig {
//!         layout: LayoutConfig::default().with_lines(["Hello World"]),
//!         ..Default::default()
//!     };
//!     app::run(Scene::new(config))
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Sampling
//!
//! [`GlyphSampler`] picks a line layout and font size for the viewport
//! (narrow viewports get more, shorter lines and a finer sampling stride)
//! and returns a [`Layout`] of [`TargetPoint`]s centered in the viewport.
//! Glyphs come from a [`GlyphRasterizer`]: the built-in 8×8 [`BitmapFont`],
//! or a TrueType font with the `ttf` feature.
//!
//! ### Particles
//!
//! A [`Particle`] is `Seeking` until it comes within the arrival threshold
//! of its target, then `Settled` for the rest of its life. Particles that
//! leave the viewport by more than a margin freeze in place.
//!
//! ### The field
//!
//! [`ParticleField`] owns one particle per target. A resize throws the whole
//! population away and spawns a fresh one. [`ParticleField::step`] advances
//! every particle once and returns the [`Disc`]s to paint.
//!
//! ## Driving a scene
//!
//! [`Scene`] bundles a sampler, a field and the pointer. The crate ships two
//! drivers for it:
//!
//! - [`app::run`] opens a winit window and draws with wgpu.
//! - [`canvas::snapshot`] runs headless and paints into an `RgbaImage`.
//!
//! Nothing in the core schedules itself; the driver calls
//! [`Scene::frame`] once per display refresh.
//!
//! ## Determinism
//!
//! Set [`SceneConfig::seed`] (or build a field with
//! [`SpawnContext::seeded`]) to get the same spawn edges, speeds and sizes on
//! every run. Sampling is always deterministic.

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod field;
pub mod glyph;
pub mod gpu;
pub mod input;
pub mod particle;
pub mod scene;
pub mod spawn;
pub mod viewport;

pub use bytemuck;
pub use canvas::Canvas;
pub use config::{FontFit, LayoutConfig, ParticleConfig, PointerConfig, SceneConfig, StyleConfig};
pub use error::{ConfigError, FontError, GpuError, RunError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use glyph::{BitmapFont, CoverageMask, GlyphRasterizer, GlyphSampler, Layout, TargetPoint};
#[cfg(feature = "ttf")]
pub use glyph::TtfFont;
pub use input::{PointerState, POINTER_SENTINEL};
pub use particle::{Disc, Particle, Phase};
pub use scene::Scene;
pub use spawn::{Edge, SpawnContext};
pub use viewport::Viewport;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use glyph_swarm::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app;
    pub use crate::canvas::{snapshot, Canvas};
    pub use crate::config::{LayoutConfig, ParticleConfig, PointerConfig, SceneConfig, StyleConfig};
    pub use crate::error::RunError;
    pub use crate::field::ParticleField;
    pub use crate::glyph::{GlyphRasterizer, GlyphSampler, Layout, TargetPoint};
    pub use crate::input::PointerState;
    pub use crate::particle::{Disc, Phase};
    pub use crate::scene::Scene;
    pub use crate::spawn::SpawnContext;
    pub use crate::viewport::Viewport;
    pub use crate::Vec2;
}
