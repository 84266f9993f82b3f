//! A sampler, a particle field and the pointer, wired together.
//!
//! Both the windowed driver and the headless snapshot renderer drive a
//! [`Scene`]: resize it when the surface changes, feed it pointer updates,
//! and call [`Scene::frame`] once per display refresh.

use crate::config::SceneConfig;
use crate::field::ParticleField;
use crate::glyph::{GlyphRasterizer, GlyphSampler, Layout};
use crate::input::PointerState;
use crate::particle::Disc;
use crate::spawn::SpawnContext;
use crate::viewport::Viewport;

#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    sampler: GlyphSampler,
    field: ParticleField,
    pointer: PointerState,
    layout: Layout,
}

impl Scene {
    /// Scene drawing with the built-in bitmap font. Empty until the first
    /// [`resize`](Self::resize).
    pub fn new(config: SceneConfig) -> Self {
        let sampler = GlyphSampler::new(config.layout.clone());
        Self::with_sampler(config, sampler)
    }

    /// Scene drawing with a custom rasterizer.
    pub fn with_font(config: SceneConfig, font: Box<dyn GlyphRasterizer>) -> Self {
        let sampler = GlyphSampler::with_font(config.layout.clone(), font);
        Self::with_sampler(config, sampler)
    }

    fn with_sampler(config: SceneConfig, sampler: GlyphSampler) -> Self {
        let field = ParticleField::new(
            config.particles.clone(),
            SpawnContext::from_seed(config.seed),
        );
        let pointer = PointerState::new(config.pointer.influence_radius);
        Self {
            config,
            sampler,
            field,
            pointer,
            layout: Layout::default(),
        }
    }

    /// Apply a display scale factor to strides, pointer radius and particle
    /// sizes when `scale_by_dpi` is set. Always scales from the original
    /// configuration, so repeated calls do not compound. Takes effect on the
    /// next [`resize`](Self::resize).
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if !self.config.scale_by_dpi {
            return;
        }
        let scaled = self.config.scaled(scale_factor);
        self.sampler.set_config(scaled.layout);
        self.field.set_config(scaled.particles);
        self.pointer.influence_radius = scaled.pointer.influence_radius;
        log::debug!("scale factor {scale_factor:.2} applied");
    }

    /// Re-layout for a new surface size, replacing every particle.
    pub fn resize(&mut self, viewport: Viewport) -> &Layout {
        self.layout = self.field.relayout(&self.sampler, viewport);
        &self.layout
    }

    /// Advance one tick and return the discs to paint.
    pub fn frame(&mut self) -> &[Disc] {
        self.field.step(&self.pointer)
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// The most recent layout pass.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.field.viewport()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
