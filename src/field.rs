//! The particle population.
//!
//! A [`ParticleField`] owns one particle per target point. A layout pass
//! throws the whole population away and spawns a fresh one; there is no
//! attempt to carry particles over between layouts.
//!
//! # Usage
//!
//! ```ignore
//! let viewport = Viewport::new(800, 600);
//! let sampler = GlyphSampler::default();
//! let mut field = ParticleField::new(ParticleConfig::default(), SpawnContext::seeded(1));
//! field.relayout(&sampler, viewport);
//!
//! let mut pointer = PointerState::new(50.0);
//! loop {
//!     for disc in field.step(&pointer) {
//!         // paint disc
//!     }
//! }
//! ```

use crate::config::ParticleConfig;
use crate::glyph::{GlyphSampler, Layout, TargetPoint};
use crate::input::PointerState;
use crate::particle::{Disc, Particle};
use crate::spawn::SpawnContext;
use crate::viewport::Viewport;

#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    discs: Vec<Disc>,
    config: ParticleConfig,
    viewport: Viewport,
    rng: SpawnContext,
}

impl ParticleField {
    /// An empty field. Call [`rebuild`](Self::rebuild) or
    /// [`relayout`](Self::relayout) to populate it.
    pub fn new(config: ParticleConfig, rng: SpawnContext) -> Self {
        Self {
            particles: Vec::new(),
            discs: Vec::new(),
            config,
            viewport: Viewport::default(),
            rng,
        }
    }

    /// Replace the population with one freshly spawned particle per target.
    pub fn rebuild(&mut self, targets: &[TargetPoint], viewport: Viewport) {
        self.viewport = viewport;
        self.particles.clear();
        self.particles.extend(
            targets
                .iter()
                .map(|&t| Particle::new(t.into(), viewport, &self.config, &mut self.rng)),
        );
        self.discs.clear();
        self.discs.extend(self.particles.iter().map(Particle::disc));
    }

    /// Sample `sampler` for `viewport` and rebuild from the result.
    pub fn relayout(&mut self, sampler: &GlyphSampler, viewport: Viewport) -> Layout {
        let layout = sampler.sample(viewport);
        log::debug!(
            "relayout {}x{}: {} particles, font {:.1}px, {} line(s), stride {}",
            viewport.width,
            viewport.height,
            layout.points.len(),
            layout.font_size,
            layout.line_count,
            layout.stride,
        );
        self.rebuild(&layout.points, viewport);
        layout
    }

    /// Advance every particle one tick and return their discs in
    /// population order.
    pub fn step(&mut self, pointer: &PointerState) -> &[Disc] {
        let viewport = self.viewport;
        for (particle, disc) in self.particles.iter_mut().zip(self.discs.iter_mut()) {
            particle.step(pointer, viewport, &self.config);
            *disc = particle.disc();
        }
        &self.discs
    }

    /// Discs as of the last step or rebuild.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn settled_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_settled()).count()
    }

    pub fn all_settled(&self) -> bool {
        self.particles.iter().all(Particle::is_settled)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Replace the motion constants. Live particles pick them up on the
    /// next step; speed and size only change for particles spawned later.
    pub fn set_config(&mut self, config: ParticleConfig) {
        self.config = config;
    }
}
