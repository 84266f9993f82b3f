//! A single particle and its motion model.
//!
//! Each particle is spawned just outside a random viewport edge and homes in
//! on its target at a constant speed. Once it is within the arrival threshold
//! it settles for good: from then on it is pushed away by a nearby pointer,
//! pulled back toward its target by a weak spring, and damped by friction.
//!
//! ```text
//!  Seeking ──(distance < arrival_threshold)──▶ Settled
//! ```
//!
//! There is no way back to `Seeking`; a new layout replaces the particle.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::config::ParticleConfig;
use crate::input::PointerState;
use crate::spawn::SpawnContext;
use crate::viewport::Viewport;

/// Where a particle is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Travelling toward the target at constant speed.
    Seeking,
    /// Arrived; reacts to the pointer and springs back home.
    Settled,
}

/// Draw primitive: a filled disc of radius `size` centered at `(x, y)`.
///
/// Laid out for direct upload as a GPU instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Disc {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    target: Vec2,
    phase: Phase,
    speed: f32,
    size: f32,
}

impl Particle {
    /// Spawn a particle on a random edge of `viewport`, headed for `target`.
    pub fn new(
        target: Vec2,
        viewport: Viewport,
        config: &ParticleConfig,
        rng: &mut SpawnContext,
    ) -> Self {
        Self {
            position: rng.random_on_edge(viewport, config.spawn_edge_offset),
            velocity: Vec2::ZERO,
            target,
            phase: Phase::Seeking,
            speed: rng.random_in(config.speed_range.clone()),
            size: rng.random_in(config.size_range.clone()),
        }
    }

    /// Re-spawn with a new target, drawing fresh speed and size.
    pub fn reset(
        &mut self,
        target: Vec2,
        viewport: Viewport,
        config: &ParticleConfig,
        rng: &mut SpawnContext,
    ) {
        *self = Self::new(target, viewport, config, rng);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    pub fn disc(&self) -> Disc {
        Disc {
            x: self.position.x,
            y: self.position.y,
            size: self.size,
        }
    }

    /// Advance one tick.
    ///
    /// Particles further than `out_of_bounds_margin` outside the viewport are
    /// frozen: neither position nor velocity changes until they are back in
    /// range.
    pub fn step(&mut self, pointer: &PointerState, viewport: Viewport, config: &ParticleConfig) {
        if !viewport.contains_with_margin(self.position, config.out_of_bounds_margin) {
            return;
        }

        match self.phase {
            Phase::Seeking => self.seek(config),
            Phase::Settled => {
                self.repel(pointer, config);
                self.spring_home(config);
                self.integrate(config);
            }
        }
    }

    fn seek(&mut self, config: &ParticleConfig) {
        let to_target = self.target - self.position;
        let distance = to_target.length();

        // Zero distance is also caught here, so the division below is safe
        if distance < config.arrival_threshold {
            self.phase = Phase::Settled;
        } else {
            self.position += to_target / distance * self.speed;
        }
    }

    fn repel(&mut self, pointer: &PointerState, config: &ParticleConfig) {
        let radius = pointer.influence_radius;
        let to_pointer = pointer.position - self.position;
        let distance = to_pointer.length();

        if distance >= radius {
            return;
        }

        // A pointer exactly on the particle pushes along angle 0 at full force
        let direction = if distance > 0.0 {
            to_pointer / distance
        } else {
            Vec2::X
        };
        let force = (radius - distance) / radius;
        self.velocity -= direction * force * config.push_gain;
    }

    fn spring_home(&mut self, config: &ParticleConfig) {
        self.velocity += (self.target - self.position) * config.return_force;
    }

    fn integrate(&mut self, config: &ParticleConfig) {
        self.velocity *= config.friction;
        self.position += self.velocity;
    }
}
