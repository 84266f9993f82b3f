//! Random source for particle spawning.
//!
//! Spawn edge, homing speed and disc size are all drawn from a
//! [`SpawnContext`]. Seed it explicitly to get reproducible trajectories:
//!
//! ```ignore
//! let mut field = ParticleField::new(ParticleConfig::default(), SpawnContext::seeded(7));
//! ```

use std::ops::Range;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::viewport::Viewport;

/// One of the four viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Seedable random source handed to the particle field.
#[derive(Debug, Clone)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Deterministic context: the same seed yields the same spawns.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Context seeded from the system clock, different each run.
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Seeded when `seed` is given, clock-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_time, Self::seeded)
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `range`. Empty or inverted ranges return `range.start`.
    #[inline]
    pub fn random_in(&mut self, range: Range<f32>) -> f32 {
        if range.start < range.end {
            self.rng.gen_range(range)
        } else {
            range.start
        }
    }

    /// Uniformly chosen viewport edge.
    pub fn random_edge(&mut self) -> Edge {
        Edge::ALL[self.rng.gen_range(0..Edge::ALL.len())]
    }

    /// Random point along a random viewport edge, pushed `offset` units outside.
    pub fn random_on_edge(&mut self, viewport: Viewport, offset: f32) -> Vec2 {
        let size = viewport.size();
        match self.random_edge() {
            Edge::Top => Vec2::new(self.random_in(0.0..size.x), -offset),
            Edge::Right => Vec2::new(size.x + offset, self.random_in(0.0..size.y)),
            Edge::Bottom => Vec2::new(self.random_in(0.0..size.x), size.y + offset),
            Edge::Left => Vec2::new(-offset, self.random_in(0.0..size.y)),
        }
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::from_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SpawnContext::seeded(9);
        let mut b = SpawnContext::seeded(9);
        for _ in 0..32 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn test_random_in_bounds() {
        let mut ctx = SpawnContext::seeded(1);
        for _ in 0..200 {
            let v = ctx.random_in(2.0..6.0);
            assert!((2.0..6.0).contains(&v));
        }
        assert_eq!(ctx.random_in(3.0..3.0), 3.0);
    }

    #[test]
    fn test_edge_spawn_lies_outside_viewport() {
        let vp = Viewport::new(800, 600);
        let mut ctx = SpawnContext::seeded(3);
        for _ in 0..200 {
            let p = ctx.random_on_edge(vp, 10.0);
            let on_top_or_bottom = (p.y == -10.0 || p.y == 610.0) && (0.0..800.0).contains(&p.x);
            let on_left_or_right = (p.x == -10.0 || p.x == 810.0) && (0.0..600.0).contains(&p.y);
            assert!(on_top_or_bottom || on_left_or_right, "{p:?}");
        }
    }

    #[test]
    fn test_edge_spawn_on_empty_viewport() {
        let mut ctx = SpawnContext::seeded(3);
        let p = ctx.random_on_edge(Viewport::new(0, 0), 10.0);
        assert!(p.x.abs() == 10.0 || p.y.abs() == 10.0 || p == Vec2::ZERO);
    }
}
