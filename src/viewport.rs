//! Viewport dimensions passed explicitly to the sampler and the field.

use glam::Vec2;

/// Size of the render surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `point` lies inside the viewport grown by `margin` on every side.
    #[inline]
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        let size = self.size();
        point.x >= -margin
            && point.x <= size.x + margin
            && point.y >= -margin
            && point.y <= size.y + margin
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_edges_are_inclusive() {
        let vp = Viewport::new(800, 600);
        assert!(vp.contains_with_margin(Vec2::new(-50.0, 300.0), 50.0));
        assert!(vp.contains_with_margin(Vec2::new(850.0, 650.0), 50.0));
        assert!(!vp.contains_with_margin(Vec2::new(-50.1, 300.0), 50.0));
        assert!(!vp.contains_with_margin(Vec2::new(400.0, 650.5), 50.0));
    }
}
