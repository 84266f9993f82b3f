//! Pointer state shared between the window driver and the particle field.
//!
//! The driver writes the pointer on every cursor or touch move and parks it
//! at a far-away sentinel when the cursor leaves or the touch ends, so no
//! particle reacts to a stale location. The field only ever reads it.
//!
//! ```ignore
//! let mut pointer = PointerState::new(50.0);
//! pointer.set(400.0, 300.0);
//! field.step(&pointer);
//! pointer.clear();
//! ```

use glam::Vec2;
use winit::event::{TouchPhase, WindowEvent};

/// Coordinates used when no pointer is active, far outside any viewport.
pub const POINTER_SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Current pointer position and its repulsion radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    /// Distance within which settled particles are pushed away.
    pub influence_radius: f32,
    // Touch that currently owns the pointer, if any
    touch_id: Option<u64>,
}

impl PointerState {
    /// A pointer parked at the sentinel.
    pub fn new(influence_radius: f32) -> Self {
        Self {
            position: POINTER_SENTINEL,
            influence_radius,
            touch_id: None,
        }
    }

    /// Move the pointer to `(x, y)` in viewport pixels.
    ///
    /// Coordinates outside the viewport are valid (fast drags overshoot).
    pub fn set(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Park the pointer at the sentinel.
    pub fn clear(&mut self) {
        self.position = POINTER_SENTINEL;
        self.touch_id = None;
    }

    pub fn is_active(&self) -> bool {
        self.position != POINTER_SENTINEL
    }

    /// Apply a winit window event. Returns `true` if the pointer changed.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.clear();
                true
            }
            WindowEvent::Touch(touch) => match touch.phase {
                TouchPhase::Started | TouchPhase::Moved => {
                    // First finger down owns the pointer until it lifts
                    if self.touch_id.is_some_and(|id| id != touch.id) {
                        return false;
                    }
                    self.touch_id = Some(touch.id);
                    self.set(touch.location.x as f32, touch.location.y as f32);
                    true
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    if self.touch_id.is_some_and(|id| id != touch.id) {
                        return false;
                    }
                    self.clear();
                    true
                }
            },
            _ => false,
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(crate::config::PointerConfig::default().influence_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_parked() {
        let pointer = PointerState::new(50.0);
        assert_eq!(pointer.position, POINTER_SENTINEL);
        assert!(!pointer.is_active());
    }

    #[test]
    fn test_set_and_clear() {
        let mut pointer = PointerState::new(50.0);
        pointer.set(-20.0, 900.0);
        assert!(pointer.is_active());
        assert_eq!(pointer.position, Vec2::new(-20.0, 900.0));

        pointer.clear();
        assert_eq!(pointer.position, POINTER_SENTINEL);
        assert_eq!(pointer.influence_radius, 50.0);
    }
}
