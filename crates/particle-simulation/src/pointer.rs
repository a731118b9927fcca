//! Pointer tracking for the mounted field

use glam::Vec2;
use particle_physics::{pointer_on_screen, POINTER_SENTINEL};

/// Last known cursor position, or the off-screen sentinel when the cursor
/// is outside the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    position: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::from_array(POINTER_SENTINEL),
        }
    }
}

impl PointerState {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Park the pointer far outside every particle's repulsion radius
    pub fn leave(&mut self) {
        *self = Self::default();
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn is_on_screen(&self) -> bool {
        pointer_on_screen(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_off_screen() {
        let pointer = PointerState::default();
        assert!(!pointer.is_on_screen());
        assert_eq!(pointer.position(), Vec2::new(-1000.0, -1000.0));
    }

    #[test]
    fn test_move_and_leave() {
        let mut pointer = PointerState::default();
        pointer.move_to(12.0, 340.0);
        assert!(pointer.is_on_screen());
        assert_eq!(pointer.position(), Vec2::new(12.0, 340.0));

        pointer.leave();
        assert!(!pointer.is_on_screen());
    }
}
