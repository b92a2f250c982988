//! Minimal world/screen mapping
//!
//! Interactive tools only need a uniform zoom and an offset to run their
//! screen-space pick tests and place markers; full camera projection lives
//! in the host application.

use glam::Vec2;

/// A thin view mapping between world and screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraView {
    /// Uniform world-to-screen scale factor
    pub zoom: f32,
    /// Screen-space offset of the world origin
    pub offset: Vec2,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl CameraView {
    /// Create a view with the given zoom and origin offset
    pub fn new(zoom: f32, offset: Vec2) -> Self {
        Self { zoom, offset }
    }

    /// Map a world-space position to screen space
    pub fn to_screen_pos(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.offset
    }

    /// Map a screen-space position back to world space
    pub fn to_world_pos(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom
    }

    /// Convert a world-space length to screen pixels
    pub fn to_screen_length(&self, length: f32) -> f32 {
        length * self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_roundtrip() {
        let camera = CameraView::new(2.5, Vec2::new(320.0, 240.0));
        let world = Vec2::new(-12.0, 8.0);
        let back = camera.to_world_pos(camera.to_screen_pos(world));
        assert_relative_eq!(back.x, world.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-5);
    }

    #[test]
    fn test_screen_length_scales_with_zoom() {
        let camera = CameraView::new(0.5, Vec2::ZERO);
        assert_relative_eq!(camera.to_screen_length(60.0), 30.0);
    }
}
