//! Pointer input for on-canvas tools
//!
//! The host delivers at most one button transition per frame together with
//! the cursor's world-space position; tools never talk to the windowing
//! layer directly.

use glam::Vec2;

/// The button transition a cursor reports for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorPhase {
    /// No button activity this frame
    #[default]
    None,
    /// The primary button went down this frame
    Pressed,
    /// The primary button is held and the cursor moved
    Dragged,
    /// The primary button went up this frame
    Released,
}

/// Per-frame pointer state in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
    world_pos: Vec2,
    phase: CursorPhase,
}

impl Cursor {
    /// A hovering cursor with no button activity
    pub fn new(world_pos: Vec2) -> Self {
        Self {
            world_pos,
            phase: CursorPhase::None,
        }
    }

    /// A cursor whose primary button went down this frame
    pub fn pressed(world_pos: Vec2) -> Self {
        Self {
            world_pos,
            phase: CursorPhase::Pressed,
        }
    }

    /// A cursor dragging with the primary button held
    pub fn dragged(world_pos: Vec2) -> Self {
        Self {
            world_pos,
            phase: CursorPhase::Dragged,
        }
    }

    /// A cursor whose primary button went up this frame
    pub fn released(world_pos: Vec2) -> Self {
        Self {
            world_pos,
            phase: CursorPhase::Released,
        }
    }

    /// World-space cursor position
    pub fn world_pos(&self) -> Vec2 {
        self.world_pos
    }

    /// This frame's button transition
    pub fn phase(&self) -> CursorPhase {
        self.phase
    }
}
