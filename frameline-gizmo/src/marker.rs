//! Cross-hair marker geometry for the pivot tool
//!
//! The tool only decides where the marker sits and whether it is
//! highlighted; turning the geometry into draw calls is the host
//! renderer's job.

use glam::Vec2;

/// Screen-space radius of the cross-hair, also used as the pick radius
pub const CROSS_RADIUS: f32 = 30.0;

/// Screen-space inset where each cross tick ends near the center
pub const CROSS_TICK_INSET: f32 = 8.0;

/// Screen-space radius of the center dot
pub const DOT_RADIUS: f32 = 3.0;

/// RGBA color (4 floats, 0.0-1.0 range)
pub type Color = [f32; 4];

/// Marker colors for the two highlight states
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerStyle {
    /// Color while the cursor is away from the pivot
    pub idle: Color,
    /// Color while focused or mid-gesture
    pub focus: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            idle: [100.0 / 255.0, 100.0 / 255.0, 1.0, 1.0],
            focus: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// A screen-space line segment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// Segment start
    pub from: Vec2,
    /// Segment end
    pub to: Vec2,
}

/// Drawable cross-hair marker: a center dot and four ticks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    /// Screen-space center of the marker
    pub center: Vec2,
    /// Radius of the center dot
    pub dot_radius: f32,
    /// The four ticks, pointing left, right, up and down
    pub ticks: [LineSegment; 4],
    /// Resolved color for the current highlight state
    pub color: Color,
}

impl Marker {
    /// Build the marker geometry around a screen-space center
    pub fn build(center: Vec2, focused: bool, style: &MarkerStyle) -> Self {
        let tick = |direction: Vec2| LineSegment {
            from: center + direction * CROSS_RADIUS,
            to: center + direction * CROSS_TICK_INSET,
        };
        Self {
            center,
            dot_radius: DOT_RADIUS,
            ticks: [
                tick(Vec2::NEG_X),
                tick(Vec2::X),
                tick(Vec2::NEG_Y),
                tick(Vec2::Y),
            ],
            color: if focused { style.focus } else { style.idle },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ticks_span_inset_to_radius() {
        let center = Vec2::new(100.0, 50.0);
        let marker = Marker::build(center, false, &MarkerStyle::default());

        for segment in marker.ticks {
            assert_relative_eq!((segment.from - center).length(), CROSS_RADIUS);
            assert_relative_eq!((segment.to - center).length(), CROSS_TICK_INSET);
        }
        assert_eq!(marker.dot_radius, DOT_RADIUS);
    }

    #[test]
    fn test_focus_switches_color() {
        let style = MarkerStyle::default();
        let idle = Marker::build(Vec2::ZERO, false, &style);
        let focused = Marker::build(Vec2::ZERO, true, &style);
        assert_eq!(idle.color, style.idle);
        assert_eq!(focused.color, style.focus);
    }
}
