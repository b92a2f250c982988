//! Coordinate-space math for scene editing
//!
//! This module provides the world/local conversions the interactive tools
//! depend on, using glam for matrix computation. All transforms are 2D
//! affine matrices (`Mat3` acting on points via `transform_point2`).

use crate::{FramelineError, FramelineResult};
use glam::{Mat3, Vec2};

/// Lower bound of the valid local translation range, in scene units
pub const TRANSLATE_MIN: f32 = -20000.0;

/// Upper bound of the valid local translation range, in scene units
pub const TRANSLATE_MAX: f32 = 20000.0;

/// Determinants at or below this magnitude are treated as singular
const DETERMINANT_EPSILON: f32 = 1e-6;

/// Invert a world matrix, failing explicitly on a degenerate transform
///
/// # Arguments
/// * `world` - The accumulated world matrix of a node
///
/// # Returns
/// * `Ok(Mat3)` - The inverse matrix
/// * `Err(FramelineError)` - If the matrix is singular (e.g. zero scale)
pub fn invert_world(world: Mat3) -> FramelineResult<Mat3> {
    let det = world.determinant();
    if det.abs() <= DETERMINANT_EPSILON {
        return Err(FramelineError::non_invertible(det));
    }
    Ok(world.inverse())
}

/// Transform a world-space point into the local space of `world`
///
/// Fails when the matrix cannot be inverted; callers performing per-frame
/// edits must skip the frame on failure instead of applying a stale value.
pub fn world_to_local(world: Mat3, point: Vec2) -> FramelineResult<Vec2> {
    Ok(invert_world(world)?.transform_point2(point))
}

/// Clamp a local translation component-wise into the valid range
///
/// Idempotent: `clamp_translation(clamp_translation(v)) == clamp_translation(v)`.
pub fn clamp_translation(value: Vec2) -> Vec2 {
    value.clamp(Vec2::splat(TRANSLATE_MIN), Vec2::splat(TRANSLATE_MAX))
}

/// A node's editable local transform: translation, rotation and scale
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrtTransform {
    /// Local translation
    pub translate: Vec2,
    /// Local rotation, in radians
    pub rotate: f32,
    /// Local scale
    pub scale: Vec2,
}

impl Default for SrtTransform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotate: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl SrtTransform {
    /// Compose the local matrix: translate, then rotate, then scale
    ///
    /// The pivot offset is deliberately not folded in here; pivot-relative
    /// positions are obtained by transforming the pivot point itself.
    pub fn local_matrix(&self) -> Mat3 {
        Mat3::from_translation(self.translate)
            * Mat3::from_angle(self.rotate)
            * Mat3::from_scale(self.scale)
    }
}

/// The accumulated per-frame matrices a node carries while being edited
///
/// `parent_world` is the ancestor chain's world matrix; `local_sr` is the
/// node's own composed transform. The product is the space interactive tools
/// convert pointer positions into and out of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posture {
    /// World matrix of the parent chain
    pub parent_world: Mat3,
    /// The node's own local transform matrix
    pub local_sr: Mat3,
}

impl Default for Posture {
    fn default() -> Self {
        Self {
            parent_world: Mat3::IDENTITY,
            local_sr: Mat3::IDENTITY,
        }
    }
}

impl Posture {
    /// The node's full world matrix
    pub fn world(&self) -> Mat3 {
        self.parent_world * self.local_sr
    }

    /// World-space position of a local-space pivot point
    pub fn pivot_world_position(&self, pivot: Vec2) -> Vec2 {
        self.world().transform_point2(pivot)
    }

    /// Recompute the local matrix from a node's current transform state
    pub fn refresh(&mut self, transform: &SrtTransform) {
        self.local_sr = transform.local_matrix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_world_to_local_roundtrip() {
        let world = Mat3::from_translation(Vec2::new(5.0, -3.0))
            * Mat3::from_angle(std::f32::consts::FRAC_PI_4)
            * Mat3::from_scale(Vec2::new(2.0, 0.5));
        let point = Vec2::new(7.0, 11.0);

        let local = world_to_local(world, world.transform_point2(point)).unwrap();
        assert_relative_eq!(local.x, point.x, epsilon = 1e-4);
        assert_relative_eq!(local.y, point.y, epsilon = 1e-4);
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let world = Mat3::from_scale(Vec2::new(0.0, 1.0));
        assert!(matches!(
            world_to_local(world, Vec2::ONE),
            Err(FramelineError::NonInvertibleTransform { .. })
        ));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for v in [
            Vec2::new(0.0, 0.0),
            Vec2::new(TRANSLATE_MAX + 1.0, TRANSLATE_MIN - 1.0),
            Vec2::new(1e9, -1e9),
            Vec2::new(123.5, -987.25),
        ] {
            let once = clamp_translation(v);
            assert_eq!(clamp_translation(once), once);
            assert!(once.x >= TRANSLATE_MIN && once.x <= TRANSLATE_MAX);
            assert!(once.y >= TRANSLATE_MIN && once.y <= TRANSLATE_MAX);
        }
    }

    #[test]
    fn test_pivot_world_position_follows_parent() {
        let mut posture = Posture::default();
        posture.parent_world = Mat3::from_translation(Vec2::new(100.0, 0.0));
        posture.refresh(&SrtTransform {
            translate: Vec2::new(10.0, 0.0),
            rotate: 0.0,
            scale: Vec2::splat(2.0),
        });

        let world_pos = posture.pivot_world_position(Vec2::new(3.0, 4.0));
        assert_relative_eq!(world_pos.x, 100.0 + 10.0 + 6.0, epsilon = 1e-5);
        assert_relative_eq!(world_pos.y, 8.0, epsilon = 1e-5);
    }
}
