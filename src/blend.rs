//! Blending primitives:
//! - quaternion NLERP with shortest-arc correction
//! - component-wise color and vector lerp
//! - rotation/position/scale transform composition between an axis pair

use nalgebra::{Matrix4, Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: &Vector3<f32>, b: &Vector3<f32>, t: f32) -> Vector3<f32> {
    a + (b - a) * t
}

/// Quaternion NLERP with shortest-arc correction.
///
/// If the dot product is negative, negate the second quaternion before the
/// component-wise lerp so the blend never takes the long way around the
/// rotation sphere. The result is renormalized. This is deliberately the
/// linear blend, not slerp: downstream output depends on the linear
/// formula's exact error characteristics.
#[inline]
pub fn nlerp(a: &Quaternion<f32>, b: &Quaternion<f32>, t: f32) -> UnitQuaternion<f32> {
    let b = if a.dot(b) < 0.0 { -*b } else { *b };
    UnitQuaternion::new_normalize(a.lerp(&b, t))
}

/// RGB color triple in the 0..1 range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Component-wise `(1-t)*start + t*end`. Colors are not unit
    /// constrained, so no renormalization.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self {
            r: (1.0 - t) * start.r + t * end.r,
            g: (1.0 - t) * start.g + t * end.g,
            b: (1.0 - t) * start.b + t * end.b,
        }
    }
}

/// Assemble rotation, position, and uniform scale into an affine matrix,
/// re-expressed in the configured coordinate frame.
///
/// Builds `M = R * S`, overwrites the translation column with `position`,
/// and returns `axis * M * axis_inverse`. The axis pair is computed once
/// at configuration time and reused unchanged every frame.
pub fn compose_transform(
    rotation: &UnitQuaternion<f32>,
    position: &Vector3<f32>,
    scale: f32,
    axis: &Matrix4<f32>,
    axis_inverse: &Matrix4<f32>,
) -> Matrix4<f32> {
    let mut local = rotation.to_homogeneous() * Matrix4::new_scaling(scale);
    local[(0, 3)] = position.x;
    local[(1, 3)] = position.y;
    local[(2, 3)] = position.z;
    axis * local * axis_inverse
}
