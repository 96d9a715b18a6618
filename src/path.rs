//! Rotation/position/scale path interpolation behavior.

use std::cell::RefCell;
use std::rc::Rc;

use nalgebra::{Isometry3, Matrix4, Quaternion, UnitQuaternion, Vector3};
use tracing::trace;

use crate::alpha::AlphaSource;
use crate::blend::{compose_transform, lerp_f32, lerp_vec3, nlerp};
use crate::error::InvalidKeyframeData;
use crate::knots::{KnotVector, PathSample};
use crate::targets::TransformTarget;
use crate::wakeup::{Behavior, WakeupCondition, WakeupReason};
use crate::Result;

/// Knot-aligned rotation, position, and uniform-scale keyframes.
///
/// All arrays share the knot sequence length; any mismatch is a
/// construction-time error, so a live interpolator can never hold
/// misaligned data.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframePath {
    knots: KnotVector,
    rotations: Vec<Quaternion<f32>>,
    positions: Vec<Vector3<f32>>,
    scales: Vec<f32>,
}

impl KeyframePath {
    pub fn new(
        knots: Vec<f32>,
        rotations: Vec<Quaternion<f32>>,
        positions: Vec<Vector3<f32>>,
        scales: Vec<f32>,
    ) -> Result<Self> {
        let expected = knots.len();
        if rotations.len() != expected {
            return Err(InvalidKeyframeData::LengthMismatch {
                array: "rotations".to_string(),
                expected,
                actual: rotations.len(),
            });
        }
        if positions.len() != expected {
            return Err(InvalidKeyframeData::LengthMismatch {
                array: "positions".to_string(),
                expected,
                actual: positions.len(),
            });
        }
        if scales.len() != expected {
            return Err(InvalidKeyframeData::LengthMismatch {
                array: "scales".to_string(),
                expected,
                actual: scales.len(),
            });
        }
        let knots = KnotVector::new(knots)?;
        Ok(Self {
            knots,
            rotations,
            positions,
            scales,
        })
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    /// Number of keyframes (always at least 2).
    pub fn keyframe_count(&self) -> usize {
        self.knots.len()
    }

    pub fn rotations(&self) -> &[Quaternion<f32>] {
        &self.rotations
    }

    pub fn positions(&self) -> &[Vector3<f32>] {
        &self.positions
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    pub fn rotation(&self, index: usize) -> Quaternion<f32> {
        self.rotations[index]
    }

    pub fn position(&self, index: usize) -> Vector3<f32> {
        self.positions[index]
    }

    pub fn scale(&self, index: usize) -> f32 {
        self.scales[index]
    }

    /// Replace the rotation at an existing index. Panics when the index is
    /// out of bounds; in-place edits cannot violate the length or knot
    /// invariants.
    pub fn set_rotation(&mut self, index: usize, rotation: Quaternion<f32>) {
        self.rotations[index] = rotation;
    }

    /// Replace the position at an existing index.
    pub fn set_position(&mut self, index: usize, position: Vector3<f32>) {
        self.positions[index] = position;
    }

    /// Replace the uniform scale at an existing index.
    pub fn set_scale(&mut self, index: usize, scale: f32) {
        self.scales[index] = scale;
    }

    /// Sample the path at a driving value in [0,1].
    ///
    /// Returns the blended rotation, position, and uniform scale for the
    /// bracketing segment. At the first knot the keyframe is returned
    /// verbatim instead of blended with itself.
    pub fn sample(&self, value: f32) -> (UnitQuaternion<f32>, Vector3<f32>, f32) {
        let sample = self.knots.locate(value);
        if sample.is_first_knot() {
            return (
                UnitQuaternion::new_normalize(self.rotations[0]),
                self.positions[0],
                self.scales[0],
            );
        }
        let PathSample { segment, fraction } = sample;
        let next = segment + 1;
        (
            nlerp(&self.rotations[segment], &self.rotations[next], fraction),
            lerp_vec3(&self.positions[segment], &self.positions[next], fraction),
            lerp_f32(self.scales[segment], self.scales[next], fraction),
        )
    }
}

/// Behavior that varies the rotation, translation, and uniform scale of
/// its target transform group by interpolating along a keyframe path,
/// expressed in the coordinate frame given by a fixed axis transform.
pub struct PathInterpolator {
    alpha: Option<Rc<dyn AlphaSource>>,
    target: Option<Rc<RefCell<dyn TransformTarget>>>,
    path: KeyframePath,
    axis: Isometry3<f32>,
    axis_matrix: Matrix4<f32>,
    axis_inverse: Matrix4<f32>,
    // Same value-change gate as the color interpolator; NaN means never
    // computed.
    prev_alpha: f32,
}

impl PathInterpolator {
    pub fn new(
        alpha: Option<Rc<dyn AlphaSource>>,
        target: Option<Rc<RefCell<dyn TransformTarget>>>,
        axis: Isometry3<f32>,
        path: KeyframePath,
    ) -> Self {
        let mut interpolator = Self {
            alpha,
            target,
            path,
            axis: Isometry3::identity(),
            axis_matrix: Matrix4::identity(),
            axis_inverse: Matrix4::identity(),
            prev_alpha: f32::NAN,
        };
        interpolator.set_axis(axis);
        interpolator
    }

    pub fn path(&self) -> &KeyframePath {
        &self.path
    }

    /// Replace the keyframe path. The replacement is validated at
    /// construction, so this cannot fail or corrupt a live interpolator.
    pub fn set_path(&mut self, path: KeyframePath) {
        self.path = path;
        self.reset_gate();
    }

    /// Edit one keyframe's rotation in place and force recomputation on
    /// the next stimulus.
    pub fn set_rotation(&mut self, index: usize, rotation: Quaternion<f32>) {
        self.path.set_rotation(index, rotation);
        self.reset_gate();
    }

    /// Edit one keyframe's position in place and force recomputation on
    /// the next stimulus.
    pub fn set_position(&mut self, index: usize, position: Vector3<f32>) {
        self.path.set_position(index, position);
        self.reset_gate();
    }

    /// Edit one keyframe's uniform scale in place and force recomputation
    /// on the next stimulus.
    pub fn set_scale(&mut self, index: usize, scale: f32) {
        self.path.set_scale(index, scale);
        self.reset_gate();
    }

    pub fn axis(&self) -> &Isometry3<f32> {
        &self.axis
    }

    /// Set the coordinate-axis transform. The homogeneous matrix and its
    /// inverse are computed once here and reused on every recompute.
    pub fn set_axis(&mut self, axis: Isometry3<f32>) {
        self.axis = axis;
        self.axis_matrix = axis.to_homogeneous();
        self.axis_inverse = axis.inverse().to_homogeneous();
        self.reset_gate();
    }

    pub fn alpha(&self) -> Option<&Rc<dyn AlphaSource>> {
        self.alpha.as_ref()
    }

    pub fn set_alpha(&mut self, alpha: Option<Rc<dyn AlphaSource>>) {
        self.alpha = alpha;
        self.reset_gate();
    }

    pub fn target(&self) -> Option<&Rc<RefCell<dyn TransformTarget>>> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, target: Option<Rc<RefCell<dyn TransformTarget>>>) {
        self.target = target;
        self.reset_gate();
    }

    /// Compose the transform for a given driving value, independent of the
    /// stimulus pipeline.
    pub fn compute_transform(&self, value: f32) -> Matrix4<f32> {
        let (rotation, position, scale) = self.path.sample(value);
        compose_transform(
            &rotation,
            &position,
            scale,
            &self.axis_matrix,
            &self.axis_inverse,
        )
    }

    /// Structural copy for scene-graph cloning: path, axis, and the alpha
    /// handle are carried over, the target is left unresolved until the
    /// cloning pass calls [`PathInterpolator::resolve_target`].
    pub fn duplicate(&self) -> Self {
        Self::new(self.alpha.clone(), None, self.axis, self.path.clone())
    }

    /// Second phase of the clone protocol: point this interpolator at the
    /// corresponding node in the newly cloned subgraph.
    pub fn resolve_target(&mut self, target: Rc<RefCell<dyn TransformTarget>>) {
        self.target = Some(target);
        self.reset_gate();
    }

    fn reset_gate(&mut self) {
        self.prev_alpha = f32::NAN;
    }
}

impl Behavior for PathInterpolator {
    fn process_stimulus(&mut self, reason: WakeupReason) -> WakeupCondition {
        let Some(alpha) = self.alpha.clone() else {
            return WakeupCondition::Passive;
        };
        let value = alpha.value();

        if let Some(target) = self.target.clone() {
            if value != self.prev_alpha {
                let transform = self.compute_transform(value);
                target.borrow_mut().set_transform(transform);
                self.prev_alpha = value;
            } else {
                trace!(?reason, value, "path unchanged, skipping recompute");
            }
        }

        WakeupCondition::for_source(Some(alpha.as_ref()))
    }
}
