//! Error types for interpolator configuration.

use serde::{Deserialize, Serialize};

/// Keyframe data handed to an interpolator was structurally invalid.
///
/// Raised synchronously at construction or at array replacement, never
/// from the per-frame recompute paths; those assume pre-validated data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum InvalidKeyframeData {
    /// Knot sequence shorter than two entries
    #[error("knot sequence needs at least 2 entries, got {count}")]
    TooFewKnots { count: usize },

    /// First knot is not 0.0
    #[error("first knot must be 0.0, got {value}")]
    FirstKnotNotZero { value: f32 },

    /// Last knot is not 1.0
    #[error("last knot must be 1.0, got {value}")]
    LastKnotNotOne { value: f32 },

    /// Consecutive knots out of order or equal
    #[error("knots must be strictly increasing: knot[{index}] = {value} is not below the next knot {next}")]
    NonIncreasingKnots { index: usize, value: f32, next: f32 },

    /// A keyframe array disagrees with the knot sequence length
    #[error("keyframe array length mismatch: {array} has {actual} entries, knots have {expected}")]
    LengthMismatch {
        array: String,
        expected: usize,
        actual: usize,
    },
}
