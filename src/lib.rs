//! Scene Interpolators
//!
//! Per-frame interpolator behaviors for a retained-mode scene graph. Each
//! behavior is woken by an external dispatcher, reads a driving scalar
//! from an [`AlphaSource`], decides through value-change detection whether
//! any recomputation is needed, blends its configured keyframes, writes
//! the result into its target node, and hands a re-armed
//! [`WakeupCondition`] back to the dispatcher.
//!
//! Two behaviors are provided: [`ColorInterpolator`] blends a start/end
//! color pair into a material's selected color channels, and
//! [`PathInterpolator`] blends rotation, position, and uniform scale
//! across a validated keyframe path into a transform group.

pub mod alpha;
pub mod blend;
pub mod color;
pub mod error;
pub mod knots;
pub mod path;
pub mod targets;
pub mod wakeup;

// Re-export common types for convenience
pub use alpha::AlphaSource;
pub use blend::{compose_transform, nlerp, ColorRgb};
pub use color::ColorInterpolator;
pub use error::InvalidKeyframeData;
pub use knots::{KnotVector, PathSample};
pub use path::{KeyframePath, PathInterpolator};
pub use targets::{ColorChannel, ColorTarget, MaterialTarget, TransformTarget};
pub use wakeup::{Behavior, WakeupCondition, WakeupReason};

/// Interpolator result type.
pub type Result<T> = core::result::Result<T, InvalidKeyframeData>;
