//! Contracts for the externally owned nodes an interpolator writes to.
//!
//! The scene graph owns the material and transform nodes; interpolators
//! hold non-owning handles and assume exclusive write access to the
//! specific sub-attribute they target for the duration of a stimulus.

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

use crate::blend::ColorRgb;

/// Which material color attribute a color interpolator drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTarget {
    Ambient,
    Diffuse,
    Emissive,
    Specular,
    AmbientAndDiffuse,
}

/// A single writable material color channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorChannel {
    Ambient,
    Diffuse,
    Emissive,
    Specular,
}

impl ColorTarget {
    /// The channels written for this target. `AmbientAndDiffuse` writes
    /// both the ambient and diffuse channels.
    pub fn channels(self) -> &'static [ColorChannel] {
        match self {
            Self::Ambient => &[ColorChannel::Ambient],
            Self::Diffuse => &[ColorChannel::Diffuse],
            Self::Emissive => &[ColorChannel::Emissive],
            Self::Specular => &[ColorChannel::Specular],
            Self::AmbientAndDiffuse => &[ColorChannel::Ambient, ColorChannel::Diffuse],
        }
    }
}

/// Material node contract.
pub trait MaterialTarget {
    /// The configured color target, or `None` when read access to the
    /// selector is denied. Callers fall back to [`ColorTarget::Diffuse`].
    fn color_target(&self) -> Option<ColorTarget>;

    /// Write one color channel.
    fn set_channel(&mut self, channel: ColorChannel, color: ColorRgb);
}

/// Transform group contract: receives the composed local transform.
pub trait TransformTarget {
    fn set_transform(&mut self, transform: Matrix4<f32>);
}
