//! Color interpolation behavior.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::alpha::AlphaSource;
use crate::blend::ColorRgb;
use crate::targets::{ColorTarget, MaterialTarget};
use crate::wakeup::{Behavior, WakeupCondition, WakeupReason};

/// Behavior that blends between a start and end color with the driving
/// value and writes the result into the color channels selected by its
/// target material.
///
/// When the material denies read access to its color-target selector the
/// diffuse channel is written.
pub struct ColorInterpolator {
    alpha: Option<Rc<dyn AlphaSource>>,
    target: Option<Rc<RefCell<dyn MaterialTarget>>>,
    start_color: ColorRgb,
    end_color: ColorRgb,
    // A boolean dirty flag is not enough here: after the source completes,
    // this behavior may be woken exactly once more at the final value, so
    // the gate compares the values themselves. NaN means never computed.
    prev_alpha: f32,
    prev_target: Option<ColorTarget>,
}

impl ColorInterpolator {
    /// Trivial interpolator: start color black, end color white.
    pub fn new(
        alpha: Option<Rc<dyn AlphaSource>>,
        target: Option<Rc<RefCell<dyn MaterialTarget>>>,
    ) -> Self {
        Self::with_colors(alpha, target, ColorRgb::BLACK, ColorRgb::WHITE)
    }

    pub fn with_colors(
        alpha: Option<Rc<dyn AlphaSource>>,
        target: Option<Rc<RefCell<dyn MaterialTarget>>>,
        start_color: ColorRgb,
        end_color: ColorRgb,
    ) -> Self {
        Self {
            alpha,
            target,
            start_color,
            end_color,
            prev_alpha: f32::NAN,
            prev_target: None,
        }
    }

    pub fn start_color(&self) -> ColorRgb {
        self.start_color
    }

    pub fn set_start_color(&mut self, color: ColorRgb) {
        self.start_color = color;
        self.reset_gate();
    }

    pub fn end_color(&self) -> ColorRgb {
        self.end_color
    }

    pub fn set_end_color(&mut self, color: ColorRgb) {
        self.end_color = color;
        self.reset_gate();
    }

    pub fn alpha(&self) -> Option<&Rc<dyn AlphaSource>> {
        self.alpha.as_ref()
    }

    pub fn set_alpha(&mut self, alpha: Option<Rc<dyn AlphaSource>>) {
        self.alpha = alpha;
        self.reset_gate();
    }

    pub fn target(&self) -> Option<&Rc<RefCell<dyn MaterialTarget>>> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, target: Option<Rc<RefCell<dyn MaterialTarget>>>) {
        self.target = target;
        self.reset_gate();
    }

    /// Structural copy for scene-graph cloning: colors and the alpha
    /// handle are carried over, the target is left unresolved until the
    /// cloning pass calls [`ColorInterpolator::resolve_target`].
    pub fn duplicate(&self) -> Self {
        Self::with_colors(self.alpha.clone(), None, self.start_color, self.end_color)
    }

    /// Second phase of the clone protocol: point this interpolator at the
    /// corresponding node in the newly cloned subgraph.
    pub fn resolve_target(&mut self, target: Rc<RefCell<dyn MaterialTarget>>) {
        self.target = Some(target);
        self.reset_gate();
    }

    // Force recomputation on the next stimulus regardless of the driving
    // value.
    fn reset_gate(&mut self) {
        self.prev_alpha = f32::NAN;
        self.prev_target = None;
    }
}

impl Behavior for ColorInterpolator {
    fn process_stimulus(&mut self, reason: WakeupReason) -> WakeupCondition {
        let Some(alpha) = self.alpha.clone() else {
            return WakeupCondition::Passive;
        };
        let value = alpha.value();

        if let Some(target) = self.target.clone() {
            let mut material = target.borrow_mut();
            let color_target = material.color_target().unwrap_or(ColorTarget::Diffuse);

            // Bit-for-bit comparison; the NaN sentinel makes the first
            // stimulus always recompute.
            if value != self.prev_alpha || Some(color_target) != self.prev_target {
                let color = ColorRgb::lerp(self.start_color, self.end_color, value);
                for channel in color_target.channels() {
                    material.set_channel(*channel, color);
                }
                self.prev_alpha = value;
                self.prev_target = Some(color_target);
            } else {
                trace!(?reason, value, "color unchanged, skipping recompute");
            }
        }

        WakeupCondition::for_source(Some(alpha.as_ref()))
    }
}
