//! Driving scalar source contract.

/// Produces the driving scalar for "now" and reports playback status.
///
/// Implementations are owned by the surrounding engine; interpolators only
/// read through this trait once per delivered stimulus. Values are expected
/// in `[0, 1]`.
pub trait AlphaSource {
    /// The driving value at the current time.
    fn value(&self) -> f32;

    /// True once the source has run to completion and will not progress
    /// further.
    fn is_finished(&self) -> bool;

    /// True while the source is paused.
    fn is_paused(&self) -> bool;
}
