//! Wakeup scheduling bridge to the behavior dispatcher.

use serde::{Deserialize, Serialize};

use crate::alpha::AlphaSource;

/// Re-armed wakeup condition handed back to the dispatcher after each
/// stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WakeupCondition {
    /// Near-zero-cost next-frame recheck. Armed once the driving source
    /// reports it is finished or paused, or when no source is attached.
    Passive,
    /// Recheck on the driving source's normal cadence while it is still
    /// progressing.
    Active,
}

impl WakeupCondition {
    /// Transition rule evaluated after every recompute decision.
    pub fn for_source(source: Option<&dyn AlphaSource>) -> Self {
        match source {
            Some(alpha) if !alpha.is_finished() && !alpha.is_paused() => Self::Active,
            _ => Self::Passive,
        }
    }
}

/// Why the dispatcher delivered a stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WakeupReason {
    /// The passive next-frame condition fired.
    ElapsedFrame,
    /// The active source-cadence condition fired.
    SourceCadence,
}

/// Per-stimulus entry point, invoked synchronously by the dispatcher.
///
/// The dispatcher guarantees no two stimuli for the same behavior are ever
/// concurrent; implementations never block or perform I/O. The returned
/// condition is the re-armed wakeup the dispatcher schedules next.
pub trait Behavior {
    fn process_stimulus(&mut self, reason: WakeupReason) -> WakeupCondition;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlaggedAlpha {
        finished: bool,
        paused: bool,
    }

    impl AlphaSource for FlaggedAlpha {
        fn value(&self) -> f32 {
            0.0
        }
        fn is_finished(&self) -> bool {
            self.finished
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
    }

    #[test]
    fn rearm_rule() {
        assert_eq!(WakeupCondition::for_source(None), WakeupCondition::Passive);

        let progressing = FlaggedAlpha {
            finished: false,
            paused: false,
        };
        assert_eq!(
            WakeupCondition::for_source(Some(&progressing)),
            WakeupCondition::Active
        );

        let finished = FlaggedAlpha {
            finished: true,
            paused: false,
        };
        assert_eq!(
            WakeupCondition::for_source(Some(&finished)),
            WakeupCondition::Passive
        );

        let paused = FlaggedAlpha {
            finished: false,
            paused: true,
        };
        assert_eq!(
            WakeupCondition::for_source(Some(&paused)),
            WakeupCondition::Passive
        );
    }
}
