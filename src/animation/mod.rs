//! Transition timing shared by the CSS output and the frame sampler.

mod animatable;
mod timing;
mod tween;

pub use animatable::Animatable;
pub use timing::TimingFunction;
pub use tween::{AdvanceResult, Tween};

use std::time::Duration;

/// Default slide duration in milliseconds
pub const DEFAULT_DURATION_MS: f32 = 500.0;

/// Configuration for how the viewport and container height animate
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// The duration as a [`Duration`], for scheduling timers.
    ///
    /// Negative or non-finite values collapse to zero.
    pub fn as_duration(&self) -> Duration {
        if self.duration_ms.is_finite() && self.duration_ms > 0.0 {
            Duration::from_secs_f64(f64::from(self.duration_ms) / 1000.0)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for Transition {
    /// 500ms with the CSS `ease` curve
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS, TimingFunction::Ease)
    }
}
