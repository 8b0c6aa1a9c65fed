use std::time::Instant;

use super::{Animatable, Transition};

/// Result of advancing a tween, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (tween not running or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Time-driven interpolation between two values.
///
/// Time is always passed in by the caller so that a host's frame clock (or a
/// virtual clock in tests) decides how far the tween has progressed.
#[derive(Clone, Debug)]
pub struct Tween<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value being animated towards
    target: T,
    /// Value when the tween started
    start: T,
    /// Progress from 0.0 to 1.0
    progress: f32,
    /// Time when the tween started
    started_at: Instant,
    transition: Transition,
}

impl<T: Animatable> Tween<T> {
    /// A settled tween resting at `value`.
    pub fn new(value: T, transition: Transition, now: Instant) -> Self {
        Self {
            current: value.clone(),
            target: value.clone(),
            start: value,
            progress: 1.0, // Start completed
            started_at: now,
            transition,
        }
    }

    /// Start animating from the current value to a new target
    pub fn animate_to(&mut self, new_target: T, now: Instant) {
        // Don't restart if we're already animating to this target
        if new_target == self.target {
            return;
        }

        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.started_at = now;
    }

    /// Advance to `now` and return whether the value changed
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<T> {
        if self.progress >= 1.0 {
            return AdvanceResult::NoChange;
        }

        let elapsed_ms = now.saturating_duration_since(self.started_at).as_secs_f32() * 1000.0;
        let t = if self.transition.duration_ms > 0.0 {
            (elapsed_ms / self.transition.duration_ms).min(1.0)
        } else {
            1.0
        };
        self.progress = t;

        let new_value = if t >= 1.0 {
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Jump to `value` without animating
    pub fn set_immediate(&mut self, value: T, now: Instant) {
        self.current = value.clone();
        self.target = value.clone();
        self.start = value;
        self.progress = 1.0;
        self.started_at = now;
    }

    /// Replace the transition used by future animations
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    /// Check if the tween is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get current value
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }
}
