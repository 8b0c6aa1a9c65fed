//! The seam between the slider and the environment that displays it.
//!
//! The slider never touches real nodes or clocks itself. It asks a [`Measure`]
//! implementation for view heights and scroll resets, and a [`Timers`]
//! implementation for the fallback completion timer.

mod event_loop;
mod frame;

pub use event_loop::CalloopTimers;
pub use frame::FrameTimers;

use std::time::{Duration, Instant};

use crate::error::SliderError;

/// Read access to the rendered views.
pub trait Measure {
    /// Rendered height of view `index` in pixels, or `None` when the view is a
    /// placeholder or otherwise has no measurable node.
    fn measure_height(&self, index: usize) -> Option<f32>;

    /// Scroll view `index` back to the top. No-op for unmounted views.
    fn scroll_to_top(&mut self, index: usize);
}

/// One-shot timers keyed by [`TimerToken`].
pub trait Timers {
    /// The host's notion of "now"; tweens and deadlines are measured against it.
    fn now(&self) -> Instant;

    /// Schedule a one-shot timer. When it fires the host must hand the token
    /// back to [`ViewSlider::handle_timer`](crate::ViewSlider::handle_timer).
    fn set_timeout(&mut self, delay: Duration) -> Result<TimerToken, SliderError>;

    /// Cancel a pending timer. Unknown or already-fired tokens are ignored.
    fn clear_timeout(&mut self, token: TimerToken);
}

/// Everything the slider needs from its environment.
pub trait Host: Measure + Timers {}

impl<T: Measure + Timers> Host for T {}

/// Identifies a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn new(raw: u64) -> Self {
        TimerToken(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The slider's single fallback-completion timer slot.
///
/// Scheduling replaces (and cancels) whatever was pending, so at most one
/// fallback is ever live.
#[derive(Debug, Default)]
pub(crate) struct FallbackTimer {
    token: Option<TimerToken>,
}

impl FallbackTimer {
    pub(crate) fn schedule(&mut self, timers: &mut impl Timers, delay: Duration) {
        self.cancel(timers);
        match timers.set_timeout(delay) {
            Ok(token) => self.token = Some(token),
            Err(err) => {
                log::warn!("{err}; completion now depends on the transition-end signal");
            }
        }
    }

    pub(crate) fn cancel(&mut self, timers: &mut impl Timers) {
        if let Some(token) = self.token.take() {
            timers.clear_timeout(token);
        }
    }

    /// Consume the slot if `token` is the live timer.
    pub(crate) fn take_if(&mut self, token: TimerToken) -> bool {
        if self.token == Some(token) {
            self.token = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.token.is_some()
    }
}
