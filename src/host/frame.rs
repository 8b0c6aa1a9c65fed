use std::time::{Duration, Instant};

use crate::error::SliderError;

use super::{TimerToken, Timers};

/// Timers for hosts that run a frame loop.
///
/// Keeps a virtual clock that only moves when the host calls
/// [`advance`](FrameTimers::advance) or [`advance_to`](FrameTimers::advance_to);
/// both return the tokens that came due, in deadline order.
#[derive(Debug)]
pub struct FrameTimers {
    now: Instant,
    next_token: u64,
    pending: Vec<(TimerToken, Instant)>,
}

impl FrameTimers {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            now,
            next_token: 1,
            pending: Vec::new(),
        }
    }

    /// Move the clock forward by `by`
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.advance_to(self.now + by)
    }

    /// Move the clock to `now` (never backwards)
    pub fn advance_to(&mut self, now: Instant) -> Vec<TimerToken> {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;

        let mut due: Vec<(TimerToken, Instant)> = Vec::new();
        self.pending.retain(|&(token, deadline)| {
            if deadline <= now {
                due.push((token, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(token, deadline)| (deadline, token));
        due.into_iter().map(|(token, _)| token).collect()
    }

    /// Number of timers that have not fired or been cleared
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Earliest pending deadline, for hosts that sleep between frames
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }
}

impl Default for FrameTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl Timers for FrameTimers {
    fn now(&self) -> Instant {
        self.now
    }

    fn set_timeout(&mut self, delay: Duration) -> Result<TimerToken, SliderError> {
        let token = TimerToken::new(self.next_token);
        self.next_token += 1;
        self.pending.push((token, self.now + delay));
        Ok(token)
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.pending.retain(|&(pending, _)| pending != token);
    }
}
