use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ::calloop::timer::{TimeoutAction, Timer};
use ::calloop::{LoopHandle, RegistrationToken};

use crate::error::SliderError;

use super::{TimerToken, Timers};

/// Timers backed by a `calloop` event loop.
///
/// Each timeout becomes a `calloop` timer source. When it fires, `on_fire`
/// receives the loop's shared data and the token; it is expected to route the
/// token to [`ViewSlider::handle_timer`](crate::ViewSlider::handle_timer).
/// A fired source forgets its own registration before dropping itself.
pub struct CalloopTimers<'l, D> {
    handle: LoopHandle<'l, D>,
    on_fire: Rc<dyn Fn(&mut D, TimerToken) + 'l>,
    next_token: u64,
    registered: Rc<RefCell<HashMap<TimerToken, RegistrationToken>>>,
}

impl<'l, D> CalloopTimers<'l, D> {
    pub fn new(handle: LoopHandle<'l, D>, on_fire: impl Fn(&mut D, TimerToken) + 'l) -> Self {
        Self {
            handle,
            on_fire: Rc::new(on_fire),
            next_token: 1,
            registered: Rc::default(),
        }
    }

    /// Number of timers that have not fired or been cleared
    pub fn pending(&self) -> usize {
        self.registered.borrow().len()
    }
}

impl<'l, D: 'l> Timers for CalloopTimers<'l, D> {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn set_timeout(&mut self, delay: Duration) -> Result<TimerToken, SliderError> {
        let token = TimerToken::new(self.next_token);
        self.next_token += 1;

        let on_fire = Rc::clone(&self.on_fire);
        let registered = Rc::clone(&self.registered);
        let registration = self
            .handle
            .insert_source(Timer::from_duration(delay), move |_deadline, _, data| {
                registered.borrow_mut().remove(&token);
                on_fire(data, token);
                TimeoutAction::Drop
            })
            .map_err(|err| SliderError::Timer(err.error.to_string()))?;

        self.registered.borrow_mut().insert(token, registration);
        Ok(token)
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        let registration = self.registered.borrow_mut().remove(&token);
        if let Some(registration) = registration {
            self.handle.remove(registration);
        }
    }
}
