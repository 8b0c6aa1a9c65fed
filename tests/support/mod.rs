#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use view_slider::prelude::*;

/// What the slider asked the host to do, in order
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Measure(usize),
    ScrollToTop(usize),
}

/// A stand-in for a real view tree: fixed heights, per-view scroll offsets,
/// and a virtual clock. Only views mounted by the last render are measurable.
pub struct MockHost {
    pub heights: HashMap<usize, f32>,
    pub scroll: HashMap<usize, f32>,
    pub mounted: HashSet<usize>,
    pub timers: FrameTimers,
    pub fail_timers: bool,
    pub events: RefCell<Vec<HostEvent>>,
}

impl MockHost {
    pub fn new(heights: &[f32]) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            heights: heights.iter().copied().enumerate().collect(),
            scroll: HashMap::new(),
            mounted: HashSet::new(),
            timers: FrameTimers::starting_at(Instant::now()),
            fail_timers: false,
            events: RefCell::new(Vec::new()),
        }
    }

    /// Render the slider and remember which views are real nodes
    pub fn sync(&mut self, slider: &ViewSlider) {
        let tree = slider.render(|props| props.index);
        self.mounted = tree.mounted().map(|slot| slot.index()).collect();
    }

    /// Mount and render, the way a host attaches a fresh slider
    pub fn mount(&mut self, slider: &mut ViewSlider) -> Changes {
        self.sync(slider);
        let changes = slider.mount(self);
        self.sync(slider);
        changes
    }

    /// One update cycle: advance a phase, then re-render
    pub fn step(&mut self, slider: &mut ViewSlider) -> Changes {
        let changes = slider.update(self);
        self.sync(slider);
        changes
    }

    /// Update cycles until the slider reports no changes
    pub fn settle(&mut self, slider: &mut ViewSlider) -> Changes {
        let mut all = Changes::empty();
        loop {
            let changes = self.step(slider);
            if changes.is_empty() {
                return all;
            }
            all |= changes;
        }
    }

    /// Advance the clock and deliver fired timers to the slider
    pub fn advance(&mut self, slider: &mut ViewSlider, by: Duration) -> Changes {
        let mut changes = Changes::empty();
        for token in self.timers.advance(by) {
            changes |= slider.handle_timer(token, self);
        }
        self.sync(slider);
        changes
    }

    pub fn take_events(&self) -> Vec<HostEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl Measure for MockHost {
    fn measure_height(&self, index: usize) -> Option<f32> {
        self.events.borrow_mut().push(HostEvent::Measure(index));
        if !self.mounted.contains(&index) {
            return None;
        }
        self.heights.get(&index).copied()
    }

    fn scroll_to_top(&mut self, index: usize) {
        self.events.borrow_mut().push(HostEvent::ScrollToTop(index));
        if self.mounted.contains(&index) {
            self.scroll.insert(index, 0.0);
        }
    }
}

impl Timers for MockHost {
    fn now(&self) -> Instant {
        self.timers.now()
    }

    fn set_timeout(&mut self, delay: Duration) -> Result<TimerToken, SliderError> {
        if self.fail_timers {
            return Err(SliderError::Timer("timer source unavailable".into()));
        }
        self.timers.set_timeout(delay)
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.timers.clear_timeout(token)
    }
}
