use std::fmt;

use bitflags::bitflags;

/// Where the slider is in its switch sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// Showing the active view; nothing pending
    #[default]
    Idle,
    /// The outgoing view's height has been captured
    Measuring,
    /// Transitions are enabled but the switch has not been committed
    Armed,
    /// The switch is committed and the slide is running
    Transitioning,
}

/// A view's role in the current transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Active, no transition running
    In,
    /// Not active and not taking part in a transition
    Out,
    /// Becoming active
    Entering,
    /// Was active, sliding away
    Leaving,
}

impl TransitionState {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionState::In => "in",
            TransitionState::Out => "out",
            TransitionState::Entering => "entering",
            TransitionState::Leaving => "leaving",
        }
    }
}

impl fmt::Display for TransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// What a state-machine step changed, so the host knows what to redo
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes: u8 {
        /// The tracked height changed
        const HEIGHT        = 0b0000_0001;
        /// Transitions were enabled or disabled
        const TRANSITIONING = 0b0000_0010;
        /// The active view (and with it the previous view) changed
        const ACTIVE_VIEW   = 0b0000_0100;
        /// A transition finished and the completion callback ran
        const COMPLETED     = 0b0000_1000;
        /// Inactive views were scrolled back to the top
        const SCROLL_RESET  = 0b0001_0000;
        /// The phase advanced
        const PHASE         = 0b0010_0000;
    }
}

/// The slider's mutable state.
///
/// `prev_active_view` is only set while a committed switch is running, and
/// `transitioning()` only holds between arming and completion.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    pub(crate) phase: Phase,
    pub(crate) active_view: usize,
    pub(crate) prev_active_view: Option<usize>,
    pub(crate) height: Option<f32>,
}

impl SliderState {
    pub(crate) fn new(active_view: usize) -> Self {
        Self {
            phase: Phase::Idle,
            active_view,
            prev_active_view: None,
            height: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_view(&self) -> usize {
        self.active_view
    }

    pub fn prev_active_view(&self) -> Option<usize> {
        self.prev_active_view
    }

    /// Last measured height, whether or not it is applied to the container
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    /// Whether CSS transitions are enabled
    pub fn transitioning(&self) -> bool {
        matches!(self.phase, Phase::Armed | Phase::Transitioning)
    }

    /// Role of view `index` in the current transition
    pub fn transition_state(&self, index: usize) -> TransitionState {
        match self.prev_active_view {
            None if index == self.active_view => TransitionState::In,
            None => TransitionState::Out,
            Some(_) if index == self.active_view => TransitionState::Entering,
            Some(prev) if index == prev => TransitionState::Leaving,
            Some(_) => TransitionState::Out,
        }
    }

    pub(crate) fn set_height(&mut self, height: Option<f32>) -> Changes {
        if self.height == height {
            Changes::empty()
        } else {
            self.height = height;
            Changes::HEIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_without_previous_view() {
        let state = SliderState::new(1);
        assert_eq!(state.transition_state(1), TransitionState::In);
        assert_eq!(state.transition_state(0), TransitionState::Out);
        assert_eq!(state.transition_state(2), TransitionState::Out);
    }

    #[test]
    fn test_labels_during_transition() {
        let mut state = SliderState::new(2);
        state.prev_active_view = Some(0);
        state.phase = Phase::Transitioning;

        assert_eq!(state.transition_state(2), TransitionState::Entering);
        assert_eq!(state.transition_state(0), TransitionState::Leaving);
        assert_eq!(state.transition_state(1), TransitionState::Out);
    }

    #[test]
    fn test_transitioning_phases() {
        let mut state = SliderState::new(0);
        for (phase, transitioning) in [
            (Phase::Idle, false),
            (Phase::Measuring, false),
            (Phase::Armed, true),
            (Phase::Transitioning, true),
        ] {
            state.phase = phase;
            assert_eq!(state.transitioning(), transitioning, "{phase:?}");
        }
    }

    #[test]
    fn test_set_height_reports_changes() {
        let mut state = SliderState::new(0);
        assert_eq!(state.set_height(Some(10.0)), Changes::HEIGHT);
        assert_eq!(state.set_height(Some(10.0)), Changes::empty());
        assert_eq!(state.set_height(None), Changes::HEIGHT);
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(TransitionState::Entering.to_string(), "entering");
        assert_eq!(TransitionState::Leaving.as_str(), "leaving");
    }
}
