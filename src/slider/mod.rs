//! The view slider state machine.
//!
//! A switch between views runs through explicit phases, one per call to
//! [`ViewSlider::update`]:
//!
//! 1. `Idle -> Measuring`: the requested view differs from the active one.
//!    The outgoing view's height is captured so the container can be pinned
//!    to it (inactive views are scrolled to the top first when they stay
//!    mounted).
//! 2. `Measuring -> Armed`: transitions are enabled. Every view is mounted from
//!    here on, so the incoming view can be measured.
//! 3. `Armed -> Transitioning`: the switch is committed, the incoming view's
//!    height is captured and the fallback completion timer is scheduled.
//!
//! Completion (`Transitioning -> Idle`) comes from the viewport's own
//! transition-end signal or from the fallback timer, whichever is first.
//!
//! The host re-renders after every call that returns non-empty [`Changes`] and
//! then calls `update` again, or calls [`ViewSlider::settle`] to run the
//! phases back to back.

mod config;
mod render;
mod state;

pub use config::SliderConfig;
pub use render::{Element, NodeId, SliderTree, ViewProps, ViewSlot};
pub use state::{Changes, Phase, SliderState, TransitionState};

use std::fmt;
use std::time::Instant;

use crate::animation::Tween;
use crate::context::Scope;
use crate::error::SliderError;
use crate::host::{FallbackTimer, Host, Measure, TimerToken, Timers};
use crate::layout::viewport_offset_percent;

/// Callback receiving a node reference on mount and `None` on unmount
pub type RefCallback = Box<dyn FnMut(Option<NodeId>)>;

/// Interpolated values for hosts that animate without a CSS engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Viewport translation in percent of its width
    pub translate_percent: f32,
    /// Container height in pixels, when height animation is on and known
    pub height: Option<f32>,
    /// Whether another frame is needed to finish an animation
    pub animating: bool,
    /// Whether any value moved since the previous frame
    pub changed: bool,
}

pub struct ViewSlider {
    config: SliderConfig,
    state: SliderState,
    fallback: FallbackTimer,
    mounted: bool,
    offset_tween: Option<Tween<f32>>,
    height_tween: Option<Tween<f32>>,
    on_transition_end: Option<Box<dyn FnMut()>>,
    root_ref: Option<RefCallback>,
    viewport_ref: Option<RefCallback>,
}

impl ViewSlider {
    /// Create a slider showing `config.active_view`.
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        Ok(Self {
            state: SliderState::new(config.active_view),
            config,
            fallback: FallbackTimer::default(),
            mounted: false,
            offset_tween: None,
            height_tween: None,
            on_transition_end: None,
            root_ref: None,
            viewport_ref: None,
        })
    }

    /// Called once per finished transition
    pub fn on_transition_end(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_transition_end = Some(Box::new(callback));
        self
    }

    pub fn root_ref(mut self, callback: impl FnMut(Option<NodeId>) + 'static) -> Self {
        self.root_ref = Some(Box::new(callback));
        self
    }

    pub fn viewport_ref(mut self, callback: impl FnMut(Option<NodeId>) + 'static) -> Self {
        self.viewport_ref = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replace the configuration. Does not advance any phase; call
    /// [`update`](Self::update) or [`settle`](Self::settle) afterwards.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), SliderError> {
        config.validate()?;
        if config.active_view != self.config.active_view {
            log::debug!(
                "requested view {} -> {}",
                self.config.active_view,
                config.active_view
            );
        }
        if config.transition != self.config.transition {
            for tween in [&mut self.offset_tween, &mut self.height_tween]
                .into_iter()
                .flatten()
            {
                tween.set_transition(config.transition.clone());
            }
        }
        self.config = config;
        Ok(())
    }

    /// Request a different active view. Shorthand for a config change that
    /// only touches `active_view`.
    pub fn set_active_view(&mut self, index: usize) -> Result<(), SliderError> {
        let config = self.config.clone().active_view(index);
        self.set_config(config)
    }

    /// First attach to the host: measure the initial view and report node refs.
    pub fn mount<H: Host>(&mut self, host: &mut H) -> Changes {
        if self.mounted {
            return Changes::empty();
        }
        self.mounted = true;

        let mut changes = Changes::empty();
        if self.state.height.is_none() {
            changes |= self
                .state
                .set_height(host.measure_height(self.state.active_view));
        }

        let now = host.now();
        let offset = viewport_offset_percent(self.state.active_view, &self.config);
        self.offset_tween = Some(Tween::new(offset, self.config.transition.clone(), now));
        self.height_tween = self
            .state
            .height
            .map(|height| Tween::new(height, self.config.transition.clone(), now));

        if let Some(callback) = &mut self.root_ref {
            callback(Some(NodeId::Root));
        }
        if let Some(callback) = &mut self.viewport_ref {
            callback(Some(NodeId::Viewport));
        }

        log::debug!(
            "mounted on view {} with height {:?}",
            self.state.active_view,
            self.state.height
        );
        changes
    }

    /// Detach from the host, cancelling the pending fallback timer.
    pub fn unmount<H: Host>(&mut self, host: &mut H) {
        if !self.mounted {
            return;
        }
        self.fallback.cancel(host);
        self.mounted = false;

        // An interrupted slide is abandoned; the next mount starts from rest
        if self.state.phase != Phase::Idle {
            log::debug!(
                "abandoning {:?} switch to view {}",
                self.state.phase,
                self.state.active_view
            );
        }
        self.state.phase = Phase::Idle;
        self.state.prev_active_view = None;
        self.offset_tween = None;

        if let Some(callback) = &mut self.root_ref {
            callback(None);
        }
        if let Some(callback) = &mut self.viewport_ref {
            callback(None);
        }
        log::debug!("unmounted");
    }

    /// Advance the switch sequence by at most one phase.
    ///
    /// Returns what changed; empty means the slider is at rest for the
    /// current configuration.
    pub fn update<H: Host>(&mut self, host: &mut H) -> Changes {
        let requested = self.config.active_view;
        let pending = requested != self.state.active_view;

        match self.state.phase {
            Phase::Idle if pending => self.capture_height(host),
            Phase::Measuring | Phase::Armed if !pending => self.disarm(),
            Phase::Measuring => self.arm(),
            Phase::Armed | Phase::Transitioning if pending => self.commit(requested, host),
            Phase::Idle | Phase::Armed | Phase::Transitioning => Changes::empty(),
        }
    }

    /// Run [`update`](Self::update) until it reports no changes.
    pub fn settle<H: Host>(&mut self, host: &mut H) -> Changes {
        let mut all = Changes::empty();
        loop {
            let changes = self.update(host);
            if changes.is_empty() {
                return all;
            }
            all |= changes;
        }
    }

    /// Transition-end signal from the host. Only signals from the viewport
    /// itself count; ones bubbling up from nested content are ignored.
    pub fn handle_transition_end<H: Host>(&mut self, target: NodeId, host: &mut H) -> Changes {
        if target != NodeId::Viewport {
            log::trace!("ignoring transition end from {:?}", target);
            return Changes::empty();
        }
        self.complete(host)
    }

    /// A host timer fired. Tokens other than the live fallback are ignored.
    pub fn handle_timer<H: Host>(&mut self, token: TimerToken, host: &mut H) -> Changes {
        if !self.fallback.take_if(token) {
            log::trace!("ignoring stale timer {:?}", token);
            return Changes::empty();
        }
        self.complete(host)
    }

    /// Finish the running transition: re-measure the settled view, clear the
    /// previous view and disable transitions. A no-op outside a transition.
    pub fn complete<H: Host>(&mut self, host: &mut H) -> Changes {
        if self.state.phase != Phase::Transitioning {
            log::trace!("no transition to complete in {:?}", self.state.phase);
            return Changes::empty();
        }
        self.fallback.cancel(host);

        let now = host.now();
        let measured = host.measure_height(self.state.active_view);
        let changes = self.track_height(measured, now)
            | Changes::PHASE
            | Changes::TRANSITIONING
            | Changes::ACTIVE_VIEW
            | Changes::COMPLETED;

        let previous = self.state.prev_active_view.take();
        self.state.phase = Phase::Idle;

        let offset = viewport_offset_percent(self.state.active_view, &self.config);
        if let Some(tween) = &mut self.offset_tween {
            tween.set_immediate(offset, now);
        }

        log::debug!(
            "transition {:?} -> {} complete, height {:?}",
            previous,
            self.state.active_view,
            self.state.height
        );

        if let Some(callback) = &mut self.on_transition_end {
            callback();
        }
        changes
    }

    /// Render the current state, calling `render_view` once per mounted view.
    pub fn render<V>(&self, render_view: impl FnMut(ViewProps<'_>) -> V) -> SliderTree<V> {
        self.render_in(&Scope::root(), render_view)
    }

    /// Like [`render`](Self::render), with each view's scope inheriting from
    /// `scope`.
    pub fn render_in<V>(
        &self,
        scope: &Scope<'_>,
        render_view: impl FnMut(ViewProps<'_>) -> V,
    ) -> SliderTree<V> {
        render::build_tree(&self.config, &self.state, scope, render_view)
    }

    /// Sample the slide and height animations at `now`.
    pub fn frame(&mut self, now: Instant) -> Frame {
        let target = viewport_offset_percent(self.state.active_view, &self.config);
        let transitioning = self.state.transitioning();

        let mut animating = false;
        let mut changed = false;
        let translate_percent = match &mut self.offset_tween {
            Some(tween) if transitioning => {
                changed |= tween.advance(now).is_changed();
                animating |= tween.is_animating();
                *tween.current()
            }
            Some(tween) => {
                // Without transitions the viewport jumps
                if *tween.current() != target {
                    tween.set_immediate(target, now);
                    changed = true;
                }
                target
            }
            None => target,
        };

        let height = if self.config.animate_height {
            self.height_tween.as_mut().map(|tween| {
                changed |= tween.advance(now).is_changed();
                animating |= tween.is_animating();
                *tween.current()
            })
        } else {
            None
        };

        Frame {
            translate_percent,
            height,
            animating,
            changed,
        }
    }

    // Phase 1
    fn capture_height<H: Host>(&mut self, host: &mut H) -> Changes {
        let active = self.state.active_view;
        let mut changes = Changes::PHASE;

        if self.config.keep_views_mounted {
            for index in (0..self.config.num_views).filter(|&index| index != active) {
                host.scroll_to_top(index);
            }
            changes |= Changes::SCROLL_RESET;
        }

        let now = host.now();
        changes |= self.track_height(host.measure_height(active), now);
        self.state.phase = Phase::Measuring;

        log::debug!(
            "captured height {:?} of view {} before switching to {}",
            self.state.height,
            active,
            self.config.active_view
        );
        changes
    }

    // Phase 2
    fn arm(&mut self) -> Changes {
        self.state.phase = Phase::Armed;
        log::debug!("transitions enabled");
        Changes::PHASE | Changes::TRANSITIONING
    }

    // Phase 3
    fn commit<H: Host>(&mut self, requested: usize, host: &mut H) -> Changes {
        let previous = self.state.active_view;
        let mut changes = Changes::ACTIVE_VIEW;
        if self.state.phase != Phase::Transitioning {
            changes |= Changes::PHASE;
        }

        self.state.prev_active_view = Some(previous);
        self.state.active_view = requested;
        self.state.phase = Phase::Transitioning;

        let now = host.now();
        changes |= self.track_height(host.measure_height(requested), now);

        let offset = viewport_offset_percent(requested, &self.config);
        if let Some(tween) = &mut self.offset_tween {
            tween.animate_to(offset, now);
        }

        self.fallback
            .schedule(host, self.config.transition.as_duration());

        log::debug!(
            "switching {} -> {}, height {:?}",
            previous,
            requested,
            self.state.height
        );
        changes
    }

    // The request went back to the active view before the switch was committed
    fn disarm(&mut self) -> Changes {
        let mut changes = Changes::PHASE;
        if self.state.transitioning() {
            changes |= Changes::TRANSITIONING;
        }
        self.state.phase = Phase::Idle;
        log::debug!("switch cancelled, staying on {}", self.state.active_view);
        changes
    }

    /// Store a fresh measurement. Unknown measurements keep the last height.
    fn track_height(&mut self, measured: Option<f32>, now: Instant) -> Changes {
        let Some(height) = measured else {
            return Changes::empty();
        };
        let changes = self.state.set_height(Some(height));
        if !changes.is_empty() {
            match &mut self.height_tween {
                Some(tween) => tween.animate_to(height, now),
                None => {
                    self.height_tween =
                        Some(Tween::new(height, self.config.transition.clone(), now))
                }
            }
        }
        changes
    }
}

impl fmt::Debug for ViewSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSlider")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("mounted", &self.mounted)
            .field("fallback_pending", &self.fallback.is_pending())
            .finish_non_exhaustive()
    }
}
