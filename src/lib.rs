//! A sliding view container with an animated height.
//!
//! [`ViewSlider`] shows one of `num_views` panels at a time and slides the
//! viewport horizontally when the active index changes, optionally animating
//! the container's height to the incoming panel's measured height. It is
//! headless: each render pass produces a [`SliderTree`] of styled elements,
//! and the embedding environment supplies measurement and timers through the
//! [`host`] traits.
//!
//! ```
//! use std::collections::HashMap;
//! use std::time::Duration;
//!
//! use view_slider::prelude::*;
//!
//! struct DemoHost {
//!     heights: HashMap<usize, f32>,
//!     timers: FrameTimers,
//! }
//!
//! impl Measure for DemoHost {
//!     fn measure_height(&self, index: usize) -> Option<f32> {
//!         self.heights.get(&index).copied()
//!     }
//!     fn scroll_to_top(&mut self, _index: usize) {}
//! }
//!
//! impl Timers for DemoHost {
//!     fn now(&self) -> std::time::Instant {
//!         self.timers.now()
//!     }
//!     fn set_timeout(&mut self, delay: Duration) -> Result<TimerToken, SliderError> {
//!         self.timers.set_timeout(delay)
//!     }
//!     fn clear_timeout(&mut self, token: TimerToken) {
//!         self.timers.clear_timeout(token)
//!     }
//! }
//!
//! let mut host = DemoHost {
//!     heights: HashMap::from([(0, 120.0), (1, 300.0)]),
//!     timers: FrameTimers::new(),
//! };
//! let mut slider = ViewSlider::new(SliderConfig::new(2)).unwrap();
//! slider.mount(&mut host);
//!
//! slider.set_active_view(1).unwrap();
//! slider.settle(&mut host);
//! assert_eq!(slider.state().prev_active_view(), Some(0));
//!
//! for token in host.timers.advance(Duration::from_millis(500)) {
//!     slider.handle_timer(token, &mut host);
//! }
//! assert_eq!(slider.state().height(), Some(300.0));
//! assert_eq!(slider.state().prev_active_view(), None);
//! ```

pub mod animation;
pub mod context;
pub mod error;
pub mod host;
pub mod layout;
pub mod slider;

pub use context::Scope;
pub use error::SliderError;
pub use slider::{
    Changes, Element, Frame, NodeId, Phase, RefCallback, SliderConfig, SliderState, SliderTree,
    TransitionState, ViewProps, ViewSlider, ViewSlot,
};

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::context::Scope;
    pub use crate::error::SliderError;
    pub use crate::host::{CalloopTimers, FrameTimers, Host, Measure, TimerToken, Timers};
    pub use crate::layout::{Direction, Length, Style, StyleProcessor, VendorPrefixer};
    pub use crate::slider::{
        Changes, Frame, NodeId, Phase, SliderConfig, SliderTree, TransitionState, ViewProps,
        ViewSlider, ViewSlot,
    };
}
