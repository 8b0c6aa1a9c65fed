use std::fmt;
use std::rc::Rc;

use crate::animation::{TimingFunction, Transition};
use crate::error::SliderError;
use crate::layout::{Direction, Style, StyleProcessor};

/// Everything the caller controls about a slider.
///
/// Build one with [`SliderConfig::new`] and the chaining setters, then hand it
/// to [`ViewSlider::new`](crate::ViewSlider::new) or, for later changes,
/// [`ViewSlider::set_config`](crate::ViewSlider::set_config).
#[derive(Clone)]
pub struct SliderConfig {
    /// Number of views
    pub num_views: usize,
    /// Index of the view that should be visible
    pub active_view: usize,
    /// Extra leading offset, in view widths
    pub view_offset: f32,
    /// Keep every view mounted instead of rendering placeholders for idle views
    pub keep_views_mounted: bool,
    /// Animate the container height to the active view's height
    pub animate_height: bool,
    pub transition: Transition,
    /// Position views absolutely to cover the parent instead of flowing inline
    pub fill_parent: bool,
    pub direction: Direction,
    /// Distance between view starts, in view widths
    pub spacing: f32,
    pub class_name: Option<String>,
    pub viewport_class_name: Option<String>,
    /// Overrides for the root element
    pub style: Style,
    /// Overrides for the viewport element
    pub viewport_style: Style,
    /// Overrides applied to every view slot
    pub view_style: Style,
    /// Post-processing run on every emitted style
    pub style_processor: Option<Rc<dyn StyleProcessor>>,
}

impl SliderConfig {
    pub fn new(num_views: usize) -> Self {
        Self {
            num_views,
            active_view: 0,
            view_offset: 0.0,
            keep_views_mounted: false,
            animate_height: true,
            transition: Transition::default(),
            fill_parent: false,
            direction: Direction::Ltr,
            spacing: 1.0,
            class_name: None,
            viewport_class_name: None,
            style: Style::default(),
            viewport_style: Style::default(),
            view_style: Style::default(),
            style_processor: None,
        }
    }

    pub fn active_view(mut self, index: usize) -> Self {
        self.active_view = index;
        self
    }

    pub fn view_offset(mut self, offset: f32) -> Self {
        self.view_offset = offset;
        self
    }

    pub fn keep_views_mounted(mut self, keep: bool) -> Self {
        self.keep_views_mounted = keep;
        self
    }

    pub fn animate_height(mut self, animate: bool) -> Self {
        self.animate_height = animate;
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Set the transition duration in milliseconds
    pub fn transition_duration(mut self, duration_ms: f32) -> Self {
        self.transition.duration_ms = duration_ms;
        self
    }

    pub fn transition_timing(mut self, timing: TimingFunction) -> Self {
        self.transition.timing = timing;
        self
    }

    pub fn fill_parent(mut self, fill: bool) -> Self {
        self.fill_parent = fill;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Shorthand for `direction(Direction::Rtl)` / `direction(Direction::Ltr)`
    pub fn rtl(self, rtl: bool) -> Self {
        self.direction(if rtl { Direction::Rtl } else { Direction::Ltr })
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn viewport_class_name(mut self, class: impl Into<String>) -> Self {
        self.viewport_class_name = Some(class.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn viewport_style(mut self, style: Style) -> Self {
        self.viewport_style = style;
        self
    }

    pub fn view_style(mut self, style: Style) -> Self {
        self.view_style = style;
        self
    }

    pub fn style_processor(mut self, processor: impl StyleProcessor + 'static) -> Self {
        self.style_processor = Some(Rc::new(processor));
        self
    }

    /// Check the invariants the slider relies on.
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.num_views == 0 {
            return Err(SliderError::NoViews);
        }
        if self.active_view >= self.num_views {
            return Err(SliderError::ActiveViewOutOfRange {
                index: self.active_view,
                num_views: self.num_views,
            });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(SliderError::InvalidSpacing(self.spacing));
        }
        if !self.view_offset.is_finite() {
            return Err(SliderError::InvalidViewOffset(self.view_offset));
        }
        let duration = self.transition.duration_ms;
        if !duration.is_finite() || duration < 0.0 {
            return Err(SliderError::InvalidDuration(duration));
        }
        Ok(())
    }

    pub(crate) fn process_style(&self, style: &mut Style) {
        if let Some(processor) = &self.style_processor {
            processor.process(style);
        }
    }
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("num_views", &self.num_views)
            .field("active_view", &self.active_view)
            .field("view_offset", &self.view_offset)
            .field("keep_views_mounted", &self.keep_views_mounted)
            .field("animate_height", &self.animate_height)
            .field("transition", &self.transition)
            .field("fill_parent", &self.fill_parent)
            .field("direction", &self.direction)
            .field("spacing", &self.spacing)
            .field("class_name", &self.class_name)
            .field("viewport_class_name", &self.viewport_class_name)
            .field("style_processor", &self.style_processor.is_some())
            .finish_non_exhaustive()
    }
}
