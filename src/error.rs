use thiserror::Error;

/// Errors produced while configuring or driving a [`ViewSlider`](crate::ViewSlider).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("view slider needs at least one view")]
    NoViews,
    #[error("active view {index} is out of range for {num_views} views")]
    ActiveViewOutOfRange { index: usize, num_views: usize },
    #[error("spacing must be a positive finite number, got {0}")]
    InvalidSpacing(f32),
    #[error("view offset must be finite, got {0}")]
    InvalidViewOffset(f32),
    #[error("transition duration must be a non-negative number of milliseconds, got {0}")]
    InvalidDuration(f32),
    #[error("unrecognized timing function `{0}`")]
    InvalidTimingFunction(String),
    #[error("failed to schedule fallback timer: {0}")]
    Timer(String),
}
