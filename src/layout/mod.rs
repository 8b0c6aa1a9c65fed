//! Style records and the pure style calculator for the slider's elements.

mod prefix;
mod slots;
mod style;

pub use prefix::{StyleProcessor, VendorPrefixer};
pub use slots::{root_style, view_style, viewport_offset_percent, viewport_style};
pub use style::{
    CssTransition, Display, Length, Overflow, Position, Style, Transform, VerticalAlign, WhiteSpace,
};

use std::fmt;

/// Horizontal flow direction of the views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Views are laid out left to right; the leading edge is `left`
    #[default]
    Ltr,
    /// Views are laid out right to left; the leading edge is `right`
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }

    /// Sign of the viewport translation for moving forward through the views
    pub fn sign(self) -> f32 {
        match self {
            Direction::Ltr => -1.0,
            Direction::Rtl => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => write!(f, "ltr"),
            Direction::Rtl => write!(f, "rtl"),
        }
    }
}
