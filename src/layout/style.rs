//! A platform-neutral style record.
//!
//! [`Style`] holds the handful of properties the slider sets, typed, plus an
//! `extra` list for anything else (overrides from the caller, vendor-prefixed
//! duplicates). Hosts backed by a CSS engine read [`Style::declarations`];
//! hosts that paint themselves read the typed fields directly.

use std::fmt;

use crate::animation::TimingFunction;

use super::Direction;

/// A CSS length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // Also catches -0.0
            Length::Px(v) | Length::Percent(v) if v == 0.0 => write!(f, "0"),
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    InlineBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Baseline,
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhiteSpace {
    Normal,
    NoWrap,
}

/// The only transform the slider produces: a horizontal translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    TranslateX(Length),
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::TranslateX(x) => write!(f, "translateX({})", x),
        }
    }
}

/// A single-property CSS transition
#[derive(Debug, Clone, PartialEq)]
pub struct CssTransition {
    pub property: &'static str,
    pub duration_ms: f32,
    pub timing: TimingFunction,
}

impl fmt::Display for CssTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms {}", self.property, self.duration_ms, self.timing)
    }
}

macro_rules! keyword_display {
    ($ty:ty { $($variant:ident => $css:literal),* $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $css,)*
                })
            }
        }
    };
}

keyword_display!(Position { Relative => "relative", Absolute => "absolute" });
keyword_display!(Overflow { Visible => "visible", Hidden => "hidden", Auto => "auto" });
keyword_display!(Display { Block => "block", InlineBlock => "inline-block" });
keyword_display!(VerticalAlign { Baseline => "baseline", Top => "top", Middle => "middle", Bottom => "bottom" });
keyword_display!(WhiteSpace { Normal => "normal", NoWrap => "nowrap" });

/// Style record for one element.
///
/// Every field is optional; `None` means "not set". [`Style::merge`] layers
/// one record over another, which is how caller overrides are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub position: Option<Position>,
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
    pub left: Option<Length>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_height: Option<Length>,
    pub margin_left: Option<Length>,
    pub margin_right: Option<Length>,
    pub display: Option<Display>,
    pub vertical_align: Option<VerticalAlign>,
    pub white_space: Option<WhiteSpace>,
    pub direction: Option<Direction>,
    pub overflow: Option<Overflow>,
    pub transform: Option<Transform>,
    pub transition: Option<CssTransition>,
    /// Untyped declarations, emitted after the typed ones
    pub extra: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an untyped declaration
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.extra.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.extra.push((property, value)),
        }
    }

    /// Builder form of [`Style::set`]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Anchor the element to all four edges of its positioned parent
    pub fn fill(&mut self) {
        self.position = Some(Position::Absolute);
        self.top = Some(Length::ZERO);
        self.right = Some(Length::ZERO);
        self.bottom = Some(Length::ZERO);
        self.left = Some(Length::ZERO);
    }

    /// Layer `overrides` on top of this style. Fields set in `overrides` win.
    pub fn merge(&mut self, overrides: &Style) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(
                    if overrides.$field.is_some() {
                        self.$field = overrides.$field.clone();
                    }
                )*
            };
        }
        take!(
            position,
            top,
            right,
            bottom,
            left,
            width,
            height,
            min_height,
            margin_left,
            margin_right,
            display,
            vertical_align,
            white_space,
            direction,
            overflow,
            transform,
            transition
        );
        for (property, value) in &overrides.extra {
            self.set(property.clone(), value.clone());
        }
    }

    /// CSS declarations in a stable order, typed fields first
    pub fn declarations(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        macro_rules! emit {
            ($($field:ident => $css:literal),*) => {
                $(
                    if let Some(value) = &self.$field {
                        out.push(($css.to_string(), value.to_string()));
                    }
                )*
            };
        }
        emit!(
            position => "position",
            top => "top",
            right => "right",
            bottom => "bottom",
            left => "left",
            width => "width",
            height => "height",
            min_height => "min-height",
            margin_left => "margin-left",
            margin_right => "margin-right",
            display => "display",
            vertical_align => "vertical-align",
            white_space => "white-space",
            direction => "direction",
            overflow => "overflow",
            transform => "transform",
            transition => "transition"
        );
        out.extend(self.extra.iter().cloned());
        out
    }

    /// Value of a single declaration by CSS property name
    pub fn get(&self, property: &str) -> Option<String> {
        self.declarations()
            .into_iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v)
    }

    /// Inline-style text, e.g. `position: relative; overflow: hidden`
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_display() {
        assert_eq!(Length::Px(12.5).to_string(), "12.5px");
        assert_eq!(Length::Percent(-100.0).to_string(), "-100%");
        assert_eq!(Length::Percent(-0.0).to_string(), "0");
        assert_eq!(Length::ZERO.to_string(), "0");
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let mut base = Style {
            position: Some(Position::Relative),
            overflow: Some(Overflow::Hidden),
            ..Style::default()
        };
        let overrides = Style {
            overflow: Some(Overflow::Visible),
            ..Style::default()
        }
        .with("background", "red");

        base.merge(&overrides);

        assert_eq!(base.position, Some(Position::Relative));
        assert_eq!(base.overflow, Some(Overflow::Visible));
        assert_eq!(base.get("background").as_deref(), Some("red"));
    }

    #[test]
    fn test_set_replaces_extra() {
        let mut style = Style::new().with("color", "red");
        style.set("color", "blue");
        assert_eq!(style.extra, vec![("color".to_string(), "blue".to_string())]);
    }

    #[test]
    fn test_fill() {
        let mut style = Style::new();
        style.fill();
        assert_eq!(
            style.to_css(),
            "position: absolute; top: 0; right: 0; bottom: 0; left: 0"
        );
    }

    #[test]
    fn test_transition_display() {
        let transition = CssTransition {
            property: "transform",
            duration_ms: 250.0,
            timing: TimingFunction::EaseOut,
        };
        assert_eq!(transition.to_string(), "transform 250ms ease-out");
    }
}
