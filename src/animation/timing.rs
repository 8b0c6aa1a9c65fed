//! Timing functions (easing curves) for slide and height transitions.
//!
//! Each variant maps one-to-one onto a CSS `transition-timing-function`
//! value, so the same curve can be handed to a CSS engine through
//! [`Display`](std::fmt::Display) or evaluated directly by hosts that paint
//! their own frames.
//!
//! ## Example
//!
//! ```
//! use view_slider::animation::TimingFunction;
//!
//! let timing: TimingFunction = "cubic-bezier(0.4, 0, 0.2, 1)".parse().unwrap();
//! assert_eq!(timing.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
//! assert_eq!(TimingFunction::default(), TimingFunction::Ease);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::SliderError;

/// Timing function that controls the transition curve
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TimingFunction {
    /// Constant speed
    Linear,
    /// CSS `ease`: quick start, gentle finish
    #[default]
    Ease,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Jumps to the end value immediately
    StepStart,
    /// Holds the start value until the very end
    StepEnd,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (clamped to 0.0..=1.0).
    /// Returns the interpolation factor (can exceed [0, 1] for bezier overshoot).
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            TimingFunction::Linear => t,
            TimingFunction::StepStart => {
                if t > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            TimingFunction::StepEnd => {
                if t >= 1.0 {
                    1.0
                } else {
                    0.0
                }
            }
            _ => {
                let (x1, y1, x2, y2) = self.control_points().unwrap_or((0.0, 0.0, 1.0, 1.0));
                cubic_bezier(t, x1, y1, x2, y2)
            }
        }
    }

    /// Bezier control points for the curve-based variants.
    pub fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            TimingFunction::Linear => Some((0.0, 0.0, 1.0, 1.0)),
            TimingFunction::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            TimingFunction::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            TimingFunction::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            TimingFunction::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
            TimingFunction::StepStart | TimingFunction::StepEnd => None,
        }
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "linear"),
            TimingFunction::Ease => write!(f, "ease"),
            TimingFunction::EaseIn => write!(f, "ease-in"),
            TimingFunction::EaseOut => write!(f, "ease-out"),
            TimingFunction::EaseInOut => write!(f, "ease-in-out"),
            TimingFunction::StepStart => write!(f, "step-start"),
            TimingFunction::StepEnd => write!(f, "step-end"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

impl FromStr for TimingFunction {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let timing = match trimmed {
            "linear" => TimingFunction::Linear,
            "ease" => TimingFunction::Ease,
            "ease-in" => TimingFunction::EaseIn,
            "ease-out" => TimingFunction::EaseOut,
            "ease-in-out" => TimingFunction::EaseInOut,
            "step-start" => TimingFunction::StepStart,
            "step-end" => TimingFunction::StepEnd,
            _ => return parse_cubic_bezier(trimmed),
        };
        Ok(timing)
    }
}

fn parse_cubic_bezier(s: &str) -> Result<TimingFunction, SliderError> {
    let invalid = || SliderError::InvalidTimingFunction(s.to_string());
    let args = s
        .strip_prefix("cubic-bezier(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let values = args
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        // x coordinates must stay inside [0, 1] for the curve to be a function of time
        &[x1, y1, x2, y2] if (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2) => {
            Ok(TimingFunction::CubicBezier(x1, y1, x2, y2))
        }
        _ => Err(invalid()),
    }
}

/// Cubic bezier curve evaluation
/// Assumes x1, x2 are in [0, 1]
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Use Newton-Raphson to solve for the curve parameter whose x equals t
    let mut current_t = t;
    for _ in 0..8 {
        let current_x = cubic_bezier_x(current_t, x1, x2);
        let current_slope = cubic_bezier_slope(current_t, x1, x2);
        if current_slope.abs() < 1e-6 {
            break;
        }
        current_t -= (current_x - t) / current_slope;
    }
    cubic_bezier_y(current_t.clamp(0.0, 1.0), y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(TimingFunction::Linear.evaluate(0.0), 0.0);
        assert!((TimingFunction::Linear.evaluate(0.5) - 0.5).abs() < 1e-4);
        assert_eq!(TimingFunction::Linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_endpoints_are_fixed() {
        for timing in [
            TimingFunction::Ease,
            TimingFunction::EaseIn,
            TimingFunction::EaseOut,
            TimingFunction::EaseInOut,
        ] {
            assert!(timing.evaluate(0.0).abs() < 1e-4, "{timing} at 0");
            assert!((timing.evaluate(1.0) - 1.0).abs() < 1e-4, "{timing} at 1");
        }
    }

    #[test]
    fn test_ease_in() {
        let result = TimingFunction::EaseIn.evaluate(0.5);
        assert!(result < 0.5); // Should be slower at start
    }

    #[test]
    fn test_ease_out() {
        let result = TimingFunction::EaseOut.evaluate(0.5);
        assert!(result > 0.5); // Should be faster at start
    }

    #[test]
    fn test_steps() {
        assert_eq!(TimingFunction::StepStart.evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::StepStart.evaluate(0.01), 1.0);
        assert_eq!(TimingFunction::StepEnd.evaluate(0.99), 0.0);
        assert_eq!(TimingFunction::StepEnd.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_css_keywords_roundtrip() {
        for text in ["linear", "ease", "ease-in", "ease-out", "ease-in-out", "step-start", "step-end"] {
            let parsed: TimingFunction = text.parse().unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn test_parse_cubic_bezier() {
        let parsed: TimingFunction = " cubic-bezier(0.1, 0.7,1.0, 0.1) ".parse().unwrap();
        assert_eq!(parsed, TimingFunction::CubicBezier(0.1, 0.7, 1.0, 0.1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("bouncy".parse::<TimingFunction>().is_err());
        assert!("cubic-bezier(0.1, 0.2, 0.3)".parse::<TimingFunction>().is_err());
        assert!("cubic-bezier(1.5, 0, 0.5, 1)".parse::<TimingFunction>().is_err());
        assert_eq!(
            "wobble".parse::<TimingFunction>(),
            Err(SliderError::InvalidTimingFunction("wobble".into()))
        );
    }
}
