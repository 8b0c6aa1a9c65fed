//! Pure style calculation for the root, viewport and view slots.
//!
//! Nothing here touches slider state beyond the values passed in, so every
//! function can be called from a render pass or a test with no host around.

use crate::slider::SliderConfig;

use super::{
    CssTransition, Direction, Display, Length, Overflow, Position, Style, Transform, VerticalAlign,
    WhiteSpace,
};

/// Horizontal viewport translation, in percent of the viewport width, that
/// brings `active_view` into view.
pub fn viewport_offset_percent(active_view: usize, config: &SliderConfig) -> f32 {
    (active_view as f32 + config.view_offset) * config.spacing * config.direction.sign() * 100.0
}

/// Style of the slot holding view `index`.
///
/// In fill-parent mode each view is absolutely positioned at its own offset.
/// Otherwise views flow inline and only their leading margins are set, so the
/// offsets accumulate through normal layout.
pub fn view_style(index: usize, config: &SliderConfig) -> Style {
    let mut style = Style {
        display: Some(Display::InlineBlock),
        vertical_align: Some(VerticalAlign::Top),
        white_space: Some(WhiteSpace::Normal),
        width: Some(Length::Percent(100.0)),
        ..Style::default()
    };
    style.merge(&config.view_style);

    if config.fill_parent {
        style.fill();
        style.overflow = Some(Overflow::Auto);
        let offset = Length::Percent((index as f32 + config.view_offset) * config.spacing * 100.0);
        set_leading(&mut style, config.direction, Leading::Edge, offset);
    } else {
        let margin = if index == 0 {
            config.view_offset * config.spacing * 100.0
        } else {
            (config.spacing - 1.0) * 100.0
        };
        set_leading(&mut style, config.direction, Leading::Margin, Length::Percent(margin));
    }
    style
}

/// Style of the outer container. `height` is the tracked height, if known.
pub fn root_style(config: &SliderConfig, height: Option<f32>) -> Style {
    let mut style = Style {
        position: Some(Position::Relative),
        overflow: Some(Overflow::Hidden),
        transition: Some(CssTransition {
            property: "height",
            duration_ms: config.transition.duration_ms,
            timing: config.transition.timing,
        }),
        ..Style::default()
    };
    style.merge(&config.style);

    if config.animate_height {
        if let Some(height) = height {
            style.height = Some(Length::Px(height));
        }
    }
    if config.fill_parent {
        style.fill();
    }
    style
}

/// Style of the sliding viewport. The transform only transitions while
/// `transitioning`, so the first paint lands in place without animating.
pub fn viewport_style(config: &SliderConfig, active_view: usize, transitioning: bool) -> Style {
    let mut style = Style {
        transform: Some(Transform::TranslateX(Length::Percent(
            viewport_offset_percent(active_view, config),
        ))),
        white_space: Some(WhiteSpace::NoWrap),
        min_height: Some(Length::Percent(100.0)),
        direction: Some(config.direction),
        transition: transitioning.then(|| CssTransition {
            property: "transform",
            duration_ms: config.transition.duration_ms,
            timing: config.transition.timing,
        }),
        ..Style::default()
    };
    style.merge(&config.viewport_style);

    if config.fill_parent {
        style.fill();
    }
    style
}

enum Leading {
    Edge,
    Margin,
}

fn set_leading(style: &mut Style, direction: Direction, kind: Leading, value: Length) {
    let slot = match (kind, direction) {
        (Leading::Edge, Direction::Ltr) => &mut style.left,
        (Leading::Edge, Direction::Rtl) => &mut style.right,
        (Leading::Margin, Direction::Ltr) => &mut style.margin_left,
        (Leading::Margin, Direction::Rtl) => &mut style.margin_right,
    };
    *slot = Some(value);
}
