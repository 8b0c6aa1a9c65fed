mod support;

use std::cell::RefCell;

use support::MockHost;
use view_slider::layout::{Position, Style};
use view_slider::prelude::*;

#[test]
fn test_idle_views_render_as_placeholders() {
    let mut host = MockHost::new(&[100.0, 200.0, 300.0, 400.0]);
    let mut slider = ViewSlider::new(SliderConfig::new(4).active_view(2)).unwrap();
    host.mount(&mut slider);

    let rendered = RefCell::new(Vec::new());
    let tree = slider.render(|props| {
        rendered.borrow_mut().push(props.index);
        format!("view {}", props.index)
    });

    // Views after the active one are not rendered at all
    assert_eq!(tree.views.len(), 3);
    assert!(tree.view(0).unwrap().is_placeholder());
    assert!(tree.view(1).unwrap().is_placeholder());
    assert_eq!(tree.view(1).unwrap().content(), None);
    assert_eq!(
        tree.view(2).unwrap().content().map(String::as_str),
        Some("view 2")
    );
    assert_eq!(*rendered.borrow(), vec![2]);

    // Placeholders keep their spacing
    assert!(tree.view(1).unwrap().style().margin_left.is_some());
}

#[test]
fn test_keep_mounted_renders_every_view() {
    let slider = ViewSlider::new(SliderConfig::new(3).keep_views_mounted(true)).unwrap();
    let tree = slider.render(|props| props.active);

    assert_eq!(tree.views.len(), 3);
    assert_eq!(tree.mounted().count(), 3);
    let active: Vec<bool> = tree.mounted().filter_map(|slot| slot.content().copied()).collect();
    assert_eq!(active, vec![true, false, false]);
}

#[test]
fn test_transition_labels_while_sliding() {
    let mut host = MockHost::new(&[100.0, 200.0, 300.0]);
    let mut slider = ViewSlider::new(SliderConfig::new(3)).unwrap();
    host.mount(&mut slider);

    let labels = |slider: &ViewSlider| -> Vec<Option<TransitionState>> {
        slider
            .render(|props| props.transition_state)
            .views
            .iter()
            .map(|slot| slot.transition_state())
            .collect()
    };

    assert_eq!(labels(&slider), vec![Some(TransitionState::In)]);

    slider.set_active_view(2).unwrap();
    host.step(&mut slider);
    host.step(&mut slider);
    // Armed: everything mounted, nothing committed yet
    assert_eq!(
        labels(&slider),
        vec![
            Some(TransitionState::In),
            Some(TransitionState::Out),
            Some(TransitionState::Out)
        ]
    );

    host.step(&mut slider);
    assert_eq!(
        labels(&slider),
        vec![
            Some(TransitionState::Leaving),
            Some(TransitionState::Out),
            Some(TransitionState::Entering)
        ]
    );

    slider.handle_transition_end(NodeId::Viewport, &mut host);
    assert_eq!(labels(&slider), vec![None, None, Some(TransitionState::In)]);
}

#[test]
fn test_nested_content_reads_transition_state_from_scope() {
    let slider = ViewSlider::new(SliderConfig::new(2).keep_views_mounted(true)).unwrap();

    let tree = slider.render(|props| {
        let nested = props.scope.child();
        let deeper = nested.child();
        (
            deeper.use_context::<TransitionState>(),
            props.transition_state,
        )
    });

    for slot in tree.mounted() {
        let (from_scope, from_props) = slot.content().copied().unwrap();
        assert_eq!(from_scope, Some(from_props));
    }
}

#[test]
fn test_render_in_inherits_parent_scope() {
    #[derive(Clone, Debug, PartialEq)]
    struct Theme(&'static str);

    let slider = ViewSlider::new(SliderConfig::new(1)).unwrap();
    let app = Scope::root().with(Theme("dark"));

    let tree = slider.render_in(&app, |props| props.scope.use_context::<Theme>());
    assert_eq!(
        tree.view(0).unwrap().content(),
        Some(&Some(Theme("dark")))
    );
}

#[test]
fn test_rtl_viewport_moves_right() {
    let slider =
        ViewSlider::new(SliderConfig::new(2).rtl(true).spacing(1.0).active_view(1)).unwrap();
    let tree = slider.render(|_| ());

    assert_eq!(
        tree.viewport.style.get("transform").as_deref(),
        Some("translateX(100%)")
    );
    assert_eq!(tree.viewport.style.get("direction").as_deref(), Some("rtl"));
}

#[test]
fn test_first_paint_does_not_transition() {
    let slider = ViewSlider::new(SliderConfig::new(3).active_view(2)).unwrap();
    let tree = slider.render(|_| ());

    assert_eq!(tree.viewport.style.transition, None);
    assert_eq!(
        tree.root.style.get("transition").as_deref(),
        Some("height 500ms ease")
    );
}

#[test]
fn test_classes_overrides_and_processor() {
    let config = SliderConfig::new(2)
        .class_name("slider")
        .viewport_class_name("slider-viewport")
        .style(Style::new().with("background", "white"))
        .viewport_style(Style::new().with("will-change", "transform"))
        .fill_parent(true)
        .style_processor(VendorPrefixer::default());
    let mut host = MockHost::new(&[50.0, 60.0]);
    let mut slider = ViewSlider::new(config).unwrap();
    host.mount(&mut slider);

    let tree = slider.render(|_| ());

    assert_eq!(tree.root.id, NodeId::Root);
    assert_eq!(tree.root.class_name.as_deref(), Some("slider"));
    assert_eq!(tree.viewport.class_name.as_deref(), Some("slider-viewport"));
    assert_eq!(tree.root.style.get("background").as_deref(), Some("white"));
    assert_eq!(tree.root.style.position, Some(Position::Absolute));
    assert_eq!(tree.root.style.get("height").as_deref(), Some("50px"));
    assert_eq!(
        tree.viewport.style.get("will-change").as_deref(),
        Some("transform")
    );
    assert_eq!(
        tree.viewport.style.get("-webkit-transform").as_deref(),
        Some("translateX(0)")
    );
    assert_eq!(tree.view(0).unwrap().id(), NodeId::View(0));
    assert_eq!(tree.view(0).unwrap().style().left, Some(Length::Percent(0.0)));
}
