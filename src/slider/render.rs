//! Render output: the element tree a host turns into real nodes.

use crate::context::Scope;
use crate::layout::{root_style, view_style, viewport_style, Style};

use super::{SliderConfig, SliderState, TransitionState};

/// Identifies one of the slider's elements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeId {
    Root,
    Viewport,
    View(usize),
}

/// A styled element owned by the slider
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: NodeId,
    pub class_name: Option<String>,
    pub style: Style,
}

/// What the host should put in view slot `index`
#[derive(Clone, Debug, PartialEq)]
pub enum ViewSlot<V> {
    /// Empty box that only keeps the layout spacing; not measurable
    Placeholder { index: usize, style: Style },
    /// A real view wrapping the caller's content
    Mounted {
        index: usize,
        style: Style,
        transition_state: TransitionState,
        content: V,
    },
}

impl<V> ViewSlot<V> {
    pub fn index(&self) -> usize {
        match self {
            ViewSlot::Placeholder { index, .. } | ViewSlot::Mounted { index, .. } => *index,
        }
    }

    pub fn id(&self) -> NodeId {
        NodeId::View(self.index())
    }

    pub fn style(&self) -> &Style {
        match self {
            ViewSlot::Placeholder { style, .. } | ViewSlot::Mounted { style, .. } => style,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ViewSlot::Placeholder { .. })
    }

    pub fn content(&self) -> Option<&V> {
        match self {
            ViewSlot::Placeholder { .. } => None,
            ViewSlot::Mounted { content, .. } => Some(content),
        }
    }

    pub fn transition_state(&self) -> Option<TransitionState> {
        match self {
            ViewSlot::Placeholder { .. } => None,
            ViewSlot::Mounted {
                transition_state, ..
            } => Some(*transition_state),
        }
    }
}

/// Arguments handed to the caller's view renderer
#[derive(Debug, Clone, Copy)]
pub struct ViewProps<'a> {
    pub index: usize,
    /// Whether this is the active view
    pub active: bool,
    pub transition_state: TransitionState,
    /// Context for the view's subtree; provides its [`TransitionState`]
    pub scope: &'a Scope<'a>,
}

/// One render pass: root, viewport, and the view slots in index order
#[derive(Clone, Debug, PartialEq)]
pub struct SliderTree<V> {
    pub root: Element,
    pub viewport: Element,
    pub views: Vec<ViewSlot<V>>,
}

impl<V> SliderTree<V> {
    pub fn view(&self, index: usize) -> Option<&ViewSlot<V>> {
        self.views.get(index)
    }

    /// Slots holding real content
    pub fn mounted(&self) -> impl Iterator<Item = &ViewSlot<V>> {
        self.views.iter().filter(|slot| !slot.is_placeholder())
    }
}

pub(crate) fn build_tree<V>(
    config: &SliderConfig,
    state: &SliderState,
    parent: &Scope<'_>,
    mut render_view: impl FnMut(ViewProps<'_>) -> V,
) -> SliderTree<V> {
    let transitioning = state.transitioning();
    let mount_all = transitioning || config.keep_views_mounted;
    // Views past the active one are skipped entirely until something needs them
    let count = if mount_all {
        config.num_views
    } else {
        (state.active_view + 1).min(config.num_views)
    };

    let mut views = Vec::with_capacity(count);
    for index in 0..count {
        let mut style = view_style(index, config);
        config.process_style(&mut style);

        if !mount_all && index != state.active_view {
            views.push(ViewSlot::Placeholder { index, style });
            continue;
        }

        let transition_state = state.transition_state(index);
        let mut scope = parent.child();
        scope.provide(transition_state);
        let content = render_view(ViewProps {
            index,
            active: index == state.active_view,
            transition_state,
            scope: &scope,
        });
        views.push(ViewSlot::Mounted {
            index,
            style,
            transition_state,
            content,
        });
    }

    let mut root = root_style(config, state.height);
    config.process_style(&mut root);
    let mut viewport = viewport_style(config, state.active_view, transitioning);
    config.process_style(&mut viewport);

    SliderTree {
        root: Element {
            id: NodeId::Root,
            class_name: config.class_name.clone(),
            style: root,
        },
        viewport: Element {
            id: NodeId::Viewport,
            class_name: config.viewport_class_name.clone(),
            style: viewport,
        },
        views,
    }
}
