use ratatui::{buffer::Buffer, layout::Rect};

use super::action::Action;
use super::state::TransitionState;
use super::widgets::RenderableWidget;
use crate::config::DisplayConfig;

/// Core component trait - like React.Component
///
/// Components turn a slice of state (their props) into an Element tree.
/// They hold no state of their own; everything lives in `AppState`.
pub trait Component {
    /// Props type for this component
    type Props;

    /// Render component given props (pure function)
    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// A child sliding in horizontally while a transition runs
    Slide { child: Box<Element>, transition: TransitionState },

    /// Nothing to render
    None,
}

impl Element {
    /// Wrap a widget
    pub fn widget(widget: impl ElementWidget + 'static) -> Self {
        Element::Widget(Box::new(widget))
    }
}

/// Layout for container elements
#[derive(Clone, Debug)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
}

impl From<Constraint> for ratatui::layout::Constraint {
    fn from(constraint: Constraint) -> Self {
        match constraint {
            Constraint::Length(n) => ratatui::layout::Constraint::Length(n),
            Constraint::Min(n) => ratatui::layout::Constraint::Min(n),
        }
    }
}

/// Side effects returned by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Action(Action),
}

/// Trait for widgets that can be wrapped in the Element tree
///
/// Any cloneable [`RenderableWidget`] qualifies; the extra bounds let
/// element trees be cloned and moved between threads.
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;
}

impl<T> ElementWidget for T
where
    T: RenderableWidget + Clone + Send + Sync + 'static,
{
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        RenderableWidget::render(self, area, buf, config);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}
