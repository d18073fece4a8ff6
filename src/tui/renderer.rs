use ratatui::{
    buffer::Buffer,
    layout::{Direction, Layout, Rect},
};

use super::component::{ContainerLayout, Element};
use crate::config::DisplayConfig;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and renders it to the terminal using ratatui.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&self, element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, config),

            Element::Container { children, layout } => {
                let chunks = Self::calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render(child, *chunk, buf, config);
                }
            }

            Element::Slide { child, transition } => {
                let offset = transition.offset(area.width);
                if offset == 0 {
                    self.render(child, area, buf, config);
                } else {
                    self.render_shifted(child, offset, area, buf, config);
                }
            }

            Element::None => {}
        }
    }

    /// Calculate layout constraints and split the area
    pub fn calculate_layout(layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let ContainerLayout::Vertical(constraints) = layout;

        Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints.iter().map(|c| ratatui::layout::Constraint::from(*c)))
            .split(area)
            .to_vec()
    }

    /// Render `child` into a scratch buffer and copy it across with a horizontal shift
    ///
    /// Columns shifted outside `area` are dropped; columns left uncovered keep
    /// whatever `buf` already holds.
    fn render_shifted(&self, child: &Element, offset: i32, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let mut scratch = Buffer::empty(area);
        self.render(child, area, &mut scratch, config);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let target = x as i32 + offset;
                if target < area.left() as i32 || target >= area.right() as i32 {
                    continue;
                }
                buf[(target as u16, y)] = scratch[(x, y)].clone();
            }
        }
    }
}
