/// Vertical arrangement of the browser chrome
///
/// The App component and pointer hit testing both split the screen with
/// these constraints, so a click always maps to what was drawn there.
use ratatui::layout::Rect;

use super::component::{Constraint, ContainerLayout};
use super::renderer::Renderer;

/// Title bar, tab strip, toolbar, content, status bar
pub const CHROME_CONSTRAINTS: [Constraint; 5] = [
    Constraint::Length(1),
    Constraint::Length(2),
    Constraint::Length(1),
    Constraint::Min(0),
    Constraint::Length(2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeLayout {
    pub title_bar: Rect,
    pub tab_strip: Rect,
    pub toolbar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl ChromeLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Renderer::calculate_layout(&ContainerLayout::Vertical(CHROME_CONSTRAINTS.to_vec()), area);
        Self {
            title_bar: chunks[0],
            tab_strip: chunks[1],
            toolbar: chunks[2],
            content: chunks[3],
            status_bar: chunks[4],
        }
    }
}
