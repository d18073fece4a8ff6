/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused pieces of the chrome that render themselves
/// straight into a ratatui Buffer. Components compose them into the Element
/// tree; tests render them in isolation.

#[cfg(test)]
pub mod testing;

pub mod panes;
pub mod status_bar;
pub mod tab_bar;
pub mod title_bar;
pub mod toolbar;

pub use panes::{BlankPane, ChatLayout, ChatPane, GoogleLayout, GooglePane};
pub use status_bar::StatusBar;
pub use tab_bar::{StripRegion, StripTarget, TabLabel, TabStrip, TabStripLayout};
pub use title_bar::TitleBar;
pub use toolbar::Toolbar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);
}

/// Write `text` at (x, y), clipped to the right edge of `area`
///
/// Returns the column just after the written text.
pub(crate) fn put_str(
    buf: &mut Buffer,
    area: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: ratatui::style::Style,
) -> u16 {
    if x >= area.right() || y >= area.bottom() {
        return x;
    }
    let max_width = (area.right() - x) as usize;
    let (end_x, _) = buf.set_stringn(x, y, text, max_width, style);
    end_x
}
