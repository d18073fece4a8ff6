//! General test utilities for TUI tests.
//!
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::tui::component::Component;
use crate::tui::components::App;
use crate::tui::renderer::Renderer;
use crate::tui::state::AppState;
use crate::tui::widgets::testing::test_config;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

/// Render the whole chrome for `state` into a RENDER_WIDTH x `height` buffer
pub fn render_app(state: &AppState, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, RENDER_WIDTH, height));
    Renderer::new().render(&App.view(state), buf.area, &mut buf, &test_config());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_lines_pads_to_width() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
        buf.set_string(0, 0, "ab", ratatui::style::Style::default());
        assert_eq!(buffer_lines(&buf), vec!["ab   ".to_string(), "     ".to_string()]);
    }

    #[test]
    fn test_render_app_fills_requested_height() {
        let buf = render_app(&AppState::default(), 24);
        assert_eq!(buffer_lines(&buf).len(), 24);
        assert!(buffer_lines(&buf)[0].starts_with(" Chrome"));
    }
}
