/// Helpers for rendering chrome widgets into a scratch buffer in tests
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::RenderableWidget;
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;

fn config_with(box_chars: BoxChars, use_unicode: bool) -> DisplayConfig {
    DisplayConfig {
        use_unicode,
        selection_fg: Color::Rgb(255, 200, 0),
        unfocused_selection_fg: None,
        error_fg: Color::Red,
        box_chars,
    }
}

/// Unicode box drawing with a fixed palette
pub fn test_config() -> DisplayConfig {
    config_with(BoxChars::unicode(), true)
}

/// ASCII-only variant of [`test_config`]
pub fn test_config_ascii() -> DisplayConfig {
    config_with(BoxChars::ascii(), false)
}

pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Concatenated cell symbols of one buffer row
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    (0..buf.area().width).map(|x| buf[(x, line)].symbol()).collect()
}

pub fn assert_buffer_line(buf: &Buffer, line: u16, expected: &str) {
    let actual = buffer_line(buf, line);
    assert_eq!(
        actual, expected,
        "\nLine {} mismatch:\nExpected: {}\nActual:   {}",
        line, expected, actual
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_config() {
        assert_eq!(test_config_ascii().box_chars.horizontal, "-");
        assert!(!test_config_ascii().use_unicode);
        assert_eq!(test_config().box_chars.horizontal, "─");
    }
}
