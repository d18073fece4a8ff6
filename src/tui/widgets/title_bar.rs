/// TitleBar widget - window title on the left, window controls on the right
///
/// The controls are decorative; the simulated window cannot be minimized,
/// maximized or closed from here.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::{put_str, RenderableWidget};

#[derive(Debug, Clone)]
pub struct TitleBar {
    pub title: String,
}

impl TitleBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    fn controls(config: &DisplayConfig) -> &'static str {
        if config.use_unicode {
            "−  □  × "
        } else {
            "_  o  x "
        }
    }
}

impl RenderableWidget for TitleBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        put_str(buf, area, area.x + 1, area.y, &self.title, Style::default().add_modifier(Modifier::BOLD));

        let controls = Self::controls(config);
        let controls_width = controls.width() as u16;
        let title_end = area.x + 1 + self.title.width() as u16;
        let controls_x = area.right().saturating_sub(controls_width);
        if controls_x > title_end {
            put_str(buf, area, controls_x, area.y, controls, Style::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_title_bar_rendering() {
        let buf = render_widget(&TitleBar::new("Chrome"), 20, 1);
        assert_buffer_line(&buf, 0, " Chrome     −  □  × ");
    }

    #[test]
    fn test_title_bar_ascii() {
        let buf = render_widget_with_config(&TitleBar::new("Chrome"), 20, 1, &test_config_ascii());
        assert_buffer_line(&buf, 0, " Chrome     _  o  x ");
    }

    #[test]
    fn test_title_bar_narrow_hides_controls() {
        let buf = render_widget(&TitleBar::new("Chrome"), 12, 1);
        assert_buffer_line(&buf, 0, " Chrome     ");
    }
}
