/// StatusBar widget - displays status information at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: left status message (or error) │ right clock
///
/// Error messages are displayed with the error color when present.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::{put_str, RenderableWidget};

#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    /// Preformatted clock text
    pub clock: String,
}

impl StatusBar {
    pub fn new(clock: impl Into<String>) -> Self {
        Self {
            clock: clock.into(),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: Option<String>, is_error: bool) -> Self {
        self.message = message;
        self.is_error = is_error;
        self
    }

    fn left_text(&self) -> String {
        match (&self.message, self.is_error) {
            (Some(msg), true) => format!("ERROR: {}", msg),
            (Some(msg), false) => msg.clone(),
            (None, _) => String::new(),
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let chars = &config.box_chars;
        let right_text = format!(" {} ", self.clock);
        let bar_position = area.width.saturating_sub(right_text.width() as u16 + 1);

        // First line: horizontal separator with connector
        let left_part = chars.horizontal.repeat(bar_position as usize);
        let right_part = chars.horizontal.repeat(area.width.saturating_sub(bar_position + 1) as usize);
        let line1 = format!("{}{}{}", left_part, chars.top_junction, right_part);
        put_str(buf, area, area.x, area.y, &line1, Style::default());

        // Second line: status message on left, clock on right
        let y = area.y + 1;
        let bar_x = area.x + bar_position;
        let left_text = self.left_text();
        if !left_text.is_empty() && bar_position > 1 {
            let style = if self.is_error {
                Style::default().fg(config.error_fg)
            } else {
                Style::default()
            };
            let left_area = Rect::new(area.x, y, bar_position.saturating_sub(1), 1);
            put_str(buf, left_area, area.x + 1, y, &left_text, style);
        }
        put_str(buf, area, bar_x, y, &chars.vertical, Style::default());
        put_str(buf, area, bar_x + 1, y, &right_text, Style::default());
    }
}
