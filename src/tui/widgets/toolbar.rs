/// Toolbar widget - navigation glyphs, address bar, extension and menu glyphs
///
/// Layout: ` ← → ⟳ │ <address......> │ ⧉ ⋮ `. The address field takes every
/// column the glyph groups leave over.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::{put_str, RenderableWidget};

#[derive(Debug, Clone)]
pub struct Toolbar {
    pub address: String,
}

impl Toolbar {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into() }
    }

    fn glyphs(config: &DisplayConfig) -> (&'static str, &'static str) {
        if config.use_unicode {
            (" ← → ⟳ ", " ⧉ ⋮ ")
        } else {
            (" < > @ ", " # : ")
        }
    }
}

impl RenderableWidget for Toolbar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (nav, menu) = Self::glyphs(config);
        let vertical = &config.box_chars.vertical;
        let left = format!("{}{} ", nav, vertical);
        let right = format!(" {}{}", vertical, menu);
        let base = Style::default().fg(Color::Gray);

        let field_x = put_str(buf, area, area.x, area.y, &left, base);
        let field_end = area.right().saturating_sub(right.width() as u16);
        if field_end <= field_x {
            return;
        }

        let field_width = (field_end - field_x) as usize;
        let field = format!("{:<width$}", self.address, width = field_width);
        let field_area = Rect::new(field_x, area.y, field_end - field_x, 1);
        put_str(buf, field_area, field_x, area.y, &field, Style::default().bg(Color::DarkGray));
        put_str(buf, area, field_end, area.y, &right, base);
    }
}
