/// Content pane widgets, one per tab kind
///
/// Layout helpers are public so pointer hit testing can find the clickable
/// affordances without rendering.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use crate::config::DisplayConfig;
use crate::tui::action::SearchButton;
use crate::tui::widgets::{put_str, RenderableWidget};

const WORDMARK: &str = "Google";
const WORDMARK_COLORS: [Color; 6] = [
    Color::Rgb(66, 133, 244),
    Color::Rgb(234, 67, 53),
    Color::Rgb(251, 188, 5),
    Color::Rgb(66, 133, 244),
    Color::Rgb(52, 168, 83),
    Color::Rgb(234, 67, 53),
];
const SEARCH_PLACEHOLDER: &str = "Search Google or type a URL";
const SEARCH_BOX_MAX_WIDTH: u16 = 50;
const BUTTON_GAP: u16 = 2;
/// wordmark, gap, 3-line search box, gap, buttons
const GOOGLE_BLOCK_HEIGHT: u16 = 7;

const CHAT_HEADER: &str = "New Chat";
const CHAT_BUTTON: &str = "[ + Start New Chat ]";

fn button_text(button: SearchButton) -> String {
    format!("[ {} ]", button.label())
}

/// Center a `width` wide span inside `area`
fn centered_x(area: Rect, width: u16) -> u16 {
    area.x + area.width.saturating_sub(width) / 2
}

/// Where everything on the Google pane sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoogleLayout {
    pub wordmark: Rect,
    pub search_box: Rect,
    pub search_button: Rect,
    pub lucky_button: Rect,
}

impl GoogleLayout {
    pub fn compute(area: Rect) -> Self {
        let top = area.y + area.height.saturating_sub(GOOGLE_BLOCK_HEIGHT) / 2;

        let wordmark_width = WORDMARK.len() as u16;
        let wordmark = Rect::new(centered_x(area, wordmark_width), top, wordmark_width, 1);

        let box_width = area.width.saturating_sub(4).min(SEARCH_BOX_MAX_WIDTH);
        let search_box = Rect::new(centered_x(area, box_width), top + 2, box_width, 3);

        let search_width = button_text(SearchButton::Search).width() as u16;
        let lucky_width = button_text(SearchButton::Lucky).width() as u16;
        let buttons_x = centered_x(area, search_width + BUTTON_GAP + lucky_width);
        let search_button = Rect::new(buttons_x, top + 6, search_width, 1);
        let lucky_button = Rect::new(buttons_x + search_width + BUTTON_GAP, top + 6, lucky_width, 1);

        Self {
            wordmark: wordmark.intersection(area),
            search_box: search_box.intersection(area),
            search_button: search_button.intersection(area),
            lucky_button: lucky_button.intersection(area),
        }
    }

    pub fn button_at(&self, x: u16, y: u16) -> Option<SearchButton> {
        let position = ratatui::layout::Position::new(x, y);
        if self.search_button.contains(position) {
            Some(SearchButton::Search)
        } else if self.lucky_button.contains(position) {
            Some(SearchButton::Lucky)
        } else {
            None
        }
    }
}

/// Google home page: wordmark, search box, two action buttons
#[derive(Debug, Clone)]
pub struct GooglePane {
    pub query: String,
    pub focused: bool,
}

impl GooglePane {
    /// Trailing part of `text` that fits in `width` columns
    fn visible_tail(text: &str, width: usize) -> &str {
        let mut used = 0;
        let mut start = text.len();
        for (i, c) in text.char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start = i;
        }
        &text[start..]
    }

    fn render_search_box(&self, rect: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if rect.width < 4 || rect.height < 3 {
            return;
        }
        let chars = &config.box_chars;
        let border = if self.focused {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default().fg(Color::Gray)
        };
        let inner_width = (rect.width - 2) as usize;

        let top = format!("{}{}{}", chars.top_left, chars.horizontal.repeat(inner_width), chars.top_right);
        let bottom = format!("{}{}{}", chars.bottom_left, chars.horizontal.repeat(inner_width), chars.bottom_right);
        put_str(buf, rect, rect.x, rect.y, &top, border);
        put_str(buf, rect, rect.x, rect.y + 2, &bottom, border);
        put_str(buf, rect, rect.x, rect.y + 1, &chars.vertical, border);
        put_str(buf, rect, rect.right() - 1, rect.y + 1, &chars.vertical, border);

        // One column of padding each side, one for the cursor
        let text_width = inner_width.saturating_sub(3);
        let text_x = rect.x + 2;
        if self.query.is_empty() && !self.focused {
            put_str(buf, rect, text_x, rect.y + 1, Self::visible_tail(SEARCH_PLACEHOLDER, text_width), Style::default().fg(Color::DarkGray));
        } else {
            let shown = Self::visible_tail(&self.query, text_width);
            let end = put_str(buf, rect, text_x, rect.y + 1, shown, Style::default());
            if self.focused {
                put_str(buf, rect, end, rect.y + 1, "_", Style::default().add_modifier(Modifier::SLOW_BLINK));
            }
        }
    }
}

impl RenderableWidget for GooglePane {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let layout = GoogleLayout::compute(area);

        for (i, c) in WORDMARK.chars().enumerate() {
            let style = Style::default().fg(WORDMARK_COLORS[i]).add_modifier(Modifier::BOLD);
            put_str(buf, area, layout.wordmark.x + i as u16, layout.wordmark.y, &c.to_string(), style);
        }

        self.render_search_box(layout.search_box, buf, config);

        for (button, rect) in [
            (SearchButton::Search, layout.search_button),
            (SearchButton::Lucky, layout.lucky_button),
        ] {
            put_str(buf, area, rect.x, rect.y, &button_text(button), Style::default());
        }
    }
}

/// Where the chat pane's header and button sit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    pub button: Rect,
}

impl ChatLayout {
    pub fn compute(area: Rect) -> Self {
        let header = Rect::new(area.x + 2, area.y + 1, CHAT_HEADER.len() as u16, 1);
        let button = Rect::new(area.x + 2, area.y + 3, CHAT_BUTTON.len() as u16, 1);
        Self {
            header: header.intersection(area),
            button: button.intersection(area),
        }
    }

    pub fn is_button(&self, x: u16, y: u16) -> bool {
        self.button.contains(ratatui::layout::Position::new(x, y))
    }
}

/// Chat pane: a header and a button that opens another chat tab
#[derive(Debug, Clone)]
pub struct ChatPane {
    pub focused: bool,
}

impl RenderableWidget for ChatPane {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let layout = ChatLayout::compute(area);
        put_str(buf, area, layout.header.x, layout.header.y, CHAT_HEADER, Style::default().add_modifier(Modifier::BOLD));

        let button_style = if self.focused {
            Style::default().fg(config.selection_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        put_str(buf, area, layout.button.x, layout.button.y, CHAT_BUTTON, button_style);
        if self.focused && layout.button.x >= area.x + 2 {
            put_str(buf, area, layout.button.x - 2, layout.button.y, &config.box_chars.selector, button_style);
        }
    }
}

/// Fallback pane for tabs of unknown kind
#[derive(Debug, Clone)]
pub struct BlankPane;

impl RenderableWidget for BlankPane {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        let heading = "New Tab";
        let hint = "Type a URL or search term";
        let top = area.y + area.height.saturating_sub(3) / 2;
        put_str(buf, area, centered_x(area, heading.len() as u16), top, heading, Style::default().add_modifier(Modifier::BOLD));
        put_str(buf, area, centered_x(area, hint.len() as u16), top + 2, hint, Style::default());
    }
}
