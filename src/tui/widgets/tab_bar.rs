/// TabStrip widget - the row of browser tabs under the title bar
///
/// Each tab is drawn as `favicon title ×`, tabs are separated by the vertical
/// box character, and a `+` new-tab button follows the last tab. The second
/// line is a separator with junctions under the gaps and an opening under the
/// active tab. When the tabs do not all fit, the strip scrolls so the active
/// tab and the `+` button stay visible.
///
/// The geometry lives in [`TabStripLayout`] so pointer hit testing and
/// rendering agree on where every tab and close button sits.

use std::ops::Range;

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tabs::{Tab, TabId};
use crate::tui::widgets::{put_str, RenderableWidget};

/// Longest title shown before truncation
pub const MAX_TITLE_WIDTH: usize = 16;

/// Display data for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub id: TabId,
    pub favicon: String,
    pub title: String,
}

impl TabLabel {
    pub fn from_tab(tab: &Tab) -> Self {
        Self {
            id: tab.id,
            favicon: tab.kind.favicon().to_string(),
            title: truncate_title(&tab.title),
        }
    }

    /// Rendered text, padded on both sides
    fn text(&self, close_glyph: &str) -> String {
        format!(" {} {} {} ", self.favicon, self.title, close_glyph)
    }
}

/// Shorten `title` to at most MAX_TITLE_WIDTH columns, ending in an ellipsis
fn truncate_title(title: &str) -> String {
    if title.width() <= MAX_TITLE_WIDTH {
        return title.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in title.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > MAX_TITLE_WIDTH - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// What a click on the tab strip lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripTarget {
    Tab(TabId),
    Close(TabId),
    NewTab,
}

/// A clickable span of columns on the tab line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripRegion {
    pub target: StripTarget,
    pub x: u16,
    pub width: u16,
}

impl StripRegion {
    fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.x + self.width
    }
}

/// Column positions of every tab, close button and separator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStripLayout {
    pub regions: Vec<StripRegion>,
    pub separators: Vec<u16>,
}

impl TabStripLayout {
    /// Lay out the tabs that fit, scrolled so `active` and the `+` button stay on screen
    pub fn compute(labels: &[TabLabel], active: TabId, area: Rect, config: &DisplayConfig) -> Self {
        let close_glyph = close_glyph(config);
        let widths: Vec<u16> = labels.iter().map(|l| l.text(close_glyph).width() as u16).collect();
        let active_index = labels.iter().position(|l| l.id == active).unwrap_or(0);
        let visible = visible_range(&widths, active_index, area.width);

        let right = area.right();
        let mut layout = Self::default();
        let mut x = area.x;

        for (i, (label, &width)) in labels[visible.clone()].iter().zip(&widths[visible.clone()]).enumerate() {
            if i > 0 {
                if x >= right {
                    return layout;
                }
                layout.separators.push(x);
                x += 1;
            }
            if x + width > right {
                return layout;
            }
            layout.regions.push(StripRegion { target: StripTarget::Tab(label.id), x, width });
            layout.regions.push(StripRegion {
                target: StripTarget::Close(label.id),
                x: x + width - 2,
                width: 1,
            });
            x += width;
        }

        if !visible.is_empty() {
            if x >= right {
                return layout;
            }
            layout.separators.push(x);
            x += 1;
        }
        if x + NEW_TAB_TEXT.len() as u16 <= right {
            layout.regions.push(StripRegion {
                target: StripTarget::NewTab,
                x,
                width: NEW_TAB_TEXT.len() as u16,
            });
        }
        layout
    }

    /// Target under column `x`; close buttons win over the tab they sit in
    pub fn target_at(&self, x: u16) -> Option<StripTarget> {
        self.regions
            .iter()
            .filter(|r| r.contains(x))
            .map(|r| r.target)
            .min_by_key(|t| match t {
                StripTarget::Close(_) => 0,
                _ => 1,
            })
    }

    fn tab_region(&self, id: TabId) -> Option<&StripRegion> {
        self.regions.iter().find(|r| r.target == StripTarget::Tab(id))
    }
}

const NEW_TAB_TEXT: &str = " + ";

/// Tabs to draw in `available` columns
///
/// Starts as far left as possible while the active tab and the new-tab
/// button still fit, then takes as many following tabs as there is room for.
fn visible_range(widths: &[u16], active: usize, available: u16) -> Range<usize> {
    if widths.is_empty() {
        return 0..0;
    }
    let active = active.min(widths.len() - 1);
    // Every tab is followed by a separator, the last one by the new-tab button
    let cost = |range: Range<usize>| -> u32 {
        let tabs: u32 = widths[range.clone()].iter().map(|&w| w as u32).sum();
        tabs + range.len() as u32 + NEW_TAB_TEXT.len() as u32
    };
    let available = available as u32;

    let mut start = 0;
    while start < active && cost(start..active + 1) > available {
        start += 1;
    }
    let mut end = active + 1;
    while end < widths.len() && cost(start..end + 1) <= available {
        end += 1;
    }
    start..end
}

fn close_glyph(config: &DisplayConfig) -> &'static str {
    if config.use_unicode {
        "×"
    } else {
        "x"
    }
}

/// Widget for displaying browser tabs as a horizontal strip
#[derive(Debug, Clone)]
pub struct TabStrip {
    pub labels: Vec<TabLabel>,
    pub active: TabId,
    /// Whether the tab strip has keyboard focus (affects styling)
    pub focused: bool,
}

impl TabStrip {
    pub fn new(tabs: &[Tab], active: TabId, focused: bool) -> Self {
        Self {
            labels: tabs.iter().map(TabLabel::from_tab).collect(),
            active,
            focused,
        }
    }

    fn base_style(&self) -> Style {
        if self.focused {
            Style::default()
        } else {
            Style::default().fg(ratatui::style::Color::DarkGray)
        }
    }

    fn tab_style(&self, id: TabId, config: &DisplayConfig) -> Style {
        let base_style = self.base_style();
        if id != self.active {
            return base_style;
        }
        let fg = if self.focused {
            config.selection_fg
        } else {
            config.unfocused_selection_fg()
        };
        base_style.fg(fg).add_modifier(Modifier::BOLD)
    }
}

impl RenderableWidget for TabStrip {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let layout = TabStripLayout::compute(&self.labels, self.active, area, config);
        let base_style = self.base_style();
        let close = close_glyph(config);

        // Tab line
        for label in &self.labels {
            if let Some(region) = layout.tab_region(label.id) {
                put_str(buf, area, region.x, area.y, &label.text(close), self.tab_style(label.id, config));
            }
        }
        for &x in &layout.separators {
            put_str(buf, area, x, area.y, &config.box_chars.vertical, base_style);
        }
        if let Some(region) = layout.regions.iter().find(|r| r.target == StripTarget::NewTab) {
            put_str(buf, area, region.x, area.y, NEW_TAB_TEXT, base_style);
        }

        // Separator line, open under the active tab
        let y = area.y + 1;
        let open = layout.tab_region(self.active).map(|r| (r.x, r.x + r.width));
        for x in area.left()..area.right() {
            let symbol = if layout.separators.contains(&x) {
                config.box_chars.bottom_junction.as_str()
            } else if open.is_some_and(|(start, end)| x >= start && x < end) {
                " "
            } else {
                config.box_chars.horizontal.as_str()
            };
            put_str(buf, area, x, y, symbol, base_style);
        }
    }
}
