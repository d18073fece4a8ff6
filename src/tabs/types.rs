/// Core tab types
///
/// These are independent of any terminal rendering so the tab state machine
/// can be driven and tested on its own.
use std::fmt;

use serde::Deserialize;

/// Identifier of a tab, unique within a [`TabStore`](super::TabStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a tab displays
///
/// Parsing is total: any name other than `google` or `chat` is a blank tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum TabKind {
    #[default]
    Google,
    Chat,
    Blank,
}

impl TabKind {
    /// Title shown in the tab strip for a freshly created tab
    pub fn title(&self) -> &'static str {
        match self {
            Self::Chat => "New Chat",
            Self::Google | Self::Blank => "Google",
        }
    }

    /// Single-glyph icon drawn before the title
    pub fn favicon(&self) -> &'static str {
        match self {
            Self::Google => "G",
            Self::Chat => "◆",
            Self::Blank => "○",
        }
    }

    /// Text shown in the address bar while this tab is active
    pub fn address(&self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::Chat | Self::Blank => "chat.new",
        }
    }

    /// Lowercase name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Chat => "chat",
            Self::Blank => "blank",
        }
    }
}

impl From<&str> for TabKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "google" => Self::Google,
            "chat" => Self::Chat,
            _ => Self::Blank,
        }
    }
}

impl From<String> for TabKind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for TabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single addressable pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub kind: TabKind,
}

impl Tab {
    pub fn new(id: TabId, kind: TabKind) -> Self {
        Self {
            id,
            title: kind.title().to_string(),
            kind,
        }
    }
}

/// Which way the content pane should slide after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Neutral,
}

/// Outcome of a successful controller operation
///
/// The direction is an auxiliary output; it is never stored on the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub active: TabId,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(TabKind::from("google"), TabKind::Google);
        assert_eq!(TabKind::from("Chat"), TabKind::Chat);
        assert_eq!(TabKind::from(" chat "), TabKind::Chat);
        assert_eq!(TabKind::from("settings"), TabKind::Blank);
        assert_eq!(TabKind::from(""), TabKind::Blank);
    }

    #[test]
    fn test_kind_titles() {
        assert_eq!(TabKind::Google.title(), "Google");
        assert_eq!(TabKind::Chat.title(), "New Chat");
        // Unknown kinds get the non-chat title
        assert_eq!(TabKind::Blank.title(), "Google");
    }

    #[test]
    fn test_kind_address() {
        assert_eq!(TabKind::Google.address(), "google.com");
        assert_eq!(TabKind::Chat.address(), "chat.new");
        assert_eq!(TabKind::Blank.address(), "chat.new");
    }

    #[test]
    fn test_tab_new_derives_title() {
        let tab = Tab::new(TabId(7), TabKind::Chat);
        assert_eq!(tab.id, TabId(7));
        assert_eq!(tab.title, "New Chat");
    }

    #[test]
    fn test_kind_deserializes_from_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            kinds: Vec<TabKind>,
        }
        let parsed: Wrapper = toml::from_str(r#"kinds = ["google", "chat", "other"]"#).unwrap();
        assert_eq!(parsed.kinds, vec![TabKind::Google, TabKind::Chat, TabKind::Blank]);
    }

    #[test]
    fn test_direction_default_is_neutral() {
        assert_eq!(Direction::default(), Direction::Neutral);
    }
}
