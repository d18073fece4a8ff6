use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;
use tracing::warn;

use crate::formatting::BoxChars;
use crate::tabs::store::DEFAULT_SEED;
use crate::tabs::TabKind;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// strftime format of the status bar clock
    pub time_format: String,
    /// Kinds of the tabs opened at startup, in strip order
    pub seed_tabs: Vec<TabKind>,
    /// Interval between animation ticks
    pub tick_rate_ms: u64,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
    /// Derived from `use_unicode` once the file is loaded
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            time_format: "%H:%M:%S".to_string(),
            seed_tabs: DEFAULT_SEED.to_vec(),
            tick_rate_ms: 50,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            selection_fg: Color::Rgb(66, 133, 244), // Google blue
            unfocused_selection_fg: None,
            error_fg: Color::Red,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl DisplayConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }

    /// Switch between unicode and ascii box drawing
    pub fn set_use_unicode(&mut self, use_unicode: bool) {
        self.use_unicode = use_unicode;
        self.box_chars = BoxChars::from_use_unicode(use_unicode);
    }
}

impl Config {
    /// Parse a config file body, filling derived fields
    pub fn from_toml_str(content: &str) -> Result<Config, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        let use_unicode = config.display.use_unicode;
        config.display.set_use_unicode(use_unicode);
        Ok(config)
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", config_path.display(), e);
            return Config::default();
        }
    };

    Config::from_toml_str(&content).unwrap_or_else(|e| {
        warn!("Ignoring invalid config {}: {}", config_path.display(), e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("GREY"), Some(Color::Gray));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn test_unfocused_selection_is_darkened() {
        let display = DisplayConfig {
            selection_fg: Color::Rgb(200, 100, 50),
            ..DisplayConfig::default()
        };
        assert_eq!(display.unfocused_selection_fg(), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_unfocused_selection_explicit() {
        let display = DisplayConfig {
            unfocused_selection_fg: Some(Color::Gray),
            ..DisplayConfig::default()
        };
        assert_eq!(display.unfocused_selection_fg(), Color::Gray);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.seed_tabs, vec![TabKind::Google, TabKind::Chat]);
        assert_eq!(config.log_file, "/dev/null");
        assert!(config.display.use_unicode);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
log_level = "debug"
seed_tabs = ["chat", "google", "chat"]
tick_rate_ms = 20

[display]
use_unicode = false
selection_fg = "#00FFFF"
        "##;

        let config = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.seed_tabs, vec![TabKind::Chat, TabKind::Google, TabKind::Chat]);
        assert_eq!(config.tick_rate_ms, 20);
        assert_eq!(config.display.selection_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.display.box_chars, BoxChars::ascii());
        // Unspecified fields keep their defaults
        assert_eq!(config.time_format, "%H:%M:%S");
    }

    #[test]
    fn test_config_invalid_color_is_error() {
        let toml_str = r#"
[display]
selection_fg = "notacolor"
        "#;
        assert!(Config::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_set_use_unicode_updates_box_chars() {
        let mut display = DisplayConfig::default();
        display.set_use_unicode(false);
        assert_eq!(display.box_chars.vertical, "|");
        display.set_use_unicode(true);
        assert_eq!(display.box_chars.vertical, "│");
    }
}
