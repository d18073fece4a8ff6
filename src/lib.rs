pub mod config;
pub mod formatting;
pub mod tabs;
pub mod tui;
