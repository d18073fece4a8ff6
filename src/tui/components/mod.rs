pub mod app;
pub mod content;
pub mod status_bar;

pub use app::App;
pub use content::{Content, ContentProps};
pub use status_bar::StatusBar;
