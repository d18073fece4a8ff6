pub mod animation;
pub mod content;
pub mod tabs;

pub use animation::reduce_animation;
pub use content::reduce_content;
pub use tabs::reduce_tabs;
