pub mod display_options;
pub mod section;

pub use display_options::{DEFAULT_THEME_COLOR, DEFAULT_TITLE, DisplayOptions};
pub use section::Section;
