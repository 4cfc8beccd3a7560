pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{DEFAULT_THEME_COLOR, DEFAULT_TITLE, DisplayOptions, Section};
pub use parsing::parse_sections;
pub use render::{render_error_page, render_page};

/// A rendered page together with the number of sections it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub html: String,
    pub section_count: usize,
}

/// Parse `raw` and render it as a complete HTML page.
pub fn generate(raw: &str, options: &DisplayOptions) -> String {
    generate_with_summary(raw, options).html
}

/// Like [`generate`], also reporting how many sections were found.
pub fn generate_with_summary(raw: &str, options: &DisplayOptions) -> GeneratedPage {
    let sections = parse_sections(raw, options.auto_parse_structured);
    log::debug!(
        "parsed {} byte input into {} section(s)",
        raw.len(),
        sections.len()
    );

    GeneratedPage {
        html: render_page(&sections, options),
        section_count: sections.len(),
    }
}
