use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "LLM Data Display";
pub const DEFAULT_THEME_COLOR: &str = "#4F46E5";

/// Per-call display configuration for a rendered page.
///
/// Every front end builds its own value; nothing here is shared between
/// calls. Missing fields deserialize to their defaults so the struct can
/// be embedded directly in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Page heading and document title
    pub title: String,
    /// Accent color as a hex string, `#` optional
    pub theme_color: String,
    /// Try JSON before the plain-text heuristics
    pub auto_parse_structured: bool,
    /// Start every card collapsed
    pub collapsed_by_default: bool,
    /// Header link back to the input form, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_link: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            auto_parse_structured: true,
            collapsed_by_default: false,
            back_link: None,
        }
    }
}

impl DisplayOptions {
    /// Override the title. `None` or an empty string keeps the current one.
    pub fn with_title(mut self, title: Option<&str>) -> Self {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.title = title.to_string();
        }
        self
    }

    /// Override the theme color. `None` or an empty string keeps the current one.
    pub fn with_theme_color(mut self, theme_color: Option<&str>) -> Self {
        if let Some(color) = theme_color.filter(|c| !c.is_empty()) {
            self.theme_color = color.to_string();
        }
        self
    }

    pub fn with_auto_parse(mut self, auto_parse_structured: bool) -> Self {
        self.auto_parse_structured = auto_parse_structured;
        self
    }

    pub fn with_collapsed(mut self, collapsed_by_default: bool) -> Self {
        self.collapsed_by_default = collapsed_by_default;
        self
    }

    pub fn with_back_link(mut self, href: impl Into<String>) -> Self {
        self.back_link = Some(href.into());
        self
    }
}
