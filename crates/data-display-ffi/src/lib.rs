//! UniFFI bindings for hosting data-display as a pipeline component
//!
//! A host constructs a [`DisplayComponent`] from its four node settings and
//! calls `build_display` with whatever text the upstream node produced. The
//! result is always a page: failures come back as the error page with
//! `is_error` set, never as a raised fault.

use data_display_engine::{DisplayOptions, GeneratedPage, generate_with_summary, render_error_page};
use std::panic::{self, AssertUnwindSafe};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Failures caught at the component boundary and turned into an error page
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("display generation panicked: {0}")]
    Panicked(String),
}

// ============ Component ============

/// A configured display node.
#[derive(uniffi::Object)]
pub struct DisplayComponent {
    options: DisplayOptions,
}

#[uniffi::export]
impl DisplayComponent {
    /// Create a component from the host's node settings. An empty title or
    /// theme color keeps the default.
    #[uniffi::constructor]
    pub fn new(
        title: String,
        theme_color: String,
        auto_parse_json: bool,
        collapsed_by_default: bool,
    ) -> Self {
        let options = DisplayOptions::default()
            .with_title(Some(&title))
            .with_theme_color(Some(&theme_color))
            .with_auto_parse(auto_parse_json)
            .with_collapsed(collapsed_by_default);
        Self { options }
    }

    /// Create a component with every setting at its default.
    #[uniffi::constructor]
    pub fn with_defaults() -> Self {
        Self {
            options: DisplayOptions::default(),
        }
    }

    /// Render `data_input` into a page.
    pub fn build_display(&self, data_input: String) -> DisplayMessage {
        let result = guarded(|| generate_with_summary(&data_input, &self.options));
        DisplayMessage::from_result(result, &data_input)
    }

    /// Render raw bytes from hosts that do not guarantee UTF-8.
    pub fn build_display_bytes(&self, data_input: Vec<u8>) -> DisplayMessage {
        match String::from_utf8(data_input) {
            Ok(text) => self.build_display(text),
            Err(err) => {
                let preview = String::from_utf8_lossy(err.as_bytes()).into_owned();
                DisplayMessage::from_result(Err(ComponentError::from(err)), &preview)
            }
        }
    }

    pub fn title(&self) -> String {
        self.options.title.clone()
    }

    pub fn theme_color(&self) -> String {
        self.options.theme_color.clone()
    }
}

/// Run a generation step, converting a panic into [`ComponentError::Panicked`]
fn guarded<F>(generate: F) -> Result<GeneratedPage, ComponentError>
where
    F: FnOnce() -> GeneratedPage,
{
    panic::catch_unwind(AssertUnwindSafe(generate)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        ComponentError::Panicked(message)
    })
}

// ============ DTOs ============

/// What the component hands back to the host.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct DisplayMessage {
    /// The complete HTML document, or the error page
    pub text: String,
    /// One-line summary for the host's status display
    pub status: String,
    pub is_error: bool,
}

impl DisplayMessage {
    fn from_result(result: Result<GeneratedPage, ComponentError>, raw_input: &str) -> Self {
        match result {
            Ok(page) => Self {
                text: page.html,
                status: format!("Generated display with {} section(s)", page.section_count),
                is_error: false,
            },
            Err(err) => {
                log::error!("display generation failed: {err}");
                let message = err.to_string();
                Self {
                    text: render_error_page(&message, raw_input),
                    status: format!("Error: {message}"),
                    is_error: true,
                }
            }
        }
    }
}

/// Node metadata a host uses to draw the component and its settings.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct ComponentInfo {
    pub display_name: String,
    pub description: String,
    pub inputs: Vec<InputInfo>,
    pub output_name: String,
}

/// One configurable input of the component.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct InputInfo {
    pub name: String,
    pub display_name: String,
    pub info: String,
    pub required: bool,
}

impl InputInfo {
    fn new(name: &str, display_name: &str, info: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            info: info.to_string(),
            required,
        }
    }
}

// ============ Standalone Functions ============

#[uniffi::export]
pub fn component_info() -> ComponentInfo {
    ComponentInfo {
        display_name: "Interactive Data Display".to_string(),
        description: "Display LLM data in an interactive web page with collapsible sections \
                      and copy-to-clipboard buttons"
            .to_string(),
        inputs: vec![
            InputInfo::new(
                "data_input",
                "Data Input",
                "Input data from an LLM: text, a JSON string, or formatted data",
                true,
            ),
            InputInfo::new("title", "Page Title", "Main title for the display page", false),
            InputInfo::new(
                "theme_color",
                "Theme Color",
                "Primary color for the interface (hex code)",
                false,
            ),
            InputInfo::new(
                "auto_parse_json",
                "Auto Parse JSON",
                "Automatically parse JSON data into sections",
                false,
            ),
            InputInfo::new(
                "collapsed_by_default",
                "Collapsed by Default",
                "Start with all sections collapsed",
                false,
            ),
        ],
        output_name: "html_output".to_string(),
    }
}
