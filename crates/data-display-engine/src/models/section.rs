use serde::{Deserialize, Serialize};

/// A titled block of content destined for one collapsible card.
///
/// Both fields hold raw text. Escaping happens only when the section is
/// rendered, so a `Section` can be inspected or serialized as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
