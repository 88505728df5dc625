//! Confirmation prompt text

use serde::{Deserialize, Serialize};

const TITLE_TEXT: &str = "Lose your changes?";
const DESCRIPTION_TEXT: &str =
    "If you continue, you will lose any unsaved changes. Are you sure you want to continue?";

/// Texts shown by the "discard unsaved changes" confirmation prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertDetails {
    pub title: String,
    pub description: String,
    pub yes_text: String,
    pub no_text: String,
}

impl AlertDetails {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        yes_text: impl Into<String>,
        no_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            yes_text: yes_text.into(),
            no_text: no_text.into(),
        }
    }
}

impl Default for AlertDetails {
    fn default() -> Self {
        Self::new(TITLE_TEXT, DESCRIPTION_TEXT, "Yes", "No")
    }
}
