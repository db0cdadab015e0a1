use serde::Deserialize;

use crate::relay::{Action, DEFAULT_STYLE};

/// Styles offered for paraphrasing, as (value, label).
pub const PARAPHRASE_STYLES: [(&str, &str); 4] = [
    ("formal", "Formal"),
    ("casual", "Casual"),
    ("concise", "Concise"),
    ("detailed", "Detailed"),
];

/// Posted workbench form. The previous output rides along in hidden fields
/// so a failed request can redraw it unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct WorkbenchForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub previous_output: Option<String>,
    #[serde(default)]
    pub previous_language: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub fn no_text() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "No text provided",
            description: "Please enter some text to process.",
        }
    }

    pub fn processed() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Processing complete",
            description: "Your text has been successfully processed.",
        }
    }

    pub fn failed() -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Processing failed",
            description: "There was an error processing your text. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbenchView {
    pub input: String,
    pub selected: Action,
    pub style: String,
    pub output: Option<String>,
    pub detected_language: Option<String>,
    pub notice: Option<Notice>,
}

impl Default for WorkbenchView {
    fn default() -> Self {
        Self {
            input: String::new(),
            selected: Action::Translate,
            style: DEFAULT_STYLE.to_string(),
            output: None,
            detected_language: None,
            notice: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl WorkbenchView {
    /// State to redraw if the submission changes nothing.
    pub fn from_form(form: &WorkbenchForm) -> Self {
        Self {
            input: form.text.clone(),
            selected: form
                .action
                .as_deref()
                .and_then(|a| a.parse().ok())
                .unwrap_or(Action::Translate),
            style: non_empty(form.style.clone()).unwrap_or_else(|| DEFAULT_STYLE.to_string()),
            output: non_empty(form.previous_output.clone()),
            detected_language: non_empty(form.previous_language.clone()),
            notice: None,
        }
    }
}
