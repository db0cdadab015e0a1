use serde::{Deserialize, Serialize};

use super::action::Action;
use super::error::RelayError;

pub const DEFAULT_STYLE: &str = "formal";

/// Label reported for translations. The relay does no detection of its own.
pub const DETECTED_LANGUAGE_LABEL: &str = "Auto-detected";

/// Request as it arrives on the wire; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

/// Request with text and action present; the action is still unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    pub text: String,
    pub action: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub text: String,
    pub action: Action,
    pub style: String,
}

impl ProcessRequest {
    pub fn new(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            action: Some(action.into()),
            style: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Presence checks only. Parsing the action waits until the
    /// credentials have been checked.
    pub fn require_fields(self) -> Result<RequiredFields, RelayError> {
        let text = self
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or(RelayError::InvalidRequest)?;
        let action = self
            .action
            .filter(|a| !a.is_empty())
            .ok_or(RelayError::InvalidRequest)?;
        let style = self
            .style
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STYLE.to_string());

        Ok(RequiredFields {
            text,
            action,
            style,
        })
    }
}

impl RequiredFields {
    pub fn parse_action(self) -> Result<ValidRequest, RelayError> {
        let action = self.action.parse::<Action>()?;
        Ok(ValidRequest {
            text: self.text,
            action,
            style: self.style,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub result: String,
    pub detected_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_invalid_request() {
        for text in [None, Some(""), Some("   \n\t")] {
            let request = ProcessRequest {
                text: text.map(str::to_string),
                action: Some("summarize".to_string()),
                style: None,
            };
            assert!(matches!(request.require_fields(), Err(RelayError::InvalidRequest)));
        }
    }

    #[test]
    fn missing_action_wins_over_unknown_action_check() {
        let request = ProcessRequest {
            text: Some("hello".to_string()),
            action: None,
            style: None,
        };
        assert!(matches!(request.require_fields(), Err(RelayError::InvalidRequest)));
    }

    #[test]
    fn unknown_action_passes_presence_check() {
        let fields = ProcessRequest::new("hello", "shout").require_fields().unwrap();
        assert_eq!(fields.action, "shout");
        let err = fields.parse_action().unwrap_err();
        assert!(matches!(err, RelayError::InvalidAction(ref a) if a == "shout"));
    }

    #[test]
    fn style_defaults_to_formal_and_text_is_untouched() {
        let valid = ProcessRequest::new("  padded  ", "paraphrase")
            .require_fields()
            .and_then(RequiredFields::parse_action)
            .unwrap();
        assert_eq!(valid.style, "formal");
        assert_eq!(valid.text, "  padded  ");
        assert_eq!(valid.action, Action::Paraphrase);
    }

    #[test]
    fn result_uses_camel_case_and_keeps_null() {
        let json = serde_json::to_value(ProcessResult {
            result: "ok".to_string(),
            detected_language: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "result": "ok", "detectedLanguage": null }));
    }
}
