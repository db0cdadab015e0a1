use serde::Serialize;
use serde_json::Value;

/// Result text used when the upstream answered but carried no text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated";

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamReply {
    Success { text: String },
    Malformed,
}

impl UpstreamReply {
    /// Decode `candidates[0].content.parts[0].text`.
    ///
    /// Walks the JSON by pointer instead of typed structs so that a missing
    /// level or a value of the wrong type both land on `Malformed`. An empty
    /// string counts as missing.
    pub fn from_value(value: &Value) -> Self {
        match value
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
        {
            Some(text) if !text.is_empty() => UpstreamReply::Success {
                text: text.to_string(),
            },
            _ => UpstreamReply::Malformed,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            UpstreamReply::Success { text } => text,
            UpstreamReply::Malformed => NO_RESPONSE_PLACEHOLDER.to_string(),
        }
    }
}
