use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::config::{API_KEY_VAR, API_URL_VAR};
use crate::llm::UpstreamError;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Text and action are required")]
    InvalidRequest,

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Server misconfiguration: missing {} or {}", API_KEY_VAR, API_URL_VAR)]
    ServerMisconfigured,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest | RelayError::InvalidAction(_) => StatusCode::BAD_REQUEST,
            RelayError::ServerMisconfigured | RelayError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent back to HTTP callers. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::InvalidAction(_) => "Invalid action".to_string(),
            RelayError::Upstream(_) => "Failed to process text".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({
                "error": self.public_message(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(RelayError::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RelayError::InvalidAction("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::ServerMisconfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::from(UpstreamError::Status("502 Bad Gateway".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn misconfiguration_names_both_settings() {
        let message = RelayError::ServerMisconfigured.public_message();
        assert!(message.contains("GEMINI_API_KEY"));
        assert!(message.contains("GEMINI_API_URL"));
    }

    #[test]
    fn upstream_details_are_hidden() {
        let err = RelayError::from(UpstreamError::Status("503 Service Unavailable".into()));
        assert!(err.to_string().contains("503"));
        assert_eq!(err.public_message(), "Failed to process text");
    }
}
