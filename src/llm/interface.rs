use async_trait::async_trait;
use thiserror::Error;

use super::reply::UpstreamReply;
use crate::config::UpstreamEndpoint;

/// Failure talking to the generative-language API. Never retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("API request failed: {0}")]
    Status(String),

    #[error("API request could not be sent: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API response was not JSON: {0}")]
    Body(#[from] serde_json::Error),
}

/// Interface for a one-shot text generation backend.
/// One prompt in, one decoded reply out; no conversation state is kept.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(
        &self,
        endpoint: &UpstreamEndpoint,
        prompt: &str,
    ) -> Result<UpstreamReply, UpstreamError>;
}
