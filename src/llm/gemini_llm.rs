use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::interface::{GenerativeClient, UpstreamError};
use super::reply::{GenerateContentRequest, UpstreamReply};
use crate::config::UpstreamEndpoint;

/// Header the Gemini API reads the key from.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client.
/// The endpoint URL is used as configured, including the model path.
#[derive(Debug, Clone, Default)]
pub struct GeminiClient {
    client: Client,
}

impl GeminiClient {
    pub fn new() -> Self {
        info!("Initialized GeminiClient");
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(
        &self,
        endpoint: &UpstreamEndpoint,
        prompt: &str,
    ) -> Result<UpstreamReply, UpstreamError> {
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&endpoint.api_url)
            .header(API_KEY_HEADER, &endpoint.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.to_string()));
        }

        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        let reply = UpstreamReply::from_value(&value);
        if reply == UpstreamReply::Malformed {
            debug!("Upstream reply had no candidate text");
        }
        Ok(reply)
    }
}
