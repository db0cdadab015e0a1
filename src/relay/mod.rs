pub mod action;
pub mod error;
pub mod prompt;
pub mod types;

pub use action::Action;
pub use error::RelayError;
pub use types::*;

use std::sync::Arc;

use tracing::{error, info, Instrument};
use uuid::Uuid;

use crate::config::UpstreamConfig;
use crate::llm::GenerativeClient;

/// Turns a text request into one call to the generative-language API.
///
/// Stateless apart from its configuration: every call validates, builds a
/// prompt, sends it once and returns whatever came back.
pub struct Relay {
    upstream: UpstreamConfig,
    client: Arc<dyn GenerativeClient>,
}

impl Relay {
    pub fn new(upstream: UpstreamConfig, client: Arc<dyn GenerativeClient>) -> Self {
        Self { upstream, client }
    }

    pub fn is_configured(&self) -> bool {
        self.upstream.is_configured()
    }

    pub async fn process(&self, request: ProcessRequest) -> Result<ProcessResult, RelayError> {
        let fields = request.require_fields()?;
        let endpoint = self
            .upstream
            .endpoint()
            .ok_or(RelayError::ServerMisconfigured)?;
        let request = fields.parse_action()?;

        let span = tracing::info_span!(
            "relay",
            request_id = %Uuid::new_v4(),
            action = %request.action,
        );

        async move {
            let prompt = prompt::build_prompt(request.action, &request.text, &request.style);
            info!(chars = request.text.chars().count(), "Sending prompt upstream");

            let reply = self
                .client
                .generate(&endpoint, &prompt)
                .await
                .map_err(|e| {
                    error!("Upstream call failed: {}", e);
                    RelayError::from(e)
                })?;

            let detected_language = match request.action {
                Action::Translate => Some(DETECTED_LANGUAGE_LABEL.to_string()),
                _ => None,
            };

            Ok::<_, RelayError>(ProcessResult {
                result: reply.into_text(),
                detected_language,
            })
        }
        .instrument(span)
        .await
    }
}
