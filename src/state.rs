use std::sync::Arc;

use crate::config::Config;
use crate::llm::{GeminiClient, GenerativeClient};
use crate::relay::Relay;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub relay: Arc<Relay>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_client(config, Arc::new(GeminiClient::new()))
    }

    pub fn with_client(config: Config, client: Arc<dyn GenerativeClient>) -> Self {
        let relay = Relay::new(config.upstream.clone(), client);
        Self {
            config: Arc::new(config),
            relay: Arc::new(relay),
        }
    }
}
