use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::interface::{GenerativeClient, UpstreamError};
use super::reply::UpstreamReply;
use crate::config::UpstreamEndpoint;

enum Scripted {
    Reply(UpstreamReply),
    Status(String),
}

/// A scripted client for tests. Answers every call the same way and
/// records how often it was called and with which prompts.
pub struct MockGenerativeClient {
    scripted: Scripted,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerativeClient {
    pub fn replying(text: &str) -> Self {
        Self::new(Scripted::Reply(UpstreamReply::Success {
            text: text.to_string(),
        }))
    }

    pub fn malformed() -> Self {
        Self::new(Scripted::Reply(UpstreamReply::Malformed))
    }

    pub fn failing(status: &str) -> Self {
        Self::new(Scripted::Status(status.to_string()))
    }

    fn new(scripted: Scripted) -> Self {
        Self {
            scripted,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(
        &self,
        _endpoint: &UpstreamEndpoint,
        prompt: &str,
    ) -> Result<UpstreamReply, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        match &self.scripted {
            Scripted::Reply(reply) => Ok(reply.clone()),
            Scripted::Status(status) => Err(UpstreamError::Status(status.clone())),
        }
    }
}
