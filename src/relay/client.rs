use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::types::PromptMessage;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("Failed to parse completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Completion API returned no choices")]
    EmptyCompletion,
}

impl RelayError {
    /// True when the completion API could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        match self {
            RelayError::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

/// Sends an ordered prompt to a chat-completion service and returns the text
/// of the first generated message.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &[PromptMessage]) -> Result<String, RelayError>;

    /// Short label for logs.
    fn name(&self) -> &str;
}
