pub mod client;
pub mod fallback;
pub mod openai;

use std::{sync::Arc, time::Instant};

use tracing::{info, warn};

pub use client::{CompletionClient, RelayError};
pub use fallback::FallbackClient;
pub use openai::OpenAiClient;

use crate::{
    config::{Backend, Config},
    types::PromptMessage,
};

pub const SYSTEM_PROMPT: &str = "You are a supportive mental health assistant. Provide empathetic, helpful responses while making it clear you are not a replacement for professional mental health care.";

/// Turns one user message into one model reply.
pub struct Relay {
    client: Arc<dyn CompletionClient>,
}

impl Relay {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Self {
        let client: Arc<dyn CompletionClient> = match config.backend {
            Backend::OpenAi => Arc::new(OpenAiClient::from_config(config)),
            Backend::Fallback => Arc::new(FallbackClient::new()),
        };
        Self::new(client)
    }

    pub fn backend(&self) -> &str {
        self.client.name()
    }

    pub async fn reply(&self, message: &str) -> Result<String, RelayError> {
        let prompt = build_prompt(message);
        let start = Instant::now();

        let res = self.client.complete(&prompt).await;

        let elapsed_ms = start.elapsed().as_millis();
        match &res {
            Ok(text) => info!(
                backend = self.client.name(),
                message_chars = message.chars().count(),
                reply_chars = text.chars().count(),
                elapsed_ms,
                "relay completed"
            ),
            Err(e) => warn!(
                backend = self.client.name(),
                elapsed_ms,
                error = %e,
                "relay failed"
            ),
        }
        res
    }
}

/// `[system, user]`, in that order.
pub fn build_prompt(message: &str) -> [PromptMessage; 2] {
    [
        PromptMessage::system(SYSTEM_PROMPT),
        PromptMessage::user(message),
    ]
}
