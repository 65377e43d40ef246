use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::client::{CompletionClient, RelayError};
use crate::types::PromptMessage;

pub const FALLBACK_RESPONSES: [&str; 6] = [
    "I hear that you're going through a difficult time. While I'm here to listen and support you, remember that I'm a test assistant. Would you like to tell me more about what's on your mind?",
    "Thank you for sharing that with me. It takes courage to open up. How long have you been feeling this way?",
    "I understand this is challenging. While I'm here to support you, I want to remind you that speaking with a mental health professional can provide more comprehensive help. Would you like to explore what you're feeling further?",
    "Your feelings are valid, and it's important to acknowledge them. Have you considered talking to someone you trust about this?",
    "It sounds like you're dealing with a lot right now. Let's take it one step at a time. What would feel like a manageable first step for you?",
    "I appreciate you trusting me with your thoughts. While I'm in test mode, I want you to know that your well-being matters. What kind of support are you looking for right now?",
];

/// Canned replies for running without an API key. Cycles through
/// [`FALLBACK_RESPONSES`] in order, ignoring the prompt.
#[derive(Debug, Default)]
pub struct FallbackClient {
    next: AtomicUsize,
}

impl FallbackClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionClient for FallbackClient {
    async fn complete(&self, _prompt: &[PromptMessage]) -> Result<String, RelayError> {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % FALLBACK_RESPONSES.len();
        Ok(FALLBACK_RESPONSES[idx].to_string())
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
