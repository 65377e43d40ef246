use async_trait::async_trait;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::{CompletionClient, RelayError};
use crate::{config::Config, types::PromptMessage};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Serialize)]
struct CompletionReq<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResp {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// {"error": {"message": "...", "type": "...", ...}}
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the OpenAI chat-completions endpoint, or anything that speaks
/// the same protocol.
pub struct OpenAiClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(
        client: Client,
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            client,
            url: format!("{base}{COMPLETIONS_PATH}"),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Client::new(),
            &config.base_url,
            config.api_key.clone(),
            config.model.clone(),
            config.max_tokens,
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &[PromptMessage]) -> Result<String, RelayError> {
        let body = CompletionReq {
            model: &self.model,
            messages: prompt,
            max_tokens: self.max_tokens,
        };

        debug!("Forwarding completion request to URL: {}", self.url);

        let resp = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|env| env.error.message)
                .unwrap_or(text);
            return Err(RelayError::Upstream { status, message });
        }

        let parsed: CompletionResp = serde_json::from_str(&text)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(RelayError::EmptyCompletion)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_trims_trailing_slash() {
        let client = OpenAiClient::new(Client::new(), "http://localhost:1234/", "k", "m", 150);
        assert_eq!(client.url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn request_body_matches_wire_format() {
        let prompt = [PromptMessage::system("sys"), PromptMessage::user("hi")];
        let body = CompletionReq {
            model: "gpt-3.5-turbo",
            messages: &prompt,
            max_tokens: 150,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "max_tokens": 150
            })
        );
    }
}
