use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The message text, if present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrResp {
    pub error: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_null_and_empty_messages_are_absent() {
        for body in [r#"{}"#, r#"{"message": null}"#, r#"{"message": ""}"#] {
            let req: ChatRequest = serde_json::from_str(body).unwrap();
            assert_eq!(req.message(), None, "body {body}");
        }
    }

    #[test]
    fn whitespace_message_is_kept() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(req.message(), Some("  "));
    }

    #[test]
    fn prompt_roles_serialize_lowercase() {
        let json = serde_json::to_value(PromptMessage::system("be kind")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "be kind"}));
    }
}
