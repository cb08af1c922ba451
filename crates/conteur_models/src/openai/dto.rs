//! OpenAI chat completions data transfer objects.

use serde::{Deserialize, Serialize};

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    /// Message text, absent on some tool responses
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body of `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIRequest {
    /// Model identifier
    pub model: String,
    /// Conversation
    pub messages: Vec<OpenAIMessage>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
}

/// One completion alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIChoice {
    /// Generated message
    #[serde(default)]
    pub message: Option<OpenAIMessage>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response body of `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIResponse {
    /// Completion identifier
    #[serde(default)]
    pub id: String,
    /// Completion alternatives
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
}

impl OpenAIResponse {
    /// Text of the first alternative, if present.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }
}
