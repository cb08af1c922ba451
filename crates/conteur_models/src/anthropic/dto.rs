//! Anthropic messages API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnthropicMessage {
    /// "user" or "assistant"
    pub role: String,
    /// Plain text content
    pub content: String,
}

/// Request body of `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct AnthropicRequest {
    /// Model identifier
    model: String,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// System instructions
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling threshold
    top_p: f32,
    /// Conversation turns
    messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    /// Creates a new builder for `AnthropicRequest`.
    pub fn builder() -> AnthropicRequestBuilder {
        AnthropicRequestBuilder::default()
    }
}

/// One block of generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicContentBlock {
    /// Block type, "text" for generated prose
    #[serde(rename = "type")]
    kind: String,
    /// Generated text for text blocks
    #[serde(default)]
    text: Option<String>,
}

/// Response body of `POST /v1/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AnthropicResponse {
    /// Message identifier
    #[serde(default)]
    id: String,
    /// Generated content blocks
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
    /// Why generation stopped
    #[serde(default)]
    stop_reason: Option<String>,
}

impl AnthropicResponse {
    /// Concatenated text of all text blocks, if any.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect();
        (!parts.is_empty()).then(|| parts.concat())
    }
}
