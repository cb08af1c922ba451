//! Provider identification shared by clients and configuration.

use serde::{Deserialize, Serialize};

/// Supported LLM providers.
///
/// # Examples
///
/// ```
/// use conteur_interface::ProviderKind;
///
/// let kind: ProviderKind = "HuggingFace".parse().unwrap();
/// assert_eq!(kind, ProviderKind::HuggingFace);
/// assert_eq!(kind.credential_var(), "HUGGINGFACE_API_KEY");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Anthropic messages API
    #[default]
    Anthropic,
    /// OpenAI chat completions API
    #[strum(serialize = "openai")]
    OpenAI,
    /// Hugging Face inference API
    HuggingFace,
    /// Replicate predictions API (job-style)
    Replicate,
}

impl ProviderKind {
    /// Environment variable holding the credential.
    pub fn credential_var(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::OpenAI => "OPENAI_API_KEY",
            ProviderKind::HuggingFace => "HUGGINGFACE_API_KEY",
            ProviderKind::Replicate => "REPLICATE_API_TOKEN",
        }
    }

    /// Model used when none is configured.
    pub fn default_model(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "claude-3-5-sonnet-20241022",
            ProviderKind::OpenAI => "gpt-4o-mini",
            ProviderKind::HuggingFace => "mistralai/Mistral-7B-Instruct-v0.3",
            ProviderKind::Replicate => "meta/meta-llama-3-70b-instruct",
        }
    }

    /// Public API root used when no base URL is configured.
    pub fn default_base_url(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "https://api.anthropic.com",
            ProviderKind::OpenAI => "https://api.openai.com",
            ProviderKind::HuggingFace => "https://api-inference.huggingface.co",
            ProviderKind::Replicate => "https://api.replicate.com",
        }
    }
}
