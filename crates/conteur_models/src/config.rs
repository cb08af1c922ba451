//! Provider connection settings.

use conteur_interface::ProviderKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a provider client needs to reach its API.
///
/// The credential is injected here; clients never read the environment.
///
/// # Examples
///
/// ```
/// use conteur_interface::ProviderKind;
/// use conteur_models::ProviderConfig;
///
/// let config = ProviderConfig::new(ProviderKind::OpenAI).with_api_key("sk-test");
/// assert_eq!(config.model(), "gpt-4o-mini");
/// assert_eq!(config.base_url(), "https://api.openai.com");
/// assert!(!format!("{:?}", config).contains("sk-test"));
/// ```
#[derive(
    Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ProviderConfig {
    /// Which API to talk to
    provider: ProviderKind,
    /// API credential, if configured
    #[builder(default)]
    #[serde(skip_serializing)]
    api_key: Option<String>,
    /// Model identifier
    model: String,
    /// API root, overridable for proxies and tests
    base_url: String,
    /// Per-request HTTP timeout in seconds
    #[builder(default = "120")]
    request_timeout_secs: u64,
    /// Maximum status polls for job-style providers
    #[builder(default = "120")]
    max_polls: u32,
    /// Delay between status polls in milliseconds
    #[builder(default = "1000")]
    poll_interval_ms: u64,
}

impl ProviderConfig {
    /// Default settings for a provider, without credential.
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            api_key: None,
            model: provider.default_model().to_string(),
            base_url: provider.default_base_url().to_string(),
            request_timeout_secs: 120,
            max_polls: 120,
            poll_interval_ms: 1000,
        }
    }

    /// Creates a new config builder.
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }

    /// Default settings with the credential read from the provider's variable.
    pub fn from_env(provider: ProviderKind) -> Self {
        let api_key = std::env::var(provider.credential_var())
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            ..Self::new(provider)
        }
    }

    /// Sets the credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request HTTP timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Sets the polling budget of job-style providers.
    pub fn with_polling(mut self, max_polls: u32, interval: Duration) -> Self {
        self.max_polls = max_polls;
        self.poll_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Whether a non-blank credential is present.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// Per-request HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Delay between status polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Joins a path onto the API root.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_polls", &self.max_polls)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config =
            ProviderConfig::new(ProviderKind::Anthropic).with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.endpoint("/v1/messages"), "http://127.0.0.1:1234/v1/messages");
    }

    #[test]
    fn test_blank_credential_is_missing() {
        let config = ProviderConfig::new(ProviderKind::Replicate).with_api_key("  ");
        assert!(!config.has_credential());
    }

    #[test]
    fn test_builder_defaults() {
        let config = ProviderConfig::builder()
            .provider(ProviderKind::HuggingFace)
            .model("gpt2")
            .base_url("http://localhost")
            .build()
            .unwrap();
        assert_eq!(*config.max_polls(), 120);
        assert!(config.api_key().is_none());
    }
}
