//! Runtime provider selection.

use crate::{AnthropicClient, HuggingFaceClient, OpenAIClient, ProviderConfig, ReplicateClient};
use conteur_error::ConteurResult;
use conteur_interface::{CompletionDriver, ProviderKind};
use tracing::info;

/// Builds the client for the configured provider.
///
/// # Examples
///
/// ```
/// use conteur_interface::ProviderKind;
/// use conteur_models::{ProviderConfig, driver_for};
///
/// let driver = driver_for(ProviderConfig::new(ProviderKind::Replicate)).unwrap();
/// assert_eq!(driver.provider_name(), "replicate");
/// ```
pub fn driver_for(config: ProviderConfig) -> ConteurResult<Box<dyn CompletionDriver>> {
    info!(
        provider = %config.provider(),
        model = %config.model(),
        credential = if config.has_credential() { "configured" } else { "missing" },
        "Selecting LLM provider"
    );
    let provider = *config.provider();
    let driver: Box<dyn CompletionDriver> = match provider {
        ProviderKind::Anthropic => Box::new(AnthropicClient::new(config)?),
        ProviderKind::OpenAI => Box::new(OpenAIClient::new(config)?),
        ProviderKind::HuggingFace => Box::new(HuggingFaceClient::new(config)?),
        ProviderKind::Replicate => Box::new(ReplicateClient::new(config)?),
    };
    Ok(driver)
}
