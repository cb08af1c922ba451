//! Trait definitions for LLM backends.

use async_trait::async_trait;
use conteur_core::CompletionRequest;
use conteur_error::ConteurResult;
use std::sync::Arc;

/// Core trait that all LLM backends must implement.
///
/// One call sends one request and returns the generated text. Implementations
/// keep no state between calls apart from their reusable HTTP client.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate text for the given request.
    async fn complete(&self, req: &CompletionRequest) -> ConteurResult<String>;

    /// Provider name (e.g., "anthropic", "openai", "replicate").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "claude-3-5-sonnet-20241022").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for Box<T> {
    async fn complete(&self, req: &CompletionRequest) -> ConteurResult<String> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for Arc<T> {
    async fn complete(&self, req: &CompletionRequest) -> ConteurResult<String> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
