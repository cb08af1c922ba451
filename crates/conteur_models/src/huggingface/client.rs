use crate::http::{self, malformed};
use crate::{HuggingFaceGeneration, HuggingFaceRequest, ProviderConfig};
use conteur_core::CompletionRequest;
use conteur_error::ConteurResult;
use conteur_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Hugging Face inference API client.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    config: ProviderConfig,
}

impl HuggingFaceClient {
    /// Creates a new Hugging Face client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> ConteurResult<Self> {
        debug!(model = %config.model(), "Creating new HuggingFace client");
        if !config.has_credential() {
            warn!("HuggingFace credential missing, requests may be rejected");
        }
        Ok(Self {
            client: http::http_client(&config)?,
            config,
        })
    }

    /// Runs text generation on the configured model.
    #[instrument(skip(self, request))]
    pub async fn generate_text(
        &self,
        request: &HuggingFaceRequest,
    ) -> ConteurResult<Vec<HuggingFaceGeneration>> {
        let url = self
            .config
            .endpoint(&format!("/models/{}", self.config.model()));
        debug!(url = %url, "Sending request to HuggingFace API");
        let builder = http::bearer(
            self.client.post(url).json(request),
            self.config.api_key().as_deref(),
        );
        let response = http::send(builder, "huggingface").await?;
        http::decode(response, "huggingface").await
    }
}

#[async_trait::async_trait]
impl CompletionDriver for HuggingFaceClient {
    #[instrument(
        skip(self, request),
        fields(provider = "huggingface", model = %self.config.model())
    )]
    async fn complete(&self, request: &CompletionRequest) -> ConteurResult<String> {
        let hf_request = HuggingFaceRequest::new(
            request.system.as_deref(),
            &request.prompt,
            request.params.max_tokens,
            request.params.temperature,
            request.params.top_p,
        );
        let generations = self.generate_text(&hf_request).await?;
        generations
            .into_iter()
            .next()
            .and_then(|generation| generation.generated_text)
            .ok_or_else(|| malformed("HuggingFace response has no generated_text").into())
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
