use crate::http::{self, malformed};
use crate::{AnthropicMessage, AnthropicRequest, AnthropicResponse, ProviderConfig};
use conteur_core::CompletionRequest;
use conteur_error::{ConfigError, ConteurResult};
use conteur_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, instrument, warn};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic API client.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: Client,
    config: ProviderConfig,
}

impl AnthropicClient {
    /// Creates a new Anthropic client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> ConteurResult<Self> {
        debug!(model = %config.model(), "Creating new Anthropic client");
        if !config.has_credential() {
            warn!("Anthropic credential missing, requests will be rejected");
        }
        Ok(Self {
            client: http::http_client(&config)?,
            config,
        })
    }

    /// Sends a request to the Anthropic API.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn send_messages(
        &self,
        request: &AnthropicRequest,
    ) -> ConteurResult<AnthropicResponse> {
        debug!("Sending request to Anthropic API");

        let mut builder = self
            .client
            .post(self.config.endpoint("/v1/messages"))
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request);
        if let Some(key) = self.config.api_key() {
            builder = builder.header("x-api-key", key);
        }

        let response = http::send(builder, "anthropic").await?;
        let anthropic_response: AnthropicResponse = http::decode(response, "anthropic").await?;

        debug!(response_id = %anthropic_response.id(), "Received response from Anthropic");
        Ok(anthropic_response)
    }

    /// Converts a completion request to an Anthropic API request.
    fn convert_request(&self, request: &CompletionRequest) -> ConteurResult<AnthropicRequest> {
        AnthropicRequest::builder()
            .model(self.config.model().as_str())
            .max_tokens(request.params.max_tokens)
            .system(request.system.clone())
            .temperature(request.params.temperature)
            .top_p(request.params.top_p)
            .messages(vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }])
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid Anthropic request: {}", e)).into())
    }
}

#[async_trait::async_trait]
impl CompletionDriver for AnthropicClient {
    #[instrument(skip(self, request), fields(provider = "anthropic", model = %self.config.model()))]
    async fn complete(&self, request: &CompletionRequest) -> ConteurResult<String> {
        let anthropic_request = self.convert_request(request)?;
        let response = self.send_messages(&anthropic_request).await?;
        response
            .text()
            .ok_or_else(|| malformed("Anthropic response has no text content").into())
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
