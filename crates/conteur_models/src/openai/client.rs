use crate::http::{self, malformed};
use crate::{OpenAIMessage, OpenAIRequest, OpenAIResponse, ProviderConfig};
use conteur_core::CompletionRequest;
use conteur_error::ConteurResult;
use conteur_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// OpenAI chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    config: ProviderConfig,
}

impl OpenAIClient {
    /// Creates a new OpenAI client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> ConteurResult<Self> {
        debug!(model = %config.model(), "Creating new OpenAI client");
        if !config.has_credential() {
            warn!("OpenAI credential missing, requests will be rejected");
        }
        Ok(Self {
            client: http::http_client(&config)?,
            config,
        })
    }

    fn convert_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: Some(system.clone()),
            });
        }
        messages.push(OpenAIMessage {
            role: "user".to_string(),
            content: Some(request.prompt.clone()),
        });
        OpenAIRequest {
            model: self.config.model().clone(),
            messages,
            max_tokens: request.params.max_tokens,
            temperature: request.params.temperature,
            top_p: request.params.top_p,
        }
    }

    /// Sends a chat completion request.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat(&self, request: &OpenAIRequest) -> ConteurResult<OpenAIResponse> {
        debug!("Sending request to OpenAI API");
        let builder = self
            .client
            .post(self.config.endpoint("/v1/chat/completions"))
            .json(request);
        let builder = http::bearer(builder, self.config.api_key().as_deref());
        let response = http::send(builder, "openai").await?;
        let response: OpenAIResponse = http::decode(response, "openai").await?;
        debug!(completion_id = %response.id, "Received response from OpenAI");
        Ok(response)
    }
}

#[async_trait::async_trait]
impl CompletionDriver for OpenAIClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.config.model()))]
    async fn complete(&self, request: &CompletionRequest) -> ConteurResult<String> {
        let response = self.chat(&self.convert_request(request)).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or_else(|| malformed("OpenAI response has no choices[0].message.content").into())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
