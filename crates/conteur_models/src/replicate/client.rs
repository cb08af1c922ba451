use crate::http::{self, malformed};
use crate::{Prediction, PredictionInput, PredictionRequest, PredictionStatus, ProviderConfig};
use conteur_core::CompletionRequest;
use conteur_error::{ConteurResult, ProviderError, ProviderErrorKind};
use conteur_interface::CompletionDriver;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Replicate predictions client.
///
/// A completion creates a prediction job, then polls its status endpoint
/// until it finishes. Polling stops after `max_polls` checks with a
/// [`ProviderErrorKind::Timeout`].
#[derive(Debug, Clone)]
pub struct ReplicateClient {
    client: Client,
    config: ProviderConfig,
}

impl ReplicateClient {
    /// Creates a new Replicate client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> ConteurResult<Self> {
        debug!(model = %config.model(), "Creating new Replicate client");
        if !config.has_credential() {
            warn!("Replicate credential missing, requests will be rejected");
        }
        Ok(Self {
            client: http::http_client(&config)?,
            config,
        })
    }

    /// Creates a prediction job.
    #[instrument(skip(self, request))]
    pub async fn create_prediction(
        &self,
        request: &PredictionRequest,
    ) -> ConteurResult<Prediction> {
        let url = self
            .config
            .endpoint(&format!("/v1/models/{}/predictions", self.config.model()));
        let builder = http::bearer(
            self.client.post(url).json(request),
            self.config.api_key().as_deref(),
        );
        let response = http::send(builder, "replicate").await?;
        http::decode(response, "replicate").await
    }

    /// Fetches the current state of a prediction job.
    #[instrument(skip(self))]
    pub async fn get_prediction(&self, url: &str) -> ConteurResult<Prediction> {
        let builder = http::bearer(self.client.get(url), self.config.api_key().as_deref());
        let response = http::send(builder, "replicate").await?;
        http::decode(response, "replicate").await
    }

    /// Polls a job until it reaches a terminal state or the poll budget runs out.
    async fn wait_for(&self, mut prediction: Prediction) -> ConteurResult<String> {
        let max_polls = *self.config.max_polls();
        let mut polls = 0;
        loop {
            match prediction.status {
                PredictionStatus::Succeeded => {
                    debug!(prediction_id = %prediction.id, polls, "Prediction succeeded");
                    return prediction
                        .text()
                        .ok_or_else(|| malformed("Replicate prediction has no text output").into());
                }
                PredictionStatus::Failed | PredictionStatus::Canceled => {
                    warn!(
                        prediction_id = %prediction.id,
                        status = %prediction.status,
                        "Prediction ended without output"
                    );
                    return Err(ProviderError::new(ProviderErrorKind::JobFailed(
                        prediction.error_message(),
                    ))
                    .into());
                }
                _ => {}
            }

            if polls >= max_polls {
                warn!(prediction_id = %prediction.id, polls, "Prediction poll budget exhausted");
                return Err(ProviderError::new(ProviderErrorKind::Timeout { polls }).into());
            }

            let url = prediction
                .urls
                .as_ref()
                .map(|urls| urls.get.clone())
                .ok_or_else(|| malformed("Replicate prediction has no status URL"))?;

            tokio::time::sleep(self.config.poll_interval()).await;
            polls += 1;
            debug!(prediction_id = %prediction.id, polls, "Polling prediction");
            prediction = self.get_prediction(&url).await?;
        }
    }
}

#[async_trait::async_trait]
impl CompletionDriver for ReplicateClient {
    #[instrument(skip(self, request), fields(provider = "replicate", model = %self.config.model()))]
    async fn complete(&self, request: &CompletionRequest) -> ConteurResult<String> {
        let prediction_request = PredictionRequest {
            input: PredictionInput {
                prompt: request.prompt.clone(),
                system_prompt: request.system.clone(),
                max_new_tokens: request.params.max_tokens,
                temperature: request.params.temperature,
                top_p: request.params.top_p,
            },
        };
        let prediction = self.create_prediction(&prediction_request).await?;
        self.wait_for(prediction).await
    }

    fn provider_name(&self) -> &'static str {
        "replicate"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
