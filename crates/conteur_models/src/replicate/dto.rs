//! Replicate predictions data transfer objects.

use serde::{Deserialize, Serialize};

/// Model inputs of a text prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// User prompt
    pub prompt: String,
    /// System instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate
    pub max_new_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
}

/// Request body of `POST /v1/models/{model}/predictions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Model inputs
    pub input: PredictionInput,
}

/// Lifecycle state of a prediction job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    /// Queued
    Starting,
    /// Running
    Processing,
    /// Finished with output
    Succeeded,
    /// Finished with an error
    Failed,
    /// Canceled by the caller
    Canceled,
    /// State not known to this client, treated as pending
    #[serde(other)]
    Unknown,
}

/// Links returned with a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionUrls {
    /// Status endpoint to poll
    pub get: String,
}

/// A prediction job as reported by Replicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Job identifier
    #[serde(default)]
    pub id: String,
    /// Current state
    pub status: PredictionStatus,
    /// Output, a string or an array of streamed fragments
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    /// Error reported by the model
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    /// Follow-up links
    #[serde(default)]
    pub urls: Option<PredictionUrls>,
}

impl Prediction {
    /// Generated text, joining fragment arrays.
    pub fn text(&self) -> Option<String> {
        match self.output.as_ref()? {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Array(parts) => {
                let fragments: Option<Vec<&str>> = parts.iter().map(|p| p.as_str()).collect();
                fragments.map(|f| f.concat())
            }
            _ => None,
        }
    }

    /// Error message reported by the job, or its status.
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => format!("prediction {}", self.status),
        }
    }
}
