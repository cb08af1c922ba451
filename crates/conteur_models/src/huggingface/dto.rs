//! Hugging Face inference API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct HuggingFaceParameters {
    /// Maximum tokens to generate
    max_new_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Top-p sampling
    top_p: f32,
    /// Return only the continuation, not the prompt
    return_full_text: bool,
}

/// Request body of `POST /models/{model}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct HuggingFaceRequest {
    /// Input text
    inputs: String,
    /// Generation parameters
    parameters: HuggingFaceParameters,
}

impl HuggingFaceRequest {
    /// Creates a request. The system prompt, if any, is prepended to the input.
    pub fn new(
        system: Option<&str>,
        prompt: &str,
        max_new_tokens: u32,
        temperature: f32,
        top_p: f32,
    ) -> Self {
        let inputs = match system {
            Some(system) => format!("{}\n\n{}", system, prompt),
            None => prompt.to_string(),
        };
        Self {
            inputs,
            parameters: HuggingFaceParameters {
                max_new_tokens,
                temperature,
                top_p,
                return_full_text: false,
            },
        }
    }
}

/// One generated sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuggingFaceGeneration {
    /// Generated continuation
    #[serde(default)]
    pub generated_text: Option<String>,
}
