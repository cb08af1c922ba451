//! Provider-neutral completion request.

use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the provider.
///
/// # Examples
///
/// ```
/// use conteur_core::CompletionParams;
///
/// let params = CompletionParams::builder()
///     .max_tokens(512u32)
///     .temperature(0.7)
///     .build()
///     .unwrap();
/// assert_eq!(params.max_tokens, 512);
/// assert_eq!(params.top_p, 0.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default)]
pub struct CompletionParams {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling threshold
    pub top_p: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            temperature: 0.8,
            top_p: 0.95,
        }
    }
}

impl CompletionParams {
    /// Creates a new params builder.
    pub fn builder() -> CompletionParamsBuilder {
        CompletionParamsBuilder::default()
    }
}

/// A single text completion request.
///
/// # Examples
///
/// ```
/// use conteur_core::{CompletionParams, CompletionRequest};
///
/// let request = CompletionRequest::new("Il était une fois")
///     .with_system("Tu es un conteur.")
///     .with_params(CompletionParams::default());
/// assert_eq!(request.system.as_deref(), Some("Tu es un conteur."));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Optional system instructions
    pub system: Option<String>,
    /// User prompt
    pub prompt: String,
    /// Sampling parameters
    pub params: CompletionParams,
}

impl CompletionRequest {
    /// Creates a request with default sampling parameters and no system prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            params: CompletionParams::default(),
        }
    }

    /// Sets the system instructions.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Sets the sampling parameters.
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }
}
