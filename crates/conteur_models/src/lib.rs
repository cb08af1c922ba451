//! LLM provider clients for Conteur.
//!
//! Each client implements [`conteur_interface::CompletionDriver`] for one
//! provider API and is built from an explicit [`ProviderConfig`]:
//!
//! - [`AnthropicClient`] - messages API
//! - [`OpenAIClient`] - chat completions API
//! - [`HuggingFaceClient`] - text-generation inference API
//! - [`ReplicateClient`] - prediction jobs with bounded polling
//!
//! [`driver_for`] picks the client matching the configured provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod anthropic;
mod config;
mod factory;
mod http;
mod huggingface;
mod openai;
mod replicate;

pub use anthropic::{
    AnthropicClient, AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse,
};
pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use factory::driver_for;
pub use huggingface::{
    HuggingFaceClient, HuggingFaceGeneration, HuggingFaceParameters, HuggingFaceRequest,
};
pub use openai::{OpenAIChoice, OpenAIClient, OpenAIMessage, OpenAIRequest, OpenAIResponse};
pub use replicate::{
    Prediction, PredictionInput, PredictionRequest, PredictionStatus, PredictionUrls,
    ReplicateClient,
};
