//! OpenAI chat completions API.

mod client;
mod dto;

pub use client::OpenAIClient;
pub use dto::{OpenAIChoice, OpenAIMessage, OpenAIRequest, OpenAIResponse};
