//! Hugging Face text-generation inference API.

mod client;
mod dto;

pub use client::HuggingFaceClient;
pub use dto::{HuggingFaceGeneration, HuggingFaceParameters, HuggingFaceRequest};
