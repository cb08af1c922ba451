//! Replicate predictions API.

mod client;
mod dto;

pub use client::ReplicateClient;
pub use dto::{Prediction, PredictionInput, PredictionRequest, PredictionStatus, PredictionUrls};
