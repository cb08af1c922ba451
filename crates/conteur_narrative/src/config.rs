//! Pipeline tuning.

use conteur_core::CompletionParams;
use conteur_retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How sibling stages are dispatched.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Dispatch {
    /// One stage at a time in document order, with the inter-call delay
    #[default]
    Sequential,
    /// Sibling stages of the same depth run as one concurrent batch
    Concurrent,
}

/// Settings of the story pipeline.
///
/// # Examples
///
/// ```
/// use conteur_narrative::{Dispatch, PipelineConfig};
///
/// let config = PipelineConfig::builder()
///     .dispatch(Dispatch::Concurrent)
///     .build()
///     .unwrap();
/// assert_eq!(*config.dispatch(), Dispatch::Concurrent);
/// assert_eq!(*config.retry().max_attempts(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Dispatch policy for sibling stages
    dispatch: Dispatch,
    /// Pause between sequential calls, in milliseconds
    inter_call_delay_ms: u64,
    /// Sampling parameters of every stage
    params: CompletionParams,
    /// Retry policy wrapped around every call
    retry: RetryPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dispatch: Dispatch::Sequential,
            inter_call_delay_ms: 0,
            params: CompletionParams::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Creates a new config builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Pause between sequential calls.
    pub fn inter_call_delay(&self) -> Duration {
        Duration::from_millis(self.inter_call_delay_ms)
    }
}
