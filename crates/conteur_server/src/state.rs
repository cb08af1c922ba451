//! Shared handler state.

use crate::AppConfig;
use conteur_error::ConteurResult;
use conteur_interface::CompletionDriver;
use conteur_models::driver_for;
use conteur_narrative::{PipelineConfig, StoryAssembler};
use std::sync::Arc;

/// Story assembler over whichever provider was configured.
pub type SharedAssembler = StoryAssembler<Box<dyn CompletionDriver>>;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    assembler: Arc<SharedAssembler>,
}

impl AppState {
    /// Wraps a driver and pipeline settings.
    pub fn new(driver: Box<dyn CompletionDriver>, pipeline: PipelineConfig) -> Self {
        Self {
            assembler: Arc::new(StoryAssembler::with_config(driver, pipeline)),
        }
    }

    /// Builds the configured provider client.
    ///
    /// A missing credential is logged, not rejected: calls fail at request time.
    pub fn from_config(config: &AppConfig) -> ConteurResult<Self> {
        let driver = driver_for(config.provider_config())?;
        Ok(Self::new(driver, config.pipeline_config()?))
    }

    /// The story assembler.
    pub fn assembler(&self) -> &SharedAssembler {
        &self.assembler
    }
}
