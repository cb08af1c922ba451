//! Layered application configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`conteur.toml` shipped with this crate)
//! 2. User config in home directory (`~/.config/conteur/conteur.toml`)
//! 3. User config in current directory (`./conteur.toml`)
//! 4. `CONTEUR__SECTION__KEY` environment variables
//! 5. Conventional variables `PORT`, `LLM_PROVIDER` and `MODEL_ID`

use conteur_core::CompletionParams;
use conteur_error::{ConfigError, ConteurError, ConteurResult};
use conteur_interface::ProviderKind;
use conteur_models::ProviderConfig;
use conteur_narrative::{Dispatch, PipelineConfig};
use conteur_retry::RetryPolicy;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../conteur.toml");

/// Listening socket and static assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServerSettings {
    /// Interface to bind
    host: String,
    /// Port to bind
    port: u16,
    /// Directory served as the front-end
    static_dir: PathBuf,
}

/// Which provider to call and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ProviderSettings {
    /// Provider API
    name: ProviderKind,
    /// Model identifier, provider default when absent
    #[serde(default)]
    model: Option<String>,
    /// API root, provider default when absent
    #[serde(default)]
    base_url: Option<String>,
    /// Per-request HTTP timeout in seconds
    request_timeout_secs: u64,
    /// Status poll budget of job-style providers
    max_polls: u32,
    /// Delay between status polls in milliseconds
    poll_interval_ms: u64,
}

/// Story pipeline tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PipelineSettings {
    /// Sibling stage dispatch
    dispatch: Dispatch,
    /// Pause between sequential calls in milliseconds
    inter_call_delay_ms: u64,
    /// Token cap per stage
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling cutoff
    top_p: f32,
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LoggingSettings {
    /// Emit JSON lines instead of human-readable output
    json: bool,
    /// Default filter when `RUST_LOG` is unset
    level: String,
}

/// Complete application configuration.
///
/// # Example
///
/// ```
/// use conteur_server::AppConfig;
///
/// let config = AppConfig::from_toml("[server]\nport = 8080").unwrap();
/// assert_eq!(*config.server().port(), 8080);
/// assert_eq!(*config.retry().max_attempts(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AppConfig {
    /// HTTP server settings
    server: ServerSettings,
    /// LLM provider settings
    provider: ProviderSettings,
    /// Retry policy around every generation
    retry: RetryPolicy,
    /// Story pipeline settings
    pipeline: PipelineSettings,
    /// Logging settings
    logging: LoggingSettings,
}

fn config_error(context: &str, error: impl std::fmt::Display) -> ConteurError {
    ConfigError::new(format!("{}: {}", context, error)).into()
}

impl AppConfig {
    /// Loads every layer, including the process environment.
    #[instrument]
    pub fn load() -> ConteurResult<Self> {
        debug!(
            "Loading configuration with precedence: env > current dir > home dir > bundled defaults"
        );

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/conteur/conteur.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("conteur").required(false))
            .add_source(
                Environment::with_prefix("CONTEUR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Bundled defaults overlaid with a TOML document, ignoring the environment.
    pub fn from_toml(overrides: &str) -> ConteurResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))
    }

    /// Applies `PORT`, `LLM_PROVIDER` and `MODEL_ID` from `lookup`.
    ///
    /// Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> ConteurResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(port) = var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| config_error(&format!("Invalid PORT '{}'", port), e))?;
        }
        if let Some(provider) = var("LLM_PROVIDER") {
            self.provider.name = provider
                .trim()
                .parse()
                .map_err(|e| config_error(&format!("Unknown LLM_PROVIDER '{}'", provider), e))?;
        }
        if let Some(model) = var("MODEL_ID") {
            self.provider.model = Some(model.trim().to_string());
        }
        Ok(())
    }

    /// Overrides the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }

    /// Overrides the provider, dropping a model and API root chosen for the previous one.
    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        if provider != self.provider.name {
            self.provider.model = None;
            self.provider.base_url = None;
        }
        self.provider.name = provider;
        self
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.provider.model = Some(model.into());
        self
    }

    /// Overrides the static asset directory.
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.server.static_dir = static_dir.into();
        self
    }

    /// Forces JSON log output.
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.logging.json = json;
        self
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Provider client settings, credential read from the provider's variable.
    pub fn provider_config(&self) -> ProviderConfig {
        let settings = &self.provider;
        let mut config = ProviderConfig::from_env(settings.name)
            .with_request_timeout(Duration::from_secs(settings.request_timeout_secs))
            .with_polling(
                settings.max_polls,
                Duration::from_millis(settings.poll_interval_ms),
            );
        if let Some(model) = &settings.model {
            config = config.with_model(model.clone());
        }
        if let Some(base_url) = &settings.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config
    }

    /// Story pipeline settings.
    pub fn pipeline_config(&self) -> ConteurResult<PipelineConfig> {
        let settings = &self.pipeline;
        let params = CompletionParams::builder()
            .max_tokens(settings.max_tokens)
            .temperature(settings.temperature)
            .top_p(settings.top_p)
            .build()
            .map_err(|e| config_error("Invalid completion parameters", e))?;
        PipelineConfig::builder()
            .dispatch(settings.dispatch)
            .inter_call_delay_ms(settings.inter_call_delay_ms)
            .params(params)
            .retry(self.retry.clone())
            .build()
            .map_err(|e| config_error("Invalid pipeline settings", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_bundled_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(*config.provider().name(), ProviderKind::Anthropic);
        assert_eq!(*config.pipeline().dispatch(), Dispatch::Sequential);
        assert_eq!(*config.retry().backoff_base_ms(), 1000);
        assert!(!config.logging().json());
    }

    #[test]
    fn test_conventional_env_vars_override_file() {
        let mut config = AppConfig::from_toml("[provider]\nname = \"openai\"").unwrap();
        config
            .apply_env(lookup(&[
                ("PORT", "8081"),
                ("LLM_PROVIDER", "Replicate"),
                ("MODEL_ID", "meta/llama"),
            ]))
            .unwrap();
        assert_eq!(*config.server().port(), 8081);
        assert_eq!(*config.provider().name(), ProviderKind::Replicate);
        assert_eq!(config.provider_config().model(), "meta/llama");
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let mut config = AppConfig::from_toml("").unwrap();
        let err = config.apply_env(lookup(&[("PORT", "huit")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let mut config = AppConfig::from_toml("").unwrap();
        assert!(config.apply_env(lookup(&[("LLM_PROVIDER", "gemini")])).is_err());
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = AppConfig::from_toml("").unwrap();
        config.apply_env(lookup(&[("PORT", " "), ("MODEL_ID", "")])).unwrap();
        assert_eq!(*config.server().port(), 3000);
        assert!(config.provider().model().is_none());
    }

    #[test]
    fn test_provider_switch_resets_model() {
        let config = AppConfig::from_toml("[provider]\nmodel = \"claude-x\"")
            .unwrap()
            .with_provider(ProviderKind::HuggingFace);
        assert_eq!(
            config.provider_config().model(),
            ProviderKind::HuggingFace.default_model()
        );
    }

    #[test]
    fn test_pipeline_config_carries_sampling_and_retry() {
        let config = AppConfig::from_toml(
            "[pipeline]\ndispatch = \"concurrent\"\nmax_tokens = 512\n[retry]\nmax_attempts = 5",
        )
        .unwrap();
        let pipeline = config.pipeline_config().unwrap();
        assert_eq!(*pipeline.dispatch(), Dispatch::Concurrent);
        assert_eq!(pipeline.params().max_tokens, 512);
        assert_eq!(*pipeline.retry().max_attempts(), 5);
        assert_eq!(pipeline.inter_call_delay(), Duration::ZERO);
    }
}
