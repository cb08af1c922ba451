//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use conteur::{AppConfig, ProviderKind, StoryStyle, StoryVariant};
use std::path::PathBuf;

/// Conteur - branching children's stories from LLM APIs
#[derive(Parser, Debug)]
#[command(name = "conteur")]
#[command(about = "Branching children's story generator with HTML and PDF output", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// LLM provider (anthropic, openai, huggingface, replicate)
    #[arg(long, global = true)]
    pub provider: Option<ProviderKind>,

    /// Model identifier, provider default when omitted
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Emit JSON log lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Applies the global flags on top of the loaded configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(provider) = self.provider {
            config = config.with_provider(provider);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if self.json_logs {
            config = config.with_json_logs(true);
        }
        config
    }

    /// Default log filter.
    pub fn log_level(&self, config: &AppConfig) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            config.logging().level().clone()
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Generate one story and print its document
    Generate(GenerateArgs),

    /// List supported providers
    Providers,
}

/// Options of `conteur serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory of the front-end files
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Options of `conteur generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Free text describing the child
    #[arg(long)]
    pub child_info: String,

    /// Story style (aventure, fantastique, conte, science-fiction, mystere, humour, educatif)
    #[arg(long, default_value = "aventure")]
    pub style: StoryStyle,

    /// Title, derived from the introduction when omitted
    #[arg(long)]
    pub title: Option<String>,

    /// Subtitle
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Story shape (full, single)
    #[arg(long, default_value = "full")]
    pub variant: StoryVariant,

    /// Write the story as PDF to this path
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    /// Write the story as HTML to this path
    #[arg(long)]
    pub html: Option<PathBuf>,
}
