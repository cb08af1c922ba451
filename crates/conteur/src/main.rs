//! Conteur CLI binary.
//!
//! - `serve` runs the HTTP API and front-end
//! - `generate` runs the story pipeline once from the terminal
//! - `providers` lists supported LLM providers

use clap::Parser;
use conteur::{AppConfig, ObservabilityConfig, init_observability};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, list_providers, run_generate, run_serve};

    // Credentials may live in a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(AppConfig::load()?);

    init_observability(
        &ObservabilityConfig::new(cli.log_level(&config))
            .with_json_logs(*config.logging().json()),
    )?;

    match cli.command {
        Commands::Serve(args) => run_serve(config, args).await?,
        Commands::Generate(args) => run_generate(config, args).await?,
        Commands::Providers => list_providers(),
    }

    Ok(())
}
