//! Atelier - creative generation studio on the command line.

use atelier::cli::{Cli, PromptCredentials, run_command};
use atelier::{CreativeStudio, StudioConfig};
use atelier_core::init_tracing;
use atelier_models::{ApiKeySlot, EnvCredentials, GeminiClient};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    init_tracing(cli.json_logs).map_err(anyhow::Error::msg)?;
    info!("Starting Atelier");

    let config = StudioConfig::load(cli.config.as_deref())?;

    let slot = ApiKeySlot::new();
    let env_credentials = EnvCredentials::new(slot.clone());
    let client = GeminiClient::new(slot.clone())?
        .with_base_url(config.api_base_url().clone())
        .with_models(config.models().clone());

    if cli.interactive_key {
        let studio = CreativeStudio::new(client, PromptCredentials::new(slot), config);
        run_command(studio, cli.command).await
    } else {
        let studio = CreativeStudio::new(client, env_credentials, config);
        run_command(studio, cli.command).await
    }
}
