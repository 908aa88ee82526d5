mod cli;
mod config;
mod errors;
mod evidence;
mod llm_client;
mod models;
mod pipeline;
mod source;
mod synthesis;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Args;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::source::page::PageProfileSource;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting personagen v{}", env!("CARGO_PKG_VERSION"));

    let urls = cli::parse_urls(&args.urls)?;
    if urls.is_empty() {
        anyhow::bail!("No valid profile URLs found in '{}'", args.urls);
    }
    info!("Validated {} profile URLs", urls.len());

    // Collaborators are constructed up front so a bad environment fails
    // before any network work starts.
    let source = PageProfileSource::new()?;
    let model = args.model.unwrap_or_else(|| config.model.clone());
    let llm = LlmClient::new(config.anthropic_api_key.clone(), model)?;
    info!("LLM client initialized (model: {})", llm.model());

    let output =
        pipeline::generate_from_urls(&source, &llm, &urls, &args.output, &args.name).await?;

    info!(
        "Persona generation complete: {} profiles -> {}",
        output.profile_count,
        output.persona_path.display()
    );

    Ok(())
}
