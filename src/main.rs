// Chartbrief - Medical Note Summarization Service
// Main entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use chartbrief::config::load_config;
use chartbrief::feedback::FeedbackLog;
use chartbrief::providers::OpenAiProvider;
use chartbrief::server::{serve, AppState};

#[derive(Parser, Debug)]
#[command(name = "chartbrief", about = "Summarize medical notes over HTTP")]
struct Cli {
    /// Path to a config file (defaults to ~/.chartbrief/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address override (e.g. "127.0.0.1:8000")
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (RUST_LOG controls verbosity, default info)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    config.validate()?;

    // Create completion provider
    let provider = OpenAiProvider::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.request_timeout_secs,
    )?
    .with_model(config.model.clone());

    // Create feedback log
    let feedback = FeedbackLog::new(config.feedback_path.clone())?;

    let bind_address = config.bind_address.clone();
    let state = AppState::new(config, Arc::new(provider), feedback);

    tracing::info!("Starting chartbrief server on {}", bind_address);
    serve(state, &bind_address).await?;

    Ok(())
}
