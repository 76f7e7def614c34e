//! Trackdesk API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loads `config.toml` (see `Config::load_default` for search paths) with
//! environment overrides, then applies command-line flags on top:
//! - `TRACKDESK_API_HOST` / `--host`: Host to bind to (default: 0.0.0.0)
//! - `TRACKDESK_API_PORT` / `--port`: Port to listen on (default: 8090)
//! - `TRACKDESK_SEED` / `--seed`: Generator seed for new sessions (default: 42)
//! - `TRACKDESK_LOG_LEVEL`, `TRACKDESK_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Log filter (overrides the config level)

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trackdesk::api::{serve, ApiConfig, AppState};
use trackdesk::config::Config;

#[derive(Parser)]
#[command(name = "trackdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Session-scoped ticketing workflow service")]
struct Cli {
    /// Path to a TOML config file (default: standard search paths)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Generator seed for new sessions
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration, CLI flags last
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if let Some(seed) = cli.seed {
        config.generator.seed = seed;
    }

    init_tracing(&config);

    tracing::info!("Starting Trackdesk API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Generator seed: {}", config.generator.seed);

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        max_body_size: config.api.max_body_size,
    };

    let state = AppState::new(api_config.clone(), config.generator.seed);

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("Trackdesk API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "trackdesk={},tower_http=debug",
            config.logging.level
        ))
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
