//! Atrium console - admin CLI for the Atrium intranet backend

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atrium_console::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = cli.args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("atrium_console={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = cli.args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  Atrium console");
    info!("======================================");
    info!("Backend: {}", cli.args.api_url);
    info!("Page size: {}", cli.args.page_size);
    info!(
        "Account: {}",
        cli.args.username.as_deref().unwrap_or("(anonymous)")
    );
    if let Some(path) = &cli.args.audit_log {
        info!("Action log: {}", path.display());
    }
    info!("======================================");

    cli.run().await
}
