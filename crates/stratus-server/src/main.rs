//! # Stratus Server
//!
//! Main entry point: loads configuration, installs logging, wires the
//! dependencies and serves the REST API until a shutdown signal arrives.

use stratus_config::{ConfigLoader, LogFormat};
use stratus_core::{telemetry::init_tracing, StratusResult};
use stratus_server::app::Application;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> StratusResult<()> {
    let config = ConfigLoader::from_default_location()?.into_config();

    init_tracing(
        config.effective_log_level(),
        config.observability.log_format == LogFormat::Json,
    )?;

    info!("Starting Stratus server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    Application::build(config).await?.run().await
}
