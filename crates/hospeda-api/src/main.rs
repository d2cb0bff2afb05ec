//! Hospeda+ console API entry point
//!
//! Run with:
//! ```bash
//! cargo run -p hospeda-api
//! ```
//!
//! Configuration is read from the environment (and `.env` when present).

use hospeda_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before reading the environment
    let _ = dotenvy::dotenv();

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        backend = %config.backend.url,
        "Configuration loaded"
    );

    hospeda_api::run(config).await?;

    Ok(())
}
