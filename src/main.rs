//! Notehub Server — note-taking service backend
//!
//! Main entry point that loads configuration, initializes logging, and
//! starts the API server.

use tracing_subscriber::{EnvFilter, fmt};

use notehub_core::config::AppConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("NOTEHUB_ENV").unwrap_or_else(|_| "default".to_string());
    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(
        "Starting Notehub v{} (env: {})",
        env!("CARGO_PKG_VERSION"),
        env
    );

    if let Err(e) = notehub_api::app::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
