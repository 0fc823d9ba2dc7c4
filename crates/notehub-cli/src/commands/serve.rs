//! Start the Notehub API server.

use clap::Args;

use notehub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the session backend ("memory" or "remote")
    #[arg(long)]
    pub session_backend: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref backend) = args.session_backend {
        config.session.backend = match backend.as_str() {
            "memory" => notehub_core::config::session::SessionBackendKind::Memory,
            "remote" => notehub_core::config::session::SessionBackendKind::Remote,
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown session backend '{}', expected 'memory' or 'remote'",
                    other
                )));
            }
        };
    }

    println!("Starting Notehub server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Session backend: {}", config.session.backend);

    notehub_api::app::run_server(config).await
}
