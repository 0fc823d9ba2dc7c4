//! Start the standalone session authority.

use clap::Args;

use notehub_core::error::AppError;

/// Arguments for the sessiond command
#[derive(Debug, Args)]
pub struct SessiondArgs {
    /// Override the daemon port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the daemon host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the sessiond command
pub async fn execute(args: &SessiondArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;

    if let Some(port) = args.port {
        config.sessiond.port = port;
    }
    if let Some(ref host) = args.host {
        config.sessiond.host = host.clone();
    }

    println!("Starting Notehub session authority...");
    println!("  Host: {}", config.sessiond.host);
    println!("  Port: {}", config.sessiond.port);
    println!("  Session TTL: {}s", config.session.ttl_seconds);

    notehub_sessiond::run_sessiond(config).await
}
