//! CLI command definitions and dispatch.

pub mod config;
pub mod serve;
pub mod sessiond;

use clap::{Parser, Subcommand};

use notehub_core::error::AppError;

use crate::output::OutputFormat;

/// Notehub — note-taking service backend
#[derive(Debug, Parser)]
#[command(name = "notehub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/default.toml plus
    /// config/{env}.toml when present)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Notehub API server
    Serve(serve::ServeArgs),
    /// Start the standalone session authority
    Sessiond(sessiond::SessiondArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Sessiond(args) => sessiond::execute(args, &self.env).await,
            Commands::Config(args) => config::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<notehub_core::config::AppConfig, AppError> {
    notehub_core::config::AppConfig::load(env)
}
