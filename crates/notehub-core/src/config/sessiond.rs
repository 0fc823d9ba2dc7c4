//! Session authority daemon configuration.

use serde::{Deserialize, Serialize};

/// Bind settings for the standalone session authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessiondConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for SessiondConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}
