//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in seconds. Also drives the cookie `Expires` hint.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
    /// Which session backend the API server uses.
    #[serde(default)]
    pub backend: SessionBackendKind,
    /// Base URL of the session authority (remote backend only).
    #[serde(default = "default_authority_url")]
    pub authority_url: String,
    /// Timeout for a single session authority request in milliseconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
    /// Whether the expired-session sweeper runs.
    #[serde(default = "default_true")]
    pub cleanup_enabled: bool,
    /// Interval between sweeper passes in seconds.
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
            backend: SessionBackendKind::default(),
            authority_url: default_authority_url(),
            request_timeout_ms: default_request_timeout(),
            cleanup_enabled: true,
            cleanup_interval_seconds: default_cleanup_interval(),
        }
    }
}

/// Which implementation backs the session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackendKind {
    /// Sessions live in this process's memory.
    Memory,
    /// Sessions live in a shared session authority daemon.
    Remote,
}

impl Default for SessionBackendKind {
    fn default() -> Self {
        Self::Memory
    }
}

impl std::fmt::Display for SessionBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionBackendKind::Memory => write!(f, "memory"),
            SessionBackendKind::Remote => write!(f, "remote"),
        }
    }
}

fn default_ttl() -> u64 {
    18_000
}

fn default_authority_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

fn default_request_timeout() -> u64 {
    2_000
}

fn default_cleanup_interval() -> u64 {
    300
}

fn default_true() -> bool {
    true
}
