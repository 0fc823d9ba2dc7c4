//! Credential hashing configuration.

use serde::{Deserialize, Serialize};

/// Parameters for the Argon2id password hasher.
///
/// The defaults follow the argon2 crate's recommended parameters. Lowering
/// them is only appropriate in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub argon2_memory_kib: u32,
    /// Number of iterations (time cost).
    #[serde(default = "default_iterations")]
    pub argon2_iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub argon2_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            argon2_memory_kib: default_memory_kib(),
            argon2_iterations: default_iterations(),
            argon2_parallelism: default_parallelism(),
        }
    }
}

fn default_memory_kib() -> u32 {
    19_456
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
