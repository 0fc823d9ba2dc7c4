//! Session identifier generation.

use rand::RngExt;

/// Length in characters of a generated session identifier.
pub const SESSION_ID_LENGTH: usize = 64;

/// Generate a fresh random session identifier.
///
/// 32 random bytes rendered as lowercase hex; collision probability is
/// negligible, and the store still refuses duplicates on create.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..SESSION_ID_LENGTH / 2).map(|_| rng.random()).collect();
    hex::encode(bytes)
}

/// Simple hex encoding without external dependency.
mod hex {
    /// Encode bytes to hex string.
    pub fn encode(bytes: Vec<u8>) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
