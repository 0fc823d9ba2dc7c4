//! Shared daemon state.

use notehub_auth::session::backend::MemorySessionBackend;

/// State threaded through every handler.
///
/// The daemon is the process that actually holds sessions, so its
/// backend is always the in-memory one; remoteness is the caller's
/// side of the wire.
#[derive(Debug, Clone)]
pub struct SessiondState {
    /// The authoritative session backend.
    pub backend: MemorySessionBackend,
    /// Lifetime granted to newly created sessions, in seconds.
    pub ttl_seconds: u64,
}
