//! Session entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A live user session.
///
/// Sessions are created on login and destroyed on logout or expiry. A
/// session either exists (live) or does not; there is no partial state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque high-entropy session identifier.
    pub session_id: String,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session record expiring `ttl_seconds` from now.
    pub fn new(session_id: String, user_id: Uuid, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            user_id,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds as i64),
        }
    }

    /// Check whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
