//! In-process session storage.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_entity::session::Session;

/// Concurrent map of live sessions keyed by session ID.
///
/// Backs both the in-process session backend and the standalone session
/// authority daemon. Lookups never mutate; expiry is enforced by the
/// callers and the periodic sweep.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Inserts a new session. Refuses duplicate IDs; never overwrites.
    pub fn create(&self, session: Session) -> AppResult<()> {
        match self.sessions.entry(session.session_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("session already exists with this ID")),
            Entry::Vacant(entry) => {
                entry.insert(session);
                Ok(())
            }
        }
    }

    /// Looks up a session by ID.
    pub fn lookup(&self, session_id: &str) -> Option<Session> {
        self.sessions.get(session_id).map(|s| s.clone())
    }

    /// Deletes a session. Deleting an absent session is not an error.
    pub fn delete(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Removes every expired session and returns how many were dropped.
    ///
    /// IDs are collected first so no shard lock is held across the pass;
    /// each removal re-checks expiry under the lock.
    pub fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let expired: Vec<String> = self
            .sessions
            .iter()
            .filter(|entry| entry.expires_at <= now)
            .map(|entry| entry.key().clone())
            .collect();

        let mut removed = 0;
        for session_id in &expired {
            if self
                .sessions
                .remove_if(session_id, |_, session| session.expires_at <= now)
                .is_some()
            {
                removed += 1;
            }
        }
        removed
    }
}
