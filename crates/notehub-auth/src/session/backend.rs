//! Session backend trait and its deployment-shape implementations.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use notehub_core::config::session::{SessionBackendKind, SessionConfig};
use notehub_core::result::AppResult;
use notehub_entity::session::Session;

use super::remote::RemoteSessionBackend;
use super::store::SessionStore;

/// The three session operations every deployment shape provides.
///
/// `check` answers `Ok(None)` for "no such session"; transport problems
/// are errors, and callers must treat them as unauthenticated rather
/// than guessing. All methods are safe under concurrent invocation.
#[async_trait]
pub trait SessionBackend: Send + Sync + std::fmt::Debug {
    /// Registers a new session. Fails with Conflict if the ID is taken.
    async fn create(&self, session: &Session) -> AppResult<()>;

    /// Resolves a session ID to the owning user, or `None` when the
    /// session is absent or expired.
    async fn check(&self, session_id: &str) -> AppResult<Option<Uuid>>;

    /// Deletes a session. Idempotent; absent sessions are not an error.
    async fn delete(&self, session_id: &str) -> AppResult<()>;
}

/// Backend holding sessions in this process.
#[derive(Debug, Clone)]
pub struct MemorySessionBackend {
    store: Arc<SessionStore>,
}

impl MemorySessionBackend {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionBackend for MemorySessionBackend {
    async fn create(&self, session: &Session) -> AppResult<()> {
        self.store.create(session.clone())
    }

    async fn check(&self, session_id: &str) -> AppResult<Option<Uuid>> {
        match self.store.lookup(session_id) {
            Some(session) if session.is_expired() => {
                // Expired records answer as absent and are dropped here
                // rather than waiting for the periodic sweep.
                self.store.delete(session_id);
                Ok(None)
            }
            Some(session) => Ok(Some(session.user_id)),
            None => Ok(None),
        }
    }

    async fn delete(&self, session_id: &str) -> AppResult<()> {
        self.store.delete(session_id);
        Ok(())
    }
}

/// Dispatcher over the configured session backend.
///
/// The backend is selected once at construction; business logic only
/// ever talks to this type through the [`SessionBackend`] trait and
/// never branches on the deployment shape again.
#[derive(Debug, Clone)]
pub enum SessionBackendDispatch {
    /// Sessions live in this process.
    Memory(MemorySessionBackend),
    /// Sessions live in a shared session authority daemon.
    Remote(RemoteSessionBackend),
}

impl SessionBackendDispatch {
    /// Builds the backend selected by configuration.
    pub fn new(config: &SessionConfig, store: Arc<SessionStore>) -> AppResult<Self> {
        match config.backend {
            SessionBackendKind::Memory => Ok(Self::Memory(MemorySessionBackend::new(store))),
            SessionBackendKind::Remote => Ok(Self::Remote(RemoteSessionBackend::new(config)?)),
        }
    }
}

#[async_trait]
impl SessionBackend for SessionBackendDispatch {
    async fn create(&self, session: &Session) -> AppResult<()> {
        match self {
            Self::Memory(backend) => backend.create(session).await,
            Self::Remote(backend) => backend.create(session).await,
        }
    }

    async fn check(&self, session_id: &str) -> AppResult<Option<Uuid>> {
        match self {
            Self::Memory(backend) => backend.check(session_id).await,
            Self::Remote(backend) => backend.check(session_id).await,
        }
    }

    async fn delete(&self, session_id: &str) -> AppResult<()> {
        match self {
            Self::Memory(backend) => backend.delete(session_id).await,
            Self::Remote(backend) => backend.delete(session_id).await,
        }
    }
}
