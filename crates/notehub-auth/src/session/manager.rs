//! The authentication flow: login, logout, and session resolution.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use notehub_core::config::session::SessionConfig;
use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::session::{Session, generate_session_id};
use notehub_entity::user::User;
use notehub_store::UserDirectory;

use crate::password::PasswordHasher;

use super::backend::{SessionBackend, SessionBackendDispatch};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_id";

/// A cookie-shaped description of a session grant or revocation.
///
/// The HTTP layer renders this into a real `Set-Cookie` header; keeping
/// it plain data leaves this crate free of HTTP types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// The opaque session identifier.
    pub value: String,
    /// Path the cookie is scoped to.
    pub path: String,
    /// Absolute expiry. In the past for revocations, so clients drop
    /// the cookie immediately.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Session grant for the HTTP layer to set.
    pub cookie: SessionCookie,
}

/// Drives login, logout, and per-request session resolution.
///
/// Talks to sessions only through the configured [`SessionBackend`], so
/// the flow is identical whether sessions live in this process or in a
/// remote session authority.
#[derive(Debug)]
pub struct SessionManager {
    backend: Arc<SessionBackendDispatch>,
    users: Arc<UserDirectory>,
    hasher: Arc<PasswordHasher>,
    ttl_seconds: u64,
    cookie_path: String,
}

impl SessionManager {
    /// Creates a manager over the given backend and user directory.
    ///
    /// `cookie_path` scopes the session cookie, normally the API prefix.
    pub fn new(
        backend: Arc<SessionBackendDispatch>,
        users: Arc<UserDirectory>,
        hasher: Arc<PasswordHasher>,
        config: &SessionConfig,
        cookie_path: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            users,
            hasher,
            ttl_seconds: config.ttl_seconds,
            cookie_path: cookie_path.into(),
        }
    }

    /// Verifies credentials and opens a new session.
    ///
    /// An unknown email fails with NotFound before any session work; a
    /// wrong password fails with Authentication. Neither leaves a
    /// session behind.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        // 1. Resolve the account by its email-derived ID.
        let user = self.users.get(&User::id_for_email(email))?;

        // 2. Verify the password against the stored hash.
        let password_valid = self
            .hasher
            .verify_password(password, &user.password_hash)?;
        if !password_valid {
            warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AppError::authentication("invalid email or password"));
        }

        // 3. Open the session under a fresh random ID.
        let session = Session::new(generate_session_id(), user.id, self.ttl_seconds);
        self.backend.create(&session).await?;

        info!(user_id = %user.id, "Login successful");
        let cookie = self.grant_cookie(&session);
        Ok(LoginResult { user, cookie })
    }

    /// Closes the session behind the given ID.
    ///
    /// Returns a revocation cookie with an expiry in the past. Fails
    /// with NotFound when no such session is live.
    pub async fn logout(&self, session_id: &str) -> AppResult<SessionCookie> {
        let existing = self.backend.check(session_id).await?;
        let Some(user_id) = existing else {
            return Err(AppError::not_found("no session"));
        };

        self.backend.delete(session_id).await?;

        info!(user_id = %user_id, "Logout successful");
        Ok(self.revoke_cookie(session_id))
    }

    /// Resolves a session ID to its user.
    ///
    /// `Ok(None)` means the session is absent or expired. Transport
    /// errors bubble up so callers can fail closed instead of treating
    /// an unreachable authority as "not logged in" silently.
    pub async fn authenticate(&self, session_id: &str) -> AppResult<Option<User>> {
        let Some(user_id) = self.backend.check(session_id).await? else {
            return Ok(None);
        };

        match self.users.get(&user_id) {
            Ok(user) => Ok(Some(user)),
            Err(err) if err.kind == ErrorKind::NotFound => {
                // The session outlived its account; drop it.
                warn!(user_id = %user_id, "Session for unknown user, deleting");
                self.backend.delete(session_id).await?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Closes a session as part of an account cascade.
    ///
    /// Always returns a revocation cookie. A backend failure only delays
    /// server-side cleanup until the dangling session is next seen by
    /// [`SessionManager::authenticate`].
    pub async fn revoke(&self, session_id: &str) -> SessionCookie {
        if let Err(err) = self.backend.delete(session_id).await {
            warn!(error = %err, "Session delete during revocation failed");
        }
        self.revoke_cookie(session_id)
    }

    fn grant_cookie(&self, session: &Session) -> SessionCookie {
        SessionCookie {
            value: session.session_id.clone(),
            path: self.cookie_path.clone(),
            expires_at: session.expires_at,
        }
    }

    fn revoke_cookie(&self, session_id: &str) -> SessionCookie {
        SessionCookie {
            value: session_id.to_string(),
            path: self.cookie_path.clone(),
            expires_at: Utc::now() - Duration::seconds(self.ttl_seconds as i64),
        }
    }
}
