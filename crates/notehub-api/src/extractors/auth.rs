//! `AuthUser` extractor — resolves the session cookie and injects the caller.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use tracing::warn;

use notehub_auth::SESSION_COOKIE;
use notehub_core::error::AppError;
use notehub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, available to session-gated handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The resolved account.
    pub user: User,
    /// The session ID the caller presented.
    pub session_id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(SESSION_COOKIE)
            .ok_or_else(|| AppError::authentication("Not logged in"))?;
        let session_id = cookie.value().to_string();

        // Fail closed: an unreachable session authority reads as
        // unauthenticated, never as authenticated.
        let user = match state.session_manager.authenticate(&session_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AppError::authentication("Not logged in").into()),
            Err(err) => {
                warn!(error = %err, "Session resolution failed, rejecting request");
                return Err(AppError::authentication("Not logged in").into());
            }
        };

        Ok(AuthUser { user, session_id })
    }
}
