//! Guest gate for signup/login routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use notehub_auth::SESSION_COOKIE;
use notehub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects callers that already hold a live session.
///
/// A cookie that fails to resolve (absent, expired, or the authority is
/// unreachable) gates nothing; only a confirmed live session is turned
/// away.
pub async fn require_guest(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(Some(user)) = state.session_manager.authenticate(cookie.value()).await {
            tracing::debug!(user_id = %user.id, "Guest route rejected for live session");
            return ApiError::from(AppError::authorization("Already logged in")).into_response();
        }
    }

    next.run(request).await
}
