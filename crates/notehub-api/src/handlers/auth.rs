//! Auth handlers — signup, login, logout, auth check.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{self, HeaderName};
use axum::response::AppendHeaders;
use validator::Validate;

use notehub_auth::{SESSION_COOKIE, SessionCookie};
use notehub_entity::user::CreateUser;

use crate::dto::request::{LoginRequest, SignupRequest, validation_error};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// A JSON body plus one `Set-Cookie` header.
pub type WithCookie<T> = (AppendHeaders<[(HeaderName, String); 1]>, Json<ApiResponse<T>>);

/// Renders a session grant or revocation as a `Set-Cookie` value.
///
/// `Expires` lies in the past for revocations, which is what makes the
/// client drop the cookie.
pub(crate) fn set_cookie_header(cookie: &SessionCookie) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path={}; Expires={}; HttpOnly",
        cookie.value,
        cookie.path,
        cookie.expires_at.format("%a, %d %b %Y %H:%M:%S GMT"),
    )
}

/// POST /api/v1/users/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    req.check_password_rules()?;

    let user = state.user_service.register(CreateUser {
        username: req.username,
        email: req.email,
        password: req.password,
        avatar: None,
    })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// POST /api/v1/users/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<WithCookie<UserResponse>, ApiError> {
    req.validate().map_err(validation_error)?;

    let result = state
        .session_manager
        .login(&req.email, &req.password)
        .await?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, set_cookie_header(&result.cookie))]),
        Json(ApiResponse::ok(result.user.into())),
    ))
}

/// GET /api/v1/users/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<WithCookie<MessageResponse>, ApiError> {
    let cookie = state.session_manager.logout(&auth.session_id).await?;

    Ok((
        AppendHeaders([(header::SET_COOKIE, set_cookie_header(&cookie))]),
        Json(ApiResponse::ok(MessageResponse::new("Logged out"))),
    ))
}

/// GET /api/v1/users/auth
pub async fn auth_check(auth: AuthUser) -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::ok(MessageResponse::new(format!(
        "Authenticated as {}",
        auth.user.username
    ))))
}
