//! User profile handlers.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::AppendHeaders;
use validator::Validate;

use notehub_entity::user::UpdateUser;

use crate::dto::request::{UpdateUserRequest, validation_error};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::auth::{WithCookie, set_cookie_header};
use crate::state::AppState;

/// GET /api/v1/user
pub async fn profile(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(auth.user.into()))
}

/// PUT /api/v1/user
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    req.check_password_rules()?;

    let user = state.user_service.update_user(
        auth.user.id,
        UpdateUser {
            username: req.username,
            password: req.password,
            avatar: req.avatar,
        },
    )?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/v1/user
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<WithCookie<MessageResponse>, ApiError> {
    state.user_service.delete_account(auth.user.id)?;
    let cookie = state.session_manager.revoke(&auth.session_id).await;

    Ok((
        AppendHeaders([(header::SET_COOKIE, set_cookie_header(&cookie))]),
        Json(ApiResponse::ok(MessageResponse::new("Account deleted"))),
    ))
}
