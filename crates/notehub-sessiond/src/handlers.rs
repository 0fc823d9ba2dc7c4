//! Session authority endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::{debug, error};

use notehub_auth::session::backend::SessionBackend;
use notehub_core::error::ErrorKind;
use notehub_entity::session::Session;

use crate::state::SessiondState;
use crate::wire::{CheckSessionResponse, CreateSessionRequest, SessionIdRequest, StatusResponse};

/// POST /session/create
pub async fn create_session(
    State(state): State<SessiondState>,
    Json(req): Json<CreateSessionRequest>,
) -> (StatusCode, Json<StatusResponse>) {
    let session = Session::new(req.session_id, req.user_id, state.ttl_seconds);

    match state.backend.create(&session).await {
        Ok(()) => {
            debug!(user_id = %session.user_id, "Session created");
            (StatusCode::OK, Json(StatusResponse { status: true }))
        }
        Err(err) if err.kind == ErrorKind::Conflict => {
            (StatusCode::CONFLICT, Json(StatusResponse { status: false }))
        }
        Err(err) => {
            error!(error = %err, "Session create failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse { status: false }),
            )
        }
    }
}

/// POST /session/check
///
/// Unknown, expired, and erroring lookups all answer as absent; the
/// caller must never read an ambiguous answer as authenticated.
pub async fn check_session(
    State(state): State<SessiondState>,
    Json(req): Json<SessionIdRequest>,
) -> Json<CheckSessionResponse> {
    match state.backend.check(&req.session_id).await {
        Ok(Some(user_id)) => Json(CheckSessionResponse {
            session_id: req.session_id,
            user_id: user_id.to_string(),
        }),
        Ok(None) => Json(CheckSessionResponse::absent()),
        Err(err) => {
            error!(error = %err, "Session check failed");
            Json(CheckSessionResponse::absent())
        }
    }
}

/// POST /session/delete
///
/// Always answers success; deleting an absent session is a no-op.
pub async fn delete_session(
    State(state): State<SessiondState>,
    Json(req): Json<SessionIdRequest>,
) -> Json<StatusResponse> {
    if let Err(err) = state.backend.delete(&req.session_id).await {
        error!(error = %err, "Session delete failed");
    }
    Json(StatusResponse { status: true })
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}
