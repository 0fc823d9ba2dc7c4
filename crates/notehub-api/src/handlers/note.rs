//! Note handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use notehub_entity::note::NoteDraft;

use crate::dto::request::{NoteRequest, validation_error};
use crate::dto::response::{ApiResponse, MessageResponse, NoteResponse};
use crate::error::{ApiError, suppress_existence};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/v1/note
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<NoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NoteResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;

    let note = state.note_service.create_note(
        auth.user.id,
        NoteDraft {
            name: req.name,
            body: req.body,
        },
    )?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(note.into()))))
}

/// GET /api/v1/notes
pub async fn list_notes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = state.note_service.list_notes(auth.user.id)?;

    Ok(Json(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/v1/note/{token}
pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state
        .note_service
        .get_note(auth.user.id, &token)
        .map_err(suppress_existence)?;

    Ok(Json(ApiResponse::ok(note.into())))
}

/// PUT /api/v1/note/{token}
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(token): Path<String>,
    Json(req): Json<NoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;

    let note = state
        .note_service
        .update_note(
            auth.user.id,
            &token,
            NoteDraft {
                name: req.name,
                body: req.body,
            },
        )
        .map_err(suppress_existence)?;

    Ok(Json(ApiResponse::ok(note.into())))
}

/// DELETE /api/v1/note/{token}
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .note_service
        .delete_note(auth.user.id, &token)
        .map_err(suppress_existence)?;

    Ok(Json(ApiResponse::ok(MessageResponse::new("Note deleted"))))
}
