//! Wire message shapes for the session authority protocol.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /session/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// The session ID chosen by the caller.
    pub session_id: String,
    /// The user the session belongs to.
    pub user_id: Uuid,
}

/// Body of `POST /session/check` and `POST /session/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionIdRequest {
    /// The session ID in question.
    pub session_id: String,
}

/// Boolean outcome answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the operation took effect.
    pub status: bool,
}

/// Answer to a check. Unknown sessions answer with empty strings
/// rather than an error status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSessionResponse {
    /// The session ID echoed back, or empty when unknown.
    pub session_id: String,
    /// The owning user ID, or empty when unknown.
    pub user_id: String,
}

impl CheckSessionResponse {
    /// The "no such session" answer.
    pub fn absent() -> Self {
        Self {
            session_id: String::new(),
            user_id: String::new(),
        }
    }
}
