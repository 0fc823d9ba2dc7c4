//! HTTP client for a shared session authority daemon.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notehub_core::config::session::SessionConfig;
use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::session::Session;

use super::backend::SessionBackend;

#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    session_id: &'a str,
    user_id: Uuid,
}

#[derive(Debug, Serialize)]
struct SessionIdRequest<'a> {
    session_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: bool,
}

/// Check answers echo the session with empty strings when it is unknown.
/// Only the user ID matters here; the echoed session ID is ignored.
#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    user_id: String,
}

/// Session backend that delegates to a session authority over HTTP.
///
/// Every request carries a hard timeout. Network failures, timeouts and
/// unexpected answers all surface as Transport errors so the caller can
/// refuse authentication instead of assuming an outcome.
#[derive(Debug, Clone)]
pub struct RemoteSessionBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSessionBackend {
    /// Builds a client for the authority named in configuration.
    pub fn new(config: &SessionConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build session authority client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.authority_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn transport_error(action: &str, err: reqwest::Error) -> AppError {
    let message = if err.is_timeout() {
        format!("Session authority timed out during {action}")
    } else {
        format!("Session authority unreachable during {action}")
    };
    AppError::with_source(ErrorKind::Transport, message, err)
}

#[async_trait::async_trait]
impl SessionBackend for RemoteSessionBackend {
    async fn create(&self, session: &Session) -> AppResult<()> {
        let response = self
            .client
            .post(self.endpoint("/session/create"))
            .json(&CreateRequest {
                session_id: &session.session_id,
                user_id: session.user_id,
            })
            .send()
            .await
            .map_err(|e| transport_error("create", e))?;

        match response.status() {
            StatusCode::OK => {
                let body: StatusResponse = response
                    .json()
                    .await
                    .map_err(|e| transport_error("create", e))?;
                if body.status {
                    Ok(())
                } else {
                    Err(AppError::conflict("session already exists with this ID"))
                }
            }
            StatusCode::CONFLICT => Err(AppError::conflict("session already exists with this ID")),
            other => Err(AppError::transport(format!(
                "Session authority answered create with {other}"
            ))),
        }
    }

    async fn check(&self, session_id: &str) -> AppResult<Option<Uuid>> {
        let response = self
            .client
            .post(self.endpoint("/session/check"))
            .json(&SessionIdRequest { session_id })
            .send()
            .await
            .map_err(|e| transport_error("check", e))?;

        if !response.status().is_success() {
            return Err(AppError::transport(format!(
                "Session authority answered check with {}",
                response.status()
            )));
        }

        let body: CheckResponse = response
            .json()
            .await
            .map_err(|e| transport_error("check", e))?;

        if body.user_id.is_empty() {
            return Ok(None);
        }
        let user_id = body.user_id.parse::<Uuid>().map_err(|e| {
            AppError::transport(format!("Session authority answered a malformed user ID: {e}"))
        })?;
        Ok(Some(user_id))
    }

    async fn delete(&self, session_id: &str) -> AppResult<()> {
        let response = self
            .client
            .post(self.endpoint("/session/delete"))
            .json(&SessionIdRequest { session_id })
            .send()
            .await
            .map_err(|e| transport_error("delete", e))?;

        if !response.status().is_success() {
            return Err(AppError::transport(format!(
                "Session authority answered delete with {}",
                response.status()
            )));
        }
        Ok(())
    }
}
