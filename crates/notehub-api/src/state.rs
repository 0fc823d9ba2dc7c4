//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notehub_auth::SessionManager;
use notehub_core::config::AppConfig;
use notehub_service::{NoteService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Authentication flow: login, logout, session resolution.
    pub session_manager: Arc<SessionManager>,
    /// Account operations.
    pub user_service: Arc<UserService>,
    /// Note operations with ownership checks.
    pub note_service: Arc<NoteService>,
}
