//! Route table for the session authority.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::SessiondState;

/// Builds the daemon's router.
pub fn build_router(state: SessiondState) -> Router {
    Router::new()
        .route("/session/create", post(handlers::create_session))
        .route("/session/check", post(handlers::check_session))
        .route("/session/delete", post(handlers::delete_session))
        .route("/health", get(handlers::health))
        .with_state(state)
}
