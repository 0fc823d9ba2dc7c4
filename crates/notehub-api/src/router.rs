//! Route definitions for the Notehub HTTP API.
//!
//! Routes are grouped by the gate in front of them: guest-only,
//! session-gated, and open. The whole tree mounts under the configured
//! API prefix.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Builds the route tree and threads `AppState` through every handler.
pub fn build_router(state: AppState) -> Router {
    let api_prefix = state.config.server.api_prefix.clone();

    let api_routes = Router::new()
        .merge(guest_routes(state.clone()))
        .merge(session_routes())
        .merge(health_routes());

    Router::new().nest(&api_prefix, api_routes).with_state(state)
}

/// Signup and login; open to guests only.
fn guest_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(handlers::auth::signup))
        .route("/users/login", post(handlers::auth::login))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::guest::require_guest,
        ))
}

/// Session-gated endpoints; the `AuthUser` extractor enforces the gate.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/users/logout", get(handlers::auth::logout))
        .route("/users/auth", get(handlers::auth::auth_check))
        .route("/user", get(handlers::user::profile))
        .route("/user", put(handlers::user::update_profile))
        .route("/user", delete(handlers::user::delete_account))
        .route("/note", post(handlers::note::create_note))
        .route("/notes", get(handlers::note::list_notes))
        .route("/note/{token}", get(handlers::note::get_note))
        .route("/note/{token}", put(handlers::note::update_note))
        .route("/note/{token}", delete(handlers::note::delete_note))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
