//! Application builder — wires stores, services, and middleware into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tokio::sync::watch;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use notehub_auth::{
    PasswordHasher, SessionBackendDispatch, SessionCleanup, SessionManager, SessionStore,
};
use notehub_core::config::AppConfig;
use notehub_core::config::session::SessionBackendKind;
use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_service::note::NoteService;
use notehub_service::user::UserService;
use notehub_store::{NoteStore, OwnershipLinkStore, UserDirectory};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let max_body = state.config.server.max_body_bytes;

    build_router(state)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Runs the Notehub API server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting Notehub server...");

    // ── Step 1: Stores ───────────────────────────────────────────
    let users = Arc::new(UserDirectory::new());
    let notes = Arc::new(NoteStore::new());
    let links = Arc::new(OwnershipLinkStore::new());
    let sessions = Arc::new(SessionStore::new());

    // ── Step 2: Auth system ──────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new(&config.auth));
    let backend = Arc::new(SessionBackendDispatch::new(
        &config.session,
        Arc::clone(&sessions),
    )?);
    tracing::info!(backend = %config.session.backend, "Session backend selected");

    let session_manager = Arc::new(SessionManager::new(
        backend,
        Arc::clone(&users),
        Arc::clone(&hasher),
        &config.session,
        config.server.api_prefix.clone(),
    ));

    // ── Step 3: Services ─────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&users),
        Arc::clone(&notes),
        Arc::clone(&links),
        Arc::clone(&hasher),
    ));
    let note_service = Arc::new(NoteService::new(Arc::clone(&notes), Arc::clone(&links)));

    // ── Step 4: Shutdown channel & session sweeper ───────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Only a locally-held session store needs sweeping; a remote
    // authority sweeps its own.
    let sweeper_handle = if config.session.backend == SessionBackendKind::Memory
        && config.session.cleanup_enabled
    {
        let cleanup = SessionCleanup::new(
            Arc::clone(&sessions),
            config.session.cleanup_interval_seconds,
        );
        let cleanup_shutdown = shutdown_rx.clone();
        Some(tokio::spawn(async move {
            cleanup.run(cleanup_shutdown).await;
        }))
    } else {
        None
    };

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        session_manager,
        user_service,
        note_service,
    };

    let app = build_app(app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Notehub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(handle) = sweeper_handle {
        let _ = handle.await;
    }

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
