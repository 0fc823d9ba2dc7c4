//! Wiring and the daemon server loop.

use std::sync::Arc;

use tokio::sync::watch;

use notehub_auth::session::backend::MemorySessionBackend;
use notehub_auth::{SessionCleanup, SessionStore};
use notehub_core::config::AppConfig;
use notehub_core::error::AppError;
use notehub_core::result::AppResult;

use crate::router::build_router;
use crate::state::SessiondState;

/// Runs the session authority with the given configuration.
///
/// TTL and sweeper settings come from the shared `[session]` section,
/// so the daemon and its API callers agree on session lifetime.
pub async fn run_sessiond(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting Notehub session authority...");

    let store = Arc::new(SessionStore::new());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper_handle = if config.session.cleanup_enabled {
        let cleanup = SessionCleanup::new(
            Arc::clone(&store),
            config.session.cleanup_interval_seconds,
        );
        let cleanup_shutdown = shutdown_rx.clone();
        Some(tokio::spawn(async move {
            cleanup.run(cleanup_shutdown).await;
        }))
    } else {
        None
    };

    let state = SessiondState {
        backend: MemorySessionBackend::new(store),
        ttl_seconds: config.session.ttl_seconds,
    };

    let app = build_router(state);
    let addr = format!("{}:{}", config.sessiond.host, config.sessiond.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Session authority listening on {}", addr);

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
        .expect("Failed to install Ctrl+C handler")
}
