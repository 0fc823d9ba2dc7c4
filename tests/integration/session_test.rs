//! Integration tests for the remote session authority deployment shape.
//!
//! These spin up a real `notehub-sessiond` router on a loopback port and
//! point the API server's remote backend at it.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use notehub_auth::SessionStore;
use notehub_auth::session::backend::MemorySessionBackend;
use notehub_core::config::AppConfig;
use notehub_core::config::session::SessionBackendKind;
use notehub_entity::session::Session;
use notehub_sessiond::{SessiondState, build_router};

use crate::helpers::{TestApp, TestStores, test_config};

/// Serves a session authority on an ephemeral port.
///
/// Returns its base URL and a handle on its session store.
async fn spawn_authority(ttl_seconds: u64) -> (String, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::new());
    let router = build_router(SessiondState {
        backend: MemorySessionBackend::new(Arc::clone(&store)),
        ttl_seconds,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}"), store)
}

fn remote_config(authority_url: &str) -> AppConfig {
    let mut config = test_config();
    config.session.backend = SessionBackendKind::Remote;
    config.session.authority_url = authority_url.to_string();
    config.session.request_timeout_ms = 1_000;
    config
}

#[tokio::test]
async fn test_remote_backend_full_flow() {
    let (url, store) = spawn_authority(3600).await;
    let app = TestApp::build(remote_config(&url), &TestStores::new());

    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    // The session lives in the authority's store, not the API server's.
    assert_eq!(store.len(), 1);

    let response = app
        .request("GET", "/api/v1/users/auth", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/v1/note",
            Some(json!({ "name": "remote", "body": "works" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app
        .request("GET", "/api/v1/users/logout", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(store.len(), 0);

    let response = app
        .request("GET", "/api/v1/users/auth", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sessions_shared_across_instances() {
    let (url, _store) = spawn_authority(3600).await;
    let stores = TestStores::new();
    let app1 = TestApp::build(remote_config(&url), &stores);
    let app2 = TestApp::build(remote_config(&url), &stores);

    app1.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app1.login("ada@example.com", "lovelace1").await;

    // A session opened on one server authenticates on another.
    let response = app2
        .request("GET", "/api/v1/users/auth", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Logout anywhere closes it everywhere.
    let response = app2
        .request("GET", "/api/v1/users/logout", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app1
        .request("GET", "/api/v1/users/auth", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unreachable_authority_fails_closed() {
    // Reserve a port, then free it so nothing answers there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let app = TestApp::build(remote_config(&url), &TestStores::new());

    // Signup never touches sessions, so it still works.
    app.signup("ada", "ada@example.com", "lovelace1").await;

    // Login cannot mint a session.
    let response = app
        .request(
            "POST",
            "/api/v1/users/login",
            Some(json!({
                "email": "ada@example.com",
                "password": "lovelace1",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], json!("SERVICE_UNAVAILABLE"));

    // An existing cookie reads as unauthenticated, never authenticated.
    let response = app
        .request(
            "GET",
            "/api/v1/users/auth",
            None,
            Some("session_id=whatever"),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authority_enforces_expiry() {
    // A zero TTL makes every session expired on arrival.
    let (url, _store) = spawn_authority(0).await;
    let app = TestApp::build(remote_config(&url), &TestStores::new());

    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request("GET", "/api/v1/users/auth", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_for_unknown_user_is_revoked() {
    let (url, store) = spawn_authority(3600).await;
    let app = TestApp::build(remote_config(&url), &TestStores::new());

    // A session whose user this deployment has never seen.
    store
        .create(Session::new("ghost".to_string(), Uuid::new_v4(), 3600))
        .unwrap();

    let response = app
        .request("GET", "/api/v1/users/auth", None, Some("session_id=ghost"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // The dangling session was dropped at the authority, not just refused.
    assert!(store.lookup("ghost").is_none());
}
