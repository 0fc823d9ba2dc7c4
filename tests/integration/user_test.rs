//! Integration tests for profile management and account deletion.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_profile_returns_current_user() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app.request("GET", "/api/v1/user", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], json!("ada"));
    assert_eq!(response.body["data"]["email"], json!("ada@example.com"));
    assert_eq!(response.body["data"]["avatar"], json!(null));
}

#[tokio::test]
async fn test_profile_requires_session() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/user", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_username() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/user",
            Some(json!({ "username": "countess" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], json!("countess"));

    let response = app.request("GET", "/api/v1/user", None, Some(&cookie)).await;
    assert_eq!(response.body["data"]["username"], json!("countess"));
}

#[tokio::test]
async fn test_update_password_rotates_credentials() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/user",
            Some(json!({ "password": "byron1815" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.request("GET", "/api/v1/users/logout", None, Some(&cookie))
        .await;

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
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.login("ada@example.com", "byron1815").await;
}

#[tokio::test]
async fn test_update_rejects_weak_password() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/user",
            Some(json!({ "password": "short1" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_update_avatar_requires_url() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request(
            "PUT",
            "/api/v1/user",
            Some(json!({ "avatar": "not a url" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            "/api/v1/user",
            Some(json!({ "avatar": "https://example.com/ada.png" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["avatar"],
        json!("https://example.com/ada.png")
    );
}

#[tokio::test]
async fn test_delete_account_revokes_session_and_account() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    app.request(
        "POST",
        "/api/v1/note",
        Some(json!({ "name": "keep", "body": "me" })),
        Some(&cookie),
    )
    .await;

    let response = app
        .request("DELETE", "/api/v1/user", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], json!("Account deleted"));
    assert!(response.set_cookie.is_some(), "No revocation cookie");

    // The session died with the account.
    let response = app
        .request("GET", "/api/v1/users/auth", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // And so did the credentials.
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
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_email_can_sign_up_again() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    app.request("DELETE", "/api/v1/user", None, Some(&cookie))
        .await;

    // The address is free again, and the new account starts empty.
    app.signup("ada2", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request("GET", "/api/v1/notes", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
}
