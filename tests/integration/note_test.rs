//! Integration tests for note CRUD and ownership boundaries.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create_note(app: &TestApp, cookie: &str, name: &str, body: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/v1/note",
            Some(json!({ "name": name, "body": body })),
            Some(cookie),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Create note failed: {:?}",
        response.body
    );
    response.body["data"]["token"]
        .as_str()
        .expect("No token in create response")
        .to_string()
}

#[tokio::test]
async fn test_create_note() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request(
            "POST",
            "/api/v1/note",
            Some(json!({ "name": "groceries", "body": "eggs, flour" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], json!("groceries"));
    assert_eq!(response.body["data"]["body"], json!("eggs, flour"));
    assert!(
        !response.body["data"]["token"]
            .as_str()
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_note_routes_require_session() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/note",
            Some(json!({ "name": "n", "body": "b" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_note_rejects_blank_name() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request(
            "POST",
            "/api/v1/note",
            Some(json!({ "name": "", "body": "b" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_get_note_roundtrip() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;
    let token = create_note(&app, &cookie, "groceries", "eggs").await;

    let response = app
        .request("GET", &format!("/api/v1/note/{token}"), None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["token"], json!(token));
    assert_eq!(response.body["data"]["name"], json!("groceries"));
    assert_eq!(response.body["data"]["body"], json!("eggs"));
}

#[tokio::test]
async fn test_list_notes_is_scoped_to_owner() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    app.signup("bob", "bob@example.com", "dylan1965").await;
    let ada = app.login("ada@example.com", "lovelace1").await;
    let bob = app.login("bob@example.com", "dylan1965").await;

    create_note(&app, &ada, "one", "").await;
    create_note(&app, &ada, "two", "").await;
    create_note(&app, &bob, "theirs", "").await;

    let response = app.request("GET", "/api/v1/notes", None, Some(&ada)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);

    let response = app.request("GET", "/api/v1/notes", None, Some(&bob)).await;
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["data"][0]["name"], json!("theirs"));
}

#[tokio::test]
async fn test_update_note() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;
    let token = create_note(&app, &cookie, "draft", "v1").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/note/{token}"),
            Some(json!({ "name": "final", "body": "v2" })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], json!("final"));
    assert_eq!(response.body["data"]["body"], json!("v2"));

    // The token survives edits.
    assert_eq!(response.body["data"]["token"], json!(token));
}

#[tokio::test]
async fn test_delete_note() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;
    let token = create_note(&app, &cookie, "gone", "soon").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/note/{token}"),
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["message"], json!("Note deleted"));

    let response = app
        .request("GET", &format!("/api/v1/note/{token}"), None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    let cookie = app.login("ada@example.com", "lovelace1").await;

    let response = app
        .request("GET", "/api/v1/note/no-such-token", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn test_foreign_note_reads_as_missing() {
    let app = TestApp::new();
    app.signup("ada", "ada@example.com", "lovelace1").await;
    app.signup("bob", "bob@example.com", "dylan1965").await;
    let ada = app.login("ada@example.com", "lovelace1").await;
    let bob = app.login("bob@example.com", "dylan1965").await;
    let token = create_note(&app, &ada, "private", "secret").await;

    // Another user's note answers exactly like a nonexistent one.
    let response = app
        .request("GET", &format!("/api/v1/note/{token}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/note/{token}"),
            Some(json!({ "name": "mine now", "body": "" })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/v1/note/{token}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The note is untouched for its owner.
    let response = app
        .request("GET", &format!("/api/v1/note/{token}"), None, Some(&ada))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], json!("private"));
}

#[tokio::test]
async fn test_health_needs_no_session() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], json!("ok"));
}
