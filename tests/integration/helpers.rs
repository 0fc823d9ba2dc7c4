//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use notehub_api::app::build_app;
use notehub_api::state::AppState;
use notehub_auth::{PasswordHasher, SessionBackendDispatch, SessionManager, SessionStore};
use notehub_core::config::AppConfig;
use notehub_service::note::NoteService;
use notehub_service::user::UserService;
use notehub_store::{NoteStore, OwnershipLinkStore, UserDirectory};

/// Default configuration with hashing parameters lowered for test speed.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.argon2_memory_kib = 8;
    config.auth.argon2_iterations = 1;
    config.auth.argon2_parallelism = 1;
    config
}

/// The backing stores of one deployment.
///
/// Kept apart from [`TestApp`] so two app instances can share one set,
/// the way multiple servers share a user base in production.
pub struct TestStores {
    pub users: Arc<UserDirectory>,
    pub notes: Arc<NoteStore>,
    pub links: Arc<OwnershipLinkStore>,
    pub sessions: Arc<SessionStore>,
}

impl TestStores {
    pub fn new() -> Self {
        Self {
            users: Arc::new(UserDirectory::new()),
            notes: Arc::new(NoteStore::new()),
            links: Arc::new(OwnershipLinkStore::new()),
            sessions: Arc::new(SessionStore::new()),
        }
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Creates an app with fresh stores and the in-process session backend.
    pub fn new() -> Self {
        Self::build(test_config(), &TestStores::new())
    }

    /// Creates an app over the given config and stores.
    ///
    /// Wires the same graph as `run_server`, minus listener and sweeper.
    pub fn build(config: AppConfig, stores: &TestStores) -> Self {
        let hasher = Arc::new(PasswordHasher::new(&config.auth));
        let backend = Arc::new(
            SessionBackendDispatch::new(&config.session, Arc::clone(&stores.sessions))
                .expect("Failed to build session backend"),
        );
        let session_manager = Arc::new(SessionManager::new(
            backend,
            Arc::clone(&stores.users),
            Arc::clone(&hasher),
            &config.session,
            config.server.api_prefix.clone(),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            Arc::clone(&stores.notes),
            Arc::clone(&stores.links),
            Arc::clone(&hasher),
        ));
        let note_service = Arc::new(NoteService::new(
            Arc::clone(&stores.notes),
            Arc::clone(&stores.links),
        ));

        let state = AppState {
            config: Arc::new(config),
            session_manager,
            user_service,
            note_service,
        };

        Self {
            router: build_app(state),
        }
    }

    /// Signs up a user, asserting the API accepts the account.
    pub async fn signup(&self, username: &str, email: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/api/v1/users/signup",
                Some(json!({
                    "username": username,
                    "email": email,
                    "password": password,
                    "confirm_password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Signup failed: {:?}",
            response.body
        );
    }

    /// Logs in and returns the session cookie for later requests.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/users/login",
                Some(json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .session_cookie()
            .expect("No session cookie in login response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Value of the `Set-Cookie` header, when one was sent
    pub set_cookie: Option<String>,
}

impl TestResponse {
    /// The `name=value` pair of the session cookie, shaped for a
    /// `Cookie` request header.
    pub fn session_cookie(&self) -> Option<String> {
        let raw = self.set_cookie.as_deref()?;
        raw.split(';').next().map(str::to_string)
    }
}
