//! # notehub-auth
//!
//! Password hashing, session storage, session backends (in-process and
//! remote), and the authentication flow for Notehub.
//!
//! ## Modules
//!
//! - `password` - Argon2id password hashing and verification
//! - `session` - session store, backends, authentication manager, cleanup

pub mod password;
pub mod session;

pub use password::PasswordHasher;
pub use session::{
    LoginResult, SESSION_COOKIE, SessionBackend, SessionBackendDispatch, SessionCleanup,
    SessionCookie, SessionManager, SessionStore,
};
