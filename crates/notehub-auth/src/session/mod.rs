//! Session lifecycle: storage, backends, the authentication flow, cleanup.

pub mod backend;
pub mod cleanup;
pub mod manager;
pub mod remote;
pub mod store;

pub use backend::{MemorySessionBackend, SessionBackend, SessionBackendDispatch};
pub use cleanup::SessionCleanup;
pub use manager::{LoginResult, SESSION_COOKIE, SessionCookie, SessionManager};
pub use remote::RemoteSessionBackend;
pub use store::SessionStore;
