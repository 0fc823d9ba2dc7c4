//! # notehub-sessiond
//!
//! The standalone session authority. Holds the single source of truth
//! for session validity and exposes the three session operations over
//! HTTP/JSON for any number of API instances running with the remote
//! session backend.
//!
//! ## Modules
//!
//! - `wire` - request and response message shapes
//! - `handlers` - the create/check/delete/health endpoints
//! - `router` - route table
//! - `app` - wiring and the server loop

pub mod app;
pub mod handlers;
pub mod router;
pub mod state;
pub mod wire;

pub use app::run_sessiond;
pub use router::build_router;
pub use state::SessiondState;
