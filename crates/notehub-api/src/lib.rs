//! # notehub-api
//!
//! HTTP API layer for Notehub built on Axum.
//!
//! Provides the REST endpoints, middleware (guest gate, CORS, logging),
//! the session-cookie extractor, DTOs, and error mapping, plus the server
//! wiring that assembles stores, backends, and services from configuration.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
