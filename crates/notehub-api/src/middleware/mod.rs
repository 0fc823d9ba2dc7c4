//! Axum middleware stack.

pub mod cors;
pub mod guest;
pub mod logging;
