//! # notehub-service
//!
//! Business logic for Notehub. Note operations enforce per-note ownership
//! through the link store before touching note records; account operations
//! own the registration and deletion cascades.

pub mod note;
pub mod user;

pub use note::NoteService;
pub use user::UserService;
