//! # notehub-store
//!
//! Concurrent in-memory stores for Notehub. Every store is an explicit
//! object constructed once at startup and handed to its consumers as an
//! `Arc`; nothing in here is process-global. All maps are strongly typed
//! sharded maps, safe under concurrent access from independent request
//! tasks.

pub mod link;
pub mod note;
pub mod user;

pub use link::OwnershipLinkStore;
pub use note::NoteStore;
pub use user::UserDirectory;
