//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note.
///
/// Notes carry no owner field; ownership lives entirely in the ownership
/// link store, which is what lets the note store stay authorization-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Opaque unique token identifying the note.
    pub token: String,
    /// Note title.
    pub name: String,
    /// Note body.
    pub body: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of a note, used for create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Note title.
    pub name: String,
    /// Note body.
    pub body: String,
}
