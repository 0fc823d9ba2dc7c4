//! Note token generation.

use uuid::Uuid;

/// Generate an opaque unique token for a new note.
pub fn generate_note_token() -> String {
    Uuid::new_v4().simple().to_string()
}
