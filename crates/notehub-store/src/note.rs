//! In-memory note store.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use notehub_core::AppError;
use notehub_core::result::AppResult;
use notehub_entity::note::Note;

/// Concurrent note store keyed by note token.
///
/// The store knows nothing about ownership; authorization happens in the
/// note service against the ownership link store before any call lands
/// here.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: DashMap<String, Note>,
}

impl NoteStore {
    /// Create an empty note store.
    pub fn new() -> Self {
        Self {
            notes: DashMap::new(),
        }
    }

    /// Insert a new note. Never overwrites an existing token.
    pub fn save(&self, note: Note) -> AppResult<()> {
        match self.notes.entry(note.token.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("note token already exists")),
            Entry::Vacant(entry) => {
                entry.insert(note);
                Ok(())
            }
        }
    }

    /// Fetch a note by token.
    pub fn find(&self, token: &str) -> AppResult<Note> {
        self.notes
            .get(token)
            .map(|note| note.clone())
            .ok_or_else(|| AppError::not_found("note not found"))
    }

    /// Replace an existing note.
    pub fn update(&self, note: Note) -> AppResult<()> {
        match self.notes.get_mut(&note.token) {
            Some(mut entry) => {
                *entry = note;
                Ok(())
            }
            None => Err(AppError::not_found("note not found")),
        }
    }

    /// Remove a note by token.
    pub fn delete(&self, token: &str) -> AppResult<()> {
        self.notes
            .remove(token)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("note not found"))
    }
}
