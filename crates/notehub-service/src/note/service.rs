//! Note CRUD with per-note ownership enforcement.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_entity::note::{Note, NoteDraft, generate_note_token};
use notehub_store::{NoteStore, OwnershipLinkStore};

/// Manages note CRUD operations.
///
/// Every read and write of an existing note passes the ownership gate
/// first; the note store itself never sees a user ID.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note records.
    notes: Arc<NoteStore>,
    /// User-to-note ownership links.
    links: Arc<OwnershipLinkStore>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(notes: Arc<NoteStore>, links: Arc<OwnershipLinkStore>) -> Self {
        Self { notes, links }
    }

    /// Creates a note owned by `user_id` under a fresh token.
    pub fn create_note(&self, user_id: Uuid, draft: NoteDraft) -> AppResult<Note> {
        let now = Utc::now();
        let note = Note {
            token: generate_note_token(),
            name: draft.name,
            body: draft.body,
            created_at: now,
            updated_at: now,
        };

        // The record goes in before the link so a failed save leaves no
        // link pointing at nothing.
        self.notes.save(note.clone())?;
        self.links.add_link(user_id, &note.token);

        info!(user_id = %user_id, token = %note.token, "Note created");
        Ok(note)
    }

    /// Fetches a note the user owns.
    pub fn get_note(&self, user_id: Uuid, token: &str) -> AppResult<Note> {
        self.require_ownership(&user_id, token)?;
        self.notes.find(token)
    }

    /// Rewrites the name and body of a note the user owns.
    pub fn update_note(&self, user_id: Uuid, token: &str, draft: NoteDraft) -> AppResult<Note> {
        self.require_ownership(&user_id, token)?;

        let mut note = self.notes.find(token)?;
        note.name = draft.name;
        note.body = draft.body;
        note.updated_at = Utc::now();

        self.notes.update(note.clone())?;

        info!(user_id = %user_id, token = %token, "Note updated");
        Ok(note)
    }

    /// Deletes a note the user owns.
    pub fn delete_note(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        self.require_ownership(&user_id, token)?;

        // Unlink first so no window exists where the record is gone but
        // the link still grants access to a future token collision.
        self.links.remove_link(&user_id, token)?;
        if let Err(err) = self.notes.delete(token) {
            // The record is still there; give the owner their link back.
            self.links.add_link(user_id, token);
            return Err(err);
        }

        info!(user_id = %user_id, token = %token, "Note deleted");
        Ok(())
    }

    /// Lists every note the user owns, oldest first.
    pub fn list_notes(&self, user_id: Uuid) -> AppResult<Vec<Note>> {
        let mut notes = self
            .links
            .tokens_by_user(&user_id)
            .iter()
            .map(|token| self.notes.find(token))
            .collect::<AppResult<Vec<Note>>>()?;

        notes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(notes)
    }

    /// Answers Authorization without revealing whether the note exists.
    fn require_ownership(&self, user_id: &Uuid, token: &str) -> AppResult<()> {
        if self.links.check_link(user_id, token) {
            Ok(())
        } else {
            Err(AppError::authorization(
                "no access to this note, or the note does not exist",
            ))
        }
    }
}
