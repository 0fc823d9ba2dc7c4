//! Account registration, profile management, and the deletion cascade.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use notehub_auth::PasswordHasher;
use notehub_core::result::AppResult;
use notehub_entity::user::{CreateUser, UpdateUser, User, normalize_email};
use notehub_store::{NoteStore, OwnershipLinkStore, UserDirectory};

/// Manages accounts.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Account records.
    users: Arc<UserDirectory>,
    /// Note records, for the deletion cascade.
    notes: Arc<NoteStore>,
    /// Ownership links, for the deletion cascade.
    links: Arc<OwnershipLinkStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserDirectory>,
        notes: Arc<NoteStore>,
        links: Arc<OwnershipLinkStore>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            users,
            notes,
            links,
            hasher,
        }
    }

    /// Registers a new account.
    ///
    /// The account ID derives from the normalized email, so a second
    /// signup with the same address fails with Conflict.
    pub fn register(&self, new_user: CreateUser) -> AppResult<User> {
        let email = normalize_email(&new_user.email);
        let now = Utc::now();
        let user = User {
            id: User::id_for_email(&email),
            username: new_user.username,
            email,
            password_hash: self.hasher.hash_password(&new_user.password)?,
            avatar: new_user.avatar,
            created_at: now,
            updated_at: now,
        };

        self.users.save(user.clone())?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Fetches an account by ID.
    pub fn get_user(&self, user_id: Uuid) -> AppResult<User> {
        self.users.get(&user_id)
    }

    /// Applies a partial profile update.
    pub fn update_user(&self, user_id: Uuid, update: UpdateUser) -> AppResult<User> {
        let mut user = self.users.get(&user_id)?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(password) = update.password {
            user.password_hash = self.hasher.hash_password(&password)?;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        user.updated_at = Utc::now();

        self.users.update(user.clone())?;

        info!(user_id = %user_id, "User updated");
        Ok(user)
    }

    /// Deletes an account together with all its notes and links.
    ///
    /// The account record goes first so concurrent requests stop
    /// authenticating; note cleanup continues past individual failures.
    pub fn delete_account(&self, user_id: Uuid) -> AppResult<()> {
        self.users.delete(&user_id)?;

        let tokens = self.links.remove_user(&user_id);
        let mut removed_notes = 0;
        for token in &tokens {
            match self.notes.delete(token) {
                Ok(()) => removed_notes += 1,
                Err(err) => {
                    warn!(
                        user_id = %user_id,
                        token = %token,
                        error = %err,
                        "Failed to remove note during account deletion"
                    );
                }
            }
        }

        info!(user_id = %user_id, removed_notes, "Account deleted");
        Ok(())
    }
}
