//! In-memory user directory.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use notehub_core::AppError;
use notehub_core::result::AppResult;
use notehub_entity::user::User;

/// Concurrent user directory keyed by user ID.
///
/// Because user IDs are derived from the normalized email, keying by ID
/// also enforces the one-account-per-email invariant.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: DashMap<Uuid, User>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Insert a new user. Never overwrites an existing record.
    pub fn save(&self, user: User) -> AppResult<()> {
        match self.users.entry(user.id) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "user already registered with this email",
            )),
            Entry::Vacant(entry) => {
                entry.insert(user);
                Ok(())
            }
        }
    }

    /// Fetch a user by ID.
    pub fn get(&self, user_id: &Uuid) -> AppResult<User> {
        self.users
            .get(user_id)
            .map(|user| user.clone())
            .ok_or_else(|| AppError::not_found("user not found"))
    }

    /// Replace an existing user record.
    pub fn update(&self, user: User) -> AppResult<()> {
        match self.users.get_mut(&user.id) {
            Some(mut entry) => {
                *entry = user;
                Ok(())
            }
            None => Err(AppError::not_found("user not found")),
        }
    }

    /// Remove a user by ID.
    pub fn delete(&self, user_id: &Uuid) -> AppResult<()> {
        self.users
            .remove(user_id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("user not found"))
    }
}
