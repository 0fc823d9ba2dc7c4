//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user in the Notehub system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier, derived deterministically from the
    /// normalized email. See [`User::id_for_email`].
    pub id: Uuid,
    /// Display name chosen at registration.
    pub username: String,
    /// Email address the account is keyed by. Immutable after registration.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Optional avatar URL.
    pub avatar: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Derive the stable user ID for an email address.
    ///
    /// The ID is a namespaced UUID over the normalized email, so the same
    /// address always maps to the same user and the directory needs no
    /// secondary email index.
    pub fn id_for_email(email: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_OID, normalize_email(email).as_bytes())
    }
}

/// Normalize an email address for identity purposes.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired display name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password, hashed during registration.
    pub password: String,
    /// Optional avatar URL.
    pub avatar: Option<String>,
}

/// Data for updating an existing user's profile.
///
/// The email is the account key and cannot change; absent fields are left
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub username: Option<String>,
    /// New plaintext password, hashed before storage.
    pub password: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
}
