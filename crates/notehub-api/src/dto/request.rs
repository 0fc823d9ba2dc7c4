//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use notehub_core::error::AppError;
use notehub_core::result::AppResult;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,
    /// Email address, the account key.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password; policy checked by [`check_password_policy`].
    pub password: String,
    /// Must repeat `password` exactly.
    pub confirm_password: String,
}

impl SignupRequest {
    /// Applies the rules the derive attributes do not cover.
    pub fn check_password_rules(&self) -> AppResult<()> {
        if self.password != self.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        check_password_policy(&self.password)
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update request body; absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: Option<String>,
    /// New password; policy checked by [`check_password_policy`].
    pub password: Option<String>,
    /// New avatar URL.
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: Option<String>,
}

impl UpdateUserRequest {
    /// Applies the password policy when a new password is given.
    pub fn check_password_rules(&self) -> AppResult<()> {
        match &self.password {
            Some(password) => check_password_policy(password),
            None => Ok(()),
        }
    }
}

/// Note create/update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteRequest {
    /// Note title.
    #[validate(length(min = 1, max = 30, message = "Note name must be 1-30 characters"))]
    pub name: String,
    /// Note body.
    #[validate(length(max = 500, message = "Note body must be at most 500 characters"))]
    pub body: String,
}

/// Password policy: 7 to 30 characters drawn from ASCII letters, digits
/// and `!@#$%^&*`, with at least one digit.
pub fn check_password_policy(password: &str) -> AppResult<()> {
    let length = password.chars().count();
    if !(7..=30).contains(&length) {
        return Err(AppError::validation(
            "Password must be 7-30 characters long",
        ));
    }

    let allowed = |c: char| c.is_ascii_alphanumeric() || "!@#$%^&*".contains(c);
    if !password.chars().all(allowed) {
        return Err(AppError::validation(
            "Password may only contain letters, digits and !@#$%^&*",
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "Password must contain at least one digit",
        ));
    }

    Ok(())
}

/// Converts derive-level validation failures into the unified error type.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    AppError::validation(errors.to_string())
}
