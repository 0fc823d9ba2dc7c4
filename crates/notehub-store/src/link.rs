//! Ownership link store.

use std::collections::HashSet;

use dashmap::DashMap;
use uuid::Uuid;

use notehub_core::AppError;
use notehub_core::result::AppResult;

/// Concurrent store of (user, note token) ownership links.
///
/// Per user the tokens form a set: granting the same link twice is a
/// no-op, and removal order carries no meaning. A note token is accessible
/// to exactly the set of users holding a link to it.
#[derive(Debug, Default)]
pub struct OwnershipLinkStore {
    links: DashMap<Uuid, HashSet<String>>,
}

impl OwnershipLinkStore {
    /// Create an empty link store.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Grant `user_id` access to `token`. Idempotent.
    pub fn add_link(&self, user_id: Uuid, token: &str) {
        self.links
            .entry(user_id)
            .or_default()
            .insert(token.to_string());
    }

    /// Revoke access to `token` for `user_id`.
    ///
    /// NotFound when the user holds no links, or the token is not among
    /// them.
    pub fn remove_link(&self, user_id: &Uuid, token: &str) -> AppResult<()> {
        let (removed, now_empty) = match self.links.get_mut(user_id) {
            Some(mut tokens) => {
                let removed = tokens.remove(token);
                (removed, tokens.is_empty())
            }
            None => (false, false),
        };

        if now_empty {
            // Re-checked under the shard lock so a concurrent add_link wins.
            self.links.remove_if(user_id, |_, tokens| tokens.is_empty());
        }

        if removed {
            Ok(())
        } else {
            Err(AppError::not_found("no link for this user and token"))
        }
    }

    /// Check whether `user_id` owns `token`.
    ///
    /// Pure read; any lookup miss yields `false` (fail closed).
    pub fn check_link(&self, user_id: &Uuid, token: &str) -> bool {
        self.links
            .get(user_id)
            .map(|tokens| tokens.contains(token))
            .unwrap_or(false)
    }

    /// All note tokens the user holds links to.
    pub fn tokens_by_user(&self, user_id: &Uuid) -> Vec<String> {
        self.links
            .get(user_id)
            .map(|tokens| tokens.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Drop every link a user holds, returning the affected tokens.
    ///
    /// Used when an account is deleted.
    pub fn remove_user(&self, user_id: &Uuid) -> Vec<String> {
        self.links
            .remove(user_id)
            .map(|(_, tokens)| tokens.into_iter().collect())
            .unwrap_or_default()
    }
}
