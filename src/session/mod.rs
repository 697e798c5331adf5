//! Client-side session: the bearer token and profile of the logged-in user
//!
//! One [`SessionStore`] is created at startup and shared (`Arc`) with every
//! consumer. The token's presence is the only "logged in" signal; expiry is
//! left to the server, which rejects stale tokens.

use std::path::PathBuf;

use serde::Serialize;

use crate::client::models::UserProfile;
use crate::error::{Result, SessionError};

pub mod route;
pub mod storage;

pub use route::Route;
#[cfg(test)]
pub use storage::MemoryStorage;
pub use storage::{Entries, FileStorage, SessionStorage};

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key of the serialized user profile
pub const USER_KEY: &str = "user";

/// Snapshot of the session pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn from_entries(entries: &Entries) -> Self {
        Self {
            token: token_from(entries),
            user: user_from(entries),
        }
    }
}

fn token_from(entries: &Entries) -> Option<String> {
    entries
        .get(TOKEN_KEY)
        .filter(|t| !t.is_empty())
        .cloned()
}

fn user_from(entries: &Entries) -> Option<UserProfile> {
    let raw = entries.get(USER_KEY)?;
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring malformed stored user profile: {}", e);
            None
        }
    }
}

/// Single source of truth for "is a user authenticated" and "who are they".
///
/// Readers never fail: unreadable storage or a malformed profile reads as
/// absent. `login` and `logout` commit token and profile in one batch.
///
/// Two processes sharing the same session file are last-writer-wins and get
/// no change notification; each read simply sees the latest committed state.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Session persisted in a file
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStorage::new(path))
    }

    /// Session that lives only as long as this process
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    fn snapshot(&self) -> Entries {
        self.storage.load().unwrap_or_else(|e| {
            log::warn!("Session storage unreadable, treating as logged out: {}", e);
            Entries::new()
        })
    }

    /// Current bearer token
    pub fn token(&self) -> Option<String> {
        token_from(&self.snapshot())
    }

    /// Current user profile
    pub fn user(&self) -> Option<UserProfile> {
        user_from(&self.snapshot())
    }

    /// Token and profile read together
    pub fn session(&self) -> Session {
        Session::from_entries(&self.snapshot())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a new session, replacing any previous one
    pub fn login(&self, token: &str, user: &UserProfile) -> Result<()> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken.into());
        }

        let user_json = serde_json::to_string(user)?;
        self.storage.apply(&[
            (TOKEN_KEY, Some(token.to_string())),
            (USER_KEY, Some(user_json)),
        ])?;

        log::debug!("Session stored for {}", user.email);
        Ok(())
    }

    /// Clear token and profile
    pub fn logout(&self) -> Result<()> {
        self.storage.apply(&[(TOKEN_KEY, None), (USER_KEY, None)])?;
        log::debug!("Session cleared");
        Ok(())
    }
}
