//! Persisted session record: the token and user pair in durable storage.
//!
//! Two keys make up a session: `token` holds the raw bearer credential
//! and `user` holds the JSON-serialized server record from the login
//! response. Both are written together and cleared together; a lone key
//! is never treated as a session.
//!
//! ERROR HANDLING
//! ==============
//! A malformed stored user record reads back as "no session" instead of
//! an error, so stale or hand-edited storage can never crash startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Session, User};
use crate::storage::KeyValue;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// Read/write access to the persisted session.
///
/// The auth client is the only writer; the HTTP transport additionally
/// reads the token before each request and clears the vault when the
/// server reports the session expired.
#[derive(Clone, Debug)]
pub struct SessionVault<S: KeyValue> {
    store: S,
}

impl<S: KeyValue> SessionVault<S> {
    /// Wrap a storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// The persisted user record, if present and parseable.
    pub fn user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// The complete session. `Some` only when both the token and a
    /// readable user record are present.
    pub fn session(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.user()?;
        Some(Session { token, user })
    }

    /// Persist a fresh session: the token plus the full server response
    /// body as the user record.
    pub fn save(&self, token: &str, record: &serde_json::Value) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_KEY, &record.to_string());
    }

    /// Delete both session keys. Idempotent.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}
