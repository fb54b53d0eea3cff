//! Persisted admin session: bearer token + user identity.
//!
//! The backend owns token validity; nothing here tracks expiry. A token is
//! discovered to be stale only when a subsequent request fails, at which
//! point the caller clears the session and returns to the login view.

use serde::{Deserialize, Serialize};

use crate::settings::SettingsStore;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "admin-token";
/// Storage key for the JSON-serialized user identity.
pub const USER_KEY: &str = "admin-user";

/// The authenticated admin's identity, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

/// Client-held proof of authentication.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: AdminUser,
}

/// Reads and writes the persisted session.
///
/// Explicitly constructed over a [`SettingsStore`] so views and tests inject
/// their own backing storage instead of reaching for an ambient global.
#[derive(Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: SettingsStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a freshly issued session.
    pub fn save(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        if let Ok(user) = serde_json::to_string(&session.user) {
            self.store.set(USER_KEY, &user);
        }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Load the persisted session.
    ///
    /// Returns `None` unless the token is present AND the user record parses.
    /// Malformed user data is treated exactly like an absent session, so a
    /// protected view falls through to the login redirect instead of panicking.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY)?;
        let raw_user = self.store.get(USER_KEY)?;
        let user: AdminUser = serde_json::from_str(&raw_user).ok()?;
        Some(Session { token, user })
    }

    /// Drop the persisted session. Does not call the backend; tokens are
    /// stateless and simply stop being presented.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    fn sample() -> Session {
        Session {
            token: "jwt-abc".to_string(),
            user: AdminUser {
                id: "u1".to_string(),
                email: "admin@example.com".to_string(),
                role: "ADMIN".to_string(),
            },
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load().is_none());
        assert!(sessions.token().is_none());

        sessions.save(&sample());
        assert_eq!(sessions.token().as_deref(), Some("jwt-abc"));
        assert_eq!(sessions.load(), Some(sample()));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let backing = MemoryStore::new();
        let sessions = SessionStore::new(backing.clone());
        sessions.save(&sample());
        sessions.clear();

        assert!(sessions.load().is_none());
        assert!(backing.get(TOKEN_KEY).is_none());
        assert!(backing.get(USER_KEY).is_none());
    }

    #[test]
    fn test_malformed_user_is_treated_as_absent() {
        let backing = MemoryStore::new();
        backing.set(TOKEN_KEY, "jwt-abc");
        backing.set(USER_KEY, "{not json");

        let sessions = SessionStore::new(backing);
        assert!(sessions.load().is_none());
        // Token alone is still readable for callers that only need it.
        assert_eq!(sessions.token().as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn test_token_without_user_is_absent() {
        let backing = MemoryStore::new();
        backing.set(TOKEN_KEY, "jwt-abc");
        let sessions = SessionStore::new(backing);
        assert!(sessions.load().is_none());
    }
}
