//! Session persistence with a strict pairing rule: the `token` and `user`
//! entries are written and cleared together. A half-present pair is
//! treated as corrupt and removed on load, so the rest of the app never
//! sees a token without a user or the other way around.

use crate::app_lib::errors::AppError;
use crate::features::auth::storage::{SessionStorage, TOKEN_KEY, USER_KEY};
use crate::features::auth::types::{AuthPayload, User};

/// Authenticated identity held in memory and mirrored to storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Persists the session pair through a storage capability.
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restores the persisted session. Entries that fail the pairing rule
    /// or no longer decode are cleared rather than surfaced.
    pub fn load(&self) -> Option<Session> {
        match (self.storage.get(TOKEN_KEY), self.storage.get(USER_KEY)) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(Session { user, token }),
                Err(_) => {
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Persists a freshly issued token and user pair.
    pub fn store(&self, payload: &AuthPayload) -> Result<Session, AppError> {
        let raw = serde_json::to_string(&payload.user)
            .map_err(|err| AppError::Serialization(format!("Failed to encode user: {err}")))?;

        self.storage.set(TOKEN_KEY, &payload.token);
        self.storage.set(USER_KEY, &raw);

        Ok(Session {
            user: payload.user.clone(),
            token: payload.token.clone(),
        })
    }

    /// Replaces the persisted user while keeping the token. Does nothing
    /// without a stored token, so a lone `user` entry can never appear.
    pub fn replace_user(&self, user: &User) -> Result<(), AppError> {
        if self.storage.get(TOKEN_KEY).is_none() {
            return Ok(());
        }

        let raw = serde_json::to_string(user)
            .map_err(|err| AppError::Serialization(format!("Failed to encode user: {err}")))?;
        self.storage.set(USER_KEY, &raw);
        Ok(())
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Removes both entries. Safe to call from any state.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

/// Session store over the browser's `localStorage`.
#[cfg(target_arch = "wasm32")]
pub fn browser_store() -> SessionStore<crate::features::auth::storage::BrowserStorage> {
    SessionStore::new(crate::features::auth::storage::BrowserStorage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::storage::MemoryStorage;

    fn sample_payload() -> AuthPayload {
        AuthPayload {
            token: "jwt-token".to_string(),
            user: User {
                id: "64f1c7".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
        }
    }

    #[test]
    fn store_then_load_round_trips() {
        let store = SessionStore::new(MemoryStorage::new());
        let stored = store.store(&sample_payload()).unwrap();

        let loaded = store.load().expect("session should be restored");
        assert_eq!(loaded, stored);
        assert_eq!(loaded.token, "jwt-token");
        assert_eq!(loaded.user.email, "ada@example.com");
        assert_eq!(store.token(), Some("jwt-token".to_string()));
    }

    #[test]
    fn lone_token_is_cleared_on_load() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "jwt-token");

        let store = SessionStore::new(storage);
        assert_eq!(store.load(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn lone_user_is_cleared_on_load() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, r#"{"id":"1","name":"Ada","email":"ada@example.com"}"#);

        let store = SessionStore::new(storage);
        assert_eq!(store.load(), None);
        assert_eq!(store.storage.get(USER_KEY), None);
    }

    #[test]
    fn corrupt_user_clears_the_pair() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "jwt-token");
        storage.set(USER_KEY, "not-json");

        let store = SessionStore::new(storage);
        assert_eq!(store.load(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.storage.get(USER_KEY), None);
    }

    #[test]
    fn clear_removes_both_entries() {
        let store = SessionStore::new(MemoryStorage::new());
        store.store(&sample_payload()).unwrap();

        store.clear();

        assert_eq!(store.token(), None);
        assert_eq!(store.storage.get(USER_KEY), None);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_is_idempotent_when_empty() {
        let store = SessionStore::new(MemoryStorage::new());
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn replace_user_updates_profile_and_keeps_token() {
        let store = SessionStore::new(MemoryStorage::new());
        store.store(&sample_payload()).unwrap();

        let renamed = User {
            id: "64f1c7".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        store.replace_user(&renamed).unwrap();

        let loaded = store.load().expect("session should survive a profile update");
        assert_eq!(loaded.user.name, "Ada Lovelace");
        assert_eq!(loaded.token, "jwt-token");
    }

    #[test]
    fn replace_user_without_token_writes_nothing() {
        let store = SessionStore::new(MemoryStorage::new());

        let user = sample_payload().user;
        store.replace_user(&user).unwrap();

        assert_eq!(store.storage.get(USER_KEY), None);
        assert_eq!(store.load(), None);
    }
}
