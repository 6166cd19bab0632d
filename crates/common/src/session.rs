// ====================
// common/src/session.rs
// ====================
//! Client-side session gate.
//!
//! The browser's key-value storage is modeled as an injected
//! [`SessionStore`] capability rather than an ambient global, so the
//! gating logic can be exercised against an in-memory store. Two keys
//! are used: the raw token string under [`TOKEN_KEY`] and the
//! JSON-serialized [`UserProfile`] under [`USER_KEY`].

use crate::UserProfile;

/// Storage key for the session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// Minimal key-value storage capability (get/set/remove).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// A session restored from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserProfile,
}

/// Persist a session after a successful login.
pub fn save_session<S: SessionStore>(
    store: &mut S,
    token: &str,
    user: &UserProfile,
) -> serde_json::Result<()> {
    let user_json = serde_json::to_string(user)?;
    store.set(TOKEN_KEY, token);
    store.set(USER_KEY, &user_json);
    Ok(())
}

/// Restore the session from storage, if one is present and intact.
///
/// No stored token means no session. A missing or malformed stored
/// profile is treated the same way: the corrupt entries are silently
/// discarded and the caller falls back to the login flow.
pub fn load_session<S: SessionStore>(store: &mut S) -> Option<StoredSession> {
    let token = store.get(TOKEN_KEY)?;
    let raw_user = match store.get(USER_KEY) {
        Some(raw) => raw,
        None => {
            clear_session(store);
            return None;
        }
    };
    match serde_json::from_str::<UserProfile>(&raw_user) {
        Ok(user) => Some(StoredSession { token, user }),
        Err(_) => {
            clear_session(store);
            None
        }
    }
}

/// Drop both session keys (logout).
pub fn clear_session<S: SessionStore>(store: &mut S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
        fn remove(&mut self, key: &str) {
            self.0.remove(key);
        }
    }

    fn sample_user() -> UserProfile {
        UserProfile {
            id: 1,
            first_name: "Laura".to_string(),
            last_name: "Gomez".to_string(),
            age: 31,
            email: "laura.gomez@example.com".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::default();
        let user = sample_user();
        save_session(&mut store, "tok-abc", &user).unwrap();

        let session = load_session(&mut store).unwrap();
        assert_eq!(session.token, "tok-abc");
        assert_eq!(session.user, user);
    }

    #[test]
    fn no_token_means_no_session() {
        let mut store = MemoryStore::default();
        assert!(load_session(&mut store).is_none());
    }

    #[test]
    fn corrupt_profile_discards_both_keys() {
        let mut store = MemoryStore::default();
        store.set(TOKEN_KEY, "tok-abc");
        store.set(USER_KEY, "not json at all");

        assert!(load_session(&mut store).is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn missing_profile_discards_token() {
        let mut store = MemoryStore::default();
        store.set(TOKEN_KEY, "tok-abc");

        assert!(load_session(&mut store).is_none());
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn clear_session_removes_everything() {
        let mut store = MemoryStore::default();
        save_session(&mut store, "tok-abc", &sample_user()).unwrap();
        clear_session(&mut store);

        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }
}
