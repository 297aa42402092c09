use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and non-web fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, User};
    use crate::session::SessionRepository;

    fn alice() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: "2024-01-01T00:00:00".to_string(),
            updated_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(store.clone());

        // Empty store restores to unauthenticated
        assert!(repo.load().is_none());

        let session = Session {
            token: "t1".to_string(),
            user: alice(),
        };
        repo.save(&session);

        // Exactly two entries: the raw token and the JSON-encoded user
        assert_eq!(store.get("token").as_deref(), Some("t1"));
        let raw_user = store.get("user").unwrap();
        assert_eq!(serde_json::from_str::<User>(&raw_user).unwrap(), alice());

        assert_eq!(repo.load(), Some(session));
    }

    #[test]
    fn test_corrupt_user_clears_both_entries() {
        let store = MemoryStore::new();
        store.set("token", "t1");
        store.set("user", "{not json");

        let repo = SessionRepository::new(store.clone());
        assert!(repo.load().is_none());
        assert!(store.get("token").is_none());
        assert!(store.get("user").is_none());

        // A later load stays clean
        assert!(repo.load().is_none());
    }

    #[test]
    fn test_token_without_user_clears_both_entries() {
        let store = MemoryStore::new();
        store.set("token", "t1");

        let repo = SessionRepository::new(store.clone());
        assert!(repo.load().is_none());
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_user_without_token_clears_both_entries() {
        let store = MemoryStore::new();
        store.set("user", &serde_json::to_string(&alice()).unwrap());

        let repo = SessionRepository::new(store.clone());
        assert!(repo.load().is_none());
        assert!(store.get("user").is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(store.clone());
        repo.save(&Session {
            token: "t1".to_string(),
            user: alice(),
        });

        repo.clear();
        let after_first = (store.get("token"), store.get("user"));
        repo.clear();
        let after_second = (store.get("token"), store.get("user"));

        assert_eq!(after_first, (None, None));
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_token_reads_fresh_value() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(store.clone());

        assert!(repo.token().is_none());
        store.set("token", "t2");
        assert_eq!(repo.token().as_deref(), Some("t2"));
        repo.clear();
        assert!(repo.token().is_none());
    }
}
