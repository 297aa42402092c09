use std::fs;
use std::path::PathBuf;

use crate::session::SessionStore;

/// Filesystem SessionStore for native builds: one file per key under a base
/// directory, mirroring the two-entry localStorage layout on disk.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store under the platform data directory (`<data_dir>/trove`).
    pub fn new() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trove");
        Self { dir }
    }

    /// Store under an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(self.path(key), value));
        if let Err(err) = result {
            tracing::warn!(%err, key, "failed to persist session entry");
        }
    }

    fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, User};
    use crate::session::SessionRepository;

    fn some_session() -> Session {
        Session {
            token: "t1".to_string(),
            user: User {
                id: 1,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                created_at: "2024-01-01T00:00:00".to_string(),
                updated_at: "2024-01-01T00:00:00".to_string(),
            },
        }
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SessionRepository::new(FileStore::at(dir.path()));

        assert!(repo.load().is_none());
        let session = some_session();
        repo.save(&session);
        assert_eq!(repo.load(), Some(session));

        repo.clear();
        assert!(repo.load().is_none());
        assert!(!dir.path().join("token").exists());
        assert!(!dir.path().join("user").exists());
    }

    #[test]
    fn test_missing_directory_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("never-created"));
        assert!(store.get("token").is_none());

        // First write creates the directory
        store.set("token", "t1");
        assert_eq!(store.get("token").as_deref(), Some("t1"));
    }

    #[test]
    fn test_corrupt_user_file_restores_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path());
        store.set("token", "t1");
        store.set("user", "definitely not json");

        let repo = SessionRepository::new(store);
        assert!(repo.load().is_none());
        assert!(!dir.path().join("token").exists());
    }
}
