//! # Session repository — typed access to durable session state
//!
//! This module is the persistence boundary for authentication state. Durable
//! storage is a plain string key-value store behind the [`SessionStore`]
//! trait, holding exactly two entries: the bearer `token` and the
//! JSON-encoded `user` record. [`SessionRepository`] is the only place those
//! entries are encoded or decoded, so corrupt storage has a single fail-safe
//! recovery path instead of parse sites scattered across the app.
//!
//! ## [`SessionStore`] trait
//!
//! A synchronous `get`/`set`/`remove` interface (localStorage itself is
//! synchronous, and the native file store is two tiny files). Implementations
//! live in sibling modules: `LocalStorage` for the browser, `FileStore` for
//! native builds, [`MemoryStore`](crate::MemoryStore) for tests.
//!
//! ## Repository operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](SessionRepository::load) | Restore the session; clears the store and returns `None` on corrupt or half-present state. |
//! | [`save`](SessionRepository::save) | Persist token and user together. |
//! | [`clear`](SessionRepository::clear) | Remove both entries; idempotent. |
//! | [`token`](SessionRepository::token) | Fresh read of the raw token entry, used for per-request auth decisions. |
//!
//! [`session_repo`] constructs the repository over the right store for the
//! current platform.

use crate::models::Session;

pub(crate) const TOKEN_KEY: &str = "token";
pub(crate) const USER_KEY: &str = "user";

/// Synchronous string key-value interface over durable storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed session persistence over an abstract [`SessionStore`].
pub struct SessionRepository<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Restore the persisted session, if any.
    ///
    /// Fail-safe: an unparseable user record, or one entry present without
    /// the other, clears both entries and yields `None`. Never panics on
    /// whatever the store contains.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY);
        let user = self.store.get(USER_KEY);
        match (token, user) {
            (Some(token), Some(raw)) => match serde_json::from_str(&raw) {
                Ok(user) => Some(Session { token, user }),
                Err(err) => {
                    tracing::warn!(%err, "discarding corrupt stored session");
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                tracing::warn!("discarding half-present stored session");
                self.clear();
                None
            }
        }
    }

    /// Persist the session. The user record is serialized before either
    /// entry is written, so the store never ends up with a token and no user.
    pub fn save(&self, session: &Session) {
        let user = match serde_json::to_string(&session.user) {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(%err, "failed to encode session user; not persisting");
                return;
            }
        };
        self.store.set(TOKEN_KEY, &session.token);
        self.store.set(USER_KEY, &user);
    }

    /// Remove both entries. Safe to call when already logged out.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// Current bearer token, read fresh from the store.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }
}

/// The [`SessionStore`] used on the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = crate::LocalStorage;
/// The [`SessionStore`] used on the current platform.
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = crate::MemoryStore;
/// The [`SessionStore`] used on the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = crate::FileStore;

/// Create a session repository over the platform's durable storage:
/// localStorage on the web, a file store under the user data dir natively.
pub fn session_repo() -> SessionRepository<PlatformStore> {
    SessionRepository::new(PlatformStore::new())
}
