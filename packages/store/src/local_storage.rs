//! # Browser localStorage session store
//!
//! [`LocalStorage`] is the [`SessionStore`](crate::session::SessionStore)
//! implementation used on the **web platform**. The session is two small
//! string entries, which is exactly the shape localStorage offers, so no
//! database layer sits in between.
//!
//! ## Error handling
//!
//! All trait methods silently swallow storage errors (returning `None` for
//! reads, doing nothing for writes). A blocked or unavailable localStorage
//! degrades to "not signed in" rather than crashing the app; the
//! authoritative session always lives on the backend.

use crate::session::SessionStore;

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly; the window's storage handle is looked up
/// on every operation.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
