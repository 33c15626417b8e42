//! Persistent key/value storage seam.
//!
//! Credentials survive page reloads via browser `localStorage`. The browser
//! backend only exists under the `hydrate` feature; everywhere else (SSR,
//! native tests) an in-memory map stands in so the code above it never has
//! to care which environment it is running in.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// Minimal string key/value storage. Reads never fail; writes are
/// best-effort (a full or unavailable store is silently ignored).
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for SSR and tests. Not persistent by definition.
#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Nothing holds the lock across a panic point.
        self.items.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items().remove(key);
    }
}

/// Browser `localStorage` backend. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
