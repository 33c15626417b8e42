//! Persisted credential state: the bearer token and the guest flag.
//!
//! Storage is the only piece of auth state that survives a page reload.
//! The two keys are independent in storage; precedence between them is
//! resolved at read time by [`crate::state::session::AuthMode`], never here.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::Arc;

use crate::util::storage::{MemoryStorage, StorageBackend};

const TOKEN_KEY: &str = "tracker_token";
const GUEST_KEY: &str = "tracker_guest";

/// Handle to the persisted credential keys. Cheap to clone; all clones
/// share one backend.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn StorageBackend>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by browser `localStorage` when running in the browser,
    /// an in-memory map otherwise (SSR renders as anonymous).
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(crate::util::storage::BrowserStorage::new()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// The persisted bearer token, if any. No side effects.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    /// Full credential invalidation: erases the token AND the guest flag.
    /// A half-cleared credential set must never survive a logout or an
    /// expired session, so this is deliberately broader than the token key.
    pub fn remove_token(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(GUEST_KEY);
    }

    pub fn guest_mode(&self) -> bool {
        self.backend.get(GUEST_KEY).as_deref() == Some("true")
    }

    /// Enabling writes the flag; disabling deletes the key outright so a
    /// stored falsy value can never be confused with an absent one.
    pub fn set_guest_mode(&self, enabled: bool) {
        if enabled {
            self.backend.set(GUEST_KEY, "true");
        } else {
            self.backend.remove(GUEST_KEY);
        }
    }
}
