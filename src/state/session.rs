//! In-memory session state and the effective authorization mode.
//!
//! DESIGN
//! ======
//! Three independent pieces of state exist: the persisted token, the
//! persisted guest flag, and the in-memory profile. Only [`AuthMode`] is
//! allowed to interpret the first two together, and it is recomputed at
//! every decision point — concurrent 401 recovery can clear the store
//! between any two reads, so a cached mode would go stale.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Deserialize;

use crate::net::types::LoginResult;
use crate::util::credentials::CredentialStore;

/// The logged-in user's profile. Held only in memory; rebuilt after a page
/// reload by the bootstrap `/user/info` round trip.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    pub user_id: i64,
    pub username: String,
    pub nickname: String,
    pub email: String,
}

/// Process-wide session state. Owns the profile exclusively; the UI reads
/// it through the derived booleans and a read-only view.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub profile: Option<SessionProfile>,
}

impl SessionState {
    /// Logged in means both halves are present: a persisted token and a
    /// rehydrated profile.
    pub fn is_logged_in(&self, token_present: bool) -> bool {
        token_present && self.profile.is_some()
    }

    /// Guest is a fallback mode, always subordinate to a real session.
    pub fn is_guest(&self, guest_flag: bool, token_present: bool) -> bool {
        guest_flag && !self.is_logged_in(token_present)
    }

    pub fn set_profile(&mut self, profile: SessionProfile) {
        self.profile = Some(profile);
    }

    /// Idempotent; the 401 recovery path calls this without knowing
    /// whether a profile was ever set.
    pub fn clear_profile(&mut self) {
        self.profile = None;
    }
}

/// Wire-level authorization mode, resolved fresh from the credential store
/// for every outgoing request and every guard decision.
///
/// A present token always wins: a stale guest flag must never suppress a
/// valid token, and the two markers are mutually exclusive on the wire
/// even though storage does not enforce it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Bearer(String),
    Guest,
    Anonymous,
}

impl AuthMode {
    pub fn resolve(creds: &CredentialStore) -> Self {
        match creds.token() {
            Some(token) => Self::Bearer(token),
            None if creds.guest_mode() => Self::Guest,
            None => Self::Anonymous,
        }
    }
}

/// Handle through which the interceptors and API layer mutate the session.
///
/// The response interceptor takes this at construction time and calls
/// `clear_profile` directly on 401 recovery — no late-bound callback
/// registration, but the interceptor still never learns how the UI holds
/// its state.
pub trait SessionHandle: Send + Sync {
    fn set_profile(&self, profile: SessionProfile);
    fn clear_profile(&self);
    fn profile(&self) -> Option<SessionProfile>;
}

impl SessionHandle for Arc<Mutex<SessionState>> {
    fn set_profile(&self, profile: SessionProfile) {
        self.lock().unwrap_or_else(PoisonError::into_inner).set_profile(profile);
    }

    fn clear_profile(&self) {
        self.lock().unwrap_or_else(PoisonError::into_inner).clear_profile();
    }

    fn profile(&self) -> Option<SessionProfile> {
        self.lock().unwrap_or_else(PoisonError::into_inner).profile.clone()
    }
}

impl SessionHandle for leptos::prelude::RwSignal<SessionState> {
    fn set_profile(&self, profile: SessionProfile) {
        use leptos::prelude::Update;
        self.update(|s| s.set_profile(profile));
    }

    fn clear_profile(&self) {
        use leptos::prelude::Update;
        self.update(SessionState::clear_profile);
    }

    fn profile(&self) -> Option<SessionProfile> {
        use leptos::prelude::GetUntracked;
        self.get_untracked().profile
    }
}

/// Persist the credential and populate the profile after a successful
/// login or registration. Clears any guest flag left over from before.
pub fn apply_login_success(
    creds: &CredentialStore,
    session: &dyn SessionHandle,
    result: &LoginResult,
) {
    creds.set_token(&result.token);
    creds.set_guest_mode(false);
    session.set_profile(SessionProfile {
        user_id: result.user_id,
        username: result.username.clone(),
        nickname: result.nickname.clone(),
        email: result.email.clone(),
    });
}

/// Local logout: full credential invalidation plus profile clear. Never
/// touches the network and never fails; safe to call on an empty session.
pub fn logout(creds: &CredentialStore, session: &dyn SessionHandle) {
    creds.remove_token();
    session.clear_profile();
}

/// Enter token-less guest mode. Server-side restrictions surface later as
/// 401 responses handled by the interceptor, not here.
pub fn enter_guest_mode(creds: &CredentialStore) {
    creds.set_guest_mode(true);
}
