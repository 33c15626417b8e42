//! Request/response interceptor core.
//!
//! DESIGN
//! ======
//! Every outgoing call passes through [`ApiClient`]: the request side
//! attaches exactly one of the bearer or guest headers (resolved fresh from
//! the credential store each time), and the response side unwraps the
//! `{code, message, data}` envelope and drives 401 recovery.
//!
//! Recovery is single-flight. Many requests can be in flight when a
//! credential dies, and each of them will come back 401; the
//! [`RedirectGate`] makes sure only the first one clears credentials,
//! toasts, and navigates — the rest reject silently. The gate check-and-set
//! is a single atomic swap, so interleaved response handlers cannot both
//! win.
//!
//! The network call itself only exists under the `hydrate` feature (the
//! gloo-net path); everything around it is synchronous and runs natively,
//! which is where the tests live.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
use crate::net::types::Envelope;
use crate::routes;
use crate::state::session::{AuthMode, SessionHandle};
use crate::state::toast::Notifier;
use crate::util::credentials::CredentialStore;
use crate::util::navigator::Navigator;

/// All request paths are relative to this prefix.
pub const API_BASE: &str = "/api";

/// Application-level success sentinel in the response envelope.
pub const SUCCESS_CODE: i32 = 200;

/// Fixed per-request timeout. A timeout is a generic transport error, not
/// an authorization failure.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// How long the redirect gate stays held after a 401 recovery starts.
/// Long enough for the soft navigation and re-render to settle.
#[cfg(feature = "hydrate")]
const GATE_RELEASE_MS: u64 = 1_000;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please sign in again";
pub const GUEST_RESTRICTED_MESSAGE: &str = "Guest access is restricted, please sign in to continue";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, please check the server connection";

/// Single-flight guard for the 401 recovery side effects.
///
/// At most one redirect-to-login sequence may be in flight at a time. The
/// flag is released by a timer, independent of whether the navigation it
/// guarded actually succeeded.
#[derive(Clone, Default)]
pub struct RedirectGate {
    held: Arc<AtomicBool>,
}

impl RedirectGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check-and-set in one step. Returns `true` if this caller now holds
    /// the gate, `false` if a recovery sequence is already in flight.
    pub fn try_acquire(&self) -> bool {
        !self.held.swap(true, Ordering::AcqRel)
    }

    pub fn release(&self) {
        self.held.store(false, Ordering::Release);
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// The header to attach for a given authorization mode: bearer credential
/// XOR guest marker, never both, nothing when anonymous.
pub fn auth_header(mode: &AuthMode) -> Option<(&'static str, String)> {
    match mode {
        AuthMode::Bearer(token) => Some(("Authorization", format!("Bearer {token}"))),
        AuthMode::Guest => Some(("Guest-Access", "true".to_owned())),
        AuthMode::Anonymous => None,
    }
}

/// Unwrap the uniform response envelope: `code == 200` yields `data`
/// deserialized as `T`, anything else is an application-level failure
/// carrying the server's message.
pub fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.code != SUCCESS_CODE {
        let message = if envelope.message.is_empty() {
            "request failed".to_owned()
        } else {
            envelope.message
        };
        return Err(ApiError::Server { code: envelope.code, message });
    }
    serde_json::from_value(envelope.data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// API client owning the interceptor state. Cheap to clone; all clones
/// share the same credential store, gate, and handles.
///
/// Everything it mutates is injected at construction time — no module-level
/// globals and no late-bound callback registration.
#[derive(Clone)]
pub struct ApiClient {
    creds: CredentialStore,
    gate: RedirectGate,
    session: Arc<dyn SessionHandle>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        creds: CredentialStore,
        gate: RedirectGate,
        session: Arc<dyn SessionHandle>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { creds, gate, session, notifier, navigator }
    }

    pub fn creds(&self) -> &CredentialStore {
        &self.creds
    }

    pub fn session(&self) -> &dyn SessionHandle {
        self.session.as_ref()
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Transport-level 401 handling. Guests degrade gracefully (message
    /// only, no state change); otherwise the first caller through the gate
    /// runs the full recovery sequence and everyone behind it rejects
    /// silently.
    pub(crate) fn handle_unauthorized(&self) -> ApiError {
        if AuthMode::resolve(&self.creds) == AuthMode::Guest {
            self.notifier.error(GUEST_RESTRICTED_MESSAGE);
            return ApiError::GuestRestricted;
        }
        if !self.gate.try_acquire() {
            return ApiError::RecoveryInFlight;
        }

        // Storage first: the navigation guard reads it synchronously, so
        // it must be clean before any route change fires.
        self.creds.remove_token();
        self.session.clear_profile();
        self.notifier.error(SESSION_EXPIRED_MESSAGE);

        // Soft navigation to the login route; if we are already there or
        // the history API cannot take us, a hard reload guarantees no
        // stale UI.
        let on_login = self.navigator.current_path().as_deref() == Some(routes::LOGIN_PATH);
        if on_login || !self.navigator.navigate(routes::LOGIN_PATH) {
            self.navigator.reload();
        }

        self.schedule_gate_release();
        ApiError::SessionExpired
    }

    /// Envelope unwrap plus user-visible surfacing of failures.
    pub(crate) fn interpret_body<T: DeserializeOwned>(&self, body: &str) -> Result<T, ApiError> {
        match unwrap_envelope::<T>(body) {
            Ok(value) => Ok(value),
            Err(err) => {
                match &err {
                    ApiError::Server { message, .. } => self.notifier.error(message),
                    ApiError::Decode(_) => self.notifier.error(NETWORK_ERROR_MESSAGE),
                    _ => {}
                }
                Err(err)
            }
        }
    }

    /// Release the gate after a bounded delay. In the browser this is a
    /// timer; native callers drive [`RedirectGate::release`] themselves.
    fn schedule_gate_release(&self) {
        #[cfg(feature = "hydrate")]
        {
            let gate = self.gate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(GATE_RELEASE_MS))
                    .await;
                gate.release();
            });
        }
    }

    // =============================================================
    // HTTP verbs (browser only; inert stubs elsewhere)
    // =============================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .builder(gloo_net::http::Request::get(&Self::url(path)))
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Transport("not available on the server".to_owned()))
        }
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .builder(gloo_net::http::Request::post(&Self::url(path)))
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Transport("not available on the server".to_owned()))
        }
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self
                .builder(gloo_net::http::Request::delete(&Self::url(path)))
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            self.dispatch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Transport("not available on the server".to_owned()))
        }
    }

    #[cfg(feature = "hydrate")]
    fn url(path: &str) -> String {
        format!("{API_BASE}{path}")
    }

    /// Request interceptor: attach authorization evidence from a fresh
    /// credential read. Runs synchronously before dispatch.
    #[cfg(feature = "hydrate")]
    fn builder(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match auth_header(&AuthMode::resolve(&self.creds)) {
            Some((name, value)) => builder.header(name, &value),
            None => builder,
        }
    }

    /// Send with timeout, then run the response interceptor.
    #[cfg(feature = "hydrate")]
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: gloo_net::http::Request,
    ) -> Result<T, ApiError> {
        use futures::future::{Either, select};

        let timeout =
            gloo_timers::future::sleep(std::time::Duration::from_millis(REQUEST_TIMEOUT_MS));
        let response = match select(Box::pin(request.send()), Box::pin(timeout)).await {
            Either::Left((result, _)) => result.map_err(|e| {
                self.notifier.error(NETWORK_ERROR_MESSAGE);
                ApiError::Transport(e.to_string())
            })?,
            Either::Right(((), _)) => {
                self.notifier.error(NETWORK_ERROR_MESSAGE);
                return Err(ApiError::Transport("request timed out".to_owned()));
            }
        };

        let status = response.status();
        if status == 401 {
            return Err(self.handle_unauthorized());
        }

        let body = response.text().await.map_err(|e| {
            self.notifier.error(NETWORK_ERROR_MESSAGE);
            ApiError::Transport(e.to_string())
        })?;

        if !(200..300).contains(&status) {
            // Non-401 transport failure: prefer the server's envelope
            // message when the body carries one. No state mutation.
            let message = serde_json::from_str::<Envelope>(&body)
                .ok()
                .filter(|e| !e.message.is_empty())
                .map_or_else(|| NETWORK_ERROR_MESSAGE.to_owned(), |e| e.message);
            self.notifier.error(&message);
            return Err(ApiError::Transport(message));
        }

        self.interpret_body(&body)
    }
}
