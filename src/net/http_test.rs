use super::*;

use std::sync::Mutex;
use std::sync::atomic::AtomicU32;

use crate::state::session::{SessionProfile, SessionState};
use crate::state::toast::{ToastLevel, ToastState};

// =============================================================
// Test doubles
// =============================================================

#[derive(Default)]
struct FakeNavigator {
    path: Mutex<Option<String>>,
    soft_nav_fails: AtomicBool,
    navigations: Mutex<Vec<String>>,
    reloads: AtomicU32,
}

impl FakeNavigator {
    fn set_path(&self, path: &str) {
        *self.path.lock().unwrap() = Some(path.to_owned());
    }

    fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    fn reloads(&self) -> u32 {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl Navigator for FakeNavigator {
    fn current_path(&self) -> Option<String> {
        self.path.lock().unwrap().clone()
    }

    fn navigate(&self, path: &str) -> bool {
        if self.soft_nav_fails.load(Ordering::SeqCst) {
            return false;
        }
        self.navigations.lock().unwrap().push(path.to_owned());
        true
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

struct Harness {
    client: ApiClient,
    creds: CredentialStore,
    gate: RedirectGate,
    session: Arc<Mutex<SessionState>>,
    toasts: Arc<Mutex<ToastState>>,
    nav: Arc<FakeNavigator>,
}

fn harness() -> Harness {
    let creds = CredentialStore::in_memory();
    let gate = RedirectGate::new();
    let session: Arc<Mutex<SessionState>> = Arc::new(Mutex::new(SessionState::default()));
    let toasts: Arc<Mutex<ToastState>> = Arc::new(Mutex::new(ToastState::default()));
    let nav = Arc::new(FakeNavigator::default());
    nav.set_path("/links");

    let client = ApiClient::new(
        creds.clone(),
        gate.clone(),
        Arc::new(session.clone()),
        Arc::new(toasts.clone()),
        nav.clone(),
    );
    Harness { client, creds, gate, session, toasts, nav }
}

fn profile() -> SessionProfile {
    SessionProfile {
        user_id: 1,
        username: "neo".to_owned(),
        nickname: "Neo".to_owned(),
        email: "neo@example.com".to_owned(),
    }
}

fn error_toasts(toasts: &Arc<Mutex<ToastState>>) -> Vec<String> {
    toasts
        .lock()
        .unwrap()
        .toasts
        .iter()
        .filter(|t| t.level == ToastLevel::Error)
        .map(|t| t.text.clone())
        .collect()
}

// =============================================================
// Request interceptor: header attachment
// =============================================================

#[test]
fn bearer_header_when_token_present() {
    let header = auth_header(&AuthMode::Bearer("abc".to_owned()));
    assert_eq!(header, Some(("Authorization", "Bearer abc".to_owned())));
}

#[test]
fn guest_header_when_guest_mode() {
    let header = auth_header(&AuthMode::Guest);
    assert_eq!(header, Some(("Guest-Access", "true".to_owned())));
}

#[test]
fn no_header_when_anonymous() {
    assert_eq!(auth_header(&AuthMode::Anonymous), None);
}

#[test]
fn token_suppresses_stale_guest_flag_on_the_wire() {
    let creds = CredentialStore::in_memory();
    creds.set_guest_mode(true);
    creds.set_token("abc");
    // Never both headers: the resolved mode is bearer, full stop.
    let header = auth_header(&AuthMode::resolve(&creds));
    assert_eq!(header, Some(("Authorization", "Bearer abc".to_owned())));
}

// =============================================================
// Envelope unwrap
// =============================================================

#[test]
fn unwrap_envelope_yields_data_on_success_code() {
    let body = r#"{"code":200,"message":"ok","data":{"token":"t","userId":1,"username":"u","nickname":"n","email":"e"}}"#;
    let result: crate::net::types::LoginResult = unwrap_envelope(body).expect("success envelope");
    assert_eq!(result.token, "t");
    assert_eq!(result.user_id, 1);
}

#[test]
fn unwrap_envelope_tolerates_null_data_for_unit_results() {
    let body = r#"{"code":200,"message":"ok","data":null}"#;
    unwrap_envelope::<()>(body).expect("null data as unit");
}

#[test]
fn unwrap_envelope_decodes_a_visit_page() {
    let body = r#"{"code":200,"message":"ok","data":{"content":[{"id":1,"shortCode":"abc","ip":"10.0.0.1","createTime":"2026-08-01 12:00:00"}],"totalElements":41}}"#;
    let page: crate::net::types::PagedVisits = unwrap_envelope(body).expect("paged envelope");
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].short_code, "abc");
    assert_eq!(page.total_elements, 41);
}

#[test]
fn unwrap_envelope_decodes_a_config_map() {
    let body = r#"{"code":200,"message":"","data":{"base_domain":"http://localhost:8080","default_expire_days":"7"}}"#;
    let map: std::collections::HashMap<String, String> =
        unwrap_envelope(body).expect("config envelope");
    assert_eq!(map.get("base_domain").map(String::as_str), Some("http://localhost:8080"));
    assert_eq!(map.get("default_expire_days").map(String::as_str), Some("7"));
}

#[test]
fn unwrap_envelope_rejects_non_success_code_with_server_message() {
    let body = r#"{"code":500,"message":"short code collision","data":null}"#;
    let err = unwrap_envelope::<()>(body).unwrap_err();
    assert_eq!(err, ApiError::Server { code: 500, message: "short code collision".to_owned() });
}

#[test]
fn unwrap_envelope_falls_back_to_generic_message() {
    let body = r#"{"code":500,"message":"","data":null}"#;
    let err = unwrap_envelope::<()>(body).unwrap_err();
    assert_eq!(err, ApiError::Server { code: 500, message: "request failed".to_owned() });
}

#[test]
fn unwrap_envelope_decode_error_on_malformed_body() {
    let err = unwrap_envelope::<()>("not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn envelope_failure_is_surfaced_and_mutates_nothing() {
    let h = harness();
    h.creds.set_token("abc");
    h.session.set_profile(profile());

    let err = h
        .client
        .interpret_body::<()>(r#"{"code":403,"message":"forbidden","data":null}"#)
        .unwrap_err();

    assert_eq!(err, ApiError::Server { code: 403, message: "forbidden".to_owned() });
    assert_eq!(error_toasts(&h.toasts), vec!["forbidden".to_owned()]);
    // Application-level failure never touches credentials or profile.
    assert_eq!(h.creds.token().as_deref(), Some("abc"));
    assert!(h.session.profile().is_some());
}

// =============================================================
// 401 recovery
// =============================================================

#[test]
fn unauthorized_with_token_runs_full_recovery() {
    let h = harness();
    h.creds.set_token("abc");
    h.session.set_profile(profile());

    let err = h.client.handle_unauthorized();

    assert_eq!(err, ApiError::SessionExpired);
    assert!(h.creds.token().is_none());
    assert!(!h.creds.guest_mode());
    assert!(h.session.profile().is_none());
    assert_eq!(error_toasts(&h.toasts), vec![SESSION_EXPIRED_MESSAGE.to_owned()]);
    assert_eq!(h.nav.navigations(), vec![routes::LOGIN_PATH.to_owned()]);
    assert_eq!(h.nav.reloads(), 0);
    assert!(h.gate.is_held());
}

#[test]
fn concurrent_unauthorized_is_suppressed_while_gate_is_held() {
    let h = harness();
    h.creds.set_token("abc");
    h.session.set_profile(profile());

    let first = h.client.handle_unauthorized();
    let second = h.client.handle_unauthorized();

    assert_eq!(first, ApiError::SessionExpired);
    assert_eq!(second, ApiError::RecoveryInFlight);
    assert!(second.is_silent());
    // Exactly one set of user-visible side effects.
    assert_eq!(error_toasts(&h.toasts).len(), 1);
    assert_eq!(h.nav.navigations().len(), 1);
}

#[test]
fn gate_release_allows_a_fresh_recovery() {
    let h = harness();
    h.creds.set_token("abc");
    assert_eq!(h.client.handle_unauthorized(), ApiError::SessionExpired);

    h.gate.release();
    h.creds.set_token("def");

    assert_eq!(h.client.handle_unauthorized(), ApiError::SessionExpired);
    assert_eq!(error_toasts(&h.toasts).len(), 2);
    assert_eq!(h.nav.navigations().len(), 2);
}

#[test]
fn guest_unauthorized_degrades_gracefully() {
    let h = harness();
    h.creds.set_guest_mode(true);

    let err = h.client.handle_unauthorized();

    assert_eq!(err, ApiError::GuestRestricted);
    // Guests are not logged out: storage untouched, no navigation.
    assert!(h.creds.guest_mode());
    assert_eq!(error_toasts(&h.toasts), vec![GUEST_RESTRICTED_MESSAGE.to_owned()]);
    assert!(h.nav.navigations().is_empty());
    assert_eq!(h.nav.reloads(), 0);
    assert!(!h.gate.is_held());
}

#[test]
fn stale_guest_flag_does_not_shield_a_bearer_401() {
    let h = harness();
    h.creds.set_token("abc");
    h.creds.set_guest_mode(true);

    let err = h.client.handle_unauthorized();

    assert_eq!(err, ApiError::SessionExpired);
    assert!(h.creds.token().is_none());
    assert!(!h.creds.guest_mode());
}

#[test]
fn recovery_reloads_when_already_on_the_login_route() {
    let h = harness();
    h.creds.set_token("abc");
    h.nav.set_path(routes::LOGIN_PATH);

    h.client.handle_unauthorized();

    assert!(h.nav.navigations().is_empty());
    assert_eq!(h.nav.reloads(), 1);
}

#[test]
fn recovery_falls_back_to_reload_when_soft_navigation_fails() {
    let h = harness();
    h.creds.set_token("abc");
    h.nav.soft_nav_fails.store(true, Ordering::SeqCst);

    h.client.handle_unauthorized();

    assert!(h.nav.navigations().is_empty());
    assert_eq!(h.nav.reloads(), 1);
    // The failed navigation still completes the rest of recovery.
    assert!(h.creds.token().is_none());
    assert!(h.gate.is_held());
}

// =============================================================
// RedirectGate
// =============================================================

#[test]
fn gate_acquire_is_exclusive_until_released() {
    let gate = RedirectGate::new();
    assert!(gate.try_acquire());
    assert!(!gate.try_acquire());
    gate.release();
    assert!(gate.try_acquire());
}

#[test]
fn gate_clones_share_the_flag() {
    let gate = RedirectGate::new();
    let clone = gate.clone();
    assert!(gate.try_acquire());
    assert!(!clone.try_acquire());
    clone.release();
    assert!(gate.try_acquire());
}
