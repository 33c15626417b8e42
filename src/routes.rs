//! Route table, metadata, and the navigation guard.
//!
//! The guard runs synchronously against the credential store before every
//! route transition — no network round trip, no cached authorization mode.
//! Guest mode satisfies `requires_auth` here; what a guest may actually do
//! is enforced later by the server and surfaced through the response
//! interceptor.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::AuthMode;
use crate::util::credentials::CredentialStore;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LINKS_PATH: &str = "/links";
pub const VISITS_PATH: &str = "/visits";
pub const SETTINGS_PATH: &str = "/settings";

/// Where the root path lands. The guard re-evaluates the target, so an
/// authenticated user bounces straight on to the dashboard.
pub const ROOT_REDIRECT: &str = LOGIN_PATH;

/// Where a logged-in user lands when they try to open a public page.
pub const DEFAULT_AUTHENTICATED_PATH: &str = DASHBOARD_PATH;

/// Static metadata for a named route.
pub struct RouteMeta {
    pub path: &'static str,
    pub requires_auth: bool,
    pub title: Option<&'static str>,
}

/// The full route table. Paths not listed here fall through to the router's
/// not-found view and are treated as public.
pub const ROUTES: &[RouteMeta] = &[
    RouteMeta { path: LOGIN_PATH, requires_auth: false, title: Some("Sign in") },
    RouteMeta { path: REGISTER_PATH, requires_auth: false, title: Some("Create account") },
    RouteMeta { path: DASHBOARD_PATH, requires_auth: true, title: Some("Dashboard") },
    RouteMeta { path: LINKS_PATH, requires_auth: true, title: Some("Short links") },
    RouteMeta { path: VISITS_PATH, requires_auth: true, title: Some("Visits") },
    RouteMeta { path: SETTINGS_PATH, requires_auth: true, title: Some("Settings") },
];

pub fn route_meta(path: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|r| r.path == path)
}

fn is_public(path: &str) -> bool {
    path == LOGIN_PATH || path == REGISTER_PATH
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Evaluate a navigation against current credentials. Rules in order,
/// first match wins.
pub fn evaluate_navigation(target: &str, creds: &CredentialStore) -> GuardDecision {
    // The root path is a redirect, never a renderable page.
    if target == "/" {
        return GuardDecision::Redirect(ROOT_REDIRECT);
    }

    let mode = AuthMode::resolve(creds);
    let has_token = matches!(mode, AuthMode::Bearer(_));
    let guest = mode == AuthMode::Guest;

    // A logged-in user never lands on the login or register page.
    if is_public(target) && has_token && !guest {
        return GuardDecision::Redirect(DEFAULT_AUTHENTICATED_PATH);
    }

    // Protected routes need a token or the guest flag; anonymous callers
    // go to the login page instead.
    let requires_auth = route_meta(target).is_some_and(|r| r.requires_auth);
    if requires_auth && !has_token && !guest {
        return GuardDecision::Redirect(LOGIN_PATH);
    }

    GuardDecision::Allow
}
