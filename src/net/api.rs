//! REST endpoint wrappers over [`ApiClient`](crate::net::http::ApiClient).
//!
//! Callers get `Result`/`bool` outcomes; every failure has already been
//! surfaced to the user by the response interceptor, so pages only decide
//! what to do with their own state.

use std::collections::HashMap;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{
    ClickTrendItem, CreateShortLinkParams, LoginParams, LoginResult, PagedVisits,
    RegisterParams, ShortLinkItem, TopLinkItem, VisitLog,
};
use crate::state::session::{self, SessionProfile};

// =============================================================
// Auth
// =============================================================

/// Log in and, on success, persist the token and populate the profile.
/// Returns `false` on failure with the session left untouched.
pub async fn login(client: &ApiClient, params: &LoginParams) -> bool {
    match client.post::<LoginResult, _>("/auth/login", params).await {
        Ok(result) => {
            session::apply_login_success(client.creds(), client.session(), &result);
            client.notifier().success("Signed in");
            true
        }
        Err(_) => false,
    }
}

/// Register a new account. Symmetric to [`login`]: a successful
/// registration is also a login.
pub async fn register(client: &ApiClient, params: &RegisterParams) -> bool {
    match client.post::<LoginResult, _>("/auth/register", params).await {
        Ok(result) => {
            session::apply_login_success(client.creds(), client.session(), &result);
            client.notifier().success("Account created");
            true
        }
        Err(_) => false,
    }
}

/// Rehydrate the in-memory profile from a persisted token on startup.
///
/// Skipped when there is no token or guest mode is active. A rejected
/// token is invalidated (the 401 path already cleared it; any other
/// failure clears it here) and the session stays empty — the guard then
/// treats the user as anonymous.
pub async fn rehydrate_session(client: &ApiClient) {
    if client.creds().token().is_none() || client.creds().guest_mode() {
        return;
    }
    match client.get::<SessionProfile>("/user/info").await {
        Ok(profile) => client.session().set_profile(profile),
        Err(err) => {
            // The 401 path already invalidated the credential, and a
            // silent rejection means another recovery owns the cleanup.
            if !matches!(err, ApiError::SessionExpired) && !err.is_silent() {
                client.creds().remove_token();
            }
        }
    }
}

// =============================================================
// Short links
// =============================================================

pub async fn create_short_link(
    client: &ApiClient,
    params: &CreateShortLinkParams,
) -> Result<String, ApiError> {
    client.post("/shortLink/create", params).await
}

pub async fn list_short_links(client: &ApiClient) -> Result<Vec<ShortLinkItem>, ApiError> {
    client.get("/shortLink/list").await
}

pub async fn delete_short_link(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/shortLink/{id}")).await
}

// =============================================================
// Stats
// =============================================================

pub async fn recent_visits(client: &ApiClient) -> Result<Vec<VisitLog>, ApiError> {
    client.get("/shortLink/visits/recent").await
}

pub async fn click_trend(client: &ApiClient, days: u32) -> Result<Vec<ClickTrendItem>, ApiError> {
    client.get(&format!("/shortLink/stats/clickTrend?days={days}")).await
}

pub async fn top_links(client: &ApiClient, limit: u32) -> Result<Vec<TopLinkItem>, ApiError> {
    client.get(&format!("/shortLink/stats/topLinks?limit={limit}")).await
}

/// Full visit log, one page at a time. Pages are zero-based.
pub async fn all_visits(client: &ApiClient, page: u32, size: u32) -> Result<PagedVisits, ApiError> {
    client.get(&format!("/shortLink/visits/all?page={page}&size={size}")).await
}

// =============================================================
// System configuration
// =============================================================

pub async fn load_config(client: &ApiClient) -> Result<HashMap<String, String>, ApiError> {
    client.get("/config").await
}

pub async fn save_config(
    client: &ApiClient,
    configs: &HashMap<String, String>,
) -> Result<(), ApiError> {
    client.post("/config", configs).await
}

/// Single config value. A missing key comes back as an envelope-level
/// failure, not an empty value.
pub async fn config_value(client: &ApiClient, key: &str) -> Result<String, ApiError> {
    client.get(&format!("/config/{key}")).await
}
