//! Wire types: the uniform response envelope and the REST DTOs.
//!
//! Field names follow the server's camelCase JSON; everything here is a
//! plain data carrier with no behavior beyond (de)serialization.

use serde::{Deserialize, Serialize};

/// Every response body, success or failure, arrives wrapped in this
/// envelope regardless of the transport status. `code == 200` is the
/// application-level success sentinel.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Payload of a successful login or registration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub nickname: String,
    pub email: String,
}

// =============================================================
// Short links
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkItem {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub workspace: String,
    pub total_clicks: i64,
    #[serde(default)]
    pub expire_time: Option<String>,
    pub create_time: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortLinkParams {
    pub long_url: String,
    pub workspace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<String>,
}

// =============================================================
// Stats
// =============================================================

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitLog {
    pub id: i64,
    pub short_code: String,
    pub ip: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    pub create_time: String,
}

/// One page of the full visit log, in the server's page shape.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedVisits {
    pub content: Vec<VisitLog>,
    pub total_elements: i64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickTrendItem {
    pub date: String,
    pub clicks: i64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLinkItem {
    pub short_code: String,
    pub long_url: String,
    pub total_clicks: i64,
}
