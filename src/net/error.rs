//! Error taxonomy for API operations.

use thiserror::Error;

/// Why an API call rejected. Every variant except `RecoveryInFlight` has
/// already been surfaced to the user by the response interceptor; callers
/// only need to decide whether to retry or adjust their own UI.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Envelope `code != 200`: the server completed the request but
    /// rejected it at the application level.
    #[error("{message}")]
    Server { code: i32, message: String },

    /// HTTP 401 while holding a (now invalid) credential. Recovery side
    /// effects have run: credentials cleared, profile dropped, navigation
    /// to the login route attempted.
    #[error("session expired, please sign in again")]
    SessionExpired,

    /// HTTP 401 in guest mode. No state was touched; the operation is
    /// simply not available to guests.
    #[error("this action is not available in guest mode")]
    GuestRestricted,

    /// HTTP 401 while another recovery sequence was already in flight.
    /// Intentionally silent: no toast, no navigation, no state change.
    #[error("session recovery already in progress")]
    RecoveryInFlight,

    /// Network failure, timeout, or a non-401 transport error.
    #[error("{0}")]
    Transport(String),

    /// The body did not parse as the expected envelope or payload shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the interceptor deliberately suppressed user-visible side
    /// effects for this rejection.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::RecoveryInFlight)
    }
}
