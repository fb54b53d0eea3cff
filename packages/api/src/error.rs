use thiserror::Error;

/// The caller-visible failure taxonomy of the API client.
///
/// Every caller pattern-matches one of these instead of inspecting ad hoc
/// `success` booleans. The variants map onto distinct UI policies:
///
/// - [`ApiError::Auth`]: redirect to login / inline message on the login form
/// - [`ApiError::Validation`]: blocked before the network, inline message
/// - [`ApiError::Network`] / [`ApiError::Server`] /
///   [`ApiError::InvalidResponse`]: logged, surfaced as a non-blocking notice
///   on the affected list while the UI keeps serving cached data
///
/// Analytics failures never reach callers at all; see [`crate::ApiClient`]'s
/// tracking methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected credentials or a missing/expired session.
    #[error("{0}")]
    Auth(String),

    /// Client-side field check failed; the request was never issued.
    #[error("{0}")]
    Validation(String),

    /// The request never produced a response (DNS, refused connection, ...).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status or an envelope with `success: false`.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The body did not parse as the response envelope.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}
