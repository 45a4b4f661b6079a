//! # Common Error Types
//!
//! Consolidated error handling for the admin portal client.
//!
//! Every operation of the request pipeline and the domain services returns
//! [`ApiError`]. The type is `Clone` because a single refresh failure is
//! delivered to every request that was queued behind it.
//!
//! ## Error Categories
//!
//! - **Network**: transport failures, including timeouts
//! - **Unauthorized**: a 401 the pipeline could not recover from
//! - **SessionExpired**: the refresh credential was rejected or missing; the
//!   local session has been cleared and a login redirect requested
//! - **Status**: any other non-2xx answer, message passed through verbatim
//! - **Decode**: the body did not match the expected record
//! - **Storage**: the credential store failed
//! - **Cancelled**: the caller's cancellation token fired
//! - **Validation**: local input rejected before any request
//!
//! ## Usage Pattern
//!
//! ```rust
//! use portal::core::error::ApiError;
//!
//! fn require_reason(reason: &str) -> Result<(), ApiError> {
//!     if reason.trim().is_empty() {
//!         return Err(ApiError::Validation("Reason cannot be empty".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_reason(" ").is_err());
//! ```

use thiserror::Error;

/// Client-wide error type.
///
/// # Example
///
/// ```rust
/// use portal::core::error::ApiError;
///
/// let err = ApiError::Status { status: 404, message: "Product not found".to_string() };
/// assert_eq!(err.to_string(), "HTTP 404: Product not found");
/// assert!(!err.is_auth_failure());
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, broken body stream.
    #[error("Network error: {0}")]
    Network(String),

    /// 401 that survived the single replay, or came from an auth endpoint.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Terminal refresh failure. Credentials are already cleared.
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// Non-2xx answer other than 401.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// True when the user has to sign in again.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::SessionExpired(_))
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized(_) => Some(401),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failures() {
        assert!(ApiError::Unauthorized("expired".into()).is_auth_failure());
        assert!(ApiError::SessionExpired("revoked".into()).is_auth_failure());
        assert!(!ApiError::Network("timeout".into()).is_auth_failure());
        assert!(!ApiError::Cancelled.is_auth_failure());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized("x".into()).status(), Some(401));
        assert_eq!(
            ApiError::Status { status: 422, message: "bad".into() }.status(),
            Some(422)
        );
        assert_eq!(ApiError::Decode("x".into()).status(), None);
    }
}
