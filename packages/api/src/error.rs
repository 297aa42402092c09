//! Error taxonomy for API calls.
//!
//! Classification happens in exactly two functions — [`ApiError::from_transport`]
//! for send failures and [`ApiError::from_status`] for non-success statuses —
//! so no call site ever inspects status codes or error text itself. `Display`
//! carries the user-facing message; views render `err.to_string()` directly.

use reqwest::StatusCode;
use serde::Deserialize;

/// Why an API call failed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: the backend could not be reached at all.
    #[error("Cannot connect to server. Please ensure the backend is running.")]
    Unreachable,
    /// The request hit the client-side timeout.
    #[error("Request timed out. Please try again.")]
    Timeout,
    /// 401: the session has been cleared by the response interceptor. Shows
    /// the backend's message when it sent one (e.g. bad login credentials).
    #[error("{}", auth_message(.message))]
    Unauthorized { message: Option<String> },
    /// 403: authenticated but not allowed. Session untouched.
    #[error("Access denied. Please check your permissions.")]
    Forbidden,
    /// Any 5xx.
    #[error("Server error. Please try again later.")]
    Server(u16),
    /// Any other non-success status; carries the backend's `message` field
    /// when present.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body was not the shape the caller expected.
    #[error("Received an unexpected response from the server.")]
    Decode,
}

impl ApiError {
    /// Classify a send failure. Everything that is not a timeout means the
    /// backend was unreachable; HTTP-level errors never surface here.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::error!(%err, "api request timed out");
            ApiError::Timeout
        } else {
            tracing::error!(%err, "backend unreachable");
            ApiError::Unreachable
        }
    }

    /// Classify a non-success status, pulling the backend's `message` out of
    /// the body when one is present.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized {
                message: extract_message(body),
            },
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            s if s.is_server_error() => ApiError::Server(s.as_u16()),
            s => ApiError::Rejected {
                status: s.as_u16(),
                message: extract_message(body)
                    .unwrap_or_else(|| format!("Request failed with status {}", s.as_u16())),
            },
        }
    }

    /// True when the failure means the backend is unreachable, as opposed to
    /// reachable but rejecting the request. Drives the asset list's retry
    /// screen.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Unreachable | ApiError::Timeout)
    }
}

fn auth_message(message: &Option<String>) -> &str {
    message
        .as_deref()
        .unwrap_or("Authentication failed. Please login again.")
}

/// Pull the `message` field out of an error body like `{"message": "..."}`.
fn extract_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized { message: None }
        ));
        assert_eq!(
            ApiError::from_status(StatusCode::FORBIDDEN, ""),
            ApiError::Forbidden
        );
        assert_eq!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, ""),
            ApiError::Server(500)
        );
        assert_eq!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, ""),
            ApiError::Server(502)
        );
    }

    #[test]
    fn test_backend_message_is_surfaced() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message": "Username already taken"}"#,
        );
        assert_eq!(err.to_string(), "Username already taken");

        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Invalid username or password"}"#,
        );
        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[test]
    fn test_fallback_messages() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, "not json");
        assert_eq!(err.to_string(), "Request failed with status 400");

        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.to_string(), "Authentication failed. Please login again.");

        assert_eq!(
            ApiError::Server(500).to_string(),
            "Server error. Please try again later."
        );
        assert_eq!(
            ApiError::Forbidden.to_string(),
            "Access denied. Please check your permissions."
        );
    }

    #[test]
    fn test_connectivity_covers_unreachable_and_timeout_only() {
        assert!(ApiError::Unreachable.is_connectivity());
        assert!(ApiError::Timeout.is_connectivity());
        assert!(!ApiError::Forbidden.is_connectivity());
        assert!(!ApiError::Server(500).is_connectivity());
        assert!(!ApiError::Unauthorized { message: None }.is_connectivity());
        assert!(!ApiError::Decode.is_connectivity());
    }
}
