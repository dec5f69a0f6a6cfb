//! Errors surfaced by the prediction backend client.

use thiserror::Error;

/// Failure modes for backend requests. The `Display` strings are shown
/// directly in the UI, so they stay human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The transport layer could not reach the server at all.
    #[error("Cannot connect to the {0}. Please check if it is running.")]
    Unreachable(&'static str),

    /// The server answered with a non-success status.
    #[error("{0}")]
    Server(String),

    /// The body was missing a required field or otherwise unparseable.
    #[error("Invalid response format from server")]
    InvalidResponse,

    /// The request could not be constructed.
    #[error("Request build error: {0}")]
    Request(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_name_the_unreachable_service() {
        let health = ApiError::Unreachable("backend server");
        let predict = ApiError::Unreachable("prediction server");
        assert!(health.to_string().contains("Cannot connect to the backend server"));
        assert!(predict.to_string().contains("Cannot connect to the prediction server"));
        assert_ne!(health, predict);
    }

    #[test]
    fn server_errors_pass_the_message_through() {
        let err = ApiError::Server("Server error: 503".to_string());
        assert_eq!(err.to_string(), "Server error: 503");
    }
}
