//! Error types for backend calls.

use thiserror::Error;

/// A backend call failed. Terminal for the request; never retried.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The HTTP client could not be built from configuration.
    #[error("invalid backend configuration: {0}")]
    Config(String),
    /// The request did not complete (connect, timeout, reset).
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_includes_body() {
        let err = BackendError::Status {
            status: 503,
            body: "maintenance".into(),
        };
        assert_eq!(err.to_string(), "backend returned status 503: maintenance");
    }

    #[test]
    fn transport_error_names_path() {
        let err = BackendError::Transport {
            path: "/mcp/reports/sales".into(),
            message: "operation timed out".into(),
        };
        assert!(err.to_string().contains("/mcp/reports/sales"));
    }
}
