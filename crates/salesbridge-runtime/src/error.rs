//! Gateway error taxonomy.

use salesbridge_backend::BackendError;
use salesbridge_types::ValidationError;
use thiserror::Error;

/// Failure of a single translated operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Arguments did not have the expected shape.
    #[error("invalid arguments: {0}")]
    Decode(String),
    /// Arguments decoded but failed a domain rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backend call failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The backend returned more rows than allowed.
    #[error("result exceeds max_rows limit ({rows} > {max_rows})")]
    LimitExceeded { rows: usize, max_rows: u32 },
    /// A result could not be encoded.
    #[error("failed to encode result: {0}")]
    Serialize(String),
}

impl GatewayError {
    /// Stable machine-readable code used in REST error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "invalid_request",
            Self::Validation(e) => e.code(),
            Self::Backend(_) => "backend_error",
            Self::LimitExceeded { .. } => "limit_exceeded",
            Self::Serialize(_) => "internal_error",
        }
    }

    /// Whether the failure happened after the request was accepted, i.e.
    /// the caller's arguments were fine but the operation itself failed.
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Backend(_) | Self::LimitExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_per_variant() {
        assert_eq!(GatewayError::Decode("x".into()).code(), "invalid_request");
        assert_eq!(
            GatewayError::from(ValidationError::EmptyQuery).code(),
            "validation_error"
        );
        assert_eq!(
            GatewayError::LimitExceeded {
                rows: 2,
                max_rows: 1
            }
            .code(),
            "limit_exceeded"
        );
        assert_eq!(GatewayError::Serialize("x".into()).code(), "internal_error");
    }

    #[test]
    fn backend_message_passes_through() {
        let err = GatewayError::from(BackendError::Status {
            status: 503,
            body: "down".into(),
        });
        assert_eq!(err.to_string(), "backend returned status 503: down");
        assert!(err.is_operational());
    }

    #[test]
    fn validation_is_not_operational() {
        assert!(!GatewayError::from(ValidationError::MissingPeriod).is_operational());
    }
}
