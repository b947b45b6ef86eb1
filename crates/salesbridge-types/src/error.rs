//! Argument validation errors.

use thiserror::Error;

/// A request argument failed a per-field rule.
///
/// Raised after the arguments decoded successfully but before any
/// backend call is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The search query was empty.
    #[error("query is required")]
    EmptyQuery,
    /// `period.from` or `period.to` was missing or empty.
    #[error("period from and to are required")]
    MissingPeriod,
    /// A measure outside the supported set.
    #[error("invalid measure: {value}. Supported: amount, qty")]
    UnsupportedMeasure { value: String },
    /// A grouping dimension outside the supported set.
    #[error("invalid group_by: {value}. Supported: customer, warehouse")]
    UnsupportedGroupBy { value: String },
}

impl ValidationError {
    /// Stable machine-readable code used in REST error bodies.
    pub fn code(&self) -> &'static str {
        "validation_error"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_error_names_value() {
        let err = ValidationError::UnsupportedMeasure {
            value: "revenue".into(),
        };
        assert!(err.to_string().contains("revenue"));
    }

    #[test]
    fn group_by_error_names_value() {
        let err = ValidationError::UnsupportedGroupBy {
            value: "region".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid group_by: region. Supported: customer, warehouse"
        );
    }

    #[test]
    fn every_variant_shares_rest_code() {
        assert_eq!(ValidationError::EmptyQuery.code(), "validation_error");
        assert_eq!(ValidationError::MissingPeriod.code(), "validation_error");
    }
}
