//! Customer and warehouse resolution types.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::limits::Limits;

/// Inbound arguments for a resolve call (REST body or tool arguments).
///
/// Decoding is permissive: unknown fields are ignored and a missing or
/// `null` limit means "use the configured maximum".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveArgs {
    /// Free-text search query.
    #[serde(default)]
    pub query: String,
    /// Requested number of candidates.
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ResolveArgs {
    /// Validates the arguments and applies the limit clamp.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuery`] if the query is empty.
    pub fn into_request(self, limits: &Limits) -> Result<ResolveRequest, ValidationError> {
        if self.query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(ResolveRequest {
            limit: limits.resolve(self.limit.unwrap_or(0)),
            query: self.query,
        })
    }
}

/// Outbound resolve request sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub query: String,
    pub limit: u32,
}

/// A customer matching a resolve query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCandidate {
    pub id: String,
    pub label: String,
    /// Tax identification number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// A warehouse matching a resolve query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseCandidate {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// Backend response for customer resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveCustomerResponse {
    #[serde(default)]
    pub candidates: Vec<CustomerCandidate>,
}

/// Backend response for warehouse resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveWarehouseResponse {
    #[serde(default)]
    pub candidates: Vec<WarehouseCandidate>,
}
