//! The three gateway operations, shared by every surface.
//!
//! Pipeline per call: decode → validate + clamp → one backend call →
//! post-check. Nothing here knows about JSON-RPC or HTTP status codes.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use salesbridge_backend::Backend;
use salesbridge_types::{
    Limits, ResolveArgs, ResolveCustomerResponse, ResolveWarehouseResponse, SalesReportArgs,
    SalesReportResponse,
};

use crate::error::GatewayError;

/// Decodes an untyped argument bag into `T`.
///
/// `null` is treated as an empty object so that a call without arguments
/// reaches validation instead of failing decode.
pub fn decode_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, GatewayError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Translates validated calls onto a [`Backend`].
///
/// Cheap to clone; holds only the shared backend handle and the limits.
#[derive(Clone)]
pub struct SalesGateway {
    backend: Arc<dyn Backend>,
    limits: Limits,
}

impl SalesGateway {
    pub fn new(backend: Arc<dyn Backend>, limits: Limits) -> Self {
        Self { backend, limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Resolves a customer by free-text query.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Validation`] for an empty query (no backend call),
    /// [`GatewayError::Backend`] when the backend call fails.
    #[tracing::instrument(skip_all, fields(operation = "resolve_customer"))]
    pub async fn resolve_customer(
        &self,
        args: ResolveArgs,
    ) -> Result<ResolveCustomerResponse, GatewayError> {
        let request = args.into_request(&self.limits)?;
        debug!(limit = request.limit, "resolving customer");
        self.backend
            .resolve_customer(&request.query, request.limit)
            .await
            .map_err(|e| {
                error!(error = %e, "backend call failed");
                e.into()
            })
    }

    /// Resolves a warehouse by free-text query.
    ///
    /// # Errors
    ///
    /// Same as [`SalesGateway::resolve_customer`].
    #[tracing::instrument(skip_all, fields(operation = "resolve_warehouse"))]
    pub async fn resolve_warehouse(
        &self,
        args: ResolveArgs,
    ) -> Result<ResolveWarehouseResponse, GatewayError> {
        let request = args.into_request(&self.limits)?;
        debug!(limit = request.limit, "resolving warehouse");
        self.backend
            .resolve_warehouse(&request.query, request.limit)
            .await
            .map_err(|e| {
                error!(error = %e, "backend call failed");
                e.into()
            })
    }

    /// Runs a sales report.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Validation`] for a missing period or an unsupported
    /// measure / dimension (no backend call), [`GatewayError::Backend`] when
    /// the call fails, [`GatewayError::LimitExceeded`] when the backend
    /// returns more rows than `max_rows`.
    #[tracing::instrument(skip_all, fields(operation = "sales_report"))]
    pub async fn sales_report(
        &self,
        args: SalesReportArgs,
    ) -> Result<SalesReportResponse, GatewayError> {
        let request = args.into_request(&self.limits)?;
        debug!(top = request.top, "running sales report");
        let response = self.backend.sales_report(&request).await.map_err(|e| {
            error!(error = %e, "backend call failed");
            GatewayError::from(e)
        })?;

        let rows = response.row_count();
        if rows > self.limits.max_rows as usize {
            warn!(rows, max_rows = self.limits.max_rows, "report exceeds max_rows");
            return Err(GatewayError::LimitExceeded {
                rows,
                max_rows: self.limits.max_rows,
            });
        }
        Ok(response)
    }
}

impl std::fmt::Debug for SalesGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesGateway")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
