//! Abstract backend trait (port) for sales data.

use async_trait::async_trait;

use salesbridge_types::{
    ResolveCustomerResponse, ResolveWarehouseResponse, SalesReportRequest, SalesReportResponse,
};

use crate::error::BackendError;

/// Typed operations the gateway issues against the sales backend.
///
/// Implementations must not retry; every failure is reported once as a
/// [`BackendError`]. Dropping a returned future aborts the call.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Searches customers matching `query`, returning at most `limit` candidates.
    async fn resolve_customer(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ResolveCustomerResponse, BackendError>;

    /// Searches warehouses matching `query`, returning at most `limit` candidates.
    async fn resolve_warehouse(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ResolveWarehouseResponse, BackendError>;

    /// Runs a sales report.
    async fn sales_report(
        &self,
        request: &SalesReportRequest,
    ) -> Result<SalesReportResponse, BackendError>;
}
