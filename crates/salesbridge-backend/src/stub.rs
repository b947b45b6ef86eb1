//! In-memory [`Backend`] that records every call (enabled by `test-util`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use salesbridge_types::{
    CustomerCandidate, ResolveCustomerResponse, ResolveWarehouseResponse, SalesReportRequest,
    SalesReportResponse, WarehouseCandidate,
};

use crate::client::Backend;
use crate::error::BackendError;

/// One call observed by [`StubBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    ResolveCustomer { query: String, limit: u32 },
    ResolveWarehouse { query: String, limit: u32 },
    SalesReport(SalesReportRequest),
}

/// Canned-response backend with a call counter.
#[derive(Debug, Default)]
pub struct StubBackend {
    customers: Vec<CustomerCandidate>,
    warehouses: Vec<WarehouseCandidate>,
    report: SalesReportResponse,
    failure: Option<(u16, String)>,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedCall>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(mut self, customers: Vec<CustomerCandidate>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_warehouses(mut self, warehouses: Vec<WarehouseCandidate>) -> Self {
        self.warehouses = warehouses;
        self
    }

    pub fn with_report(mut self, report: SalesReportResponse) -> Self {
        self.report = report;
        self
    }

    /// Makes every call fail with `BackendError::Status { status, body }`.
    pub fn failing(mut self, status: u16, body: impl Into<String>) -> Self {
        self.failure = Some((status, body.into()));
        self
    }

    /// Number of backend calls issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of recorded calls, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
        match &self.failure {
            Some((status, body)) => Err(BackendError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn resolve_customer(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ResolveCustomerResponse, BackendError> {
        self.record(RecordedCall::ResolveCustomer {
            query: query.to_string(),
            limit,
        })?;
        Ok(ResolveCustomerResponse {
            candidates: self.customers.clone(),
        })
    }

    async fn resolve_warehouse(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ResolveWarehouseResponse, BackendError> {
        self.record(RecordedCall::ResolveWarehouse {
            query: query.to_string(),
            limit,
        })?;
        Ok(ResolveWarehouseResponse {
            candidates: self.warehouses.clone(),
        })
    }

    async fn sales_report(
        &self,
        request: &SalesReportRequest,
    ) -> Result<SalesReportResponse, BackendError> {
        self.record(RecordedCall::SalesReport(request.clone()))?;
        Ok(self.report.clone())
    }
}
