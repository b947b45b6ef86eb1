//! # salesbridge-types
//!
//! Domain types for the SalesBridge gateway.
//! This crate holds the data model shared by both inbound surfaces and the
//! backend client, plus the limit clamping and argument validation rules
//! that must behave identically everywhere.

pub mod error;
pub mod limits;
pub mod report;
pub mod resolve;

// Re-exports for convenience.
pub use error::ValidationError;
pub use limits::{effective_limit, Limits};
pub use report::{
    Column, Dimension, Measure, Period, SalesFilters, SalesReportArgs, SalesReportRequest,
    SalesReportResponse, SortSpec,
};
pub use resolve::{
    CustomerCandidate, ResolveArgs, ResolveCustomerResponse, ResolveRequest,
    ResolveWarehouseResponse, WarehouseCandidate,
};
