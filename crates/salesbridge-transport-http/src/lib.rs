//! HTTP transport adapter for SalesBridge.
//! Exposes JSON-RPC over `POST /mcp` and the REST API, each with its own
//! optional bearer token.

pub mod auth;
mod error;
pub mod rest;
pub mod router;
pub mod server;

pub use auth::AuthPolicy;
pub use error::HttpTransportError;
pub use router::{build_router, AppState, Surface};
pub use server::HttpServer;
