//! # salesbridge-backend
//!
//! Port and HTTP adapter for the remote sales backend.
//!
//! The gateway depends only on the [`Backend`] trait; [`HttpBackend`] is
//! the production implementation speaking JSON over HTTP.

pub mod client;
mod error;
pub mod http;
#[cfg(feature = "test-util")]
pub mod stub;

pub use client::Backend;
pub use error::BackendError;
pub use http::{BackendAuth, HttpBackend, HttpBackendConfig};
#[cfg(feature = "test-util")]
pub use stub::{RecordedCall, StubBackend};
