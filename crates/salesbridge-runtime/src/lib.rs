//! # salesbridge-runtime
//!
//! Request translation shared by the JSON-RPC tool surface and the REST
//! surface: argument decoding, validation, limit clamping and the single
//! backend call per request.

pub mod error;
pub mod gateway;

pub use error::GatewayError;
pub use gateway::{decode_arguments, SalesGateway};
