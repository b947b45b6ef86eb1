//! # salesbridge-protocol
//!
//! MCP protocol and JSON-RPC 2.0 type definitions.
//! This crate defines the wire format spoken on the `/mcp` endpoint.

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::*;
pub use mcp::{methods, McpMethod, UnknownMethod};
