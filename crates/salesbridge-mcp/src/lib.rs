//! # salesbridge-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides [`McpHandler`], which turns a raw JSON-RPC payload into a
//! response envelope, and the static tool [`registry`].

mod dispatch;
pub mod handler;
pub mod registry;

pub use handler::McpHandler;
pub use registry::{tool_definitions, ToolName, UnknownTool};
