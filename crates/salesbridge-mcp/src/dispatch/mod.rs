//! MCP method dispatch functions.
//!
//! Each sub-module handles one method as a free function, keeping
//! `McpHandler` itself thin (struct + routing only).

use serde::Serialize;

use salesbridge_protocol::{JsonRpcError, JsonRpcResponse, RequestId};

pub(crate) mod initialize;
pub(crate) mod tools_call;
pub(crate) mod tools_list;

/// Wraps a typed result in a success envelope.
pub(crate) fn respond<T: Serialize>(id: Option<RequestId>, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse::success(id, v),
        Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
    }
}
