//! MCP request handler that routes JSON-RPC methods to implementations.

use serde_json::Value;
use tracing::{debug, info};

use salesbridge_protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpMethod, RequestId, JSONRPC_VERSION,
};
use salesbridge_runtime::SalesGateway;

use crate::dispatch;

/// Dispatches MCP JSON-RPC requests to the gateway.
///
/// Stateless apart from the shared gateway; every call is independent.
#[derive(Debug, Clone)]
pub struct McpHandler {
    gateway: SalesGateway,
}

impl McpHandler {
    pub fn new(gateway: SalesGateway) -> Self {
        Self { gateway }
    }

    /// Handles a raw request body.
    ///
    /// Every input yields a well-formed response: undecodable bytes give a
    /// parse error with a `null` id, JSON that is not a request object gives
    /// an invalid request echoing whatever id could be read.
    pub async fn handle_bytes(&self, body: &[u8]) -> JsonRpcResponse {
        let value: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "undecodable JSON-RPC payload");
                return JsonRpcResponse::error(None, JsonRpcError::parse_error());
            }
        };

        let id = value.get("id").and_then(RequestId::from_value);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "payload is not a JSON-RPC request");
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request().with_data(e.to_string()),
                );
            }
        };

        self.dispatch(&request).await
    }

    /// Routes a decoded request to the matching method.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        if request.jsonrpc != JSONRPC_VERSION {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request()
                    .with_data(format!("unsupported jsonrpc version: {}", request.jsonrpc)),
            );
        }

        info!(method = %request.method, id = ?request.id, "mcp request");

        let method = match request.method.parse::<McpMethod>() {
            Ok(m) => m,
            Err(unknown) => {
                return JsonRpcResponse::error(id, JsonRpcError::method_not_found(&unknown.0));
            }
        };

        match method {
            McpMethod::Initialize => dispatch::initialize::handle_initialize(id, &request.params),
            McpMethod::ToolsList => dispatch::tools_list::handle_tools_list(id),
            McpMethod::ToolsCall => {
                dispatch::tools_call::handle_tools_call(id, &request.params, &self.gateway).await
            }
        }
    }
}
