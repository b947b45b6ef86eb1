//! Handles the `tools/call` MCP method.
//!
//! Argument problems are protocol errors (`invalid params`); failures of
//! the operation itself are reported inside a successful result with
//! `isError: true`.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use salesbridge_protocol::mcp::{ToolsCallParams, ToolsCallResult};
use salesbridge_protocol::{JsonRpcError, JsonRpcResponse, RequestId};
use salesbridge_runtime::{decode_arguments, GatewayError, SalesGateway};

use super::respond;
use crate::registry::ToolName;

/// Handles the `tools/call` request.
pub(crate) async fn handle_tools_call(
    id: Option<RequestId>,
    params: &Option<Value>,
    gateway: &SalesGateway,
) -> JsonRpcResponse {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("invalid tools/call params: {e}")),
                );
            }
        },
        None => {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params("tools/call requires params"),
            );
        }
    };

    // 2. Resolve tool name
    let tool = match call_params.name.parse::<ToolName>() {
        Ok(t) => t,
        Err(e) => return JsonRpcResponse::error(id, JsonRpcError::invalid_params(e.to_string())),
    };

    // 3. Execute
    debug!(%tool, "executing tool");
    match invoke(gateway, tool, call_params.arguments).await {
        Ok(text) => respond(id, &ToolsCallResult::text(text)),
        Err(e) if e.is_operational() => respond(id, &ToolsCallResult::error(e.to_string())),
        Err(e @ GatewayError::Serialize(_)) => {
            JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
        }
        Err(e) => JsonRpcResponse::error(id, JsonRpcError::invalid_params(e.to_string())),
    }
}

/// Runs one tool and returns its JSON-encoded result.
async fn invoke(
    gateway: &SalesGateway,
    tool: ToolName,
    arguments: Value,
) -> Result<String, GatewayError> {
    match tool {
        ToolName::ResolveCustomer => {
            encode(&gateway.resolve_customer(decode_arguments(arguments)?).await?)
        }
        ToolName::ResolveWarehouse => {
            encode(&gateway.resolve_warehouse(decode_arguments(arguments)?).await?)
        }
        ToolName::SalesReport => encode(&gateway.sales_report(decode_arguments(arguments)?).await?),
    }
}

fn encode<T: Serialize>(value: &T) -> Result<String, GatewayError> {
    serde_json::to_string(value).map_err(|e| GatewayError::Serialize(e.to_string()))
}
