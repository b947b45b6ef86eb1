//! Handles the `initialize` MCP method.

use serde_json::Value;

use salesbridge_protocol::mcp::{
    InitializeParams, InitializeResult, ServerCapabilities, ServerInfo, ToolCapability,
    PROTOCOL_VERSION,
};
use salesbridge_protocol::{JsonRpcError, JsonRpcResponse, RequestId};

use super::respond;

pub(crate) const SERVER_NAME: &str = "salesbridge";

/// Handles the `initialize` request and returns the server capabilities.
pub(crate) fn handle_initialize(id: Option<RequestId>, params: &Option<Value>) -> JsonRpcResponse {
    if let Some(p) = params.as_ref().filter(|p| !p.is_null()) {
        if let Err(e) = serde_json::from_value::<InitializeParams>(p.clone()) {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("invalid initialize params: {e}")),
            );
        }
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability::default()),
        },
    };

    respond(id, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_shape() {
        let resp = handle_initialize(Some(RequestId::Number(1.into())), &None);
        let result = resp.result().expect("success");
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "salesbridge");
        assert_eq!(result["capabilities"], json!({"tools": {}}));
    }

    #[test]
    fn null_params_accepted() {
        let resp = handle_initialize(None, &Some(Value::Null));
        assert!(!resp.is_error());
    }

    #[test]
    fn ill_typed_params_rejected() {
        let resp = handle_initialize(None, &Some(json!({"protocolVersion": 2024})));
        assert_eq!(resp.error_object().map(|e| e.code), Some(-32602));
    }
}
