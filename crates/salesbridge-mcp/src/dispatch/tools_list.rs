//! Handles the `tools/list` MCP method.

use salesbridge_protocol::mcp::ToolsListResult;
use salesbridge_protocol::{JsonRpcResponse, RequestId};

use super::respond;
use crate::registry::tool_definitions;

/// Returns the fixed tool catalog.
pub(crate) fn handle_tools_list(id: Option<RequestId>) -> JsonRpcResponse {
    let result = ToolsListResult {
        tools: tool_definitions().to_vec(),
    };
    respond(id, &result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_three_tools_with_schemas() {
        let resp = handle_tools_list(Some(RequestId::String("a".into())));
        let tools = resp.result().expect("success")["tools"]
            .as_array()
            .expect("array")
            .clone();
        assert_eq!(tools.len(), 3);
        for tool in &tools {
            assert_eq!(tool["inputSchema"]["type"], "object");
            assert!(tool["description"].as_str().is_some_and(|d| !d.is_empty()));
        }
    }
}
