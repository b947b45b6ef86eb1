//! MCP tools/* method types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single tool definition in the MCP response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpToolDefinition {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON Schema for input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Response for `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools.
    pub tools: Vec<McpToolDefinition>,
}

/// Request params for `tools/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallParams {
    /// Name of the tool to invoke.
    pub name: String,
    /// Arguments to pass.
    #[serde(default)]
    pub arguments: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text { text: String },
}

/// Response for `tools/call`.
///
/// `is_error` marks a tool that ran and failed; the JSON-RPC call itself
/// still succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsCallResult {
    /// Content items returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(default, rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolsCallResult {
    /// Successful result with a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Failed tool invocation with an explanatory text block.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_definition_uses_camel_case_schema_key() {
        let def = McpToolDefinition {
            name: "resolve_customer".into(),
            description: "A tool".into(),
            input_schema: json!({"type": "object"}),
        };
        let s = serde_json::to_string(&def).expect("ser");
        assert!(s.contains("inputSchema"));
    }

    #[test]
    fn tools_call_params_default_arguments() {
        let p: ToolsCallParams = serde_json::from_str(r#"{"name":"sales_report"}"#).expect("de");
        assert_eq!(p.name, "sales_report");
        assert!(p.arguments.is_null());
    }

    #[test]
    fn success_result_omits_is_error() {
        let r = ToolsCallResult::text("ok");
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(v, json!({"content": [{"type": "text", "text": "ok"}]}));
    }

    #[test]
    fn error_result_sets_is_error() {
        let r = ToolsCallResult::error("backend down");
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(v["isError"], true);
        assert_eq!(v["content"][0]["text"], "backend down");
    }
}
