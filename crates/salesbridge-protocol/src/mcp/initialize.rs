//! MCP initialize method types.
//!
//! The initialize handshake is the first message exchanged between
//! client and server to negotiate capabilities and protocol version.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP protocol version supported by this implementation.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Tool-related capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCapability {
    /// Whether the server emits list-changed notifications (never, here).
    #[serde(default, rename = "listChanged", skip_serializing_if = "std::ops::Not::not")]
    pub list_changed: bool,
}

/// Server capabilities returned during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability (present if server exposes tools).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapability>,
}

/// Client info sent during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client name.
    #[serde(default)]
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: String,
}

/// Server info returned during initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Request params for `initialize`.
///
/// Every field is optional; only ill-typed fields are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeParams {
    /// Protocol version requested by client.
    #[serde(default, rename = "protocolVersion")]
    pub protocol_version: String,
    /// Client capabilities (opaque to this server).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Value>,
    /// Client info.
    #[serde(default, rename = "clientInfo")]
    pub client_info: ClientInfo,
}

/// Response for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version agreed by server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server info.
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn initialize_params_accept_partial_input() {
        let params: InitializeParams =
            serde_json::from_value(json!({"protocolVersion": PROTOCOL_VERSION}))
                .expect("deserialize");
        assert_eq!(params.protocol_version, PROTOCOL_VERSION);
        assert!(params.client_info.name.is_empty());
    }

    #[test]
    fn initialize_params_reject_wrong_types() {
        let res = serde_json::from_value::<InitializeParams>(json!({"protocolVersion": 123}));
        assert!(res.is_err());
    }

    #[test]
    fn initialize_result_shape() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: "salesbridge".to_string(),
                version: "0.1.0".to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolCapability::default()),
            },
        };
        let v = serde_json::to_value(&result).expect("serialize");
        assert_eq!(v["capabilities"], json!({"tools": {}}));
        assert_eq!(v["serverInfo"]["name"], "salesbridge");
        assert_eq!(v["protocolVersion"], "2024-11-05");
    }
}
