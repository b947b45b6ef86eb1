//! MCP (Model Context Protocol) type definitions.

use std::str::FromStr;

use thiserror::Error;

pub mod initialize;
pub mod tools;

pub use initialize::*;
pub use tools::*;

/// MCP protocol method names.
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
}

/// The fixed set of methods this server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpMethod {
    Initialize,
    ToolsList,
    ToolsCall,
}

/// A method name outside [`McpMethod`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("method not found: {0}")]
pub struct UnknownMethod(pub String);

impl McpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => methods::INITIALIZE,
            Self::ToolsList => methods::TOOLS_LIST,
            Self::ToolsCall => methods::TOOLS_CALL,
        }
    }
}

impl FromStr for McpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            methods::INITIALIZE => Ok(Self::Initialize),
            methods::TOOLS_LIST => Ok(Self::ToolsList),
            methods::TOOLS_CALL => Ok(Self::ToolsCall),
            other => Err(UnknownMethod(other.to_string())),
        }
    }
}
