//! The fixed catalog of callable tools.
//!
//! Schemas are advertised on `tools/list` for client-side discovery only;
//! argument checking happens in the typed decode of each tool.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use thiserror::Error;

use salesbridge_protocol::mcp::McpToolDefinition;

/// The three tools this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    ResolveCustomer,
    ResolveWarehouse,
    SalesReport,
}

/// A tool name outside [`ToolName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl ToolName {
    /// All tools, in advertised order.
    pub const ALL: [ToolName; 3] = [
        ToolName::ResolveCustomer,
        ToolName::ResolveWarehouse,
        ToolName::SalesReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolveCustomer => "resolve_customer",
            Self::ResolveWarehouse => "resolve_warehouse",
            Self::SalesReport => "sales_report",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ResolveCustomer => {
                "Search customers by name, phone, or other identifying information. \
                 Returns a list of matching candidates for disambiguation."
            }
            Self::ResolveWarehouse => {
                "Search warehouses by name or code. \
                 Returns a list of matching candidates for disambiguation."
            }
            Self::SalesReport => {
                "Get sales report for a specified period with optional filters by \
                 customer and warehouse. Supports grouping and sorting."
            }
        }
    }

    fn input_schema(&self) -> Value {
        match self {
            Self::ResolveCustomer => resolve_schema("Search query (name, phone, etc.)"),
            Self::ResolveWarehouse => resolve_schema("Search query (warehouse name or code)"),
            Self::SalesReport => sales_report_schema(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

static REGISTRY: Lazy<Vec<McpToolDefinition>> = Lazy::new(|| {
    ToolName::ALL
        .iter()
        .map(|tool| McpToolDefinition {
            name: tool.as_str().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.input_schema(),
        })
        .collect()
});

/// Tool descriptors in advertised order. Built once on first access.
pub fn tool_definitions() -> &'static [McpToolDefinition] {
    &REGISTRY
}

fn resolve_schema(query_description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": query_description
            },
            "limit": {
                "type": "integer",
                "description": "Maximum number of results to return (default: 10)"
            }
        },
        "required": ["query"]
    })
}

fn sales_report_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "period": {
                "type": "object",
                "description": "Report period",
                "properties": {
                    "from": {"type": "string", "format": "date", "description": "Start date (YYYY-MM-DD)"},
                    "to": {"type": "string", "format": "date", "description": "End date (YYYY-MM-DD)"}
                },
                "required": ["from", "to"]
            },
            "filters": {
                "type": "object",
                "description": "Optional filters",
                "properties": {
                    "customer_ids": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Filter by customer IDs (from resolve_customer)"
                    },
                    "warehouse_ids": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Filter by warehouse IDs (from resolve_warehouse)"
                    }
                }
            },
            "group_by": {
                "type": "array",
                "items": {"type": "string", "enum": ["customer", "warehouse"]},
                "description": "Group results by dimensions"
            },
            "measures": {
                "type": "array",
                "items": {"type": "string", "enum": ["amount", "qty"]},
                "description": "Measures to include (default: amount, qty)"
            },
            "top": {
                "type": "integer",
                "description": "Limit number of rows returned"
            },
            "sort": {
                "type": "array",
                "description": "Sort order",
                "items": {
                    "type": "object",
                    "properties": {
                        "field": {"type": "string"},
                        "dir": {"type": "string", "enum": ["asc", "desc"]}
                    }
                }
            }
        },
        "required": ["period"]
    })
}
