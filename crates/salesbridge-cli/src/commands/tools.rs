//! `salesbridge tools` command.

use clap::Args;

use salesbridge_mcp::tool_definitions;
use salesbridge_protocol::mcp::ToolsListResult;

/// Print the tool catalog.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Print the exact `tools/list` result as JSON, schemas included.
    #[arg(long)]
    pub json: bool,
}

fn render(args: &ToolsArgs) -> anyhow::Result<String> {
    if args.json {
        let result = ToolsListResult {
            tools: tool_definitions().to_vec(),
        };
        return Ok(serde_json::to_string_pretty(&result)?);
    }

    let mut out = String::new();
    for tool in tool_definitions() {
        out.push_str(&format!("{:<18} {}\n", tool.name, tool.description));
    }
    Ok(out)
}

/// Executes the tools command.
pub fn execute(args: &ToolsArgs) -> anyhow::Result<()> {
    print!("{}", render(args)?);
    Ok(())
}
