//! SalesBridge CLI - tool-protocol and REST gateway to the sales backend.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod output;
pub(crate) mod shared;

/// SalesBridge - JSON-RPC tool gateway for a sales/ERP backend.
#[derive(Debug, Parser)]
#[command(name = "salesbridge", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true, env = "SALESBRIDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv). Overrides `logging.level`.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain or json. Overrides `logging.format`.
    #[arg(long, global = true, value_parser = ["plain", "json"])]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server (JSON-RPC on /mcp plus the REST API).
    Serve(commands::serve::ServeArgs),
    /// Print the tool catalog advertised on tools/list.
    Tools(commands::tools::ToolsArgs),
    /// Print the effective configuration with secrets redacted.
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = salesbridge_config::load_config(cli.config.as_deref())?;
    shared::init_tracing(&config.logging, cli.verbose, cli.log_format.as_deref());

    tracing::debug!("SalesBridge starting with config file: {:?}", cli.config);

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Tools(args) => commands::tools::execute(args),
        Commands::Config(args) => commands::config::execute(args, &config),
    }
}
