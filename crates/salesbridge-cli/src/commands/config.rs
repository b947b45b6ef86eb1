//! `salesbridge config` command.
//!
//! Prints the merged configuration (defaults, file, environment) as TOML
//! with secrets masked.

use clap::Args;

use salesbridge_config::GatewayConfig;

use crate::output;

/// Print the effective configuration.
#[derive(Debug, Args)]
pub struct ConfigArgs {}

fn render(config: &GatewayConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(&config.redacted())?)
}

/// Executes the config command.
pub fn execute(_args: &ConfigArgs, config: &GatewayConfig) -> anyhow::Result<()> {
    print!("{}", render(config)?);
    if let Err(e) = config.validate() {
        output::print_warning(&e.to_string());
    }
    Ok(())
}
