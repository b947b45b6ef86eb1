//! `salesbridge serve` command.
//!
//! Builds the backend client and gateway from configuration and serves
//! both surfaces over HTTP until Ctrl-C / SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use salesbridge_backend::HttpBackend;
use salesbridge_config::GatewayConfig;
use salesbridge_runtime::SalesGateway;
use salesbridge_transport_http::{AppState, HttpServer};

use crate::shared;

/// Start the HTTP server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen host (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// Listen port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(args: &ServeArgs, mut config: GatewayConfig) -> GatewayConfig {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: GatewayConfig) -> anyhow::Result<()> {
    let config = apply_overrides(args, config);
    config.validate()?;

    let backend = HttpBackend::new(shared::backend_config(&config.backend))
        .context("failed to build backend client")?;
    let gateway = SalesGateway::new(Arc::new(backend), config.limits.to_limits());

    let bind = config.server.bind_addr();
    let addr = tokio::net::lookup_host(&bind)
        .await
        .with_context(|| format!("cannot resolve listen address {bind}"))?
        .next()
        .with_context(|| format!("no address for {bind}"))?;

    tracing::info!(
        backend = %config.backend.base_url,
        resolve_limit = config.limits.resolve_limit,
        max_rows = config.limits.max_rows,
        "starting SalesBridge"
    );

    let state = AppState {
        gateway,
        mcp: shared::surface(&config.mcp),
        api: shared::surface(&config.api),
    };
    HttpServer::new(addr, state)
        .run(shared::shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("server error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_host_and_port() {
        let args = ServeArgs {
            host: Some("127.0.0.1".into()),
            port: Some(9001),
        };
        let config = apply_overrides(&args, GatewayConfig::default());
        assert_eq!(config.server.bind_addr(), "127.0.0.1:9001");
    }

    #[test]
    fn no_overrides_keep_config() {
        let args = ServeArgs {
            host: None,
            port: None,
        };
        let config = apply_overrides(&args, GatewayConfig::default());
        assert_eq!(config.server.port, 8088);
    }

    #[tokio::test]
    async fn missing_base_url_fails_before_binding() {
        let args = ServeArgs {
            host: None,
            port: Some(0),
        };
        let err = execute(&args, GatewayConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("backend.base_url"));
    }
}
