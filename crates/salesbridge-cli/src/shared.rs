//! Shared helpers used across CLI commands.
//!
//! Converts configuration sections into the runtime types of the library
//! crates and owns process-level concerns (tracing, signals).

use salesbridge_backend::{BackendAuth, HttpBackendConfig};
use salesbridge_config::{AuthKind, BackendConfig, LogFormat, LoggingConfig, SurfaceConfig};
use salesbridge_transport_http::{AuthPolicy, Surface};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Initialises the global tracing subscriber.
///
/// `RUST_LOG` wins over everything; otherwise `-v` flags win over the
/// configured level. Logs go to stderr so command output stays clean.
pub fn init_tracing(logging: &LoggingConfig, verbose: u8, format_flag: Option<&str>) {
    let level = match verbose {
        0 => logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let format = match format_flag {
        Some("json") => LogFormat::Json,
        Some(_) => LogFormat::Plain,
        None => logging.format,
    };

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        LogFormat::Plain => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

/// Builds the HTTP backend settings from `[backend]`.
pub fn backend_config(backend: &BackendConfig) -> HttpBackendConfig {
    let auth = match backend.auth.kind {
        AuthKind::None => BackendAuth::None,
        AuthKind::Basic => BackendAuth::Basic {
            username: backend.auth.username.clone().unwrap_or_default(),
            password: backend.auth.password.clone().unwrap_or_default(),
        },
        AuthKind::Bearer => BackendAuth::Bearer {
            token: backend.auth.password.clone().unwrap_or_default(),
        },
    };

    HttpBackendConfig {
        base_url: backend.base_url.clone(),
        timeout: backend.timeout(),
        auth,
        tenant_header: backend.tenant_header.clone(),
        default_tenant: backend.default_tenant.clone(),
    }
}

/// Resolves one `[mcp]` / `[api]` section into a router surface.
pub fn surface(config: &SurfaceConfig) -> Surface {
    Surface {
        enabled: config.enabled,
        auth: AuthPolicy::from_token(config.bearer_token.clone()),
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use salesbridge_config::BackendAuthConfig;

    #[test]
    fn bearer_uses_password_as_token() {
        let backend = BackendConfig {
            base_url: "http://erp.local".into(),
            auth: BackendAuthConfig {
                kind: AuthKind::Bearer,
                username: None,
                password: Some("tok".into()),
            },
            ..BackendConfig::default()
        };
        let cfg = backend_config(&backend);
        assert_eq!(cfg.auth, BackendAuth::Bearer { token: "tok".into() });
        assert_eq!(cfg.timeout, Duration::from_millis(8000));
    }

    #[test]
    fn basic_auth_carries_both_parts() {
        let backend = BackendConfig {
            auth: BackendAuthConfig {
                kind: AuthKind::Basic,
                username: Some("svc".into()),
                password: None,
            },
            tenant_header: Some("X-Tenant".into()),
            default_tenant: Some("acme".into()),
            ..BackendConfig::default()
        };
        let cfg = backend_config(&backend);
        assert_eq!(
            cfg.auth,
            BackendAuth::Basic {
                username: "svc".into(),
                password: String::new()
            }
        );
        assert_eq!(cfg.tenant_header.as_deref(), Some("X-Tenant"));
    }

    #[test]
    fn surface_without_token_is_open() {
        let s = surface(&SurfaceConfig::default());
        assert!(s.enabled);
        assert!(s.auth.is_open());
    }

    #[test]
    fn surface_with_token_requires_bearer() {
        let s = surface(&SurfaceConfig {
            enabled: false,
            bearer_token: Some("t".into()),
        });
        assert!(!s.enabled);
        assert_eq!(s.auth, AuthPolicy::Bearer("t".into()));
    }
}
