//! Configuration schema types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use salesbridge_types::Limits;

use crate::loader::ConfigError;

const REDACTED: &str = "***";

/// Top-level SalesBridge configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote sales backend.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Row and candidate caps.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// JSON-RPC surface on `/mcp`.
    #[serde(default)]
    pub mcp: SurfaceConfig,
    /// REST surface.
    #[serde(default)]
    pub api: SurfaceConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Checks the settings needed to serve traffic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("backend.base_url is required".into()));
        }
        if self.limits.resolve_limit == 0 {
            return Err(ConfigError::Invalid(
                "limits.resolve_limit must be positive".into(),
            ));
        }
        if self.limits.max_rows == 0 {
            return Err(ConfigError::Invalid("limits.max_rows must be positive".into()));
        }
        match self.backend.auth.kind {
            AuthKind::Basic if is_blank(&self.backend.auth.username) => Err(ConfigError::Invalid(
                "backend.auth.username is required for basic auth".into(),
            )),
            AuthKind::Bearer if is_blank(&self.backend.auth.password) => Err(ConfigError::Invalid(
                "backend.auth.password is required for bearer auth".into(),
            )),
            _ => Ok(()),
        }
    }

    /// Copy with every secret masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        mask(&mut config.backend.auth.password);
        mask(&mut config.mcp.bearer_token);
        mask(&mut config.api.bearer_token);
        config
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn mask(value: &mut Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            *v = REDACTED.to_string();
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8088
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL, e.g. `https://erp.example.com/api`.
    #[serde(default)]
    pub base_url: String,
    /// Per-call timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Tenant header name, sent only together with `default_tenant`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tenant: Option<String>,
    #[serde(default)]
    pub auth: BackendAuthConfig,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: default_timeout_ms(),
            tenant_header: None,
            default_tenant: None,
            auth: BackendAuthConfig::default(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    8000
}

/// How the gateway authenticates to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthKind {
    #[default]
    None,
    Basic,
    /// `password` is sent as the bearer token.
    Bearer,
}

/// `[backend.auth]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendAuthConfig {
    #[serde(default, rename = "type")]
    pub kind: AuthKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Row and candidate caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_resolve_limit")]
    pub resolve_limit: u32,
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,
}

impl LimitsConfig {
    pub fn to_limits(self) -> Limits {
        Limits {
            resolve_limit: self.resolve_limit,
            max_rows: self.max_rows,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            resolve_limit: default_resolve_limit(),
            max_rows: default_max_rows(),
        }
    }
}

fn default_resolve_limit() -> u32 {
    10
}
fn default_max_rows() -> u32 {
    5000
}

/// One inbound surface (`[mcp]` or `[api]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// When unset or empty the surface accepts unauthenticated requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            bearer_token: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "salesbridge_backend=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.backend.base_url = "http://erp.local".into();
        config
    }

    #[test]
    fn defaults_need_base_url() {
        let err = GatewayConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("backend.base_url"));
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_limits_rejected() {
        let mut config = valid();
        config.limits.max_rows = 0;
        assert!(config.validate().is_err());

        let mut config = valid();
        config.limits.resolve_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn basic_auth_needs_username() {
        let mut config = valid();
        config.backend.auth.kind = AuthKind::Basic;
        assert!(config.validate().is_err());
        config.backend.auth.username = Some("svc".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bearer_auth_needs_password() {
        let mut config = valid();
        config.backend.auth.kind = AuthKind::Bearer;
        assert!(config.validate().is_err());
        config.backend.auth.password = Some("tok".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn redaction_masks_secrets_only() {
        let mut config = valid();
        config.backend.auth.username = Some("svc".into());
        config.backend.auth.password = Some("hunter2".into());
        config.mcp.bearer_token = Some("m".into());
        config.api.bearer_token = Some(String::new());

        let shown = config.redacted();
        assert_eq!(shown.backend.auth.username.as_deref(), Some("svc"));
        assert_eq!(shown.backend.auth.password.as_deref(), Some("***"));
        assert_eq!(shown.mcp.bearer_token.as_deref(), Some("***"));
        assert_eq!(shown.api.bearer_token.as_deref(), Some(""));
    }

    #[test]
    fn bind_addr_formats_host_and_port() {
        assert_eq!(ServerConfig::default().bind_addr(), "0.0.0.0:8088");
    }
}
