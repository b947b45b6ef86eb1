//! Configuration loader (defaults + file + env merge).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::GatewayConfig;

/// Prefix of environment overrides, e.g. `SALESBRIDGE_SERVER__PORT`.
pub const ENV_PREFIX: &str = "SALESBRIDGE_";

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "SALESBRIDGE_CONFIG";

/// Keys whose env values are taken verbatim instead of being parsed, so an
/// all-digit secret or tenant stays a string (leading zeros included).
const VERBATIM_KEYS: &[&str] = &[
    "backend.auth.username",
    "backend.auth.password",
    "backend.tenant_header",
    "backend.default_tenant",
    "mcp.bearer_token",
    "api.bearer_token",
];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The explicitly requested file does not exist.
    #[error("config file not found: {path}")]
    NotFound { path: String },
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// Configuration loaded but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`SALESBRIDGE_` prefix, `__` nesting)
///
/// The result is not validated; call [`GatewayConfig::validate`] before
/// serving.
pub fn load_config(config_path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(GatewayConfig::default()));

    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        figment = figment.merge(Toml::file(path));
    }

    let env = Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__");
    figment = figment.merge(env.clone().ignore(VERBATIM_KEYS));
    for (key, value) in env.only(VERBATIM_KEYS).iter() {
        figment = figment.merge(Serialized::default(key.as_str(), value));
    }

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
