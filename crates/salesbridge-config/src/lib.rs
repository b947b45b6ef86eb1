//! # salesbridge-config
//!
//! Configuration management for SalesBridge.
//! Supports layered config: defaults -> TOML file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, CONFIG_PATH_ENV, ENV_PREFIX};
pub use schema::{
    AuthKind, BackendAuthConfig, BackendConfig, GatewayConfig, LimitsConfig, LogFormat,
    LoggingConfig, ServerConfig, SurfaceConfig,
};
