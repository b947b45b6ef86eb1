//! reqwest-based [`Backend`] speaking JSON over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use salesbridge_types::{
    ResolveCustomerResponse, ResolveRequest, ResolveWarehouseResponse, SalesReportRequest,
    SalesReportResponse,
};

use crate::client::Backend;
use crate::error::BackendError;

const RESOLVE_CUSTOMER_PATH: &str = "/mcp/resolve/customer";
const RESOLVE_WAREHOUSE_PATH: &str = "/mcp/resolve/warehouse";
const SALES_REPORT_PATH: &str = "/mcp/reports/sales";

/// Credentials attached to every outbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendAuth {
    /// No `Authorization` header.
    #[default]
    None,
    /// HTTP basic authentication.
    Basic { username: String, password: String },
    /// `Authorization: Bearer <token>`.
    Bearer { token: String },
}

/// Settings for [`HttpBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    /// Base URL, e.g. `https://erp.example.com/api`.
    pub base_url: String,
    /// Per-call timeout covering connect, send and body read.
    pub timeout: Duration,
    /// Authentication mode.
    pub auth: BackendAuth,
    /// Tenant header name; only sent together with `default_tenant`.
    pub tenant_header: Option<String>,
    /// Tenant header value.
    pub default_tenant: Option<String>,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_millis(8000),
            auth: BackendAuth::None,
            tenant_header: None,
            default_tenant: None,
        }
    }
}

/// HTTP client for the sales backend.
///
/// Holds only immutable configuration and a pooled `reqwest::Client`, so a
/// single instance is shared across all concurrent requests.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    auth: BackendAuth,
}

impl HttpBackend {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Config`] if the tenant header name or value
    /// is not a valid HTTP header, or the TLS backend fails to initialise.
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let (Some(name), Some(value)) = (&config.tenant_header, &config.default_tenant) {
            if !name.is_empty() && !value.is_empty() {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|_| BackendError::Config(format!("invalid tenant header: {name}")))?;
                let value = HeaderValue::from_str(value)
                    .map_err(|_| BackendError::Config("invalid tenant value".to_string()))?;
                headers.insert(name, value);
            }
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth: config.auth,
        })
    }

    /// POSTs `body` as JSON to `path` and decodes the JSON response.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, BackendError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);
        request = match &self.auth {
            BackendAuth::None => request,
            BackendAuth::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            BackendAuth::Bearer { token } => request.bearer_auth(token),
        };

        debug!(method = "POST", path, "backend request");

        let response = request.send().await.map_err(|e| {
            error!(method = "POST", path, error = %e, "backend request failed");
            BackendError::Transport {
                path: path.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport {
                path: path.to_string(),
                message: format!("failed to read response: {e}"),
            })?;

        debug!(method = "POST", path, status = status.as_u16(), "backend response");

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            error!(method = "POST", path, status = status.as_u16(), body = %body, "backend error response");
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn resolve_customer(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ResolveCustomerResponse, BackendError> {
        let body = ResolveRequest {
            query: query.to_string(),
            limit,
        };
        self.post(RESOLVE_CUSTOMER_PATH, &body).await
    }

    async fn resolve_warehouse(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ResolveWarehouseResponse, BackendError> {
        let body = ResolveRequest {
            query: query.to_string(),
            limit,
        };
        self.post(RESOLVE_WAREHOUSE_PATH, &body).await
    }

    async fn sales_report(
        &self,
        request: &SalesReportRequest,
    ) -> Result<SalesReportResponse, BackendError> {
        self.post(SALES_REPORT_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_trimmed() {
        let backend = HttpBackend::new(HttpBackendConfig {
            base_url: "http://erp.local/api/".into(),
            ..HttpBackendConfig::default()
        })
        .expect("build");
        assert_eq!(backend.base_url, "http://erp.local/api");
    }

    #[test]
    fn invalid_tenant_header_rejected() {
        let result = HttpBackend::new(HttpBackendConfig {
            base_url: "http://erp.local".into(),
            tenant_header: Some("bad header".into()),
            default_tenant: Some("acme".into()),
            ..HttpBackendConfig::default()
        });
        assert!(matches!(result, Err(BackendError::Config(_))));
    }

    #[test]
    fn tenant_header_needs_both_parts() {
        let result = HttpBackend::new(HttpBackendConfig {
            base_url: "http://erp.local".into(),
            tenant_header: Some("bad header".into()),
            default_tenant: None,
            ..HttpBackendConfig::default()
        });
        assert!(result.is_ok());
    }
}
