//! REST endpoints: the same three operations with a plain JSON envelope.
//!
//! Routes: `POST /resolve/customer`, `POST /resolve/warehouse`,
//! `POST /reports/sales`. Errors are `{error, message}` bodies.

use axum::{
    body::Bytes,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use salesbridge_runtime::{decode_arguments, GatewayError, SalesGateway};
use salesbridge_types::{ResolveArgs, SalesReportArgs};

use crate::auth::AuthPolicy;

/// Body of every non-2xx REST response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// A REST failure ready to be rendered.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.to_string(),
                message: message.into(),
            },
        }
    }

    /// Maps a gateway failure. Backend details stay in the logs; the
    /// caller gets `backend_message` instead.
    fn from_gateway(err: GatewayError, backend_message: &str) -> Self {
        let status = match &err {
            GatewayError::Decode(_)
            | GatewayError::Validation(_)
            | GatewayError::LimitExceeded { .. } => StatusCode::BAD_REQUEST,
            GatewayError::Backend(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &err {
            GatewayError::Backend(_) => backend_message.to_string(),
            GatewayError::Decode(_) => "Failed to parse request body".to_string(),
            other => other.to_string(),
        };
        Self::new(status, err.code(), message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Builds the REST sub-router guarded by `auth`.
pub fn routes(gateway: SalesGateway, auth: AuthPolicy) -> Router {
    Router::new()
        .route("/resolve/customer", post(resolve_customer))
        .route("/resolve/warehouse", post(resolve_warehouse))
        .route("/reports/sales", post(sales_report))
        .route_layer(middleware::from_fn_with_state(auth, require_bearer))
        .with_state(gateway)
}

async fn require_bearer(State(auth): State<AuthPolicy>, request: Request, next: Next) -> Response {
    match auth.check(request.headers()) {
        Ok(()) => next.run(request).await,
        Err(rejection) => {
            warn!(reason = rejection.reason(), path = %request.uri().path(), "unauthorized request");
            ApiError::new(
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Invalid or missing Bearer token",
            )
            .into_response()
        }
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| GatewayError::Decode(e.to_string()))?;
    decode_arguments(value)
}

async fn resolve_customer(
    State(gateway): State<SalesGateway>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let failed = "Failed to resolve customer from backend";
    let args: ResolveArgs = decode_body(&body).map_err(|e| ApiError::from_gateway(e, failed))?;
    let resp = gateway
        .resolve_customer(args)
        .await
        .map_err(|e| ApiError::from_gateway(e, failed))?;
    Ok(Json(resp).into_response())
}

async fn resolve_warehouse(
    State(gateway): State<SalesGateway>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let failed = "Failed to resolve warehouse from backend";
    let args: ResolveArgs = decode_body(&body).map_err(|e| ApiError::from_gateway(e, failed))?;
    let resp = gateway
        .resolve_warehouse(args)
        .await
        .map_err(|e| ApiError::from_gateway(e, failed))?;
    Ok(Json(resp).into_response())
}

async fn sales_report(
    State(gateway): State<SalesGateway>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let failed = "Failed to get sales report from backend";
    let args: SalesReportArgs =
        decode_body(&body).map_err(|e| ApiError::from_gateway(e, failed))?;
    let resp = gateway
        .sales_report(args)
        .await
        .map_err(|e| ApiError::from_gateway(e, failed))?;
    Ok(Json(resp).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesbridge_types::ValidationError;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::from_gateway(ValidationError::EmptyQuery.into(), "x");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "validation_error");
        assert_eq!(err.body.message, "query is required");
    }

    #[test]
    fn decode_maps_to_invalid_request() {
        let err = ApiError::from_gateway(GatewayError::Decode("eof".into()), "x");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "invalid_request");
    }

    #[test]
    fn limit_exceeded_is_bad_request() {
        let err = ApiError::from_gateway(
            GatewayError::LimitExceeded {
                rows: 9,
                max_rows: 5,
            },
            "x",
        );
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "limit_exceeded");
    }

    #[test]
    fn serialize_is_internal() {
        let err = ApiError::from_gateway(GatewayError::Serialize("nan".into()), "x");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error, "internal_error");
    }

    #[test]
    fn invalid_json_body_is_decode_error() {
        let err = decode_body::<ResolveArgs>(b"{").unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }
}
