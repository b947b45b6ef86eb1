//! Axum router for the SalesBridge HTTP surface.
//! Routes: `POST /mcp` (JSON-RPC), REST endpoints, `GET /health` (liveness).

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use salesbridge_mcp::McpHandler;
use salesbridge_protocol::{error_codes, JsonRpcError, JsonRpcResponse};
use salesbridge_runtime::SalesGateway;

use crate::auth::AuthPolicy;
use crate::rest::{self, ApiError};

/// Mount switch and credential policy for one surface.
#[derive(Debug, Clone)]
pub struct Surface {
    pub enabled: bool,
    pub auth: AuthPolicy,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            enabled: true,
            auth: AuthPolicy::Open,
        }
    }
}

/// Everything the router needs.
#[derive(Debug, Clone)]
pub struct AppState {
    pub gateway: SalesGateway,
    pub mcp: Surface,
    pub api: Surface,
}

#[derive(Clone)]
struct McpState {
    handler: Arc<McpHandler>,
    auth: AuthPolicy,
}

/// Builds the axum `Router` with every enabled surface plus middleware.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new().route("/health", get(handle_health));

    if state.mcp.enabled {
        if state.mcp.auth.is_open() {
            warn!("MCP surface has no bearer token configured; accepting unauthenticated requests");
        }
        let mcp = McpState {
            handler: Arc::new(McpHandler::new(state.gateway.clone())),
            auth: state.mcp.auth,
        };
        router = router.merge(
            Router::new()
                .route("/mcp", post(handle_mcp))
                .with_state(mcp),
        );
        info!("MCP surface mounted at /mcp");
    } else {
        info!("MCP surface disabled");
    }

    if state.api.enabled {
        if state.api.auth.is_open() {
            warn!("REST surface has no bearer token configured; accepting unauthenticated requests");
        }
        router = router.merge(rest::routes(state.gateway, state.api.auth));
        info!("REST surface mounted");
    } else {
        info!("REST surface disabled");
    }

    router
        .method_not_allowed_fallback(handle_method_not_allowed)
        .fallback(handle_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn handle_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "not_found", "Endpoint not found")
}

async fn handle_method_not_allowed() -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "method_not_allowed",
        "Method not allowed",
    )
}

fn handle_panic(_: Box<dyn Any + Send + 'static>) -> Response {
    error!("request handler panicked");
    ApiError::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "Internal server error",
    )
    .into_response()
}

async fn handle_mcp(State(state): State<McpState>, headers: HeaderMap, body: Bytes) -> Response {
    if let Err(rejection) = state.auth.check(&headers) {
        warn!(reason = rejection.reason(), path = "/mcp", "unauthorized request");
        let resp = JsonRpcResponse::error(None, JsonRpcError::unauthorized());
        return (StatusCode::UNAUTHORIZED, Json(resp)).into_response();
    }

    let resp = state.handler.handle_bytes(&body).await;
    match resp.to_json() {
        Ok(json_str) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to serialize JSON-RPC response");
            let body = json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": { "code": error_codes::INTERNAL_ERROR, "message": "Internal error" }
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
