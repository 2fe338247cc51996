//! REST API layer: route handlers, DTOs, router composition, and the
//! OpenAPI document.
//!
//! Resource endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use std::time::Duration;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::error::GatewayError;

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "swap-estimator",
        description = "Constant-product swap output estimates from live pool reserves"
    ),
    paths(
        handlers::estimate::estimate_query,
        handlers::estimate::estimate_json,
        handlers::token::get_token,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Estimate", description = "Swap output estimation"),
        (name = "Tokens", description = "ERC-20 metadata"),
        (name = "System", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}

/// Middleware bounding a whole request by `limit`.
///
/// Mount with [`axum::middleware::from_fn_with_state`]. An expired request
/// is answered with [`GatewayError::RequestTimeout`], so the body keeps the
/// usual error shape.
pub async fn request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => GatewayError::RequestTimeout(limit).into_response(),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::chain::ChainClient;
    use crate::chain::mock::MockChainClient;
    use crate::service::EstimateService;

    const POOL: &str = "0x1234567890123456789012345678901234567890";
    const TOKEN0: &str = "0x1111111111111111111111111111111111111111";
    const TOKEN1: &str = "0x2222222222222222222222222222222222222222";

    fn app(client: MockChainClient) -> Router {
        let client: Arc<dyn ChainClient> = Arc::new(client);
        let state = AppState {
            estimate_service: Arc::new(EstimateService::new(client, Duration::from_secs(5))),
        };
        build_router().with_state(state)
    }

    fn standard_app() -> Router {
        app(MockChainClient::new(
            10_000_000_000_000_000_000,
            20_000_000_000_000_000_000,
        ))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = match app.oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        let status = response.status();
        let Ok(bytes) = to_bytes(response.into_body(), 64 * 1024).await else {
            panic!("body read failed");
        };
        let Ok(json) = serde_json::from_slice(&bytes) else {
            panic!("response is not JSON: {}", String::from_utf8_lossy(&bytes));
        };
        (status, json)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        let Ok(request) = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
        else {
            panic!("valid request");
        };
        request
    }

    fn get(uri: &str) -> Request<Body> {
        let Ok(request) = Request::get(uri).body(Body::empty()) else {
            panic!("valid request");
        };
        request
    }

    #[tokio::test]
    async fn post_estimate_returns_dst_amount() {
        let body = serde_json::json!({
            "pool": POOL,
            "src": TOKEN0,
            "dst": TOKEN1,
            "srcAmount": "1000000000000000000",
        });
        let (status, json) = send(standard_app(), post_json("/api/v1/estimate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dstAmount"], "1813221787760298263");
    }

    #[tokio::test]
    async fn get_estimate_accepts_query_string() {
        let uri = format!(
            "/api/v1/estimate?pool={POOL}&src={TOKEN1}&dst={TOKEN0}&src_amount=2000000000000000000"
        );
        let (status, json) = send(standard_app(), get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dstAmount"], "906610893880149131");
    }

    #[tokio::test]
    async fn get_estimate_accepts_camel_case_amount() {
        let uri = format!(
            "/api/v1/estimate?pool={POOL}&src={TOKEN0}&dst={TOKEN1}&srcAmount=1000000000000000000"
        );
        let (status, json) = send(standard_app(), get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dstAmount"], "1813221787760298263");
    }

    #[tokio::test]
    async fn invalid_amount_is_bad_request() {
        let body = serde_json::json!({
            "pool": POOL,
            "src": TOKEN0,
            "dst": TOKEN1,
            "srcAmount": "-5",
        });
        let (status, json) = send(standard_app(), post_json("/api/v1/estimate", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Estimation failed");
        assert_eq!(json["code"], 400);
        assert!(json["description"].as_str().is_some_and(|d| d.contains("invalid amount")));
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let body = serde_json::json!({ "pool": POOL, "src": TOKEN0 });
        let (status, json) = send(standard_app(), post_json("/api/v1/estimate", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid request");
    }

    #[tokio::test]
    async fn zero_reserve_is_unprocessable() {
        let app = app(MockChainClient::new(0, 20_000_000_000_000_000_000));
        let body = serde_json::json!({
            "pool": POOL,
            "src": TOKEN0,
            "dst": TOKEN1,
            "srcAmount": "1000",
        });
        let (status, json) = send(app, post_json("/api/v1/estimate", &body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["code"], 422);
    }

    #[tokio::test]
    async fn node_failure_is_bad_gateway() {
        let app = app(MockChainClient::new(1, 1).failing());
        let body = serde_json::json!({
            "pool": POOL,
            "src": TOKEN0,
            "dst": TOKEN1,
            "srcAmount": "1000",
        });
        let (status, json) = send(app, post_json("/api/v1/estimate", &body)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(json["description"].as_str().is_some_and(|d| d.contains("connection refused")));
    }

    #[tokio::test]
    async fn slow_request_times_out_with_error_body() {
        let slow = MockChainClient::new(1, 1).with_delay(Duration::from_millis(500));
        let app = app(slow).layer(axum::middleware::from_fn_with_state(
            Duration::from_millis(20),
            request_timeout,
        ));
        let body = serde_json::json!({
            "pool": POOL,
            "src": TOKEN0,
            "dst": TOKEN1,
            "srcAmount": "1000",
        });
        let (status, json) = send(app, post_json("/api/v1/estimate", &body)).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json["error"], "Request timed out");
        assert_eq!(json["code"], 504);
        assert!(json["description"].is_string());
    }

    #[tokio::test]
    async fn fast_request_passes_timeout_middleware() {
        let app = standard_app().layer(axum::middleware::from_fn_with_state(
            Duration::from_secs(5),
            request_timeout,
        ));
        let (status, json) = send(app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn token_endpoint_returns_metadata() {
        let (status, json) = send(standard_app(), get(&format!("/api/v1/tokens/{TOKEN0}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["symbol"], "TKN");
        assert_eq!(json["decimals"], 18);

        let (status, _) = send(standard_app(), get("/api/v1/tokens/not-an-address")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, json) = send(standard_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[test]
    fn openapi_lists_every_path() {
        let doc = ApiDoc::openapi();
        for path in ["/api/v1/estimate", "/api/v1/tokens/{address}", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
