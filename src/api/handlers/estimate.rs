//! Swap estimate endpoint handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{EstimateRequest, EstimateResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /estimate` — Estimate swap output from query parameters.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed input, unknown tokens, chain
/// failures, or degenerate reserves.
#[utoipa::path(
    get,
    path = "/api/v1/estimate",
    tag = "Estimate",
    summary = "Estimate swap output",
    description = "Reads the pool's current reserves and returns the output of swapping `srcAmount` of `src` for `dst` under the 0.3% constant-product formula.",
    params(EstimateRequest),
    responses(
        (status = 200, description = "Estimate computed", body = EstimateResponse),
        (status = 400, description = "Invalid amount, address, or token pair", body = ErrorResponse),
        (status = 422, description = "Reserves cannot price this swap", body = ErrorResponse),
        (status = 502, description = "Node call failed", body = ErrorResponse),
        (status = 504, description = "Node call timed out", body = ErrorResponse),
    )
)]
pub async fn estimate_query(
    State(state): State<AppState>,
    query: Result<Query<EstimateRequest>, QueryRejection>,
) -> Result<Json<EstimateResponse>, GatewayError> {
    let Query(req) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    run_estimate(&state, &req).await
}

/// `POST /estimate` — Estimate swap output from a JSON body.
///
/// # Errors
///
/// Returns [`GatewayError`] on malformed input, unknown tokens, chain
/// failures, or degenerate reserves.
#[utoipa::path(
    post,
    path = "/api/v1/estimate",
    tag = "Estimate",
    summary = "Estimate swap output",
    description = "Same as `GET /estimate`, with the request carried as a JSON body.",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Estimate computed", body = EstimateResponse),
        (status = 400, description = "Invalid amount, address, or token pair", body = ErrorResponse),
        (status = 422, description = "Reserves cannot price this swap", body = ErrorResponse),
        (status = 502, description = "Node call failed", body = ErrorResponse),
        (status = 504, description = "Node call timed out", body = ErrorResponse),
    )
)]
pub async fn estimate_json(
    State(state): State<AppState>,
    body: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>, GatewayError> {
    let Json(req) = body.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    run_estimate(&state, &req).await
}

/// Estimate routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/estimate", get(estimate_query).post(estimate_json))
}

async fn run_estimate(
    state: &AppState,
    req: &EstimateRequest,
) -> Result<Json<EstimateResponse>, GatewayError> {
    let estimate = state
        .estimate_service
        .estimate(&req.pool, &req.src, &req.dst, &req.src_amount)
        .await?;

    Ok(Json(EstimateResponse {
        dst_amount: estimate.amount_out.to_string(),
    }))
}
