//! Token metadata endpoint handler.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::TokenInfoResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /tokens/:address` — ERC-20 symbol and decimals.
///
/// # Errors
///
/// Returns [`GatewayError`] on a malformed address or chain failure.
#[utoipa::path(
    get,
    path = "/api/v1/tokens/{address}",
    tag = "Tokens",
    summary = "Get token metadata",
    description = "Returns the token's symbol and decimals. Results are cached for the life of the process.",
    params(
        ("address" = String, Path, description = "Token contract address"),
    ),
    responses(
        (status = 200, description = "Token metadata", body = TokenInfoResponse),
        (status = 400, description = "Malformed address", body = ErrorResponse),
        (status = 502, description = "Node call failed", body = ErrorResponse),
        (status = 504, description = "Node call timed out", body = ErrorResponse),
    )
)]
pub async fn get_token(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<TokenInfoResponse>, GatewayError> {
    let info = state.estimate_service.token_info(&address).await?;
    Ok(Json(info.into()))
}

/// Token routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/tokens/{address}", get(get_token))
}
