//! Error types with HTTP status code mapping.
//!
//! [`EstimateError`] is the transport-agnostic failure of a single
//! estimation. [`GatewayError`] is the HTTP boundary type: each variant
//! maps to a status code and a structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::chain::ChainError;

/// Failure of one estimation request. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    /// The source amount is empty, not a base-10 integer, or not positive.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A reserve is zero.
    #[error("invalid reserve: {0} must be positive")]
    InvalidReserve(&'static str),

    /// The swap input is zero.
    #[error("invalid input: amount must be positive")]
    InvalidInput,

    /// The formula denominator evaluated to zero.
    #[error("division by zero in output calculation")]
    DivisionByZero,

    /// The input is too small to buy a single unit of the output token.
    #[error("calculated output amount is not positive")]
    NonPositiveOutput,

    /// `src`/`dst` do not name the pool's two tokens in either order.
    #[error("invalid token pair: {0}")]
    InvalidTokenPair(String),

    /// Reading the pool from the chain failed.
    #[error("failed to fetch pool reserves: {0}")]
    ReserveFetchFailed(#[from] ChainError),
}

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": "Estimation failed",
///   "code": 400,
///   "description": "invalid amount: amount must be positive"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short failure category.
    pub error: String,
    /// HTTP status code, repeated in the body.
    pub code: u16,
    /// Human-readable cause.
    pub description: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Status Mapping
///
/// | Failure                                        | HTTP Status |
/// |------------------------------------------------|-------------|
/// | Malformed request, amount, address, token pair | 400         |
/// | Reserve/input/output math guards               | 422         |
/// | Node transport or ABI decode failure           | 502         |
/// | Node or whole-request deadline expired         | 504         |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request body or query string could not be deserialized.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Estimation failed.
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// Token metadata lookup failed.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// The request did not complete within the server deadline.
    #[error("request did not complete within {0:?}")]
    RequestTimeout(std::time::Duration),
}

impl GatewayError {
    /// Returns the short category placed in the `error` field.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "Invalid request",
            Self::Estimate(_) => "Estimation failed",
            Self::Chain(_) => "Token lookup failed",
            Self::RequestTimeout(_) => "Request timed out",
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Estimate(err) => match err {
                EstimateError::InvalidAmount(_) | EstimateError::InvalidTokenPair(_) => {
                    StatusCode::BAD_REQUEST
                }
                EstimateError::InvalidReserve(_)
                | EstimateError::InvalidInput
                | EstimateError::DivisionByZero
                | EstimateError::NonPositiveOutput => StatusCode::UNPROCESSABLE_ENTITY,
                EstimateError::ReserveFetchFailed(chain) => chain_status(chain),
            },
            Self::Chain(chain) => chain_status(chain),
            Self::RequestTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

const fn chain_status(err: &ChainError) -> StatusCode {
    match err {
        ChainError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
        ChainError::Rpc(_) | ChainError::Decode(_) => StatusCode::BAD_GATEWAY,
        ChainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, %status, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        let body = ErrorResponse {
            error: self.title().to_string(),
            code: status.as_u16(),
            description: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}
