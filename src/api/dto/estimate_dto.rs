//! Estimate request and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request body for `POST /estimate`, or query string for `GET /estimate`.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EstimateRequest {
    /// Address of the constant-product pool.
    #[schema(example = "0x0d4a11d5eeaac28ec3f61d100daf4d40471f1852")]
    pub pool: String,
    /// Address of the token being sold.
    #[schema(example = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")]
    pub src: String,
    /// Address of the token being bought.
    #[schema(example = "0xdac17f958d2ee523a2206206994597c13d831ec7")]
    pub dst: String,
    /// Amount of `src` in its smallest unit (decimal string).
    #[serde(alias = "src_amount")]
    #[schema(example = "1000000000000000000")]
    pub src_amount: String,
}

/// Response body for `/estimate`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// Amount of `dst` received, in its smallest unit (decimal string).
    pub dst_amount: String,
}
