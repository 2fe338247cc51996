//! Token metadata DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::TokenInfo;

/// Response body for `GET /tokens/:address`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenInfoResponse {
    /// Checksummed token address.
    pub address: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Number of decimal places.
    pub decimals: u8,
}

impl From<TokenInfo> for TokenInfoResponse {
    fn from(info: TokenInfo) -> Self {
        Self {
            address: info.address.to_string(),
            symbol: info.symbol,
            decimals: info.decimals,
        }
    }
}
