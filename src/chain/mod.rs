//! Chain collaborator: reads pool and token state from an Ethereum node.
//!
//! The estimation core only talks to the chain through the
//! [`ChainClient`] trait. [`RpcChainClient`] is the JSON-RPC
//! implementation used by the server binary.

#[allow(missing_docs)]
mod abi;
#[cfg(test)]
pub(crate) mod mock;
pub mod rpc;

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::{PoolReserves, TokenInfo, TokenPair};

pub use rpc::RpcChainClient;

/// Failures reported by a [`ChainClient`].
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// The given pool or token address is not a 20-byte hex address.
    #[error("invalid address: {0:?}")]
    InvalidAddress(String),

    /// Transport or node failure.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The node answered with data that does not match the contract ABI.
    #[error("decode error: {0}")]
    Decode(String),

    /// The caller's deadline expired before the node answered.
    #[error("chain request timed out after {0:?}")]
    Timeout(Duration),
}

/// Read-only access to constant-product pool contracts and ERC-20 tokens.
#[async_trait]
pub trait ChainClient: Send + Sync + std::fmt::Debug {
    /// Discovers the pool's `(token0, token1)` ordering.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Rpc`] or [`ChainError::Decode`] on failure.
    async fn token_pair(&self, pool: Address) -> Result<TokenPair, ChainError>;

    /// Reads the pool's current reserves and the chain height.
    ///
    /// The token pair is discovered only when `cached_pair` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Rpc`] or [`ChainError::Decode`] on failure.
    async fn pool_reserves(
        &self,
        pool: Address,
        cached_pair: Option<TokenPair>,
    ) -> Result<PoolReserves, ChainError>;

    /// Reads ERC-20 `symbol()` and `decimals()`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Rpc`] or [`ChainError::Decode`] on failure.
    async fn token_info(&self, token: Address) -> Result<TokenInfo, ChainError>;
}

/// Parses a hex address in any letter case, with or without `0x`.
///
/// Checksum casing is accepted but not enforced.
///
/// # Errors
///
/// Returns [`ChainError::InvalidAddress`] if `text` is not a 20-byte
/// hex string.
pub fn parse_address(text: &str) -> Result<Address, ChainError> {
    Address::from_str(text).map_err(|_| ChainError::InvalidAddress(text.to_string()))
}
