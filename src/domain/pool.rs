//! Pool snapshot and token metadata read from the chain.

use alloy_primitives::Address;

use super::Amount;

/// Ordered `(token0, token1)` pair held by a pool contract.
///
/// The order is the pool's own and determines which reserve belongs to
/// which token. It never changes for a deployed pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    /// The pool's `token0()`.
    pub token0: Address,
    /// The pool's `token1()`.
    pub token1: Address,
}

impl TokenPair {
    /// Creates a pair in pool order.
    #[must_use]
    pub const fn new(token0: Address, token1: Address) -> Self {
        Self { token0, token1 }
    }
}

/// Snapshot of a constant-product pool at a given block.
///
/// Created per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolReserves {
    /// Reserve of `pair.token0`.
    pub reserve0: Amount,
    /// Reserve of `pair.token1`.
    pub reserve1: Amount,
    /// Token ordering of the pool.
    pub pair: TokenPair,
    /// Chain height at which the reserves were read.
    pub block_number: u64,
}

/// ERC-20 presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// Token contract address.
    pub address: Address,
    /// Ticker symbol reported by the token.
    pub symbol: String,
    /// Number of decimals reported by the token.
    pub decimals: u8,
}
