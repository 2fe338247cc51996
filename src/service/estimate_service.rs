//! Estimate service: orchestrates parsing, reserve fetching, and pricing.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::Address;

use super::constant_product;
use super::direction::SwapDirection;
use crate::chain::{ChainClient, ChainError, parse_address};
use crate::domain::{
    Amount, PoolReserves, TokenInfo, TokenInfoCache, TokenPairCache, parse_amount,
};
use crate::error::EstimateError;

/// Result of a successful estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    /// Amount of `dst` received for the requested `src` amount.
    pub amount_out: Amount,
    /// Block at which the reserves were read.
    pub block_number: u64,
}

/// Orchestration layer for swap estimates.
///
/// Owns the [`ChainClient`] used to read pools and the caches that
/// short-circuit token discovery. Every estimate follows the pattern:
/// parse amount → fetch reserves (through the cache) → resolve direction
/// → apply the constant-product formula. The first failure is returned.
#[derive(Debug, Clone)]
pub struct EstimateService {
    client: Arc<dyn ChainClient>,
    token_pairs: Arc<TokenPairCache>,
    token_infos: Arc<TokenInfoCache>,
    fetch_timeout: Duration,
}

impl EstimateService {
    /// Creates a new `EstimateService`.
    ///
    /// `fetch_timeout` bounds every chain read made on behalf of a request.
    #[must_use]
    pub fn new(client: Arc<dyn ChainClient>, fetch_timeout: Duration) -> Self {
        Self {
            client,
            token_pairs: Arc::new(TokenPairCache::new()),
            token_infos: Arc::new(TokenInfoCache::new()),
            fetch_timeout,
        }
    }

    /// Returns a reference to the token-pair cache.
    #[must_use]
    pub fn token_pairs(&self) -> &TokenPairCache {
        &self.token_pairs
    }

    /// Returns the per-request chain deadline.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Estimates how much `dst` a swap of `src_amount` `src` yields in `pool`.
    ///
    /// # Errors
    ///
    /// - [`EstimateError::InvalidAmount`] if `src_amount` is not a positive integer.
    /// - [`EstimateError::ReserveFetchFailed`] if `pool` is malformed or the
    ///   chain read fails or times out.
    /// - [`EstimateError::InvalidTokenPair`] if `src`/`dst` are not the pool's tokens.
    /// - Any calculator error from [`constant_product::amount_out`].
    pub async fn estimate(
        &self,
        pool: &str,
        src: &str,
        dst: &str,
        src_amount: &str,
    ) -> Result<Estimate, EstimateError> {
        let amount_in = parse_amount(src_amount)?;
        let pool = parse_address(pool)?;

        let reserves = self.fetch_reserves(pool).await.inspect_err(|err| {
            tracing::warn!(%pool, error = %err, "reserve fetch failed");
        })?;

        let direction = SwapDirection::resolve(&reserves.pair, src, dst)?;
        let (reserve_in, reserve_out) = direction.select(&reserves);
        let amount_out = constant_product::amount_out(&amount_in, reserve_in, reserve_out)?;

        tracing::debug!(
            %pool,
            ?direction,
            block_number = reserves.block_number,
            %amount_in,
            %amount_out,
            "estimate computed"
        );

        Ok(Estimate {
            amount_out,
            block_number: reserves.block_number,
        })
    }

    /// Returns ERC-20 metadata for `token`, cached after the first read.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidAddress`] for a malformed address, or
    /// the chain failure (including [`ChainError::Timeout`]) otherwise.
    pub async fn token_info(&self, token: &str) -> Result<TokenInfo, ChainError> {
        let token = parse_address(token)?;
        self.token_infos
            .get_or_fetch(token, || self.with_deadline(self.client.token_info(token)))
            .await
    }

    /// Reads a pool snapshot, resolving its token pair through the cache.
    ///
    /// The cache is only written once a complete pair is known, so an
    /// expired deadline leaves it unchanged.
    async fn fetch_reserves(&self, pool: Address) -> Result<PoolReserves, ChainError> {
        self.with_deadline(async {
            let pair = self
                .token_pairs
                .get_or_fetch(pool, || self.client.token_pair(pool))
                .await?;
            self.client.pool_reserves(pool, Some(pair)).await
        })
        .await
    }

    async fn with_deadline<T, F>(&self, fut: F) -> Result<T, ChainError>
    where
        F: Future<Output = Result<T, ChainError>>,
    {
        tokio::time::timeout(self.fetch_timeout, fut)
            .await
            .map_err(|_| ChainError::Timeout(self.fetch_timeout))?
    }
}
