//! In-memory [`ChainClient`] for service and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alloy_primitives::{Address, address};
use async_trait::async_trait;

use super::{ChainClient, ChainError};
use crate::domain::{Amount, PoolReserves, TokenInfo, TokenPair};

pub(crate) const POOL: Address = address!("0x1234567890123456789012345678901234567890");
pub(crate) const TOKEN0: Address = address!("0x1111111111111111111111111111111111111111");
pub(crate) const TOKEN1: Address = address!("0x2222222222222222222222222222222222222222");
pub(crate) const BLOCK_NUMBER: u64 = 12_345;

#[derive(Debug)]
pub(crate) struct MockChainClient {
    reserve0: Amount,
    reserve1: Amount,
    failing: bool,
    delay: Option<Duration>,
    pub(crate) token_pair_calls: AtomicUsize,
    pub(crate) reserve_calls: AtomicUsize,
    pub(crate) token_info_calls: AtomicUsize,
}

impl MockChainClient {
    pub(crate) fn new(reserve0: u128, reserve1: u128) -> Self {
        Self {
            reserve0: Amount::from(reserve0),
            reserve1: Amount::from(reserve1),
            failing: false,
            delay: None,
            token_pair_calls: AtomicUsize::new(0),
            reserve_calls: AtomicUsize::new(0),
            token_info_calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with [`ChainError::Rpc`].
    pub(crate) fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Every call sleeps before answering.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn respond(&self) -> Result<(), ChainError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(ChainError::Rpc("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn token_pair(&self, _pool: Address) -> Result<TokenPair, ChainError> {
        self.token_pair_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(TokenPair::new(TOKEN0, TOKEN1))
    }

    async fn pool_reserves(
        &self,
        pool: Address,
        cached_pair: Option<TokenPair>,
    ) -> Result<PoolReserves, ChainError> {
        let pair = match cached_pair {
            Some(pair) => pair,
            None => self.token_pair(pool).await?,
        };
        self.reserve_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(PoolReserves {
            reserve0: self.reserve0.clone(),
            reserve1: self.reserve1.clone(),
            pair,
            block_number: BLOCK_NUMBER,
        })
    }

    async fn token_info(&self, token: Address) -> Result<TokenInfo, ChainError> {
        self.token_info_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(TokenInfo {
            address: token,
            symbol: "TKN".to_string(),
            decimals: 18,
        })
    }
}
