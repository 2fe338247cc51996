//! JSON-RPC [`ChainClient`] backed by an `alloy` HTTP provider.

use std::fmt;

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types_eth::TransactionRequest;
use alloy_sol_types::SolCall;
use async_trait::async_trait;

use super::abi::{IERC20Metadata, IUniswapV2Pair};
use super::{ChainClient, ChainError};
use crate::domain::{Amount, PoolReserves, TokenInfo, TokenPair};

/// Reads pool and token state with `eth_call` against a single node.
///
/// Independent calls are issued concurrently. No retries are performed.
#[derive(Clone)]
pub struct RpcChainClient {
    provider: DynProvider,
    rpc_url: String,
}

impl RpcChainClient {
    /// Builds a client for the node at `rpc_url`.
    ///
    /// The HTTP transport connects lazily, so an unreachable node is only
    /// reported on the first call.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Rpc`] if `rpc_url` is not a valid URL.
    pub fn connect(rpc_url: &str) -> Result<Self, ChainError> {
        let url = rpc_url
            .parse()
            .map_err(|e| ChainError::Rpc(format!("invalid rpc url {rpc_url:?}: {e}")))?;
        let provider = ProviderBuilder::new().connect_http(url).erased();
        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
        })
    }

    /// Returns the node URL this client talks to.
    #[must_use]
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Executes a read-only contract call and decodes its return value.
    async fn call<C: SolCall + Send>(&self, to: Address, call: C) -> Result<C::Return, ChainError> {
        let tx = TransactionRequest::default()
            .with_to(to)
            .with_input(call.abi_encode());

        let data = self
            .provider
            .call(tx)
            .await
            .map_err(|e| ChainError::Rpc(format!("{} on {to}: {e}", C::SIGNATURE)))?;

        C::abi_decode_returns(&data)
            .map_err(|e| ChainError::Decode(format!("{} on {to}: {e}", C::SIGNATURE)))
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ChainError::Rpc(format!("eth_blockNumber: {e}")))
    }
}

impl fmt::Debug for RpcChainClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcChainClient")
            .field("rpc_url", &self.rpc_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn token_pair(&self, pool: Address) -> Result<TokenPair, ChainError> {
        let (token0, token1) = tokio::try_join!(
            self.call(pool, IUniswapV2Pair::token0Call {}),
            self.call(pool, IUniswapV2Pair::token1Call {}),
        )?;
        tracing::info!(%pool, %token0, %token1, "discovered pool tokens");
        Ok(TokenPair::new(token0, token1))
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

        let (reserves, block_number) = tokio::try_join!(
            self.call(pool, IUniswapV2Pair::getReservesCall {}),
            self.block_number(),
        )?;

        Ok(PoolReserves {
            reserve0: Amount::from_be_bytes(&reserves.reserve0.to_be_bytes_vec()),
            reserve1: Amount::from_be_bytes(&reserves.reserve1.to_be_bytes_vec()),
            pair,
            block_number,
        })
    }

    async fn token_info(&self, token: Address) -> Result<TokenInfo, ChainError> {
        let (symbol, decimals) = tokio::try_join!(
            self.call(token, IERC20Metadata::symbolCall {}),
            self.call(token, IERC20Metadata::decimalsCall {}),
        )?;
        Ok(TokenInfo {
            address: token,
            symbol,
            decimals: decimals_from_word(decimals)?,
        })
    }
}

/// Narrows a `decimals()` return word to `u8`.
fn decimals_from_word(value: U256) -> Result<u8, ChainError> {
    u8::try_from(value)
        .map_err(|_| ChainError::Decode(format!("decimals() out of range: {value}")))
}
