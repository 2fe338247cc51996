//! Maps a caller's `src → dst` request onto the pool's token ordering.

use crate::chain::parse_address;
use crate::domain::{Amount, PoolReserves, TokenPair};
use crate::error::EstimateError;

/// Which way a swap crosses the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapDirection {
    /// `token0` in, `token1` out.
    ZeroForOne,
    /// `token1` in, `token0` out.
    OneForZero,
}

impl SwapDirection {
    /// Resolves the direction of `src → dst` for `pair`.
    ///
    /// Addresses are compared as bytes, so checksum casing is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidTokenPair`] if either address is
    /// malformed, `src == dst`, or the two do not match the pool's tokens.
    pub fn resolve(pair: &TokenPair, src: &str, dst: &str) -> Result<Self, EstimateError> {
        let src_addr = parse_address(src)
            .map_err(|_| EstimateError::InvalidTokenPair(format!("malformed src address {src:?}")))?;
        let dst_addr = parse_address(dst)
            .map_err(|_| EstimateError::InvalidTokenPair(format!("malformed dst address {dst:?}")))?;

        if src_addr == dst_addr {
            return Err(EstimateError::InvalidTokenPair(format!(
                "src and dst are the same token {src_addr}"
            )));
        }

        if src_addr == pair.token0 && dst_addr == pair.token1 {
            Ok(Self::ZeroForOne)
        } else if src_addr == pair.token1 && dst_addr == pair.token0 {
            Ok(Self::OneForZero)
        } else {
            Err(EstimateError::InvalidTokenPair(format!(
                "{src_addr} -> {dst_addr} does not match pool tokens {} / {}",
                pair.token0, pair.token1
            )))
        }
    }

    /// Returns `(reserve_in, reserve_out)` for this direction.
    #[must_use]
    pub const fn select<'a>(self, reserves: &'a PoolReserves) -> (&'a Amount, &'a Amount) {
        match self {
            Self::ZeroForOne => (&reserves.reserve0, &reserves.reserve1),
            Self::OneForZero => (&reserves.reserve1, &reserves.reserve0),
        }
    }
}
