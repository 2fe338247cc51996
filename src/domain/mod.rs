//! Domain layer: amounts, pool snapshots, and address-keyed caches.
//!
//! This module holds the value types that flow through an estimation
//! (arbitrary-precision [`Amount`]s and [`PoolReserves`] snapshots) and
//! the shared [`AddressCache`] used to memoize token-pair discovery.

pub mod address_cache;
pub mod amount;
pub mod pool;

pub use address_cache::{AddressCache, TokenInfoCache, TokenPairCache};
pub use amount::{Amount, parse_amount};
pub use pool::{PoolReserves, TokenInfo, TokenPair};
