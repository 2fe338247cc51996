//! Append-only cache keyed by contract address.
//!
//! [`AddressCache`] stores values in a `HashMap` behind a
//! [`tokio::sync::RwLock`]. The lock is held only for the lookup or the
//! single insert, never while a value is being fetched from the chain,
//! so a slow discovery for one pool does not stall reads of others.

use std::collections::HashMap;
use std::future::Future;

use alloy_primitives::Address;
use tokio::sync::RwLock;

use super::{TokenInfo, TokenPair};

/// Token pairs discovered per pool address.
pub type TokenPairCache = AddressCache<TokenPair>;

/// Token metadata discovered per token address.
pub type TokenInfoCache = AddressCache<TokenInfo>;

/// Process-lifetime memo table keyed by [`Address`].
///
/// # Concurrency
///
/// - Any number of readers proceed concurrently.
/// - Inserts are serialized against each other and against readers.
/// - Concurrent misses on the same key may each fetch; the last insert
///   wins. Entries are never evicted.
#[derive(Debug)]
pub struct AddressCache<V> {
    entries: RwLock<HashMap<Address, V>>,
}

impl<V: Clone> AddressCache<V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a clone of the cached value, if any.
    pub async fn get(&self, key: &Address) -> Option<V> {
        self.entries.read().await.get(key).cloned()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn insert(&self, key: Address, value: V) {
        self.entries.write().await.insert(key, value);
    }

    /// Returns the cached value for `key`, or runs `fetch` and caches its
    /// successful result.
    ///
    /// Failures are returned unchanged and leave the cache untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever error `fetch` produces on a miss.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: Address, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key).await {
            tracing::debug!(%key, "address cache hit");
            return Ok(value);
        }

        let value = fetch().await?;
        self.insert(key, value.clone()).await;
        tracing::debug!(%key, "address cache filled");
        Ok(value)
    }

    /// Returns the number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone> Default for AddressCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
