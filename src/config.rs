//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// JSON-RPC endpoint of the Ethereum node.
    pub rpc_url: String,

    /// Deadline for the chain reads made on behalf of one request.
    pub rpc_timeout: Duration,

    /// Deadline for a whole HTTP request.
    pub request_timeout: Duration,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let listen_addr: SocketAddr = listen_addr
            .parse()
            .with_context(|| format!("invalid LISTEN_ADDR {listen_addr:?}"))?;

        let rpc_url =
            std::env::var("ETH_RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:8545".to_string());

        let rpc_timeout = Duration::from_secs(parse_env("ETH_RPC_TIMEOUT_SECS", 10));
        let request_timeout = Duration::from_secs(parse_env("HTTP_REQUEST_TIMEOUT_SECS", 30));
        let log_json = parse_env_bool("LOG_JSON", false);

        Ok(Self {
            listen_addr,
            rpc_url,
            rpc_timeout,
            request_timeout,
            log_json,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("true" | "1") => true,
        Some("false" | "0") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_use_defaults() {
        assert_eq!(parse_env("SWAP_ESTIMATOR_TEST_UNSET_NUMBER", 42u64), 42);
        assert!(parse_env_bool("SWAP_ESTIMATOR_TEST_UNSET_FLAG", true));
        assert!(!parse_env_bool("SWAP_ESTIMATOR_TEST_UNSET_FLAG", false));
    }
}
