//! # swap-estimator
//!
//! REST gateway that estimates the output of a two-token swap against a
//! Uniswap-V2 style constant-product pool, using the pool's live
//! on-chain reserves.
//!
//! All amounts are arbitrary-precision integers; the pricing formula
//! reproduces the on-chain `getAmountOut` result exactly.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EstimateService (service/)
//!     │     ├── parse_amount → TokenPairCache → SwapDirection
//!     │     └── constant_product::amount_out
//!     │
//!     └── ChainClient (chain/) ── JSON-RPC ── Ethereum node
//! ```

pub mod api;
pub mod app_state;
pub mod chain;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
