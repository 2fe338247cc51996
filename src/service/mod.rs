//! Service layer: estimation logic.
//!
//! [`EstimateService`] reads pool reserves through a
//! [`crate::chain::ChainClient`], picks the swap direction, and prices
//! the swap with the [`constant_product`] formula.

pub mod constant_product;
pub mod direction;
pub mod estimate_service;

pub use direction::SwapDirection;
pub use estimate_service::{Estimate, EstimateService};
