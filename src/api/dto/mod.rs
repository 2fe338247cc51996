//! Data Transfer Objects for REST request/response serialization.
//!
//! All numeric amounts are serialized as JSON strings to prevent
//! precision loss on 256-bit values.

pub mod estimate_dto;
pub mod token_dto;

pub use estimate_dto::*;
pub use token_dto::*;
