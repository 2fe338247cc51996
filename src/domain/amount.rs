//! Arbitrary-precision token amounts.
//!
//! [`Amount`] wraps a [`BigUint`] so that reserves and swap amounts can
//! carry full 256-bit (and larger) on-chain values without overflow.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::EstimateError;

/// Non-negative integer quantity in a token's smallest unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigUint);

impl Amount {
    /// Wraps an existing [`BigUint`].
    #[must_use]
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Builds an amount from big-endian bytes, as returned by ABI decoding.
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the inner [`BigUint`].
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BigUint> for Amount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

/// Parses a decimal string into a strictly positive [`Amount`].
///
/// Surrounding whitespace is ignored. The body must be an optional sign
/// followed by ASCII digits only.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidAmount`] if the text is empty, is not
/// a base-10 integer, or is not greater than zero.
pub fn parse_amount(text: &str) -> Result<Amount, EstimateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EstimateError::InvalidAmount(
            "amount cannot be empty".to_string(),
        ));
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EstimateError::InvalidAmount(format!(
            "invalid amount format: {trimmed}"
        )));
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| {
        EstimateError::InvalidAmount(format!("invalid amount format: {trimmed}"))
    })?;

    if negative || value.is_zero() {
        return Err(EstimateError::InvalidAmount(
            "amount must be positive".to_string(),
        ));
    }

    Ok(Amount(value))
}
