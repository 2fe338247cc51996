//! Constant-product (`x · y = k`) output formula with a 0.3% input fee.
//!
//! Matches the Uniswap-V2 `getAmountOut` library function bit for bit:
//!
//! ```text
//! amount_in_with_fee = amount_in * 997
//! amount_out = amount_in_with_fee * reserve_out
//!            / (reserve_in * 1000 + amount_in_with_fee)
//! ```

use num_traits::Zero;

use crate::domain::Amount;
use crate::error::EstimateError;

/// Share of the input that reaches the pool after the fee.
pub const FEE_NUMERATOR: u32 = 997;

/// Denominator of [`FEE_NUMERATOR`].
pub const FEE_DENOMINATOR: u32 = 1000;

/// Computes the output of swapping `amount_in` against the given reserves.
///
/// All arithmetic is exact; the final division truncates, so the result
/// never exceeds what the pool invariant allows.
///
/// # Errors
///
/// - [`EstimateError::InvalidReserve`] if either reserve is zero.
/// - [`EstimateError::InvalidInput`] if `amount_in` is zero.
/// - [`EstimateError::DivisionByZero`] if the denominator is zero.
/// - [`EstimateError::NonPositiveOutput`] if the output truncates to zero.
pub fn amount_out(
    amount_in: &Amount,
    reserve_in: &Amount,
    reserve_out: &Amount,
) -> Result<Amount, EstimateError> {
    if reserve_in.is_zero() {
        return Err(EstimateError::InvalidReserve("reserve in"));
    }
    if reserve_out.is_zero() {
        return Err(EstimateError::InvalidReserve("reserve out"));
    }
    if amount_in.is_zero() {
        return Err(EstimateError::InvalidInput);
    }

    let amount_in_with_fee = amount_in.as_biguint() * FEE_NUMERATOR;
    let numerator = &amount_in_with_fee * reserve_out.as_biguint();
    let denominator = reserve_in.as_biguint() * FEE_DENOMINATOR + &amount_in_with_fee;

    if denominator.is_zero() {
        return Err(EstimateError::DivisionByZero);
    }

    let output = numerator / denominator;
    if output.is_zero() {
        return Err(EstimateError::NonPositiveOutput);
    }

    Ok(Amount::new(output))
}
