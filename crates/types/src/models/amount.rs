//! Conversions between human-readable decimal amounts and on-chain integer units

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};

use crate::errors::{SwapError, SwapResult};

/// Scale a decimal amount by `10^decimals`, truncating any remaining fraction
///
/// `1.5` at 6 decimals becomes `1500000`; `0.0000001` at 6 decimals becomes `0`.
pub fn to_smallest_unit(amount: &BigDecimal, decimals: u8) -> BigInt {
	let (digits, scale) = amount.as_bigint_and_exponent();
	let (integer, _) = BigDecimal::new(digits, scale - i64::from(decimals))
		.with_scale(0)
		.into_bigint_and_exponent();
	integer
}

/// Inverse of [`to_smallest_unit`], normalised so `1500000` at 6 decimals reads `1.5`
pub fn from_smallest_unit(value: &BigInt, decimals: u8) -> BigDecimal {
	BigDecimal::new(value.clone(), i64::from(decimals)).normalized()
}

/// Convert an arbitrary-precision integer into a 256-bit on-chain amount
pub fn bigint_to_u256(value: &BigInt) -> SwapResult<U256> {
	let (sign, bytes) = value.to_bytes_be();
	if sign == Sign::Minus {
		return Err(SwapError::InvalidAmount {
			reason: format!("{} is negative", value),
		});
	}

	U256::try_from_be_slice(&bytes).ok_or_else(|| SwapError::InvalidAmount {
		reason: format!("{} does not fit in 256 bits", value),
	})
}

pub fn u256_to_bigint(value: U256) -> BigInt {
	BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes_vec())
}

/// Scale a decimal amount straight into a 256-bit on-chain amount
pub fn to_smallest_unit_u256(amount: &BigDecimal, decimals: u8) -> SwapResult<U256> {
	bigint_to_u256(&to_smallest_unit(amount, decimals))
}
