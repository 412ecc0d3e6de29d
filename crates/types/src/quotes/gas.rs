//! Gas and fee estimates attached to quotes

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::models::{from_smallest_unit, u256_to_bigint, Chain};

/// Estimated execution cost of a quote
///
/// A zero estimate (see [`GasEstimate::zero`]) is valid and means the quote
/// carries no gas semantics, e.g. an off-chain RFQ fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
	pub gas_limit: u64,
	/// Legacy gas price in the chain's smallest native unit
	pub gas_price: U256,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_fee_per_gas: Option<U256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_priority_fee_per_gas: Option<U256>,
	/// Cost in whole native units (e.g. ETH)
	pub estimated_cost_native: BigDecimal,
	/// Cost expressed in the quote's output token, used by gas-aware ranking
	pub estimated_cost_in_output_token: BigDecimal,
	pub native_symbol: String,
}

impl GasEstimate {
	pub fn zero(native_symbol: impl Into<String>) -> Self {
		Self {
			gas_limit: 0,
			gas_price: U256::ZERO,
			max_fee_per_gas: None,
			max_priority_fee_per_gas: None,
			estimated_cost_native: BigDecimal::zero(),
			estimated_cost_in_output_token: BigDecimal::zero(),
			native_symbol: native_symbol.into(),
		}
	}

	/// Legacy-priced estimate; native cost is `gas_limit × gas_price`
	pub fn legacy(chain: Chain, gas_limit: u64, gas_price: U256) -> Self {
		let cost = U256::from(gas_limit).saturating_mul(gas_price);
		Self {
			gas_limit,
			gas_price,
			max_fee_per_gas: None,
			max_priority_fee_per_gas: None,
			estimated_cost_native: from_smallest_unit(&u256_to_bigint(cost), chain.native_decimals()),
			estimated_cost_in_output_token: BigDecimal::zero(),
			native_symbol: chain.native_symbol().to_string(),
		}
	}

	/// EIP-1559 estimate; native cost is bounded by `gas_limit × max_fee_per_gas`
	pub fn fee_market(
		chain: Chain,
		gas_limit: u64,
		max_fee_per_gas: U256,
		max_priority_fee_per_gas: U256,
	) -> Self {
		let cost = U256::from(gas_limit).saturating_mul(max_fee_per_gas);
		Self {
			gas_limit,
			gas_price: max_fee_per_gas,
			max_fee_per_gas: Some(max_fee_per_gas),
			max_priority_fee_per_gas: Some(max_priority_fee_per_gas),
			estimated_cost_native: from_smallest_unit(&u256_to_bigint(cost), chain.native_decimals()),
			estimated_cost_in_output_token: BigDecimal::zero(),
			native_symbol: chain.native_symbol().to_string(),
		}
	}

	pub fn with_cost_in_output_token(mut self, cost: BigDecimal) -> Self {
		self.estimated_cost_in_output_token = cost;
		self
	}

	/// Both fee-market fields present means EIP-1559 pricing
	pub fn is_fee_market(&self) -> bool {
		self.max_fee_per_gas.is_some() && self.max_priority_fee_per_gas.is_some()
	}

	pub fn is_zero(&self) -> bool {
		self.gas_limit == 0
			&& self.gas_price.is_zero()
			&& self.estimated_cost_native.is_zero()
			&& self.estimated_cost_in_output_token.is_zero()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	#[test]
	fn test_zero_estimate_is_valid_sentinel() {
		let gas = GasEstimate::zero("ETH");
		assert!(gas.is_zero());
		assert!(!gas.is_fee_market());
	}

	#[test]
	fn test_legacy_cost() {
		// 21000 gas at 10 gwei = 0.00021 ETH
		let gas = GasEstimate::legacy(Chain::Ethereum, 21_000, U256::from(10_000_000_000u64));
		assert_eq!(
			gas.estimated_cost_native,
			BigDecimal::from_str("0.00021").unwrap()
		);
		assert_eq!(gas.native_symbol, "ETH");
		assert!(!gas.is_zero());
	}

	#[test]
	fn test_fee_market_detection() {
		let gas = GasEstimate::fee_market(
			Chain::Base,
			150_000,
			U256::from(2_000_000_000u64),
			U256::from(100_000_000u64),
		)
		.with_cost_in_output_token(BigDecimal::from_str("0.9").unwrap());
		assert!(gas.is_fee_market());
		assert_eq!(
			gas.estimated_cost_in_output_token,
			BigDecimal::from_str("0.9").unwrap()
		);
	}
}
