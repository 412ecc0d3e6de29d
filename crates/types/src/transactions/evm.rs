//! EVM transaction shapes

use std::collections::HashMap;

use alloy_primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};

use super::TransactionSummary;
use crate::models::Chain;

/// Gas pricing of an EVM transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GasPricing {
	Legacy {
		gas_price: U256,
	},
	/// EIP-1559
	#[serde(rename_all = "camelCase")]
	FeeMarket {
		max_fee_per_gas: U256,
		max_priority_fee_per_gas: U256,
	},
}

impl GasPricing {
	/// Fee-market pricing when both EIP-1559 fields are known, legacy otherwise
	pub fn from_parts(
		gas_price: Option<U256>,
		max_fee_per_gas: Option<U256>,
		max_priority_fee_per_gas: Option<U256>,
	) -> Self {
		match (max_fee_per_gas, max_priority_fee_per_gas) {
			(Some(max_fee_per_gas), Some(max_priority_fee_per_gas)) => GasPricing::FeeMarket {
				max_fee_per_gas,
				max_priority_fee_per_gas,
			},
			_ => GasPricing::Legacy {
				gas_price: gas_price.unwrap_or(U256::ZERO),
			},
		}
	}
}

/// A signable EVM call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransaction {
	pub chain: Chain,
	pub chain_id: u64,
	pub from: String,
	/// Contract or account being called
	pub to: String,
	pub data: Bytes,
	/// Native value attached, in wei
	pub value: U256,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_limit: Option<u64>,
	pub pricing: GasPricing,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nonce: Option<u64>,
	pub summary: TransactionSummary,
	#[serde(default)]
	pub metadata: HashMap<String, serde_json::Value>,
}

impl EvmTransaction {
	/// Wrap the output of a single-family EVM builder
	pub fn from_request(chain: Chain, request: EvmTransactionRequest, summary: TransactionSummary) -> Self {
		let pricing = GasPricing::from_parts(
			request.gas_price,
			request.max_fee_per_gas,
			request.max_priority_fee_per_gas,
		);

		Self {
			chain,
			chain_id: request.chain_id,
			from: request.from,
			to: request.to,
			data: request.data,
			value: request.value,
			gas_limit: request.gas_limit,
			pricing,
			nonce: request.nonce,
			summary,
			metadata: HashMap::new(),
		}
	}

	pub fn is_fee_market(&self) -> bool {
		matches!(self.pricing, GasPricing::FeeMarket { .. })
	}
}

/// Flat EVM transaction as produced by legacy builders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransactionRequest {
	pub from: String,
	pub to: String,
	pub data: Bytes,
	pub value: U256,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_limit: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_price: Option<U256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_fee_per_gas: Option<U256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_priority_fee_per_gas: Option<U256>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub nonce: Option<u64>,
	pub chain_id: u64,
}
