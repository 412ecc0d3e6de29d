//! UTXO (Bitcoin-family) transaction shape

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::TransactionSummary;
use crate::models::Chain;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoInput {
	pub txid: String,
	pub vout: u32,
	/// Satoshis
	pub value: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoOutput {
	pub address: String,
	/// Satoshis
	pub value: u64,
	#[serde(default)]
	pub is_change: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoTransaction {
	pub chain: Chain,
	pub inputs: Vec<UtxoInput>,
	pub outputs: Vec<UtxoOutput>,
	pub fee_rate_sat_per_vbyte: u64,
	pub summary: TransactionSummary,
	#[serde(default)]
	pub metadata: HashMap<String, serde_json::Value>,
}

impl UtxoTransaction {
	pub fn total_input(&self) -> u64 {
		self.inputs.iter().map(|input| input.value).sum()
	}

	pub fn total_output(&self) -> u64 {
		self.outputs.iter().map(|output| output.value).sum()
	}

	/// Implied miner fee; `None` when the outputs spend more than the inputs
	pub fn fee(&self) -> Option<u64> {
		self.total_input().checked_sub(self.total_output())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transactions::TransactionAction;
	use bigdecimal::BigDecimal;

	fn transaction(outputs: &[u64]) -> UtxoTransaction {
		UtxoTransaction {
			chain: Chain::Bitcoin,
			inputs: vec![
				UtxoInput {
					txid: "aa".repeat(32),
					vout: 0,
					value: 60_000,
					address: None,
				},
				UtxoInput {
					txid: "bb".repeat(32),
					vout: 1,
					value: 40_000,
					address: Some("bc1qsender".to_string()),
				},
			],
			outputs: outputs
				.iter()
				.enumerate()
				.map(|(i, value)| UtxoOutput {
					address: format!("bc1qout{}", i),
					value: *value,
					is_change: i > 0,
				})
				.collect(),
			fee_rate_sat_per_vbyte: 12,
			summary: TransactionSummary {
				action: TransactionAction::Bridge,
				from_symbol: "BTC".to_string(),
				to_symbol: "ETH".to_string(),
				input_amount: BigDecimal::from(1),
				expected_output: BigDecimal::from(15),
				destination_chain: Some(Chain::Ethereum),
				protocol: "thorchain".to_string(),
			},
			metadata: HashMap::new(),
		}
	}

	#[test]
	fn test_fee_is_input_minus_output() {
		let tx = transaction(&[70_000, 29_000]);
		assert_eq!(tx.total_input(), 100_000);
		assert_eq!(tx.total_output(), 99_000);
		assert_eq!(tx.fee(), Some(1_000));
	}

	#[test]
	fn test_overspending_outputs_have_no_fee() {
		let tx = transaction(&[100_000, 1]);
		assert_eq!(tx.fee(), None);
	}
}
