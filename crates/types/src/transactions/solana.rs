//! Solana transaction shape

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::TransactionSummary;
use crate::errors::{SwapError, SwapResult};
use crate::models::Chain;

/// A pre-built, serialized Solana transaction awaiting signatures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolanaTransaction {
	pub chain: Chain,
	/// Base64-encoded wire transaction
	pub serialized_transaction: String,
	/// Public keys that must sign
	pub signers: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub recent_blockhash: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub compute_unit_limit: Option<u32>,
	pub summary: TransactionSummary,
	#[serde(default)]
	pub metadata: HashMap<String, serde_json::Value>,
}

impl SolanaTransaction {
	/// Raw wire bytes of the transaction
	pub fn decode(&self) -> SwapResult<Vec<u8>> {
		STANDARD
			.decode(self.serialized_transaction.as_bytes())
			.map_err(|e| SwapError::TransactionBuild {
				provider: self.summary.protocol.clone(),
				reason: format!("invalid base64 transaction: {}", e),
			})
	}
}
