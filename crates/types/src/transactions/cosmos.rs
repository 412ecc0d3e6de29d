//! Cosmos SDK transaction shape

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::TransactionSummary;
use crate::models::Chain;

/// A protobuf `Any` message rendered as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmosMessage {
	pub type_url: String,
	pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
	pub denom: String,
	/// Integer amount in the denom's base unit
	pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmosFee {
	pub amount: Vec<Coin>,
	pub gas_limit: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub granter: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmosTransaction {
	pub chain: Chain,
	pub messages: Vec<CosmosMessage>,
	pub fee: CosmosFee,
	#[serde(default)]
	pub memo: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub account_number: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sequence: Option<u64>,
	pub summary: TransactionSummary,
	#[serde(default)]
	pub metadata: HashMap<String, serde_json::Value>,
}
