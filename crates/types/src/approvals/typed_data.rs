//! EIP-712 typed data carried by signature-based approvals

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub version: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub chain_id: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub verifying_contract: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataField {
	pub name: String,
	#[serde(rename = "type")]
	pub field_type: String,
}

impl TypedDataField {
	pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			field_type: field_type.into(),
		}
	}
}

/// Structured data to be signed by the trader's wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
	pub domain: TypedDataDomain,
	pub types: BTreeMap<String, Vec<TypedDataField>>,
	pub primary_type: String,
	pub message: serde_json::Value,
}

impl TypedData {
	/// EIP-2612 `Permit` for `token_name` at `verifying_contract`
	pub fn erc2612_permit(
		token_name: impl Into<String>,
		chain_id: u64,
		verifying_contract: impl Into<String>,
		message: serde_json::Value,
	) -> Self {
		let mut types = BTreeMap::new();
		types.insert(
			"Permit".to_string(),
			vec![
				TypedDataField::new("owner", "address"),
				TypedDataField::new("spender", "address"),
				TypedDataField::new("value", "uint256"),
				TypedDataField::new("nonce", "uint256"),
				TypedDataField::new("deadline", "uint256"),
			],
		);

		Self {
			domain: TypedDataDomain {
				name: Some(token_name.into()),
				version: Some("1".to_string()),
				chain_id: Some(chain_id),
				verifying_contract: Some(verifying_contract.into()),
			},
			types,
			primary_type: "Permit".to_string(),
			message,
		}
	}
}
