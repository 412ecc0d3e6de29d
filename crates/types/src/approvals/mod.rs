//! Token approval model
//!
//! Before a router can pull an ERC-20 style token it needs an allowance.
//! [`ApprovalMethod`] says how (or whether) the trader grants it.

use std::collections::HashMap;

use alloy_primitives::{Bytes, U256};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

pub mod calldata;
pub mod typed_data;

pub use calldata::{encode_approve_calldata, APPROVE_SELECTOR};
pub use typed_data::{TypedData, TypedDataDomain, TypedDataField};

use crate::errors::{SwapError, SwapResult};
use crate::models::{u256_to_bigint, Chain};
use crate::transactions::{EvmTransaction, GasPricing, TransactionSummary};

/// Why no approval step is required
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoApprovalReason {
	/// The source asset is the chain's native asset
	NativeAsset,
	/// The chain has no allowance model
	NoAllowanceModel,
	SufficientAllowance,
	/// Provider-specific explanation
	Provider(String),
}

/// How the trader authorises the spender, if at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ApprovalMethod {
	NoApprovalNeeded {
		reason: NoApprovalReason,
	},
	/// On-chain `approve` transaction
	#[serde(rename_all = "camelCase")]
	StandardApproval {
		transaction: EvmTransaction,
		token_address: String,
		spender_address: String,
		amount: U256,
	},
	/// Off-chain EIP-2612 permit signature
	#[serde(rename_all = "camelCase")]
	PermitSignature {
		typed_data: TypedData,
		deadline: u64,
		nonce: U256,
	},
	/// Off-chain signature over the Permit2 contract
	#[serde(rename_all = "camelCase")]
	Permit2Signature {
		typed_data: TypedData,
		permit2_address: String,
		token_address: String,
		amount: U256,
		nonce: U256,
		deadline: u64,
		chain: Chain,
	},
}

impl ApprovalMethod {
	pub fn not_needed(reason: NoApprovalReason) -> Self {
		ApprovalMethod::NoApprovalNeeded { reason }
	}

	/// Whether the trader must sign or send anything
	pub fn requires_action(&self) -> bool {
		!matches!(self, ApprovalMethod::NoApprovalNeeded { .. })
	}

	pub fn kind(&self) -> &'static str {
		match self {
			ApprovalMethod::NoApprovalNeeded { .. } => "no_approval_needed",
			ApprovalMethod::StandardApproval { .. } => "standard_approval",
			ApprovalMethod::PermitSignature { .. } => "permit_signature",
			ApprovalMethod::Permit2Signature { .. } => "permit2_signature",
		}
	}

	/// True for a standard approval of `U256::MAX`
	pub fn is_unlimited(&self) -> bool {
		matches!(self, ApprovalMethod::StandardApproval { amount, .. } if *amount == U256::MAX)
	}
}

/// Raw approval data as returned by a provider
///
/// `data` may be omitted, in which case `approve(spender, amount)` calldata
/// is encoded locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalTransaction {
	pub chain: Chain,
	pub token_address: String,
	pub spender_address: String,
	pub amount: U256,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Bytes>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_limit: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_price: Option<U256>,
}

impl ApprovalTransaction {
	pub fn new(chain: Chain, token_address: String, spender_address: String, amount: U256) -> Self {
		Self {
			chain,
			token_address,
			spender_address,
			amount,
			data: None,
			gas_limit: None,
			gas_price: None,
		}
	}

	pub fn with_data(mut self, data: Bytes) -> Self {
		self.data = Some(data);
		self
	}

	/// Calldata supplied by the provider, or `approve(spender, amount)`
	pub fn calldata(&self) -> SwapResult<Bytes> {
		match &self.data {
			Some(data) => Ok(data.clone()),
			None => encode_approve_calldata(&self.spender_address, self.amount),
		}
	}

	/// The EVM transaction `owner` sends to the token contract
	pub fn to_evm_transaction(&self, owner: &str) -> SwapResult<EvmTransaction> {
		let chain_id = self.chain.evm_chain_id().ok_or_else(|| SwapError::Approval {
			provider: "erc20".to_string(),
			reason: format!("{} has no allowance model", self.chain),
		})?;
		let human_amount = BigDecimal::new(u256_to_bigint(self.amount), 0);

		Ok(EvmTransaction {
			chain: self.chain,
			chain_id,
			from: owner.to_string(),
			to: self.token_address.clone(),
			data: self.calldata()?,
			value: U256::ZERO,
			gas_limit: self.gas_limit,
			pricing: GasPricing::from_parts(self.gas_price, None, None),
			nonce: None,
			summary: TransactionSummary::approval(
				self.token_address.clone(),
				human_amount,
				self.spender_address.clone(),
			),
			metadata: HashMap::new(),
		})
	}

	/// Wrap as [`ApprovalMethod::StandardApproval`]
	pub fn into_standard_approval(self, owner: &str) -> SwapResult<ApprovalMethod> {
		let transaction = self.to_evm_transaction(owner)?;
		Ok(ApprovalMethod::StandardApproval {
			transaction,
			token_address: self.token_address,
			spender_address: self.spender_address,
			amount: self.amount,
		})
	}
}
