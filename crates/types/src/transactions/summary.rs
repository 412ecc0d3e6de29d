//! Human-readable description of what a transaction does

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::models::Chain;
use crate::quotes::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionAction {
	Swap,
	Bridge,
	Approve,
	Wrap,
	Unwrap,
}

impl TransactionAction {
	pub fn as_str(&self) -> &'static str {
		match self {
			TransactionAction::Swap => "swap",
			TransactionAction::Bridge => "bridge",
			TransactionAction::Approve => "approve",
			TransactionAction::Wrap => "wrap",
			TransactionAction::Unwrap => "unwrap",
		}
	}
}

impl std::fmt::Display for TransactionAction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
	pub action: TransactionAction,
	pub from_symbol: String,
	pub to_symbol: String,
	pub input_amount: BigDecimal,
	pub expected_output: BigDecimal,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub destination_chain: Option<Chain>,
	/// Protocol or provider carrying out the action
	pub protocol: String,
}

impl TransactionSummary {
	/// Generic swap summary of executing `quote`
	///
	/// Cross-chain quotes keep the `Swap` action and record the destination
	/// chain; integrations that want `Bridge` set it with [`Self::with_action`].
	/// The protocol is the first one on the route, or the issuing provider
	/// when the route is empty.
	pub fn for_quote(quote: &Quote) -> Self {
		let request = &quote.request;
		Self {
			action: TransactionAction::Swap,
			from_symbol: request.from_token().to_string(),
			to_symbol: request.to_token().to_string(),
			input_amount: quote.input_amount.clone(),
			expected_output: quote.output_amount.clone(),
			destination_chain: request.is_cross_chain().then(|| request.to_chain()),
			protocol: quote
				.protocols
				.first()
				.cloned()
				.unwrap_or_else(|| quote.provider.clone()),
		}
	}

	pub fn with_action(mut self, action: TransactionAction) -> Self {
		self.action = action;
		self
	}

	/// Summary of an ERC-20 style approval of `amount` units of `symbol`
	pub fn approval(symbol: impl Into<String>, amount: BigDecimal, spender: impl Into<String>) -> Self {
		let symbol = symbol.into();
		Self {
			action: TransactionAction::Approve,
			from_symbol: symbol.clone(),
			to_symbol: symbol,
			input_amount: amount.clone(),
			expected_output: amount,
			destination_chain: None,
			protocol: spender.into(),
		}
	}
}
