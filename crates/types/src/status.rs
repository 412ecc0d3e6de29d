//! Swap execution status

use serde::{Deserialize, Serialize};

use crate::models::Chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapState {
	Pending,
	Completed,
	Failed,
	Refunded,
	NotFound,
}

/// Status of a submitted swap or bridge as reported by its provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapStatus {
	pub tx_hash: String,
	pub chain: Chain,
	pub state: SwapState,
	/// Fill transaction on the destination chain, for bridges
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub destination_tx_hash: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl SwapStatus {
	pub fn new(tx_hash: impl Into<String>, chain: Chain, state: SwapState) -> Self {
		Self {
			tx_hash: tx_hash.into(),
			chain,
			state,
			destination_tx_hash: None,
			message: None,
		}
	}

	pub fn with_destination_tx(mut self, tx_hash: impl Into<String>) -> Self {
		self.destination_tx_hash = Some(tx_hash.into());
		self
	}

	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Whether the status will no longer change
	pub fn is_final(&self) -> bool {
		matches!(
			self.state,
			SwapState::Completed | SwapState::Failed | SwapState::Refunded
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_final_states() {
		let status = |state| SwapStatus::new("0xabc", Chain::Ethereum, state);

		assert!(!status(SwapState::Pending).is_final());
		assert!(!status(SwapState::NotFound).is_final());
		assert!(status(SwapState::Completed).is_final());
		assert!(status(SwapState::Failed).is_final());
		assert!(status(SwapState::Refunded).is_final());
	}
}
