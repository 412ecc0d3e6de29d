//! Chain-family transaction variants
//!
//! [`ChainTransaction`] is a closed union: consumers match on it
//! exhaustively and never see a transaction of an unknown family.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod cosmos;
pub mod evm;
pub mod solana;
pub mod summary;
pub mod utxo;

pub use cosmos::{Coin, CosmosFee, CosmosMessage, CosmosTransaction};
pub use evm::{EvmTransaction, EvmTransactionRequest, GasPricing};
pub use solana::SolanaTransaction;
pub use summary::{TransactionAction, TransactionSummary};
pub use utxo::{UtxoInput, UtxoOutput, UtxoTransaction};

use crate::models::{Chain, ChainFamily};

/// A signable transaction for one of the supported chain families
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ChainTransaction {
	Evm(EvmTransaction),
	Solana(SolanaTransaction),
	Utxo(UtxoTransaction),
	Cosmos(CosmosTransaction),
}

impl ChainTransaction {
	pub fn chain(&self) -> Chain {
		match self {
			ChainTransaction::Evm(tx) => tx.chain,
			ChainTransaction::Solana(tx) => tx.chain,
			ChainTransaction::Utxo(tx) => tx.chain,
			ChainTransaction::Cosmos(tx) => tx.chain,
		}
	}

	pub fn family(&self) -> ChainFamily {
		match self {
			ChainTransaction::Evm(_) => ChainFamily::Evm,
			ChainTransaction::Solana(_) => ChainFamily::Solana,
			ChainTransaction::Utxo(_) => ChainFamily::Utxo,
			ChainTransaction::Cosmos(_) => ChainFamily::Cosmos,
		}
	}

	pub fn summary(&self) -> &TransactionSummary {
		match self {
			ChainTransaction::Evm(tx) => &tx.summary,
			ChainTransaction::Solana(tx) => &tx.summary,
			ChainTransaction::Utxo(tx) => &tx.summary,
			ChainTransaction::Cosmos(tx) => &tx.summary,
		}
	}

	pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
		match self {
			ChainTransaction::Evm(tx) => &tx.metadata,
			ChainTransaction::Solana(tx) => &tx.metadata,
			ChainTransaction::Utxo(tx) => &tx.metadata,
			ChainTransaction::Cosmos(tx) => &tx.metadata,
		}
	}

	pub fn as_evm(&self) -> Option<&EvmTransaction> {
		match self {
			ChainTransaction::Evm(tx) => Some(tx),
			_ => None,
		}
	}
}

impl From<EvmTransaction> for ChainTransaction {
	fn from(tx: EvmTransaction) -> Self {
		ChainTransaction::Evm(tx)
	}
}

impl From<SolanaTransaction> for ChainTransaction {
	fn from(tx: SolanaTransaction) -> Self {
		ChainTransaction::Solana(tx)
	}
}

impl From<UtxoTransaction> for ChainTransaction {
	fn from(tx: UtxoTransaction) -> Self {
		ChainTransaction::Utxo(tx)
	}
}

impl From<CosmosTransaction> for ChainTransaction {
	fn from(tx: CosmosTransaction) -> Self {
		ChainTransaction::Cosmos(tx)
	}
}
