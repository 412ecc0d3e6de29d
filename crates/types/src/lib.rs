//! Swap Types
//!
//! Shared models and the provider contract for the swap aggregator.
//! This crate contains all domain models organized by business entity.

pub mod approvals;
pub mod errors;
pub mod models;
pub mod providers;
pub mod quotes;
pub mod requests;
pub mod status;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod transactions;

// Re-export the numeric and serialization crates that appear in public signatures
pub use alloy_primitives;
pub use bigdecimal;
pub use chrono;
pub use serde_json;

pub use alloy_primitives::{Address, Bytes, U256};
pub use bigdecimal::BigDecimal;

pub use errors::{ProviderFailure, SwapError, SwapResult};

pub use models::{
	bigint_to_u256, from_smallest_unit, to_smallest_unit, to_smallest_unit_u256, u256_to_bigint,
	ApiKey, Chain, ChainFamily, Token,
};

pub use requests::{RequestValidationError, SwapRequest, SwapRequestBuilder};

pub use quotes::{GasEstimate, Quote, RankingStrategy, RouteStep};

pub use approvals::{
	encode_approve_calldata, ApprovalMethod, ApprovalTransaction, NoApprovalReason, TypedData,
	TypedDataDomain, TypedDataField,
};

pub use transactions::{
	ChainTransaction, CosmosTransaction, EvmTransaction, EvmTransactionRequest, GasPricing,
	SolanaTransaction, TransactionAction, TransactionSummary, UtxoTransaction,
};

pub use status::{SwapState, SwapStatus};

pub use providers::{build_transaction_variant_from_legacy, resolve_approval_method, SwapProvider};
