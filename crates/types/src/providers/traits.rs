//! The provider capability contract

use std::fmt::Debug;

use alloy_primitives::U256;
use async_trait::async_trait;

use super::defaults::{build_transaction_variant_from_legacy, resolve_approval_method};
use crate::approvals::{ApprovalMethod, ApprovalTransaction};
use crate::errors::{SwapError, SwapResult};
use crate::models::{Chain, Token};
use crate::quotes::Quote;
use crate::requests::SwapRequest;
use crate::status::SwapStatus;
use crate::transactions::{ChainTransaction, EvmTransactionRequest};

/// Core trait for swap and bridge provider integrations
///
/// Only identity, chain support and [`SwapProvider::get_quote`] are
/// required. Everything else has a default that either degrades gracefully
/// or reports [`SwapError::NotSupported`], so an integration overrides
/// just what its remote service offers.
///
/// Integrations convert their transport and parse failures into
/// [`SwapError`] at this boundary; they should not panic, although the
/// aggregator isolates panics regardless.
#[async_trait]
pub trait SwapProvider: Send + Sync + Debug {
	/// Unique provider name, used as the registry key
	fn name(&self) -> &str;

	fn supported_chains(&self) -> &[Chain];

	/// Whether the provider can quote routes between different chains
	fn supports_cross_chain(&self) -> bool;

	fn is_chain_supported(&self, chain: Chain) -> bool {
		self.supported_chains().contains(&chain)
	}

	fn is_cross_chain_supported(&self, from: Chain, to: Chain) -> bool {
		self.supports_cross_chain() && self.is_chain_supported(from) && self.is_chain_supported(to)
	}

	/// Tokens the provider can trade on `chain`
	///
	/// Default implementation knows no tokens.
	async fn get_tokens(&self, _chain: Chain) -> SwapResult<Vec<Token>> {
		Ok(Vec::new())
	}

	async fn get_quote(&self, request: &SwapRequest) -> SwapResult<Quote>;

	/// Build a flat EVM transaction for `quote`
	///
	/// Default implementation returns NotSupported. EVM-only integrations
	/// usually override this and inherit
	/// [`SwapProvider::build_transaction_variant`].
	async fn build_transaction(
		&self,
		_quote: &Quote,
		_user_address: &str,
		_recipient: Option<&str>,
	) -> SwapResult<EvmTransactionRequest> {
		Err(SwapError::not_supported("build_transaction", self.name()))
	}

	/// Build the chain-appropriate transaction for `quote`
	///
	/// Default implementation wraps [`SwapProvider::build_transaction`] and
	/// fails for non-EVM source chains.
	async fn build_transaction_variant(
		&self,
		quote: &Quote,
		user_address: &str,
		recipient: Option<&str>,
	) -> SwapResult<ChainTransaction> {
		build_transaction_variant_from_legacy(self, quote, user_address, recipient).await
	}

	/// Current allowance of `owner` towards the provider's spender
	///
	/// Chains without an allowance model report zero; EVM chains need an
	/// override.
	async fn check_allowance(&self, chain: Chain, _token_address: &str, _owner: &str) -> SwapResult<U256> {
		if chain.uses_allowances() {
			Err(SwapError::not_supported("check_allowance", self.name()))
		} else {
			Ok(U256::ZERO)
		}
	}

	/// Contract that pulls the trader's tokens on `chain`
	async fn get_spender_address(&self, _chain: Chain) -> SwapResult<String> {
		Err(SwapError::not_supported("get_spender_address", self.name()))
	}

	/// Approval data letting `spender` pull `amount` (smallest units) of
	/// `token_address`
	///
	/// Default implementation leaves the calldata to be encoded locally.
	async fn get_approval_transaction(
		&self,
		chain: Chain,
		token_address: &str,
		_owner: &str,
		spender: &str,
		amount: U256,
	) -> SwapResult<ApprovalTransaction> {
		Ok(ApprovalTransaction::new(
			chain,
			token_address.to_string(),
			spender.to_string(),
			amount,
		))
	}

	/// How `owner` authorises the spender for `amount` of `token_address`
	///
	/// Default implementation never yields permit variants; providers that
	/// support signatures override it.
	async fn get_approval_method(
		&self,
		chain: Chain,
		token_address: &str,
		owner: &str,
		amount: U256,
	) -> SwapResult<ApprovalMethod> {
		resolve_approval_method(self, chain, token_address, owner, amount).await
	}

	async fn get_swap_status(&self, _tx_hash: &str, _chain: Chain) -> SwapResult<SwapStatus> {
		Err(SwapError::not_supported("get_swap_status", self.name()))
	}

	/// Release held resources; called once when the aggregator is disposed
	async fn dispose(&self) {}
}
