//! Default algorithms behind the provider contract
//!
//! These are free functions so integrations that override a method can
//! still fall back to the shared behaviour.

use alloy_primitives::U256;
use tracing::debug;

use super::SwapProvider;
use crate::approvals::{ApprovalMethod, NoApprovalReason};
use crate::errors::{SwapError, SwapResult};
use crate::models::Chain;
use crate::quotes::Quote;
use crate::transactions::{ChainTransaction, EvmTransaction, TransactionSummary};

/// Wrap a provider's flat EVM builder output as a [`ChainTransaction::Evm`]
///
/// Fails with `TransactionBuild` when the quote's source chain is not EVM
/// or the builder answers for a different chain id.
pub async fn build_transaction_variant_from_legacy<P>(
	provider: &P,
	quote: &Quote,
	user_address: &str,
	recipient: Option<&str>,
) -> SwapResult<ChainTransaction>
where
	P: SwapProvider + ?Sized,
{
	let chain = quote.request.from_chain();
	let expected_chain_id = chain.evm_chain_id().ok_or_else(|| SwapError::TransactionBuild {
		provider: provider.name().to_string(),
		reason: format!(
			"{} is not an EVM chain; the provider must build {} transactions itself",
			chain,
			chain.family()
		),
	})?;

	let request = provider
		.build_transaction(quote, user_address, recipient)
		.await?;

	if request.chain_id != expected_chain_id {
		return Err(SwapError::TransactionBuild {
			provider: provider.name().to_string(),
			reason: format!(
				"transaction targets chain id {} but the quote is on {} ({})",
				request.chain_id, chain, expected_chain_id
			),
		});
	}

	let summary = TransactionSummary::for_quote(quote);
	Ok(ChainTransaction::Evm(EvmTransaction::from_request(
		chain, request, summary,
	)))
}

/// Decide how `owner` approves `amount` (smallest units) of `token_address`
///
/// 1. Native assets need no approval.
/// 2. Chains without an allowance model need no approval.
/// 3. The spender is resolved once; a lookup error propagates.
/// 4. A sufficient existing allowance needs no approval.
/// 5. Otherwise a standard `approve` transaction to the token contract,
///    with calldata encoded locally when the provider supplied none.
pub async fn resolve_approval_method<P>(
	provider: &P,
	chain: Chain,
	token_address: &str,
	owner: &str,
	amount: U256,
) -> SwapResult<ApprovalMethod>
where
	P: SwapProvider + ?Sized,
{
	if chain.is_native_token(token_address) {
		return Ok(ApprovalMethod::not_needed(NoApprovalReason::NativeAsset));
	}

	if !chain.uses_allowances() {
		return Ok(ApprovalMethod::not_needed(NoApprovalReason::NoAllowanceModel));
	}

	let spender = provider.get_spender_address(chain).await?;

	let allowance = provider.check_allowance(chain, token_address, owner).await?;
	if allowance >= amount {
		return Ok(ApprovalMethod::not_needed(
			NoApprovalReason::SufficientAllowance,
		));
	}

	debug!(
		"Allowance {} below {} for {} on {}, approval of {} required",
		allowance, amount, token_address, chain, spender
	);

	provider
		.get_approval_transaction(chain, token_address, owner, &spender, amount)
		.await?
		.into_standard_approval(owner)
		.map_err(|e| match e {
			SwapError::Approval { reason, .. } => SwapError::Approval {
				provider: provider.name().to_string(),
				reason,
			},
			other => other,
		})
}
