//! Approval resolution through the aggregator

mod mocks;

use std::sync::Arc;

use mocks::entities::MockEntities;
use mocks::providers::{count, MockProvider};
use mocks::TestConstants;
use swap_aggregator::models::approvals::APPROVE_SELECTOR;
use swap_aggregator::{ApprovalMethod, Chain, NoApprovalReason, SwapAggregator, U256};

const AMOUNT_UNITS: u64 = 1_500_000;

fn aggregator_with(provider: MockProvider) -> SwapAggregator {
	let aggregator = SwapAggregator::default();
	aggregator.register(Arc::new(provider)).unwrap();
	aggregator
}

#[tokio::test]
async fn test_native_input_never_needs_approval() {
	let provider = MockProvider::quoting("router", "1");
	let calls = provider.calls();
	let aggregator = aggregator_with(provider);

	let needed = aggregator
		.needs_approval(&MockEntities::native_request(), "router")
		.await
		.unwrap();
	assert!(!needed);
	assert_eq!(count(&calls.check_allowance), 0);

	let method = aggregator
		.get_approval_method(&MockEntities::native_request(), "router")
		.await
		.unwrap();
	assert_eq!(
		method,
		ApprovalMethod::not_needed(NoApprovalReason::NativeAsset)
	);
}

#[tokio::test]
async fn test_allowance_boundary() {
	let exact = aggregator_with(
		MockProvider::quoting("router", "1").with_allowance(U256::from(AMOUNT_UNITS)),
	);
	assert!(!exact
		.needs_approval(&MockEntities::usdc_request(), "router")
		.await
		.unwrap());

	let short = aggregator_with(
		MockProvider::quoting("router", "1").with_allowance(U256::from(AMOUNT_UNITS - 1)),
	);
	assert!(short
		.needs_approval(&MockEntities::usdc_request(), "router")
		.await
		.unwrap());
}

#[tokio::test]
async fn test_approval_if_needed() {
	let covered = aggregator_with(
		MockProvider::quoting("router", "1").with_allowance(U256::from(AMOUNT_UNITS)),
	);
	let approval = covered
		.get_approval_if_needed(&MockEntities::usdc_request(), "router", None)
		.await
		.unwrap();
	assert!(approval.is_none());

	let aggregator = aggregator_with(MockProvider::quoting("router", "1"));
	let approval = aggregator
		.get_approval_if_needed(&MockEntities::usdc_request(), "router", None)
		.await
		.unwrap()
		.unwrap();
	assert_eq!(approval.chain, Chain::Ethereum);
	assert_eq!(approval.token_address, TestConstants::USDC);
	assert_eq!(approval.spender_address, TestConstants::SPENDER);
	assert_eq!(approval.amount, U256::from(AMOUNT_UNITS));

	let unlimited = aggregator
		.get_approval_if_needed(&MockEntities::usdc_request(), "router", Some(U256::MAX))
		.await
		.unwrap()
		.unwrap();
	assert_eq!(unlimited.amount, U256::MAX);
	assert!(unlimited
		.into_standard_approval(TestConstants::USER)
		.unwrap()
		.is_unlimited());
}

#[tokio::test]
async fn test_standard_approval_method() {
	let provider = MockProvider::quoting("router", "1").with_allowance(U256::from(10u64));
	let calls = provider.calls();
	let aggregator = aggregator_with(provider);

	let method = aggregator
		.get_approval_method(&MockEntities::usdc_request(), "router")
		.await
		.unwrap();
	assert!(method.requires_action());

	match method {
		ApprovalMethod::StandardApproval {
			transaction,
			spender_address,
			amount,
			..
		} => {
			assert_eq!(spender_address, TestConstants::SPENDER);
			assert_eq!(amount, U256::from(AMOUNT_UNITS));
			assert_eq!(transaction.to, TestConstants::USDC);
			assert_eq!(transaction.from, TestConstants::USER);
			assert_eq!(transaction.chain_id, 1);
			assert_eq!(transaction.value, U256::ZERO);
			assert_eq!(&transaction.data[..4], &APPROVE_SELECTOR);
			assert_eq!(transaction.summary.action.as_str(), "approve");
		},
		other => panic!("expected a standard approval, got {}", other.kind()),
	}
	assert_eq!(count(&calls.get_spender_address), 1);
}

#[tokio::test]
async fn test_sufficient_allowance_method() {
	let aggregator = aggregator_with(
		MockProvider::quoting("router", "1").with_allowance(U256::MAX),
	);

	let method = aggregator
		.get_approval_method(&MockEntities::usdc_request(), "router")
		.await
		.unwrap();
	assert_eq!(
		method,
		ApprovalMethod::not_needed(NoApprovalReason::SufficientAllowance)
	);
}

#[tokio::test]
async fn test_missing_spender_on_allowance_chain_fails() {
	let aggregator = aggregator_with(MockProvider::quoting("router", "1").without_spender());

	let err = aggregator
		.get_approval_method(&MockEntities::usdc_request(), "router")
		.await
		.unwrap_err();
	assert_eq!(err.code(), "NOT_SUPPORTED");
}

#[tokio::test]
async fn test_chain_without_allowances() {
	let provider = MockProvider::quoting("jupiter", "1")
		.with_chains(&[Chain::Solana])
		.without_spender();
	let calls = provider.calls();
	let aggregator = aggregator_with(provider);

	let method = aggregator
		.get_approval_method(&MockEntities::solana_request(), "jupiter")
		.await
		.unwrap();
	assert_eq!(
		method,
		ApprovalMethod::not_needed(NoApprovalReason::NoAllowanceModel)
	);

	let needed = aggregator
		.needs_approval(&MockEntities::solana_request(), "jupiter")
		.await
		.unwrap();
	assert!(!needed);

	let approval = aggregator
		.get_approval_if_needed(&MockEntities::solana_request(), "jupiter", None)
		.await
		.unwrap();
	assert!(approval.is_none());
	assert_eq!(count(&calls.check_allowance), 0);
}

#[tokio::test]
async fn test_chain_without_allowances_ignores_known_spender() {
	let provider = MockProvider::quoting("jupiter", "1").with_chains(&[Chain::Solana]);
	let calls = provider.calls();
	let aggregator = aggregator_with(provider);

	let method = aggregator
		.get_approval_method(&MockEntities::solana_request(), "jupiter")
		.await
		.unwrap();
	assert_eq!(
		method,
		ApprovalMethod::not_needed(NoApprovalReason::NoAllowanceModel)
	);

	let needed = aggregator
		.needs_approval(&MockEntities::solana_request(), "jupiter")
		.await
		.unwrap();
	assert!(!needed);
	assert_eq!(count(&calls.check_allowance), 0);
	assert_eq!(count(&calls.get_spender_address), 0);
}

#[tokio::test]
async fn test_unknown_provider() {
	let aggregator = SwapAggregator::default();

	let err = aggregator
		.needs_approval(&MockEntities::usdc_request(), "ghost")
		.await
		.unwrap_err();
	assert_eq!(err.code(), "PROVIDER_NOT_FOUND");

	let err = aggregator
		.get_approval_method(&MockEntities::usdc_request(), "ghost")
		.await
		.unwrap_err();
	assert_eq!(err.code(), "PROVIDER_NOT_FOUND");
}
