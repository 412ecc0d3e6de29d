//! Mock providers for aggregator tests
//!
//! This provider offers:
//! - Call tracking per operation
//! - Configurable response delays
//! - Failure and panic simulation
//! - Configurable allowances, spenders, tokens and statuses

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use swap_aggregator::alloy_primitives::{Bytes, U256};
use swap_aggregator::{
	BigDecimal, Chain, EvmTransactionRequest, GasEstimate, Quote, SwapError, SwapProvider,
	SwapRequest, SwapResult, SwapState, SwapStatus, Token,
};

use super::entities::TestConstants;

/// What `get_quote` does
#[derive(Debug, Clone)]
pub enum MockBehavior {
	/// Quote `output` with `gas_in_output` gas cost in the output token
	Quote {
		output: BigDecimal,
		gas_in_output: BigDecimal,
	},
	/// Fail with no route
	NoRoute,
	/// Fail as rate limited
	RateLimited,
	/// Panic inside the call
	Panic,
}

#[derive(Debug, Default)]
pub struct CallCounts {
	pub get_quote: AtomicUsize,
	pub get_tokens: AtomicUsize,
	pub check_allowance: AtomicUsize,
	pub get_spender_address: AtomicUsize,
	pub get_swap_status: AtomicUsize,
	pub dispose: AtomicUsize,
}

#[derive(Debug, Clone)]
pub struct MockProvider {
	name: String,
	chains: Vec<Chain>,
	cross_chain: bool,
	behavior: MockBehavior,
	delay_ms: u64,
	tokens: Option<Vec<Token>>,
	allowance: U256,
	spender: Option<String>,
	status: Option<SwapState>,
	calls: Arc<CallCounts>,
}

impl MockProvider {
	/// EVM provider on Ethereum and Arbitrum quoting `output`
	pub fn quoting(name: &str, output: &str) -> Self {
		Self {
			name: name.to_string(),
			chains: vec![Chain::Ethereum, Chain::Arbitrum],
			cross_chain: false,
			behavior: MockBehavior::Quote {
				output: TestConstants::dec(output),
				gas_in_output: BigDecimal::from(0),
			},
			delay_ms: 0,
			tokens: Some(Vec::new()),
			allowance: U256::ZERO,
			spender: Some(TestConstants::SPENDER.to_string()),
			status: None,
			calls: Arc::new(CallCounts::default()),
		}
	}

	pub fn failing(name: &str) -> Self {
		Self::quoting(name, "0").with_behavior(MockBehavior::NoRoute)
	}

	pub fn panicking(name: &str) -> Self {
		Self::quoting(name, "0").with_behavior(MockBehavior::Panic)
	}

	pub fn with_behavior(mut self, behavior: MockBehavior) -> Self {
		self.behavior = behavior;
		self
	}

	pub fn with_gas(mut self, gas_in_output: &str) -> Self {
		if let MockBehavior::Quote { output, .. } = &self.behavior {
			self.behavior = MockBehavior::Quote {
				output: output.clone(),
				gas_in_output: TestConstants::dec(gas_in_output),
			};
		}
		self
	}

	pub fn with_chains(mut self, chains: &[Chain]) -> Self {
		self.chains = chains.to_vec();
		self
	}

	pub fn with_cross_chain(mut self) -> Self {
		self.cross_chain = true;
		self
	}

	pub fn with_delay(mut self, delay_ms: u64) -> Self {
		self.delay_ms = delay_ms;
		self
	}

	/// Token list, or `None` to make `get_tokens` fail
	pub fn with_tokens(mut self, tokens: Option<Vec<Token>>) -> Self {
		self.tokens = tokens;
		self
	}

	pub fn with_allowance(mut self, allowance: U256) -> Self {
		self.allowance = allowance;
		self
	}

	pub fn without_spender(mut self) -> Self {
		self.spender = None;
		self
	}

	pub fn with_status(mut self, state: SwapState) -> Self {
		self.status = Some(state);
		self
	}

	/// Shared counters; stay valid after the provider moves into an `Arc`
	pub fn calls(&self) -> Arc<CallCounts> {
		Arc::clone(&self.calls)
	}

	async fn delay(&self) {
		if self.delay_ms > 0 {
			tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
		}
	}
}

pub fn count(counter: &AtomicUsize) -> usize {
	counter.load(Ordering::SeqCst)
}

#[async_trait]
impl SwapProvider for MockProvider {
	fn name(&self) -> &str {
		&self.name
	}

	fn supported_chains(&self) -> &[Chain] {
		&self.chains
	}

	fn supports_cross_chain(&self) -> bool {
		self.cross_chain
	}

	async fn get_tokens(&self, _chain: Chain) -> SwapResult<Vec<Token>> {
		self.calls.get_tokens.fetch_add(1, Ordering::SeqCst);
		self.delay().await;
		self.tokens.clone().ok_or_else(|| SwapError::ProviderUnavailable {
			provider: self.name.clone(),
			reason: "token list offline".to_string(),
		})
	}

	async fn get_quote(&self, request: &SwapRequest) -> SwapResult<Quote> {
		self.calls.get_quote.fetch_add(1, Ordering::SeqCst);
		self.delay().await;

		match &self.behavior {
			MockBehavior::Quote {
				output,
				gas_in_output,
			} => Ok(Quote::new(self.name.clone(), request.clone(), output.clone()).with_gas(
				GasEstimate::zero(request.from_chain().native_symbol())
					.with_cost_in_output_token(gas_in_output.clone()),
			)),
			MockBehavior::NoRoute => Err(SwapError::NoRoute {
				provider: self.name.clone(),
			}),
			MockBehavior::RateLimited => Err(SwapError::RateLimited {
				provider: self.name.clone(),
			}),
			MockBehavior::Panic => panic!("{} exploded", self.name),
		}
	}

	async fn build_transaction(
		&self,
		quote: &Quote,
		user_address: &str,
		_recipient: Option<&str>,
	) -> SwapResult<EvmTransactionRequest> {
		let chain_id = quote
			.request
			.from_chain()
			.evm_chain_id()
			.ok_or_else(|| SwapError::not_supported("build_transaction", self.name()))?;

		Ok(EvmTransactionRequest {
			from: user_address.to_string(),
			to: TestConstants::SPENDER.to_string(),
			data: Bytes::from(vec![0xab, 0xcd]),
			value: U256::ZERO,
			gas_limit: Some(200_000),
			gas_price: Some(U256::from(1_000_000_000u64)),
			max_fee_per_gas: None,
			max_priority_fee_per_gas: None,
			nonce: Some(7),
			chain_id,
		})
	}

	async fn check_allowance(&self, _chain: Chain, _token: &str, _owner: &str) -> SwapResult<U256> {
		self.calls.check_allowance.fetch_add(1, Ordering::SeqCst);
		Ok(self.allowance)
	}

	async fn get_spender_address(&self, _chain: Chain) -> SwapResult<String> {
		self.calls.get_spender_address.fetch_add(1, Ordering::SeqCst);
		self.spender
			.clone()
			.ok_or_else(|| SwapError::not_supported("get_spender_address", self.name()))
	}

	async fn get_swap_status(&self, tx_hash: &str, chain: Chain) -> SwapResult<SwapStatus> {
		self.calls.get_swap_status.fetch_add(1, Ordering::SeqCst);
		match self.status {
			Some(state) => Ok(SwapStatus::new(tx_hash, chain, state).with_message(self.name.clone())),
			None => Err(SwapError::not_supported("get_swap_status", self.name())),
		}
	}

	async fn dispose(&self) {
		self.calls.dispose.fetch_add(1, Ordering::SeqCst);
	}
}
