//! Demo providers for examples and the demo binary
//!
//! Deterministic, offline providers that honour the full provider contract
//! without talking to any remote service.

use std::collections::HashMap;

use alloy_primitives::{Bytes, U256};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bigdecimal::BigDecimal;
use tracing::debug;
use serde_json::json;
use swap_types::transactions::{SolanaTransaction, TransactionSummary};
use swap_types::{
	ApiKey, Chain, ChainTransaction, EvmTransactionRequest, GasEstimate, Quote, RouteStep, SwapError,
	SwapProvider, SwapRequest, SwapResult, SwapState, SwapStatus, Token,
};

/// Router contract the demo EVM provider pretends to use
pub const DEMO_ROUTER: &str = "0xDef1C0ded9bec7F1a1670819833240f027b25EfF";

const DEMO_ROUTE_KEY: &str = "demoRouteId";

/// Offline EVM provider quoting a fixed exchange rate
///
/// Quotes pay `amount × rate` and carry a legacy gas estimate whose cost in
/// the output token is configurable, so demos can show gas-aware ranking.
#[derive(Debug, Clone)]
pub struct DemoProvider {
	name: String,
	chains: Vec<Chain>,
	cross_chain: bool,
	rate: BigDecimal,
	gas_in_output: BigDecimal,
	allowance: U256,
	api_key: Option<ApiKey>,
	requires_api_key: bool,
}

impl DemoProvider {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			chains: vec![
				Chain::Ethereum,
				Chain::Arbitrum,
				Chain::Optimism,
				Chain::Base,
				Chain::Polygon,
			],
			cross_chain: false,
			rate: BigDecimal::from(2000),
			gas_in_output: BigDecimal::from(0),
			allowance: U256::ZERO,
			api_key: None,
			requires_api_key: false,
		}
	}

	/// Output units paid per input unit
	pub fn with_rate(mut self, rate: BigDecimal) -> Self {
		self.rate = rate;
		self
	}

	/// Gas cost expressed in the output token
	pub fn with_gas_in_output(mut self, gas_in_output: BigDecimal) -> Self {
		self.gas_in_output = gas_in_output;
		self
	}

	pub fn with_cross_chain(mut self, cross_chain: bool) -> Self {
		self.cross_chain = cross_chain;
		self
	}

	pub fn with_chains(mut self, chains: Vec<Chain>) -> Self {
		self.chains = chains;
		self
	}

	/// Allowance reported for every token and owner
	pub fn with_allowance(mut self, allowance: U256) -> Self {
		self.allowance = allowance;
		self
	}

	/// Quote only with an API key, like a keyed RFQ desk
	///
	/// Without a key every quote fails with `MISSING_CREDENTIAL`.
	pub fn requiring_api_key(mut self, api_key: Option<ApiKey>) -> Self {
		self.api_key = api_key;
		self.requires_api_key = true;
		self
	}

	fn authenticate(&self) -> SwapResult<()> {
		match &self.api_key {
			Some(key) => {
				debug!("{} quoting with {}", self.name, key);
				Ok(())
			},
			None if self.requires_api_key => Err(SwapError::MissingCredential {
				name: format!("{} api key", self.name),
			}),
			None => Ok(()),
		}
	}
}

#[async_trait]
impl SwapProvider for DemoProvider {
	fn name(&self) -> &str {
		&self.name
	}

	fn supported_chains(&self) -> &[Chain] {
		&self.chains
	}

	fn supports_cross_chain(&self) -> bool {
		self.cross_chain
	}

	async fn get_tokens(&self, chain: Chain) -> SwapResult<Vec<Token>> {
		let mut tokens = vec![Token::native(chain)];
		match chain {
			Chain::Ethereum => tokens.extend([Token::usdc_ethereum(), Token::usdt_ethereum()]),
			Chain::Arbitrum => tokens.push(Token::usdc_arbitrum()),
			_ => {},
		}
		Ok(tokens)
	}

	async fn get_quote(&self, request: &SwapRequest) -> SwapResult<Quote> {
		if !self.is_chain_supported(request.from_chain()) {
			return Err(SwapError::UnsupportedChain {
				chain: request.from_chain().to_string(),
			});
		}
		self.authenticate()?;

		let output = request.amount() * &self.rate;
		let route_id = format!("{}-{}", self.name, request.amount_in_smallest_unit());
		let gas = GasEstimate::legacy(
			request.from_chain(),
			180_000,
			U256::from(20_000_000_000u64),
		)
		.with_cost_in_output_token(self.gas_in_output.clone());

		Quote::new(self.name.clone(), request.clone(), output)
			.with_gas(gas)
			.with_route(vec![RouteStep::new(format!("{}-pool", self.name))
				.with_tokens(request.from_token(), request.to_token())])
			.with_price_impact(0.1)
			.with_metadata(DEMO_ROUTE_KEY, route_id)
	}

	async fn build_transaction(
		&self,
		quote: &Quote,
		user_address: &str,
		_recipient: Option<&str>,
	) -> SwapResult<EvmTransactionRequest> {
		let chain = quote.request.from_chain();
		let chain_id = chain.evm_chain_id().ok_or_else(|| SwapError::TransactionBuild {
			provider: self.name.clone(),
			reason: format!("{} is not an EVM chain", chain),
		})?;
		let route_id: String = quote.metadata_value(DEMO_ROUTE_KEY).ok_or_else(|| {
			SwapError::InvalidQuote {
				provider: self.name.clone(),
				reason: "quote carries no route id".to_string(),
			}
		})?;

		let value = if quote.request.is_native_input() {
			quote.request.amount_in_smallest_unit_u256()?
		} else {
			U256::ZERO
		};

		Ok(EvmTransactionRequest {
			from: user_address.to_string(),
			to: DEMO_ROUTER.to_string(),
			data: Bytes::from(route_id.into_bytes()),
			value,
			gas_limit: Some(quote.gas.gas_limit),
			gas_price: Some(quote.gas.gas_price),
			max_fee_per_gas: None,
			max_priority_fee_per_gas: None,
			nonce: None,
			chain_id,
		})
	}

	async fn check_allowance(&self, _chain: Chain, _token_address: &str, _owner: &str) -> SwapResult<U256> {
		Ok(self.allowance)
	}

	async fn get_spender_address(&self, chain: Chain) -> SwapResult<String> {
		if chain.uses_allowances() {
			Ok(DEMO_ROUTER.to_string())
		} else {
			Err(SwapError::UnsupportedChain {
				chain: chain.to_string(),
			})
		}
	}

	async fn get_swap_status(&self, tx_hash: &str, chain: Chain) -> SwapResult<SwapStatus> {
		Ok(SwapStatus::new(tx_hash, chain, SwapState::Completed)
			.with_message(format!("settled by {}", self.name)))
	}
}

/// Offline Solana provider that returns pre-serialized transactions
#[derive(Debug, Clone)]
pub struct DemoSolanaProvider {
	name: String,
	chains: Vec<Chain>,
	rate: BigDecimal,
}

impl DemoSolanaProvider {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			chains: vec![Chain::Solana],
			rate: BigDecimal::from(150),
		}
	}

	pub fn with_rate(mut self, rate: BigDecimal) -> Self {
		self.rate = rate;
		self
	}
}

#[async_trait]
impl SwapProvider for DemoSolanaProvider {
	fn name(&self) -> &str {
		&self.name
	}

	fn supported_chains(&self) -> &[Chain] {
		&self.chains
	}

	fn supports_cross_chain(&self) -> bool {
		false
	}

	async fn get_tokens(&self, chain: Chain) -> SwapResult<Vec<Token>> {
		Ok(vec![Token::native(chain), Token::usdc_solana()])
	}

	async fn get_quote(&self, request: &SwapRequest) -> SwapResult<Quote> {
		if request.from_chain() != Chain::Solana {
			return Err(SwapError::UnsupportedChain {
				chain: request.from_chain().to_string(),
			});
		}

		Quote::new(self.name.clone(), request.clone(), request.amount() * &self.rate)
			.with_gas(GasEstimate::zero(Chain::Solana.native_symbol()))
			.with_route(vec![RouteStep::new("whirlpool")])
			.with_metadata("computeUnits", 200_000u32)
	}

	async fn build_transaction_variant(
		&self,
		quote: &Quote,
		user_address: &str,
		_recipient: Option<&str>,
	) -> SwapResult<ChainTransaction> {
		let compute_unit_limit: Option<u32> = quote.metadata_value("computeUnits");
		let wire = format!("{}:{}:{}", self.name, quote.id, user_address);

		let mut metadata = HashMap::new();
		metadata.insert("quoteId".to_string(), json!(quote.id));

		Ok(ChainTransaction::Solana(SolanaTransaction {
			chain: Chain::Solana,
			serialized_transaction: STANDARD.encode(wire.as_bytes()),
			signers: vec![user_address.to_string()],
			recent_blockhash: None,
			compute_unit_limit,
			summary: TransactionSummary::for_quote(quote),
			metadata,
		}))
	}
}
