//! Fixtures for tests across the workspace
//!
//! Requests and quotes with sensible defaults so tests only spell out what
//! they care about.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::models::chain::{EVM_NATIVE_SENTINEL, SOLANA_WRAPPED_SOL_MINT};
use crate::models::Chain;
use crate::quotes::{GasEstimate, Quote};
use crate::requests::SwapRequest;

pub const TEST_USER: &str = "0x742d35Cc6634C0532925a3b8D2a27F79c5a85b03";
pub const WETH_ETHEREUM: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
pub const USDC_ETHEREUM: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
pub const USDC_ARBITRUM: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";
pub const USDC_SOLANA: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const TEST_SOLANA_USER: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

/// Parse a decimal literal
pub fn dec(value: &str) -> BigDecimal {
	BigDecimal::from_str(value).unwrap_or_else(|_| panic!("invalid decimal literal {}", value))
}

/// 1.5 WETH to USDC on Ethereum
pub fn sample_request() -> SwapRequest {
	SwapRequest::builder()
		.from(Chain::Ethereum, "WETH", WETH_ETHEREUM)
		.to(Chain::Ethereum, "USDC", USDC_ETHEREUM)
		.amount(dec("1.5"), 18)
		.user(TEST_USER)
		.build()
		.expect("sample request is valid")
}

/// 1.5 native ETH to USDC on Ethereum
pub fn native_request() -> SwapRequest {
	SwapRequest::builder()
		.from(Chain::Ethereum, "ETH", EVM_NATIVE_SENTINEL)
		.to(Chain::Ethereum, "USDC", USDC_ETHEREUM)
		.amount(dec("1.5"), 18)
		.user(TEST_USER)
		.build()
		.expect("native request is valid")
}

/// 100 USDC from Ethereum to Arbitrum
pub fn cross_chain_request() -> SwapRequest {
	SwapRequest::builder()
		.from(Chain::Ethereum, "USDC", USDC_ETHEREUM)
		.to(Chain::Arbitrum, "USDC", USDC_ARBITRUM)
		.amount(dec("100"), 6)
		.user(TEST_USER)
		.build()
		.expect("cross-chain request is valid")
}

/// 2 SOL to USDC on Solana
pub fn solana_request() -> SwapRequest {
	SwapRequest::builder()
		.from(Chain::Solana, "SOL", SOLANA_WRAPPED_SOL_MINT)
		.to(Chain::Solana, "USDC", USDC_SOLANA)
		.amount(dec("2"), 9)
		.user(TEST_SOLANA_USER)
		.build()
		.expect("solana request is valid")
}

/// Quote on [`sample_request`] paying out `output`
pub fn sample_quote(provider: &str, output: &str) -> Quote {
	Quote::new(provider, sample_request(), dec(output))
}

/// Quote on [`sample_request`] whose gas costs `gas_in_output` of the output token
pub fn quote_with_gas(provider: &str, output: &str, gas_in_output: &str) -> Quote {
	sample_quote(provider, output)
		.with_gas(GasEstimate::zero("ETH").with_cost_in_output_token(dec(gas_in_output)))
}
