//! Domain entity fixtures for testing

#![allow(dead_code)]

use std::str::FromStr;

use swap_aggregator::{BigDecimal, Chain, SwapRequest, Token};

/// Common test addresses and tokens
pub struct TestConstants;

impl TestConstants {
	pub const USER: &'static str = "0x742d35Cc6634C0532925a3b8D2a27F79c5a85b03";
	pub const SPENDER: &'static str = "0x1111111254EEB25477B68fb85Ed929f73A960582";
	pub const WETH: &'static str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
	pub const USDC: &'static str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
	pub const USDC_ARBITRUM: &'static str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";
	pub const NATIVE: &'static str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";
	pub const SOLANA_USER: &'static str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
	pub const USDC_SOLANA: &'static str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

	pub fn dec(value: &str) -> BigDecimal {
		BigDecimal::from_str(value).unwrap()
	}
}

/// Request builders for tests
pub struct MockEntities;

impl MockEntities {
	/// 1.5 WETH to USDC on Ethereum
	pub fn same_chain_request() -> SwapRequest {
		SwapRequest::builder()
			.from(Chain::Ethereum, "WETH", TestConstants::WETH)
			.to(Chain::Ethereum, "USDC", TestConstants::USDC)
			.amount(TestConstants::dec("1.5"), 18)
			.user(TestConstants::USER)
			.build()
			.unwrap()
	}

	/// 1.5 USDC (6 decimals) to WETH on Ethereum
	pub fn usdc_request() -> SwapRequest {
		SwapRequest::builder()
			.from(Chain::Ethereum, "USDC", TestConstants::USDC)
			.to(Chain::Ethereum, "WETH", TestConstants::WETH)
			.amount(TestConstants::dec("1.5"), 6)
			.user(TestConstants::USER)
			.build()
			.unwrap()
	}

	/// 1 native ETH to USDC on Ethereum
	pub fn native_request() -> SwapRequest {
		SwapRequest::builder()
			.from(Chain::Ethereum, "ETH", TestConstants::NATIVE)
			.to(Chain::Ethereum, "USDC", TestConstants::USDC)
			.amount(TestConstants::dec("1"), 18)
			.user(TestConstants::USER)
			.build()
			.unwrap()
	}

	/// 100 USDC from Ethereum to Arbitrum
	pub fn cross_chain_request() -> SwapRequest {
		SwapRequest::builder()
			.from(Chain::Ethereum, "USDC", TestConstants::USDC)
			.to(Chain::Arbitrum, "USDC", TestConstants::USDC_ARBITRUM)
			.amount(TestConstants::dec("100"), 6)
			.user(TestConstants::USER)
			.build()
			.unwrap()
	}

	/// 25 USDC to SOL on Solana
	pub fn solana_request() -> SwapRequest {
		SwapRequest::builder()
			.from(Chain::Solana, "USDC", TestConstants::USDC_SOLANA)
			.to(Chain::Solana, "SOL", "native")
			.amount(TestConstants::dec("25"), 6)
			.user(TestConstants::SOLANA_USER)
			.build()
			.unwrap()
	}

	pub fn token(chain: Chain, address: &str, symbol: &str) -> Token {
		Token::new(
			chain,
			address.to_string(),
			symbol.to_string(),
			symbol.to_string(),
			18,
		)
	}
}
