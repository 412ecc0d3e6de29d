//! Token models

use serde::{Deserialize, Serialize};

use super::chain::{EVM_ZERO_ADDRESS, SOLANA_WRAPPED_SOL_MINT};
use super::{Chain, ChainFamily};

/// A token a provider can trade on a given chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	pub chain: Chain,
	/// Contract address, mint or denom (native assets use the chain's placeholder)
	pub address: String,
	pub symbol: String,
	pub name: String,
	pub decimals: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<String>,
}

impl Token {
	pub fn new(chain: Chain, address: String, symbol: String, name: String, decimals: u8) -> Self {
		Self {
			chain,
			address,
			symbol,
			name,
			decimals,
			logo_uri: None,
		}
	}

	/// The chain's native asset, described with its canonical placeholder address
	pub fn native(chain: Chain) -> Self {
		let address = match chain.family() {
			ChainFamily::Evm => EVM_ZERO_ADDRESS.to_string(),
			ChainFamily::Solana => SOLANA_WRAPPED_SOL_MINT.to_string(),
			ChainFamily::Utxo => chain.native_symbol().to_string(),
			ChainFamily::Cosmos => chain.native_denom().unwrap_or_default().to_string(),
		};
		Self::new(
			chain,
			address,
			chain.native_symbol().to_string(),
			chain.native_symbol().to_string(),
			chain.native_decimals(),
		)
	}

	pub fn with_logo_uri(mut self, logo_uri: String) -> Self {
		self.logo_uri = Some(logo_uri);
		self
	}

	pub fn is_native(&self) -> bool {
		self.chain.is_native_token(&self.address)
	}

	/// Key used to de-duplicate token lists gathered from several providers
	pub fn dedup_key(&self) -> String {
		self.address.to_lowercase()
	}
}

/// Common token constants
impl Token {
	pub fn usdc_ethereum() -> Self {
		Self::new(
			Chain::Ethereum,
			"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
			"USDC".to_string(),
			"USD Coin".to_string(),
			6,
		)
	}

	pub fn usdt_ethereum() -> Self {
		Self::new(
			Chain::Ethereum,
			"0xdAC17F958D2ee523a2206206994597C13D831ec7".to_string(),
			"USDT".to_string(),
			"Tether USD".to_string(),
			6,
		)
	}

	pub fn usdc_arbitrum() -> Self {
		Self::new(
			Chain::Arbitrum,
			"0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
			"USDC".to_string(),
			"USD Coin".to_string(),
			6,
		)
	}

	pub fn usdc_solana() -> Self {
		Self::new(
			Chain::Solana,
			"EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
			"USDC".to_string(),
			"USD Coin".to_string(),
			6,
		)
	}
}
