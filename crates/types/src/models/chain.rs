//! Blockchain network models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EVM zero address, used by most aggregators for the native asset
pub const EVM_ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// EVM "0xEeee...EEeE" sentinel, the other common native-asset placeholder
pub const EVM_NATIVE_SENTINEL: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Solana system program id, used as the native SOL placeholder
pub const SOLANA_SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

/// Wrapped SOL mint, treated as native because programs unwrap it transparently
pub const SOLANA_WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Transaction family a chain belongs to
///
/// The set is closed: every family has exactly one [`crate::ChainTransaction`] variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
	Evm,
	Solana,
	Utxo,
	Cosmos,
}

impl fmt::Display for ChainFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ChainFamily::Evm => "evm",
			ChainFamily::Solana => "solana",
			ChainFamily::Utxo => "utxo",
			ChainFamily::Cosmos => "cosmos",
		};
		write!(f, "{}", name)
	}
}

/// Supported blockchain network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	Ethereum,
	Arbitrum,
	Optimism,
	Polygon,
	Base,
	Bsc,
	Avalanche,
	Solana,
	Bitcoin,
	Litecoin,
	Dogecoin,
	#[serde(rename = "cosmoshub")]
	CosmosHub,
	Osmosis,
}

impl Chain {
	/// Every supported chain, in declaration order
	pub const ALL: [Chain; 13] = [
		Chain::Ethereum,
		Chain::Arbitrum,
		Chain::Optimism,
		Chain::Polygon,
		Chain::Base,
		Chain::Bsc,
		Chain::Avalanche,
		Chain::Solana,
		Chain::Bitcoin,
		Chain::Litecoin,
		Chain::Dogecoin,
		Chain::CosmosHub,
		Chain::Osmosis,
	];

	/// Lower-case identifier used in configs and serialized payloads
	pub fn as_str(&self) -> &'static str {
		match self {
			Chain::Ethereum => "ethereum",
			Chain::Arbitrum => "arbitrum",
			Chain::Optimism => "optimism",
			Chain::Polygon => "polygon",
			Chain::Base => "base",
			Chain::Bsc => "bsc",
			Chain::Avalanche => "avalanche",
			Chain::Solana => "solana",
			Chain::Bitcoin => "bitcoin",
			Chain::Litecoin => "litecoin",
			Chain::Dogecoin => "dogecoin",
			Chain::CosmosHub => "cosmoshub",
			Chain::Osmosis => "osmosis",
		}
	}

	pub fn family(&self) -> ChainFamily {
		match self {
			Chain::Ethereum
			| Chain::Arbitrum
			| Chain::Optimism
			| Chain::Polygon
			| Chain::Base
			| Chain::Bsc
			| Chain::Avalanche => ChainFamily::Evm,
			Chain::Solana => ChainFamily::Solana,
			Chain::Bitcoin | Chain::Litecoin | Chain::Dogecoin => ChainFamily::Utxo,
			Chain::CosmosHub | Chain::Osmosis => ChainFamily::Cosmos,
		}
	}

	/// EIP-155 chain id for EVM chains
	pub fn evm_chain_id(&self) -> Option<u64> {
		match self {
			Chain::Ethereum => Some(1),
			Chain::Arbitrum => Some(42161),
			Chain::Optimism => Some(10),
			Chain::Polygon => Some(137),
			Chain::Base => Some(8453),
			Chain::Bsc => Some(56),
			Chain::Avalanche => Some(43114),
			_ => None,
		}
	}

	/// Look up an EVM chain by its EIP-155 chain id
	pub fn from_evm_chain_id(chain_id: u64) -> Option<Chain> {
		Chain::ALL
			.into_iter()
			.find(|chain| chain.evm_chain_id() == Some(chain_id))
	}

	pub fn is_evm(&self) -> bool {
		self.family() == ChainFamily::Evm
	}

	/// Whether spending a token on this chain requires a prior allowance
	pub fn uses_allowances(&self) -> bool {
		self.is_evm()
	}

	pub fn native_symbol(&self) -> &'static str {
		match self {
			Chain::Ethereum | Chain::Arbitrum | Chain::Optimism | Chain::Base => "ETH",
			Chain::Polygon => "POL",
			Chain::Bsc => "BNB",
			Chain::Avalanche => "AVAX",
			Chain::Solana => "SOL",
			Chain::Bitcoin => "BTC",
			Chain::Litecoin => "LTC",
			Chain::Dogecoin => "DOGE",
			Chain::CosmosHub => "ATOM",
			Chain::Osmosis => "OSMO",
		}
	}

	pub fn native_decimals(&self) -> u8 {
		match self.family() {
			ChainFamily::Evm => 18,
			ChainFamily::Solana => 9,
			ChainFamily::Utxo => 8,
			ChainFamily::Cosmos => 6,
		}
	}

	/// Base denomination of the native asset on Cosmos chains
	pub fn native_denom(&self) -> Option<&'static str> {
		match self {
			Chain::CosmosHub => Some("uatom"),
			Chain::Osmosis => Some("uosmo"),
			_ => None,
		}
	}

	/// Whether `token` identifies this chain's native asset rather than a token contract
	pub fn is_native_token(&self, token: &str) -> bool {
		let token = token.trim();
		if token.is_empty() || token.eq_ignore_ascii_case("native") {
			return true;
		}

		match self.family() {
			ChainFamily::Evm => {
				token.eq_ignore_ascii_case(EVM_ZERO_ADDRESS)
					|| token.eq_ignore_ascii_case(EVM_NATIVE_SENTINEL)
			},
			ChainFamily::Solana => {
				token == SOLANA_SYSTEM_PROGRAM || token == SOLANA_WRAPPED_SOL_MINT
			},
			ChainFamily::Utxo => token.eq_ignore_ascii_case(self.native_symbol()),
			ChainFamily::Cosmos => {
				self.native_denom() == Some(token)
					|| token.eq_ignore_ascii_case(self.native_symbol())
			},
		}
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for Chain {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		let chain = match normalized.as_str() {
			"ethereum" | "eth" | "mainnet" => Chain::Ethereum,
			"arbitrum" | "arb" => Chain::Arbitrum,
			"optimism" | "op" => Chain::Optimism,
			"polygon" | "matic" => Chain::Polygon,
			"base" => Chain::Base,
			"bsc" | "bnb" => Chain::Bsc,
			"avalanche" | "avax" => Chain::Avalanche,
			"solana" | "sol" => Chain::Solana,
			"bitcoin" | "btc" => Chain::Bitcoin,
			"litecoin" | "ltc" => Chain::Litecoin,
			"dogecoin" | "doge" => Chain::Dogecoin,
			"cosmoshub" | "cosmos" => Chain::CosmosHub,
			"osmosis" => Chain::Osmosis,
			_ => return Err(format!("Unknown chain: {}", value)),
		};
		Ok(chain)
	}
}
