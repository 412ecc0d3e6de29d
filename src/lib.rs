//! Swap Aggregator Library
//!
//! One interface for quotes from many swap, bridge and RFQ providers across
//! EVM, Solana, UTXO and Cosmos chains: parallel fan-out, ranking, approval
//! resolution and chain-appropriate transaction building.
//!
//! ```no_run
//! use std::sync::Arc;
//! use swap_aggregator::{mocks::DemoProvider, AggregatorBuilder, Chain, BigDecimal};
//!
//! # async fn run() -> swap_aggregator::SwapResult<()> {
//! let aggregator = AggregatorBuilder::new()
//! 	.with_provider(Arc::new(DemoProvider::new("demo-dex")))
//! 	.build()?;
//!
//! let request = swap_aggregator::SwapRequest::builder()
//! 	.from(Chain::Ethereum, "ETH", "native")
//! 	.to(Chain::Ethereum, "USDC", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")
//! 	.amount(BigDecimal::from(1), 18)
//! 	.user("0x742d35Cc6634C0532925a3b8D2a27F79c5a85b03")
//! 	.build()?;
//!
//! let best = aggregator.get_best_quote(&request).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use tracing::info;

// Core domain types
pub use swap_types::{
	alloy_primitives,
	bigdecimal,
	chrono,
	serde_json,
	ApiKey,
	ApprovalMethod,
	ApprovalTransaction,
	BigDecimal,
	Chain,
	ChainFamily,
	ChainTransaction,
	EvmTransaction,
	EvmTransactionRequest,
	GasEstimate,
	NoApprovalReason,
	Quote,
	RankingStrategy,
	RouteStep,
	SolanaTransaction,
	SwapError,
	SwapProvider,
	SwapRequest,
	SwapResult,
	SwapState,
	SwapStatus,
	Token,
	TransactionAction,
	TransactionSummary,
	U256,
};

// Service layer
pub use swap_service::{AggregatorOptions, ProviderRegistry, SwapAggregator};

// Config
pub use swap_config::{load_config, log_service_info, LogFormat, Settings};

pub mod models {
	pub use swap_types::*;
}

pub mod config {
	pub use swap_config::*;
}

pub mod service {
	pub use swap_service::*;
}

pub mod mocks;

// Re-exported for provider implementations
pub use async_trait;

/// Builder for a configured [`SwapAggregator`]
#[derive(Debug, Default)]
pub struct AggregatorBuilder {
	settings: Settings,
	providers: Vec<Arc<dyn SwapProvider>>,
}

impl AggregatorBuilder {
	/// Builder with default settings and no providers
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder using loaded settings
	pub fn from_settings(settings: Settings) -> Self {
		Self {
			settings,
			providers: Vec::new(),
		}
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	/// Add a provider; providers disabled in settings are skipped at build time
	pub fn with_provider(mut self, provider: Arc<dyn SwapProvider>) -> Self {
		self.providers.push(provider);
		self
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// API key configured for `provider`, resolved from its configured source
	///
	/// `Ok(None)` when the provider has no key configured. Integrations take
	/// the key at construction, before being added with [`Self::with_provider`].
	pub fn api_key(&self, provider: &str) -> SwapResult<Option<ApiKey>> {
		let key = self.settings.provider_api_key(provider)?;
		if let Some(key) = &key {
			info!("Resolved {}", key);
		}
		Ok(key)
	}

	/// Install the global tracing subscriber described by the logging settings
	///
	/// `RUST_LOG` takes precedence over the configured level. Fails if a
	/// global subscriber is already installed.
	pub fn init_tracing(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let logging = &self.settings.logging;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

		match logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()?;
				} else {
					subscriber.try_init()?;
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()?;
				} else {
					subscriber.try_init()?;
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if logging.structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()?;
				} else {
					subscriber.try_init()?;
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			logging.level, logging.format, logging.structured
		);

		Ok(())
	}

	/// Register every enabled provider and return the aggregator
	///
	/// Fails with `PROVIDER_EXISTS` when two providers share a name.
	pub fn build(self) -> SwapResult<SwapAggregator> {
		let aggregator = SwapAggregator::new(AggregatorOptions::from(&self.settings.aggregation));

		for provider in self.providers {
			if !self.settings.provider_enabled(provider.name()) {
				info!("Skipping provider {} (disabled in configuration)", provider.name());
				continue;
			}
			aggregator.register(provider)?;
		}

		swap_config::log_providers_registered(
			&aggregator.provider_names(),
			&self.settings.disabled_providers(),
		);

		Ok(aggregator)
	}
}
