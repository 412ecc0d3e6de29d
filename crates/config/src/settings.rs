//! Configuration settings structures

use crate::configurable_value::ConfigurableValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use swap_types::{ApiKey, RankingStrategy, SwapRequestBuilder, SwapResult};
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub aggregation: AggregationSettings,
	/// Per-provider overrides keyed by provider name
	pub providers: HashMap<String, ProviderSettings>,
	pub logging: LoggingSettings,
}

/// Quote aggregation behaviour
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AggregationSettings {
	pub ranking: RankingStrategy,
	/// Quotes above this price impact are dropped
	pub max_price_impact_percent: Option<f64>,
	pub default_slippage_percent: f64,
}

impl Default for AggregationSettings {
	fn default() -> Self {
		Self {
			ranking: RankingStrategy::GasAware,
			max_price_impact_percent: None,
			default_slippage_percent: swap_types::requests::DEFAULT_SLIPPAGE_PERCENT,
		}
	}
}

/// Individual provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderSettings {
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	/// API key, e.g. `{"type": "env", "value": "ONEINCH_API_KEY"}`
	#[serde(default)]
	pub api_key: Option<ConfigurableValue>,
	#[serde(default)]
	pub base_url: Option<String>,
}

fn default_enabled() -> bool {
	true
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			api_key: None,
			base_url: None,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Settings that deserialised but make no sense
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigValidationError {
	#[error("Invalid max price impact: {0} (must be a non-negative number)")]
	InvalidPriceImpact(f64),

	#[error("Invalid default slippage: {0} (must be between 0 and 100)")]
	InvalidSlippage(f64),

	#[error("Invalid base URL for provider {provider}: {url}")]
	InvalidBaseUrl { provider: String, url: String },
}

impl Settings {
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if let Some(max) = self.aggregation.max_price_impact_percent {
			if max.is_nan() || max < 0.0 {
				return Err(ConfigValidationError::InvalidPriceImpact(max));
			}
		}

		let slippage = self.aggregation.default_slippage_percent;
		if !(0.0..=100.0).contains(&slippage) {
			return Err(ConfigValidationError::InvalidSlippage(slippage));
		}

		for (name, provider) in &self.providers {
			if let Some(url) = &provider.base_url {
				if !(url.starts_with("http://") || url.starts_with("https://")) {
					return Err(ConfigValidationError::InvalidBaseUrl {
						provider: name.clone(),
						url: url.clone(),
					});
				}
			}
		}

		Ok(())
	}

	/// Providers absent from the map are enabled
	pub fn provider_enabled(&self, name: &str) -> bool {
		self.providers
			.get(name)
			.map_or(true, |provider| provider.enabled)
	}

	/// Names of providers explicitly disabled in configuration
	pub fn disabled_providers(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self
			.providers
			.iter()
			.filter(|(_, provider)| !provider.enabled)
			.map(|(name, _)| name.as_str())
			.collect();
		names.sort_unstable();
		names
	}

	/// Resolve a provider's API key
	///
	/// `Ok(None)` when none is configured; an environment reference that
	/// cannot be resolved is a missing credential.
	pub fn provider_api_key(&self, name: &str) -> SwapResult<Option<ApiKey>> {
		self.providers
			.get(name)
			.and_then(|p| p.api_key.as_ref())
			.map(|value| value.resolve_api_key(name))
			.transpose()
	}

	pub fn provider_base_url(&self, name: &str) -> Option<&str> {
		self.providers.get(name).and_then(|p| p.base_url.as_deref())
	}

	/// Request builder preloaded with the configured default slippage
	pub fn request_builder(&self) -> SwapRequestBuilder {
		swap_types::SwapRequest::builder().slippage(self.aggregation.default_slippage_percent)
	}
}
