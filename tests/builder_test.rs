//! Tests for the builder pattern implementation

mod mocks;

use std::collections::HashMap;
use std::sync::Arc;

use mocks::entities::MockEntities;
use mocks::MockProvider;
use swap_aggregator::config::{AggregationSettings, ConfigurableValue, ProviderSettings};
use swap_aggregator::mocks::DemoProvider;
use swap_aggregator::{AggregatorBuilder, RankingStrategy, Settings};

/// Settings with `disabled` switched off
fn settings_disabling(disabled: &[&str]) -> Settings {
	let providers: HashMap<String, ProviderSettings> = disabled
		.iter()
		.map(|name| {
			(
				name.to_string(),
				ProviderSettings {
					enabled: false,
					..ProviderSettings::default()
				},
			)
		})
		.collect();

	Settings {
		providers,
		..Settings::default()
	}
}

#[tokio::test]
async fn test_builder_registers_providers() {
	let aggregator = AggregatorBuilder::new()
		.with_provider(Arc::new(MockProvider::quoting("uniswap", "2000")))
		.with_provider(Arc::new(MockProvider::quoting("curve", "1990")))
		.build()
		.unwrap();

	assert_eq!(aggregator.provider_names(), vec!["curve", "uniswap"]);

	let best = aggregator
		.get_best_quote(&MockEntities::same_chain_request())
		.await
		.unwrap();
	assert_eq!(best.provider, "uniswap");
}

#[test]
fn test_builder_skips_disabled_providers() {
	let aggregator = AggregatorBuilder::from_settings(settings_disabling(&["paraswap"]))
		.with_provider(Arc::new(MockProvider::quoting("paraswap", "1")))
		.with_provider(Arc::new(MockProvider::quoting("odos", "1")))
		.build()
		.unwrap();

	assert_eq!(aggregator.provider_names(), vec!["odos"]);
	assert!(aggregator.get_provider("paraswap").is_none());
}

#[test]
fn test_builder_rejects_duplicate_names() {
	let err = AggregatorBuilder::new()
		.with_provider(Arc::new(MockProvider::quoting("dup", "1")))
		.with_provider(Arc::new(MockProvider::quoting("dup", "2")))
		.build()
		.unwrap_err();

	assert_eq!(err.code(), "PROVIDER_EXISTS");
}

#[tokio::test]
async fn test_builder_applies_aggregation_settings() {
	let settings = Settings {
		aggregation: AggregationSettings {
			ranking: RankingStrategy::OutputOnly,
			max_price_impact_percent: Some(1.0),
			default_slippage_percent: 1.0,
		},
		..Settings::default()
	};

	let aggregator = AggregatorBuilder::new()
		.with_settings(settings)
		.with_provider(Arc::new(MockProvider::quoting("low-output", "2000").with_gas("10")))
		.with_provider(Arc::new(MockProvider::quoting("high-output", "2010").with_gas("50")))
		.build()
		.unwrap();

	assert_eq!(aggregator.options().ranking, RankingStrategy::OutputOnly);
	assert_eq!(aggregator.options().max_price_impact_percent, Some(1.0));

	let best = aggregator
		.get_best_quote(&MockEntities::same_chain_request())
		.await
		.unwrap();
	assert_eq!(best.provider, "high-output");
}

#[test]
fn test_builder_with_no_providers() {
	let builder = AggregatorBuilder::new();
	assert_eq!(builder.settings().logging.level, "info");

	let aggregator = builder.build().unwrap();
	assert!(aggregator.provider_names().is_empty());
}

/// Settings giving `provider` the API key `value`
fn settings_with_key(provider: &str, value: ConfigurableValue) -> Settings {
	let mut settings = Settings::default();
	settings.providers.insert(
		provider.to_string(),
		ProviderSettings {
			api_key: Some(value),
			..ProviderSettings::default()
		},
	);
	settings
}

#[tokio::test]
async fn test_configured_api_key_reaches_provider() {
	let builder = AggregatorBuilder::from_settings(settings_with_key(
		"demo-rfq",
		ConfigurableValue::from_plain("rfq-key-5678"),
	));

	let key = builder.api_key("demo-rfq").unwrap();
	assert_eq!(key.as_ref().map(|k| k.hint()), Some("****5678".to_string()));
	assert!(builder.api_key("demo-dex").unwrap().is_none());

	let aggregator = builder
		.with_provider(Arc::new(DemoProvider::new("demo-rfq").requiring_api_key(key)))
		.build()
		.unwrap();
	let quote = aggregator
		.get_best_quote(&MockEntities::same_chain_request())
		.await
		.unwrap();
	assert_eq!(quote.provider, "demo-rfq");
}

#[tokio::test]
async fn test_missing_api_key_fails_only_that_provider() {
	let builder = AggregatorBuilder::from_settings(settings_with_key(
		"demo-rfq",
		ConfigurableValue::from_env("SWAP_TEST_UNSET_RFQ_KEY"),
	));

	let err = builder.api_key("demo-rfq").unwrap_err();
	assert_eq!(err.code(), "MISSING_CREDENTIAL");

	let aggregator = builder
		.with_provider(Arc::new(DemoProvider::new("demo-rfq").requiring_api_key(None)))
		.with_provider(Arc::new(DemoProvider::new("demo-dex")))
		.build()
		.unwrap();
	let quotes = aggregator
		.get_quotes(&MockEntities::same_chain_request())
		.await
		.unwrap();
	assert_eq!(quotes.len(), 1);
	assert_eq!(quotes[0].provider, "demo-dex");
}
