//! Swap Aggregator demo
//!
//! Loads settings, registers the demo providers, ranks a sample quote set
//! and builds the winning transaction.

use std::sync::Arc;

use swap_aggregator::mocks::{DemoProvider, DemoSolanaProvider};
use swap_aggregator::{load_config, log_service_info, AggregatorBuilder, BigDecimal, Chain};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	dotenvy::dotenv().ok();

	let settings = load_config()?;
	let builder = AggregatorBuilder::from_settings(settings.clone());
	builder.init_tracing()?;
	log_service_info(&settings);

	let rfq_key = builder.api_key("demo-rfq")?;
	let aggregator = builder
		.with_provider(Arc::new(
			DemoProvider::new("demo-dex").with_gas_in_output(BigDecimal::from(12)),
		))
		.with_provider(Arc::new(
			DemoProvider::new("demo-rfq")
				.with_rate(BigDecimal::from(2004))
				.requiring_api_key(rfq_key),
		))
		.with_provider(Arc::new(
			DemoProvider::new("demo-bridge")
				.with_rate(BigDecimal::from(1990))
				.with_cross_chain(true),
		))
		.with_provider(Arc::new(DemoSolanaProvider::new("demo-solana")))
		.build()?;

	let user = "0x742d35Cc6634C0532925a3b8D2a27F79c5a85b03";
	let request = settings
		.request_builder()
		.from(Chain::Ethereum, "ETH", "native")
		.to(
			Chain::Ethereum,
			"USDC",
			"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
		)
		.amount(BigDecimal::from(1), 18)
		.user(user)
		.build()?;

	let quotes = aggregator.get_quotes(&request).await?;
	for (rank, quote) in quotes.iter().enumerate() {
		info!(
			"#{} {}: {} USDC (gas {} USDC, min {})",
			rank + 1,
			quote.provider,
			quote.output_amount,
			quote.gas.estimated_cost_in_output_token,
			quote.min_output_amount
		);
	}

	if let Some(best) = quotes.first() {
		let approval = aggregator.get_approval_method(&request, &best.provider).await?;
		info!("Approval: {}", approval.kind());

		let transaction = aggregator.build_transaction(best, user, None).await?;
		let summary = transaction.summary();
		info!(
			"Transaction on {}: {} {} {} -> {} {} via {}",
			transaction.chain(),
			summary.action,
			summary.input_amount,
			summary.from_symbol,
			summary.expected_output,
			summary.to_symbol,
			summary.protocol
		);
	}

	aggregator.dispose().await;
	swap_aggregator::config::log_service_shutdown();
	Ok(())
}
