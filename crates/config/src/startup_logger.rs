//! Startup and shutdown logging for the swap aggregator

use crate::Settings;
use std::env;
use tracing::{info, warn};

/// Logs service, platform and configuration details at startup
pub fn log_service_info(settings: &Settings) {
	// The root package name, not this crate's
	let service_name = "swap-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Swap Aggregator Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	info!("📊 Ranking strategy: {:?}", settings.aggregation.ranking);
	match settings.aggregation.max_price_impact_percent {
		Some(max) => info!("📉 Max price impact: {}%", max),
		None => info!("📉 Max price impact: unbounded"),
	}
	info!(
		"🎚️ Default slippage: {}%",
		settings.aggregation.default_slippage_percent
	);

	let mut configured: Vec<_> = settings.providers.iter().collect();
	configured.sort_by(|a, b| a.0.cmp(b.0));
	for (name, provider) in configured {
		if let Some(api_key) = &provider.api_key {
			if api_key.is_plain() {
				warn!("🔑 Provider {} has a plain API key in configuration", name);
			} else {
				info!("🔑 Provider {} API key from {}", name, api_key.description());
			}
		}
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the provider set once registration is done
pub fn log_providers_registered(names: &[String], disabled: &[&str]) {
	info!("🔌 {} provider(s) registered: {}", names.len(), names.join(", "));
	if !disabled.is_empty() {
		info!("⏸️ Disabled by configuration: {}", disabled.join(", "));
	}
	info!("✅ Swap Aggregator ready");
}

pub fn log_service_shutdown() {
	info!("🛑 Swap Aggregator shutting down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}
