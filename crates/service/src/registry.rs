//! Provider registry keyed by provider name

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use swap_types::{Chain, SwapError, SwapProvider, SwapResult};
use tracing::info;

/// Registered providers
///
/// Listings are sorted by provider name so fan-out and tie-breaking are
/// deterministic regardless of insertion order.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
	providers: DashMap<String, Arc<dyn SwapProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a provider under its own name
	pub fn register(&self, provider: Arc<dyn SwapProvider>) -> SwapResult<()> {
		let name = provider.name().to_string();
		match self.providers.entry(name.clone()) {
			Entry::Occupied(_) => Err(SwapError::ProviderExists { provider: name }),
			Entry::Vacant(slot) => {
				info!(
					"Registered provider {} ({} chains, cross-chain: {})",
					name,
					provider.supported_chains().len(),
					provider.supports_cross_chain()
				);
				slot.insert(provider);
				Ok(())
			},
		}
	}

	/// Remove a provider, returning it if it was registered
	pub fn unregister(&self, name: &str) -> Option<Arc<dyn SwapProvider>> {
		let removed = self.providers.remove(name).map(|(_, provider)| provider);
		if removed.is_some() {
			info!("Unregistered provider {}", name);
		}
		removed
	}

	pub fn get_provider(&self, name: &str) -> Option<Arc<dyn SwapProvider>> {
		self.providers.get(name).map(|entry| Arc::clone(entry.value()))
	}

	/// Like [`Self::get_provider`] but fails with `PROVIDER_NOT_FOUND`
	pub fn require(&self, name: &str) -> SwapResult<Arc<dyn SwapProvider>> {
		self.get_provider(name)
			.ok_or_else(|| SwapError::ProviderNotFound {
				provider: name.to_string(),
			})
	}

	/// All providers, sorted by name
	pub fn providers(&self) -> Vec<Arc<dyn SwapProvider>> {
		self.sorted(|_| true)
	}

	pub fn providers_for_chain(&self, chain: Chain) -> Vec<Arc<dyn SwapProvider>> {
		self.sorted(|provider| provider.is_chain_supported(chain))
	}

	/// Providers able to route between two different chains
	pub fn cross_chain_providers(&self) -> Vec<Arc<dyn SwapProvider>> {
		self.sorted(|provider| provider.supports_cross_chain())
	}

	pub fn provider_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.providers.iter().map(|entry| entry.key().clone()).collect();
		names.sort();
		names
	}

	pub fn contains(&self, name: &str) -> bool {
		self.providers.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Remove every provider, sorted by name
	pub fn drain(&self) -> Vec<Arc<dyn SwapProvider>> {
		let names = self.provider_names();
		names
			.iter()
			.filter_map(|name| self.providers.remove(name).map(|(_, provider)| provider))
			.collect()
	}

	fn sorted<F>(&self, keep: F) -> Vec<Arc<dyn SwapProvider>>
	where
		F: Fn(&dyn SwapProvider) -> bool,
	{
		let mut providers: Vec<Arc<dyn SwapProvider>> = self
			.providers
			.iter()
			.filter(|entry| keep(entry.value().as_ref()))
			.map(|entry| Arc::clone(entry.value()))
			.collect();
		providers.sort_by(|a, b| a.name().cmp(b.name()));
		providers
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use swap_types::{Quote, SwapRequest};

	#[derive(Debug)]
	struct NamedProvider {
		name: &'static str,
		chains: Vec<Chain>,
		cross_chain: bool,
	}

	#[async_trait]
	impl SwapProvider for NamedProvider {
		fn name(&self) -> &str {
			self.name
		}

		fn supported_chains(&self) -> &[Chain] {
			&self.chains
		}

		fn supports_cross_chain(&self) -> bool {
			self.cross_chain
		}

		async fn get_quote(&self, _request: &SwapRequest) -> SwapResult<Quote> {
			Err(SwapError::NoRoute {
				provider: self.name.to_string(),
			})
		}
	}

	fn provider(name: &'static str, chains: &[Chain], cross_chain: bool) -> Arc<dyn SwapProvider> {
		Arc::new(NamedProvider {
			name,
			chains: chains.to_vec(),
			cross_chain,
		})
	}

	#[test]
	fn test_register_and_lookup() {
		let registry = ProviderRegistry::new();
		assert!(registry.is_empty());

		registry
			.register(provider("zerox", &[Chain::Ethereum], false))
			.unwrap();
		registry
			.register(provider("jupiter", &[Chain::Solana], false))
			.unwrap();

		assert_eq!(registry.len(), 2);
		assert!(registry.contains("zerox"));
		assert_eq!(registry.get_provider("jupiter").unwrap().name(), "jupiter");
		assert!(registry.get_provider("missing").is_none());
		assert_eq!(registry.require("missing").unwrap_err().code(), "PROVIDER_NOT_FOUND");
	}

	#[test]
	fn test_duplicate_name_is_rejected() {
		let registry = ProviderRegistry::new();
		registry
			.register(provider("lifi", &[Chain::Ethereum], true))
			.unwrap();

		let err = registry
			.register(provider("lifi", &[Chain::Arbitrum], true))
			.unwrap_err();
		assert_eq!(err.code(), "PROVIDER_EXISTS");
		assert_eq!(
			registry.get_provider("lifi").unwrap().supported_chains(),
			&[Chain::Ethereum]
		);
	}

	#[test]
	fn test_listings_are_sorted_and_filtered() {
		let registry = ProviderRegistry::new();
		registry
			.register(provider("zerox", &[Chain::Ethereum, Chain::Base], false))
			.unwrap();
		registry
			.register(provider("across", &[Chain::Ethereum, Chain::Arbitrum], true))
			.unwrap();
		registry
			.register(provider("jupiter", &[Chain::Solana], false))
			.unwrap();

		assert_eq!(registry.provider_names(), vec!["across", "jupiter", "zerox"]);

		let on_ethereum: Vec<String> = registry
			.providers_for_chain(Chain::Ethereum)
			.iter()
			.map(|p| p.name().to_string())
			.collect();
		assert_eq!(on_ethereum, vec!["across", "zerox"]);

		let cross: Vec<String> = registry
			.cross_chain_providers()
			.iter()
			.map(|p| p.name().to_string())
			.collect();
		assert_eq!(cross, vec!["across"]);
	}

	#[test]
	fn test_unregister_and_drain() {
		let registry = ProviderRegistry::new();
		registry
			.register(provider("b", &[Chain::Ethereum], false))
			.unwrap();
		registry
			.register(provider("a", &[Chain::Ethereum], false))
			.unwrap();

		assert!(registry.unregister("b").is_some());
		assert!(registry.unregister("b").is_none());

		registry
			.register(provider("c", &[Chain::Ethereum], false))
			.unwrap();
		let drained: Vec<String> = registry
			.drain()
			.iter()
			.map(|p| p.name().to_string())
			.collect();
		assert_eq!(drained, vec!["a", "c"]);
		assert!(registry.is_empty());
	}
}
