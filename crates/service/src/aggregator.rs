//! Core aggregation service logic

use crate::ranking::{rejection_reason, sort_quotes};
use crate::registry::ProviderRegistry;
use alloy_primitives::U256;
use futures::future::join_all;
use futures::FutureExt;
use std::any::Any;
use std::collections::HashSet;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use swap_config::AggregationSettings;
use swap_types::{
	ApprovalMethod, ApprovalTransaction, Chain, ChainTransaction, ProviderFailure, Quote,
	RankingStrategy, SwapError, SwapProvider, SwapRequest, SwapResult, SwapStatus, Token,
};
use tracing::{debug, info, warn};

/// Ranking behaviour of a [`SwapAggregator`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregatorOptions {
	pub ranking: RankingStrategy,
	/// Quotes with a higher price impact are dropped
	pub max_price_impact_percent: Option<f64>,
}

impl From<&AggregationSettings> for AggregatorOptions {
	fn from(settings: &AggregationSettings) -> Self {
		Self {
			ranking: settings.ranking,
			max_price_impact_percent: settings.max_price_impact_percent,
		}
	}
}

/// Fans requests out to every eligible provider and ranks what comes back
///
/// Fan-outs join on all branches: a slow provider delays the result but
/// never aborts it, and no deadline is imposed here. Callers wanting one
/// wrap the call themselves. Providers are meant to be registered before
/// requests are issued.
#[derive(Debug, Default)]
pub struct SwapAggregator {
	registry: ProviderRegistry,
	options: AggregatorOptions,
}

impl SwapAggregator {
	pub fn new(options: AggregatorOptions) -> Self {
		Self {
			registry: ProviderRegistry::new(),
			options,
		}
	}

	pub fn options(&self) -> &AggregatorOptions {
		&self.options
	}

	pub fn registry(&self) -> &ProviderRegistry {
		&self.registry
	}

	pub fn register(&self, provider: Arc<dyn SwapProvider>) -> SwapResult<()> {
		self.registry.register(provider)
	}

	pub fn unregister(&self, name: &str) -> Option<Arc<dyn SwapProvider>> {
		self.registry.unregister(name)
	}

	pub fn get_provider(&self, name: &str) -> Option<Arc<dyn SwapProvider>> {
		self.registry.get_provider(name)
	}

	pub fn providers(&self) -> Vec<Arc<dyn SwapProvider>> {
		self.registry.providers()
	}

	pub fn providers_for_chain(&self, chain: Chain) -> Vec<Arc<dyn SwapProvider>> {
		self.registry.providers_for_chain(chain)
	}

	pub fn cross_chain_providers(&self) -> Vec<Arc<dyn SwapProvider>> {
		self.registry.cross_chain_providers()
	}

	pub fn provider_names(&self) -> Vec<String> {
		self.registry.provider_names()
	}

	/// Union of every supporting provider's token list for `chain`
	///
	/// Tokens are de-duplicated by lower-cased address, first provider (by
	/// name) wins. A provider's failure only removes its contribution.
	pub async fn get_tokens(&self, chain: Chain) -> SwapResult<Vec<Token>> {
		let providers = self.registry.providers_for_chain(chain);
		if providers.is_empty() {
			return Err(SwapError::NoEligibleProviders {
				context: format!("token list on {}", chain),
			});
		}

		debug!("Fetching tokens on {} from {} providers", chain, providers.len());

		let results = join_all(
			providers
				.iter()
				.map(|provider| isolate(provider.name(), provider.get_tokens(chain))),
		)
		.await;

		let mut seen = HashSet::new();
		let mut tokens = Vec::new();
		for (provider, result) in providers.iter().zip(results) {
			match result {
				Ok(provider_tokens) => {
					for token in provider_tokens {
						if seen.insert(token.dedup_key()) {
							tokens.push(token);
						}
					}
				},
				Err(e) => warn!(
					"Provider {} failed to list tokens on {}: {}",
					provider.name(),
					chain,
					e
				),
			}
		}

		info!("Token list on {}: {} unique tokens", chain, tokens.len());
		Ok(tokens)
	}

	/// Quotes from every eligible provider, best first
	///
	/// Fails with `NO_PROVIDERS` when nobody can serve the route and with
	/// `NO_QUOTES` when no provider produced a rankable quote. Quotes dropped
	/// by the output or price-impact checks are reported as `INVALID_QUOTE`
	/// failures.
	pub async fn get_quotes(&self, request: &SwapRequest) -> SwapResult<Vec<Quote>> {
		let (best, rest) = self.ranked(request).await?;
		let mut quotes = Vec::with_capacity(rest.len() + 1);
		quotes.push(best);
		quotes.extend(rest);
		Ok(quotes)
	}

	/// The top-ranked quote
	pub async fn get_best_quote(&self, request: &SwapRequest) -> SwapResult<Quote> {
		self.ranked(request).await.map(|(best, _)| best)
	}

	/// Materialise `quote` through the provider that issued it
	pub async fn build_transaction(
		&self,
		quote: &Quote,
		user_address: &str,
		recipient: Option<&str>,
	) -> SwapResult<ChainTransaction> {
		let provider = self.registry.require(&quote.provider)?;

		if quote.is_expired() {
			return Err(SwapError::QuoteExpired {
				quote_id: quote.id.clone(),
				expired_at: quote.expires_at,
			});
		}

		let transaction = provider
			.build_transaction_variant(quote, user_address, recipient)
			.await?;

		info!(
			"Built {} {} transaction for quote {} via {}",
			transaction.family(),
			transaction.summary().action,
			quote.id,
			quote.provider
		);
		Ok(transaction)
	}

	/// Whether the trader must approve `provider_name`'s spender first
	pub async fn needs_approval(&self, request: &SwapRequest, provider_name: &str) -> SwapResult<bool> {
		let amount = request.amount_in_smallest_unit_u256()?;
		let provider = self.registry.require(provider_name)?;
		needs_approval_for(provider.as_ref(), request, amount).await
	}

	/// Approval data when one is needed, `None` otherwise
	///
	/// `amount` (smallest units) overrides the request's amount, e.g. to
	/// approve an unlimited allowance.
	pub async fn get_approval_if_needed(
		&self,
		request: &SwapRequest,
		provider_name: &str,
		amount: Option<U256>,
	) -> SwapResult<Option<ApprovalTransaction>> {
		let provider = self.registry.require(provider_name)?;
		let amount = match amount {
			Some(amount) => amount,
			None => request.amount_in_smallest_unit_u256()?,
		};

		if !needs_approval_for(provider.as_ref(), request, amount).await? {
			return Ok(None);
		}

		let chain = request.from_chain();
		let spender = provider.get_spender_address(chain).await?;
		let approval = provider
			.get_approval_transaction(
				chain,
				request.from_token_address(),
				request.user_address(),
				&spender,
				amount,
			)
			.await?;
		Ok(Some(approval))
	}

	/// How the trader authorises `provider_name` for the request's amount
	pub async fn get_approval_method(
		&self,
		request: &SwapRequest,
		provider_name: &str,
	) -> SwapResult<ApprovalMethod> {
		let provider = self.registry.require(provider_name)?;
		let amount = request.amount_in_smallest_unit_u256()?;
		provider
			.get_approval_method(
				request.from_chain(),
				request.from_token_address(),
				request.user_address(),
				amount,
			)
			.await
	}

	/// Settlement status of `tx_hash`
	///
	/// With a provider name the lookup goes to that provider. Without one,
	/// every provider supporting `chain` is asked and the first success in
	/// name order is returned.
	pub async fn get_swap_status(
		&self,
		tx_hash: &str,
		chain: Chain,
		provider_name: Option<&str>,
	) -> SwapResult<SwapStatus> {
		if let Some(name) = provider_name {
			let provider = self.registry.require(name)?;
			return provider.get_swap_status(tx_hash, chain).await;
		}

		let providers = self.registry.providers_for_chain(chain);
		let results = join_all(
			providers
				.iter()
				.map(|provider| isolate(provider.name(), provider.get_swap_status(tx_hash, chain))),
		)
		.await;

		let mut last_error = None;
		for (provider, result) in providers.iter().zip(results) {
			match result {
				Ok(status) => return Ok(status),
				Err(e) => {
					debug!("Provider {} has no status for {}: {}", provider.name(), tx_hash, e);
					last_error = Some(e);
				},
			}
		}

		Err(last_error.unwrap_or_else(|| SwapError::NoEligibleProviders {
			context: format!("status of {} on {}", tx_hash, chain),
		}))
	}

	/// Remove every provider and release its resources
	///
	/// Each provider is disposed exactly once; a second call is a no-op.
	pub async fn dispose(&self) {
		let providers = self.registry.drain();
		if providers.is_empty() {
			return;
		}

		info!("Disposing {} providers", providers.len());
		join_all(providers.iter().map(|provider| {
			AssertUnwindSafe(provider.dispose())
				.catch_unwind()
				.map(move |result| {
					if result.is_err() {
						warn!("Provider {} panicked while disposing", provider.name());
					}
				})
		}))
		.await;
	}

	async fn ranked(&self, request: &SwapRequest) -> SwapResult<(Quote, Vec<Quote>)> {
		request.validate()?;

		let providers = self.eligible_providers(request);
		if providers.is_empty() {
			return Err(SwapError::NoEligibleProviders {
				context: route_label(request),
			});
		}

		info!(
			"Fetching quotes for {} from {} providers",
			route_label(request),
			providers.len()
		);

		let results = join_all(
			providers
				.iter()
				.map(|provider| isolate(provider.name(), provider.get_quote(request))),
		)
		.await;

		let mut quotes = Vec::new();
		let mut failures: Vec<ProviderFailure> = Vec::new();
		for (provider, result) in providers.iter().zip(results) {
			let quote = match result {
				Ok(quote) => quote,
				Err(e) => {
					warn!("Provider {} returned error: {}", provider.name(), e);
					failures.push(e.to_failure(provider.name()));
					continue;
				},
			};

			match rejection_reason(&quote, self.options.max_price_impact_percent) {
				None => {
					debug!("Provider {} quoted {}", provider.name(), quote.output_amount);
					quotes.push(quote);
				},
				Some(reason) => {
					warn!("Dropping quote {} from {}: {}", quote.id, provider.name(), reason);
					let error = SwapError::InvalidQuote {
						provider: provider.name().to_string(),
						reason,
					};
					failures.push(error.to_failure(provider.name()));
				},
			}
		}

		info!(
			"Quote aggregation completed: {} ranked quotes ({} failed or dropped) from {} providers",
			quotes.len(),
			failures.len(),
			providers.len()
		);

		let mut ranked = sort_quotes(quotes, self.options.ranking).into_iter();
		match ranked.next() {
			Some(best) => Ok((best, ranked.collect())),
			None => Err(SwapError::NoQuotesAvailable {
				attempted: providers.len(),
				failures,
			}),
		}
	}

	fn eligible_providers(&self, request: &SwapRequest) -> Vec<Arc<dyn SwapProvider>> {
		if request.is_cross_chain() {
			let (from, to) = (request.from_chain(), request.to_chain());
			self.registry
				.providers()
				.into_iter()
				.filter(|provider| provider.is_cross_chain_supported(from, to))
				.collect()
		} else {
			self.registry.providers_for_chain(request.from_chain())
		}
	}
}

async fn needs_approval_for(
	provider: &dyn SwapProvider,
	request: &SwapRequest,
	amount: U256,
) -> SwapResult<bool> {
	let chain = request.from_chain();
	if request.is_native_input() || !chain.uses_allowances() {
		return Ok(false);
	}

	let allowance = provider
		.check_allowance(chain, request.from_token_address(), request.user_address())
		.await?;
	Ok(allowance < amount)
}

/// Run one fan-out branch, turning a panic into a provider failure
async fn isolate<T, F>(provider: &str, call: F) -> SwapResult<T>
where
	F: Future<Output = SwapResult<T>>,
{
	match AssertUnwindSafe(call).catch_unwind().await {
		Ok(result) => result,
		Err(panic) => {
			let reason = panic_message(panic.as_ref());
			warn!("Provider {} panicked: {}", provider, reason);
			Err(SwapError::ProviderUnavailable {
				provider: provider.to_string(),
				reason: format!("provider panicked: {}", reason),
			})
		},
	}
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
	if let Some(message) = panic.downcast_ref::<&str>() {
		message.to_string()
	} else if let Some(message) = panic.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown panic".to_string()
	}
}

fn route_label(request: &SwapRequest) -> String {
	format!(
		"{} {} on {} -> {} on {}",
		request.amount(),
		request.from_token(),
		request.from_chain(),
		request.to_token(),
		request.to_chain()
	)
}
