//! Quote filtering and ranking
//!
//! Pure functions over quote lists; the aggregator composes them after a
//! fan-out. Sorting is stable, so quotes that compare equal keep the order
//! the providers were asked in.

use bigdecimal::{BigDecimal, Zero};
use std::cmp::Ordering;
use swap_types::{Quote, RankingStrategy};

/// Drop quotes with a non-positive output
pub fn filter_valid(quotes: Vec<Quote>) -> Vec<Quote> {
	quotes
		.into_iter()
		.filter(|quote| quote.output_amount > BigDecimal::zero())
		.collect()
}

/// Drop quotes whose price impact exceeds `max_percent`
pub fn filter_by_price_impact(quotes: Vec<Quote>, max_percent: f64) -> Vec<Quote> {
	quotes
		.into_iter()
		.filter(|quote| quote.price_impact_percent <= max_percent)
		.collect()
}

/// Why `quote` cannot be ranked, or `None` when it can
pub fn rejection_reason(quote: &Quote, max_price_impact_percent: Option<f64>) -> Option<String> {
	if quote.output_amount <= BigDecimal::zero() {
		return Some(format!("non-positive output amount {}", quote.output_amount));
	}
	match max_price_impact_percent {
		Some(max) if quote.price_impact_percent > max => Some(format!(
			"price impact {}% exceeds the {}% ceiling",
			quote.price_impact_percent, max
		)),
		_ => None,
	}
}

/// Drop quotes already expired at `now` (Unix seconds)
pub fn filter_unexpired(quotes: Vec<Quote>, now: i64) -> Vec<Quote> {
	quotes
		.into_iter()
		.filter(|quote| !quote.is_expired_at(now))
		.collect()
}

/// Best-first comparison under `strategy`
pub fn compare_quotes(a: &Quote, b: &Quote, strategy: RankingStrategy) -> Ordering {
	a.rank_cmp(b, strategy)
}

/// Sort best-first under `strategy`
pub fn sort_quotes(mut quotes: Vec<Quote>, strategy: RankingStrategy) -> Vec<Quote> {
	quotes.sort_by(|a, b| compare_quotes(a, b, strategy));
	quotes
}

/// The best valid quote, if any
pub fn find_best(quotes: &[Quote], strategy: RankingStrategy) -> Option<Quote> {
	quotes
		.iter()
		.filter(|quote| quote.output_amount > BigDecimal::zero())
		.min_by(|a, b| compare_quotes(a, b, strategy))
		.cloned()
}
