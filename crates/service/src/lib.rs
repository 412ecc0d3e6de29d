//! Swap Service
//!
//! Provider registry, quote ranking and the aggregation service.

pub mod aggregator;
pub mod ranking;
pub mod registry;

pub use aggregator::{AggregatorOptions, SwapAggregator};
pub use ranking::{
	compare_quotes, filter_by_price_impact, filter_unexpired, filter_valid, find_best, sort_quotes,
};
pub use registry::ProviderRegistry;
