//! Core Quote domain model

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use bigdecimal::{BigDecimal, One, Zero};
use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

pub mod gas;

pub use gas::GasEstimate;

use crate::errors::SwapResult;
use crate::requests::SwapRequest;

/// Default quote lifetime when a provider does not report one
pub const DEFAULT_QUOTE_TTL_SECS: i64 = 60;

/// How quotes are ordered when several providers answer the same request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
	/// Output minus gas cost in the output token, ties broken by raw output
	#[default]
	GasAware,
	/// Raw output amount only
	OutputOnly,
}

/// One hop of a quote's route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
	pub protocol: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub from_token: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub to_token: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pool: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fee_percent: Option<f64>,
	/// Share of the input routed through this step, for split routes
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub portion_percent: Option<f64>,
}

impl RouteStep {
	pub fn new(protocol: impl Into<String>) -> Self {
		Self {
			protocol: protocol.into(),
			from_token: None,
			to_token: None,
			pool: None,
			fee_percent: None,
			portion_percent: None,
		}
	}

	pub fn with_tokens(mut self, from_token: impl Into<String>, to_token: impl Into<String>) -> Self {
		self.from_token = Some(from_token.into());
		self.to_token = Some(to_token.into());
		self
	}

	pub fn with_pool(mut self, pool: impl Into<String>, fee_percent: Option<f64>) -> Self {
		self.pool = Some(pool.into());
		self.fee_percent = fee_percent;
		self
	}
}

/// A provider's priced, time-bounded offer for a [`SwapRequest`]
///
/// Amounts are human-readable decimals in the respective token's units.
/// An expired quote is still a valid value; it just must not be used to
/// build a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
	pub id: String,
	/// Name of the provider that issued the quote
	pub provider: String,
	pub request: SwapRequest,
	pub input_amount: BigDecimal,
	pub output_amount: BigDecimal,
	/// Output after applying the request's slippage tolerance
	pub min_output_amount: BigDecimal,
	/// Output units per input unit
	pub exchange_rate: BigDecimal,
	#[serde(default)]
	pub route: Vec<RouteStep>,
	pub gas: GasEstimate,
	pub price_impact_percent: f64,
	#[serde(default)]
	pub protocols: Vec<String>,
	/// Unix seconds
	pub expires_at: i64,
	/// Unix seconds
	pub created_at: i64,
	/// Integration-owned payload needed later to build the transaction
	#[serde(default)]
	pub metadata: HashMap<String, serde_json::Value>,
}

impl Quote {
	/// Create a quote for `request` paying out `output_amount`
	///
	/// Input amount, minimum output and exchange rate are derived from the
	/// request; gas defaults to the zero estimate of the source chain.
	pub fn new(provider: impl Into<String>, request: SwapRequest, output_amount: BigDecimal) -> Self {
		let now = Utc::now().timestamp();
		let input_amount = request.amount().clone();
		let min_output_amount = apply_slippage(&output_amount, request.slippage_percent());
		let exchange_rate = if input_amount.is_zero() {
			BigDecimal::zero()
		} else {
			&output_amount / &input_amount
		};
		let gas = GasEstimate::zero(request.from_chain().native_symbol());

		Self {
			id: Uuid::new_v4().to_string(),
			provider: provider.into(),
			request,
			input_amount,
			output_amount,
			min_output_amount,
			exchange_rate,
			route: Vec::new(),
			gas,
			price_impact_percent: 0.0,
			protocols: Vec::new(),
			expires_at: now + DEFAULT_QUOTE_TTL_SECS,
			created_at: now,
			metadata: HashMap::new(),
		}
	}

	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	pub fn with_gas(mut self, gas: GasEstimate) -> Self {
		self.gas = gas;
		self
	}

	/// Set the route; the protocol list is derived from the steps
	pub fn with_route(mut self, route: Vec<RouteStep>) -> Self {
		let mut protocols: Vec<String> = Vec::new();
		for step in &route {
			if !protocols.contains(&step.protocol) {
				protocols.push(step.protocol.clone());
			}
		}
		self.protocols = protocols;
		self.route = route;
		self
	}

	pub fn with_price_impact(mut self, percent: f64) -> Self {
		self.price_impact_percent = percent;
		self
	}

	pub fn with_min_output(mut self, min_output_amount: BigDecimal) -> Self {
		self.min_output_amount = min_output_amount;
		self
	}

	/// Set an absolute expiry (Unix seconds)
	pub fn expiring_at(mut self, expires_at: i64) -> Self {
		self.expires_at = expires_at;
		self
	}

	/// Attach integration-owned metadata
	pub fn with_metadata<T: Serialize>(mut self, key: impl Into<String>, value: T) -> SwapResult<Self> {
		self.metadata.insert(key.into(), serde_json::to_value(value)?);
		Ok(self)
	}

	/// Read integration-owned metadata back into a typed value
	pub fn metadata_value<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		self.metadata
			.get(key)
			.and_then(|value| serde_json::from_value(value.clone()).ok())
	}

	pub fn is_expired(&self) -> bool {
		self.is_expired_at(Utc::now().timestamp())
	}

	/// A quote is valid only while `now < expires_at`
	pub fn is_expired_at(&self, now: i64) -> bool {
		now >= self.expires_at
	}

	/// Seconds until expiry, zero once expired
	pub fn seconds_remaining(&self) -> i64 {
		(self.expires_at - Utc::now().timestamp()).max(0)
	}

	pub fn is_cross_chain(&self) -> bool {
		self.request.is_cross_chain()
	}

	/// Output the trader effectively receives under `strategy`
	pub fn effective_output(&self, strategy: RankingStrategy) -> BigDecimal {
		match strategy {
			RankingStrategy::GasAware => {
				&self.output_amount - &self.gas.estimated_cost_in_output_token
			},
			RankingStrategy::OutputOnly => self.output_amount.clone(),
		}
	}

	/// Order two quotes best-first under `strategy`
	///
	/// Gas-aware ordering compares effective output and falls back to raw
	/// output on ties; output-only ordering compares raw output.
	pub fn rank_cmp(&self, other: &Quote, strategy: RankingStrategy) -> Ordering {
		let by_output = other.output_amount.cmp(&self.output_amount);
		match strategy {
			RankingStrategy::GasAware => other
				.effective_output(strategy)
				.cmp(&self.effective_output(strategy))
				.then(by_output),
			RankingStrategy::OutputOnly => by_output,
		}
	}
}

/// `amount × (1 − slippage / 100)`
pub fn apply_slippage(amount: &BigDecimal, slippage_percent: f64) -> BigDecimal {
	// go through the shortest decimal rendering so 0.5 stays exactly 0.5
	let percent = BigDecimal::from_str(&slippage_percent.to_string()).unwrap_or_else(|_| BigDecimal::zero());
	amount * (BigDecimal::one() - percent / BigDecimal::from(100))
}
