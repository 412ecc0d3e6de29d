//! Swap request model

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, Zero};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::RequestValidationError;

use crate::errors::SwapResult;
use crate::models::{to_smallest_unit, to_smallest_unit_u256, Chain};

/// Default slippage tolerance, in percent
pub const DEFAULT_SLIPPAGE_PERCENT: f64 = 0.5;

/// A caller's request to swap or bridge one asset into another
///
/// Requests are immutable once built. The `with_*` methods consume the
/// request and return a modified copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
	from_chain: Chain,
	to_chain: Chain,
	/// Source token identifier (usually its symbol)
	from_token: String,
	from_token_address: String,
	to_token: String,
	to_token_address: String,
	/// Human-readable amount of the source token
	amount: BigDecimal,
	from_token_decimals: u8,
	user_address: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	recipient_address: Option<String>,
	slippage_percent: f64,
}

impl SwapRequest {
	pub fn builder() -> SwapRequestBuilder {
		SwapRequestBuilder::default()
	}

	pub fn from_chain(&self) -> Chain {
		self.from_chain
	}

	pub fn to_chain(&self) -> Chain {
		self.to_chain
	}

	pub fn from_token(&self) -> &str {
		&self.from_token
	}

	pub fn from_token_address(&self) -> &str {
		&self.from_token_address
	}

	pub fn to_token(&self) -> &str {
		&self.to_token
	}

	pub fn to_token_address(&self) -> &str {
		&self.to_token_address
	}

	pub fn amount(&self) -> &BigDecimal {
		&self.amount
	}

	pub fn from_token_decimals(&self) -> u8 {
		self.from_token_decimals
	}

	pub fn user_address(&self) -> &str {
		&self.user_address
	}

	/// Address receiving the output; the trader unless overridden
	pub fn recipient(&self) -> &str {
		self.recipient_address
			.as_deref()
			.unwrap_or(&self.user_address)
	}

	pub fn slippage_percent(&self) -> f64 {
		self.slippage_percent
	}

	pub fn is_cross_chain(&self) -> bool {
		self.from_chain != self.to_chain
	}

	/// Whether the source asset is the source chain's native asset
	pub fn is_native_input(&self) -> bool {
		self.from_chain.is_native_token(&self.from_token_address)
	}

	/// `amount × 10^decimals`, truncated
	pub fn amount_in_smallest_unit(&self) -> BigInt {
		to_smallest_unit(&self.amount, self.from_token_decimals)
	}

	/// [`Self::amount_in_smallest_unit`] as a 256-bit on-chain amount
	pub fn amount_in_smallest_unit_u256(&self) -> SwapResult<U256> {
		to_smallest_unit_u256(&self.amount, self.from_token_decimals)
	}

	pub fn with_amount(self, amount: BigDecimal) -> Self {
		Self { amount, ..self }
	}

	pub fn with_recipient(self, recipient_address: String) -> Self {
		Self {
			recipient_address: Some(recipient_address),
			..self
		}
	}

	pub fn with_slippage(self, slippage_percent: f64) -> Self {
		Self {
			slippage_percent,
			..self
		}
	}

	/// Validate the request before it is sent to any provider
	pub fn validate(&self) -> Result<(), RequestValidationError> {
		if self.amount <= BigDecimal::zero() {
			return Err(RequestValidationError::InvalidAmount {
				reason: format!("amount must be positive, got {}", self.amount),
			});
		}

		if !(0.0..=100.0).contains(&self.slippage_percent) {
			return Err(RequestValidationError::InvalidSlippage {
				value: self.slippage_percent,
			});
		}

		for (field, value) in [
			("from_token_address", &self.from_token_address),
			("to_token_address", &self.to_token_address),
			("user_address", &self.user_address),
		] {
			if value.trim().is_empty() {
				return Err(RequestValidationError::MissingRequiredField {
					field: field.to_string(),
				});
			}
		}

		if let Some(recipient) = &self.recipient_address {
			if recipient.trim().is_empty() {
				return Err(RequestValidationError::InvalidAddress {
					field: "recipient_address".to_string(),
					reason: "recipient must not be blank".to_string(),
				});
			}
		}

		if !self.is_cross_chain()
			&& self
				.from_token_address
				.eq_ignore_ascii_case(&self.to_token_address)
		{
			return Err(RequestValidationError::IdenticalAssets {
				token: self.from_token.clone(),
				chain: self.from_chain.to_string(),
			});
		}

		Ok(())
	}
}

/// Builder for [`SwapRequest`]
#[derive(Debug, Clone, Default)]
pub struct SwapRequestBuilder {
	from: Option<(Chain, String, String)>,
	to: Option<(Chain, String, String)>,
	amount: Option<(BigDecimal, u8)>,
	user_address: Option<String>,
	recipient_address: Option<String>,
	slippage_percent: Option<f64>,
}

impl SwapRequestBuilder {
	/// Source chain, token identifier and token address
	pub fn from(mut self, chain: Chain, token: impl Into<String>, address: impl Into<String>) -> Self {
		self.from = Some((chain, token.into(), address.into()));
		self
	}

	/// Destination chain, token identifier and token address
	pub fn to(mut self, chain: Chain, token: impl Into<String>, address: impl Into<String>) -> Self {
		self.to = Some((chain, token.into(), address.into()));
		self
	}

	/// Human-readable amount and the source token's decimal count
	pub fn amount(mut self, amount: BigDecimal, decimals: u8) -> Self {
		self.amount = Some((amount, decimals));
		self
	}

	pub fn user(mut self, address: impl Into<String>) -> Self {
		self.user_address = Some(address.into());
		self
	}

	pub fn recipient(mut self, address: impl Into<String>) -> Self {
		self.recipient_address = Some(address.into());
		self
	}

	pub fn slippage(mut self, percent: f64) -> Self {
		self.slippage_percent = Some(percent);
		self
	}

	/// Assemble and validate the request
	pub fn build(self) -> Result<SwapRequest, RequestValidationError> {
		let missing = |field: &str| RequestValidationError::MissingRequiredField {
			field: field.to_string(),
		};

		let (from_chain, from_token, from_token_address) = self.from.ok_or_else(|| missing("from"))?;
		let (to_chain, to_token, to_token_address) = self.to.ok_or_else(|| missing("to"))?;
		let (amount, from_token_decimals) = self.amount.ok_or_else(|| missing("amount"))?;
		let user_address = self.user_address.ok_or_else(|| missing("user_address"))?;

		let request = SwapRequest {
			from_chain,
			to_chain,
			from_token,
			from_token_address,
			to_token,
			to_token_address,
			amount,
			from_token_decimals,
			user_address,
			recipient_address: self.recipient_address,
			slippage_percent: self.slippage_percent.unwrap_or(DEFAULT_SLIPPAGE_PERCENT),
		};
		request.validate()?;
		Ok(request)
	}
}
