//! Error types shared by providers and the aggregator

use serde_json::{json, Value};
use thiserror::Error;

use crate::requests::RequestValidationError;

/// Result type used by every fallible provider and aggregator operation
pub type SwapResult<T> = Result<T, SwapError>;

/// Errors surfaced by providers and the aggregator
///
/// Each variant maps to a stable machine-readable code (see [`SwapError::code`]),
/// so callers can branch on the kind of failure without parsing messages.
#[derive(Error, Debug)]
pub enum SwapError {
	#[error("Quote failed for provider {provider}: {reason}")]
	Quote { provider: String, reason: String },

	#[error("No route found by {provider}")]
	NoRoute { provider: String },

	#[error("Rate limit exceeded for provider {provider}")]
	RateLimited { provider: String },

	#[error("Invalid quote from {provider}: {reason}")]
	InvalidQuote { provider: String, reason: String },

	#[error("Transaction build failed for provider {provider}: {reason}")]
	TransactionBuild { provider: String, reason: String },

	#[error("Approval failed for provider {provider}: {reason}")]
	Approval { provider: String, reason: String },

	#[error("Provider unavailable: {provider} - {reason}")]
	ProviderUnavailable { provider: String, reason: String },

	#[error("Provider not found: {provider}")]
	ProviderNotFound { provider: String },

	#[error("Provider already registered: {provider}")]
	ProviderExists { provider: String },

	#[error("Chain not supported: {chain}")]
	UnsupportedChain { chain: String },

	#[error("Token not supported: {token} on {chain}")]
	UnsupportedToken { token: String, chain: String },

	#[error("Slippage exceeded: expected at least {expected}, got {actual}")]
	SlippageExceeded { expected: String, actual: String },

	#[error("Insufficient liquidity: {reason}")]
	InsufficientLiquidity { reason: String },

	#[error("Quote {quote_id} expired at {expired_at}")]
	QuoteExpired { quote_id: String, expired_at: i64 },

	#[error("Network error: {message}")]
	Network {
		message: String,
		status_code: Option<u16>,
	},

	#[error("Missing credential: {name}")]
	MissingCredential { name: String },

	#[error("Unsupported operation: {operation} for provider {provider}")]
	NotSupported { operation: String, provider: String },

	#[error("No providers available for {context}")]
	NoEligibleProviders { context: String },

	#[error("No quotes available from {attempted} provider(s)")]
	NoQuotesAvailable {
		attempted: usize,
		failures: Vec<ProviderFailure>,
	},

	#[error("Invalid request: {0}")]
	InvalidRequest(#[from] RequestValidationError),

	#[error("Invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// A single provider's failure, recorded when a fan-out produced nothing usable
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProviderFailure {
	pub provider: String,
	pub code: String,
	pub message: String,
}

impl SwapError {
	/// Stable machine-readable code for this error
	pub fn code(&self) -> &'static str {
		match self {
			SwapError::Quote { .. } => "QUOTE_ERROR",
			SwapError::NoRoute { .. } => "NO_ROUTE",
			SwapError::RateLimited { .. } => "RATE_LIMIT",
			SwapError::InvalidQuote { .. } => "INVALID_QUOTE",
			SwapError::TransactionBuild { .. } => "TRANSACTION_BUILD_ERROR",
			SwapError::Approval { .. } => "APPROVAL_ERROR",
			SwapError::ProviderUnavailable { .. } => "PROVIDER_UNAVAILABLE",
			SwapError::ProviderNotFound { .. } => "PROVIDER_NOT_FOUND",
			SwapError::ProviderExists { .. } => "PROVIDER_EXISTS",
			SwapError::UnsupportedChain { .. } => "UNSUPPORTED_CHAIN",
			SwapError::UnsupportedToken { .. } => "UNSUPPORTED_TOKEN",
			SwapError::SlippageExceeded { .. } => "SLIPPAGE_EXCEEDED",
			SwapError::InsufficientLiquidity { .. } => "INSUFFICIENT_LIQUIDITY",
			SwapError::QuoteExpired { .. } => "QUOTE_EXPIRED",
			SwapError::Network { .. } => "NETWORK_ERROR",
			SwapError::MissingCredential { .. } => "MISSING_CREDENTIAL",
			SwapError::NotSupported { .. } => "NOT_SUPPORTED",
			SwapError::NoEligibleProviders { .. } => "NO_PROVIDERS",
			SwapError::NoQuotesAvailable { .. } => "NO_QUOTES",
			SwapError::InvalidRequest(_) => "INVALID_REQUEST",
			SwapError::InvalidAmount { .. } => "INVALID_AMOUNT",
			SwapError::Serialization(_) => "SERIALIZATION_ERROR",
		}
	}

	/// Human-readable message (same as `Display`)
	pub fn message(&self) -> String {
		self.to_string()
	}

	/// Structured details for variants that carry more than a message
	pub fn details(&self) -> Option<Value> {
		match self {
			SwapError::Network {
				status_code: Some(status),
				..
			} => Some(json!({ "statusCode": status })),
			SwapError::QuoteExpired {
				quote_id,
				expired_at,
			} => Some(json!({ "quoteId": quote_id, "expiredAt": expired_at })),
			SwapError::NoQuotesAvailable {
				attempted,
				failures,
			} => Some(json!({ "attempted": attempted, "failures": failures })),
			SwapError::UnsupportedToken { token, chain } => {
				Some(json!({ "token": token, "chain": chain }))
			},
			SwapError::SlippageExceeded { expected, actual } => {
				Some(json!({ "expected": expected, "actual": actual }))
			},
			_ => None,
		}
	}

	/// HTTP status code carried by network errors
	pub fn status_code(&self) -> Option<u16> {
		match self {
			SwapError::Network { status_code, .. } => *status_code,
			SwapError::RateLimited { .. } => Some(429),
			_ => None,
		}
	}

	/// Whether the failure is transient and the same call may succeed later
	pub fn is_retryable(&self) -> bool {
		match self {
			SwapError::RateLimited { .. } | SwapError::ProviderUnavailable { .. } => true,
			SwapError::Network { status_code, .. } => {
				status_code.map_or(true, |status| status >= 500 || status == 408)
			},
			_ => false,
		}
	}

	/// Shorthand for the "operation not offered by this provider" failure
	pub fn not_supported(operation: impl Into<String>, provider: impl Into<String>) -> Self {
		Self::NotSupported {
			operation: operation.into(),
			provider: provider.into(),
		}
	}

	/// Map an HTTP failure status from a provider's remote API onto an error kind
	pub fn from_http_status(provider: impl Into<String>, status_code: u16) -> Self {
		let provider = provider.into();
		match status_code {
			429 => Self::RateLimited { provider },
			401 | 403 => Self::MissingCredential {
				name: format!("{} api key", provider),
			},
			404 => Self::NoRoute { provider },
			503 => Self::ProviderUnavailable {
				provider,
				reason: "Service Unavailable".to_string(),
			},
			_ => Self::Network {
				message: format!("{} responded with HTTP {}", provider, status_code),
				status_code: Some(status_code),
			},
		}
	}

	/// Summarise this error as a provider failure record
	pub fn to_failure(&self, provider: &str) -> ProviderFailure {
		ProviderFailure {
			provider: provider.to_string(),
			code: self.code().to_string(),
			message: self.to_string(),
		}
	}
}

impl From<reqwest::Error> for SwapError {
	fn from(error: reqwest::Error) -> Self {
		SwapError::Network {
			message: error.to_string(),
			status_code: error.status().map(|status| status.as_u16()),
		}
	}
}
