//! Validation errors for swap requests

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestValidationError {
	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },

	#[error("Invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("Invalid slippage tolerance: {value} (must be between 0 and 100)")]
	InvalidSlippage { value: f64 },

	#[error("Invalid address for {field}: {reason}")]
	InvalidAddress { field: String, reason: String },

	#[error("Source and destination are identical: {token} on {chain}")]
	IdenticalAssets { token: String, chain: String },
}
