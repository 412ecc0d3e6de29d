//! Shared domain models: chains, tokens, amounts and API keys

pub mod amount;
pub mod api_key;
pub mod chain;
pub mod token;

pub use amount::{
	bigint_to_u256, from_smallest_unit, to_smallest_unit, to_smallest_unit_u256, u256_to_bigint,
};
pub use api_key::ApiKey;
pub use chain::{Chain, ChainFamily};
pub use token::Token;
