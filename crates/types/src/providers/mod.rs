//! Provider contract and its default algorithms

pub mod defaults;
pub mod traits;

pub use defaults::{build_transaction_variant_from_legacy, resolve_approval_method};
pub use traits::SwapProvider;
