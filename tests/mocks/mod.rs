//! Centralized mocks and fixtures for testing
//!
//! Reusable mock providers and entity fixtures shared by the integration
//! test files.

pub mod entities;
pub mod providers;

#[allow(unused_imports)]
pub use entities::TestConstants;
#[allow(unused_imports)]
pub use providers::{MockBehavior, MockProvider};
