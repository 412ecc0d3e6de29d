//! Swap Configuration
//!
//! Configuration management and startup logging for the swap aggregator.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	AggregationSettings, ConfigValidationError, LogFormat, LoggingSettings, ProviderSettings,
	Settings,
};
pub use startup_logger::{log_providers_registered, log_service_info, log_service_shutdown};
