//! Configuration loading utilities

use crate::settings::ConfigValidationError;
use crate::Settings;
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

/// Default config file, without extension
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Prefix of environment overrides, e.g. `SWAP_AGGREGATOR__AGGREGATION__RANKING=output_only`
pub const ENV_PREFIX: &str = "SWAP_AGGREGATOR";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("Failed to load configuration: {0}")]
	Config(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load settings from the config file plus environment overrides
///
/// The file is `CONFIG_PATH` when set, else [`DEFAULT_CONFIG_PATH`]; it is
/// optional and any format the `config` crate understands works. Missing
/// sections fall back to their defaults.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load settings from `path` (extension optional) plus environment overrides
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
