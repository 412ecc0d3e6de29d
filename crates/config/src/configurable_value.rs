//! Credentials that come either from the environment or straight from config

use serde::{Deserialize, Serialize};
use std::fmt;
use swap_types::{ApiKey, SwapError, SwapResult};

/// A credential reference: an environment variable name or a literal value
///
/// ```json
/// { "type": "env", "value": "ONEINCH_API_KEY" }
/// { "type": "plain", "value": "dev-key" }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConfigurableValue {
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// Environment variable name, or the literal value
	pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	Env,
	Plain,
}

impl ConfigurableValue {
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Read the environment variable, or return the literal value
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Resolve into `provider`'s API key
	///
	/// An unset environment variable or a blank value is a missing credential.
	pub fn resolve_api_key(&self, provider: &str) -> SwapResult<ApiKey> {
		let key = self.resolve().map_err(|e| match e {
			ConfigurableValueError::EnvironmentVariableNotFound(var) => {
				SwapError::MissingCredential {
					name: format!("{} api key ({})", provider, var),
				}
			},
		})?;
		ApiKey::new(provider, key)
	}

	/// Plain credentials live in the config file itself
	pub fn is_plain(&self) -> bool {
		self.value_type == ValueType::Plain
	}

	/// Log-safe description of where the value comes from
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => "plain value in configuration".to_string(),
		}
	}
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

// Never print plain values
impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

/// `"env:NAME"` references the environment, anything else is literal
impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		match value.strip_prefix("env:") {
			Some(env_var) => Self::from_env(env_var),
			None => Self::from_plain(value),
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;

	#[test]
	fn test_plain_value() {
		let value = ConfigurableValue::from_plain("dev-key");
		assert!(value.is_plain());
		assert_eq!(value.resolve().unwrap(), "dev-key");
		assert_eq!(value.to_string(), "plain:[REDACTED]");
	}

	#[test]
	fn test_env_value() {
		env::set_var("SWAP_TEST_ONEINCH_KEY", "key-from-env");

		let value = ConfigurableValue::from_env("SWAP_TEST_ONEINCH_KEY");
		assert_eq!(value.resolve().unwrap(), "key-from-env");
		let key = value.resolve_api_key("1inch").unwrap();
		assert_eq!(key.expose(), "key-from-env");
		assert_eq!(key.provider(), "1inch");
		assert_eq!(
			value.description(),
			"environment variable 'SWAP_TEST_ONEINCH_KEY'"
		);

		env::remove_var("SWAP_TEST_ONEINCH_KEY");
	}

	#[test]
	fn test_env_value_not_found() {
		let value = ConfigurableValue::from_env("SWAP_TEST_DEFINITELY_UNSET");
		assert_eq!(
			value.resolve(),
			Err(ConfigurableValueError::EnvironmentVariableNotFound(
				"SWAP_TEST_DEFINITELY_UNSET".to_string()
			))
		);

		let err = value.resolve_api_key("lifi").unwrap_err();
		assert_eq!(err.code(), "MISSING_CREDENTIAL");
		assert!(err.to_string().contains("SWAP_TEST_DEFINITELY_UNSET"));
	}

	#[test]
	fn test_blank_plain_key_is_rejected() {
		let err = ConfigurableValue::from_plain("").resolve_api_key("odos").unwrap_err();
		assert_eq!(err.code(), "MISSING_CREDENTIAL");
	}

	#[test]
	fn test_from_string_conversion() {
		assert_eq!(
			ConfigurableValue::from("env:LIFI_KEY"),
			ConfigurableValue::from_env("LIFI_KEY")
		);
		assert_eq!(
			ConfigurableValue::from("abc".to_string()),
			ConfigurableValue::from_plain("abc")
		);
	}

	#[test]
	fn test_serde_shape() {
		let value: ConfigurableValue =
			serde_json::from_str(r#"{"type":"env","value":"ZEROX_API_KEY"}"#).unwrap();
		assert_eq!(value.value_type, ValueType::Env);

		let json = serde_json::to_string(&ConfigurableValue::from_plain("x")).unwrap();
		assert!(json.contains("\"type\":\"plain\""));
	}
}
