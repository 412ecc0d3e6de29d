//! Provider API keys

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{SwapError, SwapResult};

/// Credential a provider integration sends with its remote calls
///
/// The key is wiped from memory on drop. Formatting only ever shows
/// [`ApiKey::hint`].
///
/// ```rust
/// use swap_types::ApiKey;
///
/// let key = ApiKey::new("1inch", "sk-live-9f3a").unwrap();
/// assert_eq!(key.provider(), "1inch");
/// assert_eq!(key.to_string(), "1inch key ****9f3a");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey {
	provider: String,
	key: String,
}

impl ApiKey {
	/// A blank key is a missing credential
	pub fn new(provider: impl Into<String>, key: impl Into<String>) -> SwapResult<Self> {
		let provider = provider.into();
		let key = key.into().trim().to_string();
		if key.is_empty() {
			return Err(SwapError::MissingCredential {
				name: format!("{} api key", provider),
			});
		}
		Ok(Self { provider, key })
	}

	pub fn provider(&self) -> &str {
		&self.provider
	}

	/// Raw key, for a request header or query parameter
	pub fn expose(&self) -> &str {
		&self.key
	}

	/// Last four characters, safe for logs
	pub fn hint(&self) -> String {
		let tail: String = self
			.key
			.chars()
			.rev()
			.take(4)
			.collect::<Vec<_>>()
			.into_iter()
			.rev()
			.collect();
		format!("****{}", tail)
	}

	/// Whether `candidate` equals the key, without early exit on the first mismatch
	pub fn matches(&self, candidate: &str) -> bool {
		let (a, b) = (self.key.as_bytes(), candidate.as_bytes());
		a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ApiKey")
			.field("provider", &self.provider)
			.field("key", &self.hint())
			.finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} key {}", self.provider, self.hint())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_key_is_never_printed() {
		let key = ApiKey::new("jupiter", "jup-secret-77ab").unwrap();
		assert_eq!(key.expose(), "jup-secret-77ab");

		let debug = format!("{:?}", key);
		assert!(debug.contains("****77ab"));
		assert!(!debug.contains("jup-secret"));
		assert_eq!(key.to_string(), "jupiter key ****77ab");
	}

	#[test]
	fn test_blank_key_is_missing_credential() {
		let err = ApiKey::new("lifi", "   ").unwrap_err();
		assert_eq!(err.code(), "MISSING_CREDENTIAL");
		assert!(err.to_string().contains("lifi"));
	}

	#[test]
	fn test_short_key_hint_and_matching() {
		let key = ApiKey::new("rfq-desk", " ab ").unwrap();
		assert_eq!(key.hint(), "****ab");
		assert!(key.matches("ab"));
		assert!(!key.matches("abc"));
		assert!(!key.matches("ax"));
	}
}
