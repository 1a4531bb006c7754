//! OAuth 1.0a credential pairs with secrets kept out of logs.

// self
use crate::_prelude::*;

/// Redacted secret wrapper for consumer and token secrets.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Credentials identifying the application (the OAuth "client") to the provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerCredentials {
	/// Public consumer key.
	pub key: String,
	/// Shared consumer secret.
	pub secret: TokenSecret,
}
impl ConsumerCredentials {
	/// Pairs a consumer key with its secret.
	pub fn new(key: impl Into<String>, secret: impl Into<TokenSecret>) -> Self {
		Self { key: key.into(), secret: secret.into() }
	}
}

/// Token + secret pair, used for both temporary (request) and access credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCredentials {
	/// Public token value (`oauth_token`).
	pub token: String,
	/// Token secret (`oauth_token_secret`).
	pub secret: TokenSecret,
}
impl TokenCredentials {
	/// Pairs a token with its secret.
	pub fn new(token: impl Into<String>, secret: impl Into<TokenSecret>) -> Self {
		Self { token: token.into(), secret: secret.into() }
	}
}
