//! Strategy-level error types shared across the OAuth client, flows, and profile parsing.

// self
use crate::{_prelude::*, auth::IdentifierError, provider::ProviderDescriptorError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error used for transport sources and verify-callback failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Network, signing, or upstream status failure while talking to the provider.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Profile response body could not be mapped into a profile.
	#[error(transparent)]
	ProfileParse(#[from] ProfileParseError),
	/// Session state needed by the callback step is missing or unusable.
	#[error(transparent)]
	Session(#[from] SessionError),
	/// Verify callback failed; the source is passed through untouched.
	#[error("Verify callback failed.")]
	Verify(#[source] BoxError),
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Provider descriptor failed validation.
	#[error(transparent)]
	InvalidDescriptor(#[from] ProviderDescriptorError),
	/// Strategy name or session key is malformed.
	#[error(transparent)]
	InvalidIdentifier(#[from] IdentifierError),
	/// Consumer key is required for signing.
	#[error("Consumer key must not be empty.")]
	MissingConsumerKey,
	/// Configured URL (endpoint or callback) cannot be parsed or resolved.
	#[error("URL `{value}` is invalid.")]
	InvalidUrl {
		/// Raw configured value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Signature method name is not supported.
	#[error("Signature method `{0}` is not supported.")]
	UnsupportedSignatureMethod(String),
}

/// Transport-level failures raised by the OAuth client.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Network {
		/// Endpoint that was being called.
		endpoint: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Provider answered with a non-success status.
	#[error("Provider responded with HTTP {status}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response body, kept for diagnostics.
		body: String,
	},
	/// Token endpoint answered 2xx but omitted mandatory fields.
	#[error("Token endpoint returned a malformed response: {reason}.")]
	MalformedTokenResponse {
		/// Which field was missing or invalid.
		reason: String,
	},
	/// Request could not be signed.
	#[error("Request signing failed: {reason}.")]
	Signing {
		/// Signer-supplied reason string.
		reason: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error for `endpoint`.
	pub fn network(endpoint: &Url, src: impl Into<BoxError>) -> Self {
		Self::Network { endpoint: endpoint.to_string(), source: src.into() }
	}
}

/// Profile response body is not the expected JSON document.
#[derive(Debug, ThisError)]
#[error("Profile response could not be parsed at `{path}`.")]
pub struct ProfileParseError {
	/// JSON path where parsing stopped.
	pub path: String,
	/// Structured parsing failure.
	#[source]
	pub source: serde_json::Error,
}
impl ProfileParseError {
	/// Reports a failure inside the `field` member, prefixing the nested path.
	pub fn within(field: &str, e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let mut parsed = Self::from(e);

		parsed.path = if parsed.path == "." {
			field.to_owned()
		} else {
			format!("{field}.{}", parsed.path)
		};

		parsed
	}
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ProfileParseError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self { path, source: e.into_inner() }
	}
}

/// Session failures during the callback step.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum SessionError {
	/// No request-token state was stored under the session key.
	#[error("Failed to find request token in session under `{key}`.")]
	MissingRequestToken {
		/// Session key that was inspected.
		key: String,
	},
}
