//! Validating builder for provider descriptors.

// self
use crate::{
	_prelude::*,
	auth::{SessionKey, StrategyName},
	provider::{ProviderDescriptor, ProviderEndpoints},
};

/// Errors raised while constructing or validating descriptors.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ProviderDescriptorError {
	/// A required endpoint was never configured.
	#[error("Missing {endpoint} endpoint.")]
	MissingEndpoint {
		/// Which endpoint is missing.
		endpoint: &'static str,
	},
	/// Endpoints must be absolute `http`/`https` URLs with a host.
	#[error("The {endpoint} endpoint must be an absolute http(s) URL: {url}.")]
	UnsupportedEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// The default `oauth:<name>` session key is too long.
	#[error("Session key derived from `{name}` is invalid.")]
	InvalidSessionKey {
		/// Strategy name the key was derived from.
		name: String,
	},
}

/// Builder for [`ProviderDescriptor`] values.
#[derive(Debug)]
pub struct ProviderDescriptorBuilder {
	/// Strategy name for the descriptor being constructed.
	pub name: StrategyName,
	/// Request token endpoint.
	pub request_token_endpoint: Option<Url>,
	/// Access token endpoint.
	pub access_token_endpoint: Option<Url>,
	/// User authorization endpoint.
	pub user_authorization_endpoint: Option<Url>,
	/// Profile endpoint.
	pub profile_endpoint: Option<Url>,
	/// Session key; defaults to `oauth:<name>`.
	pub session_key: Option<SessionKey>,
}
impl ProviderDescriptorBuilder {
	/// Creates a new builder seeded with the provided strategy name.
	pub fn new(name: StrategyName) -> Self {
		Self {
			name,
			request_token_endpoint: None,
			access_token_endpoint: None,
			user_authorization_endpoint: None,
			profile_endpoint: None,
			session_key: None,
		}
	}

	/// Sets the request token endpoint.
	pub fn request_token_endpoint(mut self, url: Url) -> Self {
		self.request_token_endpoint = Some(url);

		self
	}

	/// Sets the access token endpoint.
	pub fn access_token_endpoint(mut self, url: Url) -> Self {
		self.access_token_endpoint = Some(url);

		self
	}

	/// Sets the user authorization endpoint.
	pub fn user_authorization_endpoint(mut self, url: Url) -> Self {
		self.user_authorization_endpoint = Some(url);

		self
	}

	/// Sets the profile endpoint.
	pub fn profile_endpoint(mut self, url: Url) -> Self {
		self.profile_endpoint = Some(url);

		self
	}

	/// Overrides the session key.
	pub fn session_key(mut self, key: SessionKey) -> Self {
		self.session_key = Some(key);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<ProviderDescriptor, ProviderDescriptorError> {
		let endpoints = ProviderEndpoints {
			request_token: require("request_token", self.request_token_endpoint)?,
			access_token: require("access_token", self.access_token_endpoint)?,
			user_authorization: require("user_authorization", self.user_authorization_endpoint)?,
			profile: require("profile", self.profile_endpoint)?,
		};
		let session_key = match self.session_key {
			Some(key) => key,
			None => SessionKey::new(format!("oauth:{}", self.name)).map_err(|_| {
				ProviderDescriptorError::InvalidSessionKey { name: self.name.to_string() }
			})?,
		};
		let descriptor = ProviderDescriptor { name: self.name, endpoints, session_key };

		descriptor.validate()?;

		Ok(descriptor)
	}
}

impl ProviderDescriptor {
	fn validate(&self) -> Result<(), ProviderDescriptorError> {
		validate_endpoint("request_token", &self.endpoints.request_token)?;
		validate_endpoint("access_token", &self.endpoints.access_token)?;
		validate_endpoint("user_authorization", &self.endpoints.user_authorization)?;
		validate_endpoint("profile", &self.endpoints.profile)?;

		Ok(())
	}
}

fn require(endpoint: &'static str, url: Option<Url>) -> Result<Url, ProviderDescriptorError> {
	url.ok_or(ProviderDescriptorError::MissingEndpoint { endpoint })
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ProviderDescriptorError> {
	if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() {
		Ok(())
	} else {
		Err(ProviderDescriptorError::UnsupportedEndpoint { endpoint: name, url: url.to_string() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Fixture URL should parse.")
	}

	fn builder() -> ProviderDescriptorBuilder {
		ProviderDescriptor::builder(
			StrategyName::new("example").expect("Strategy name fixture should be valid."),
		)
		.request_token_endpoint(url("https://example.com/oauth/request_token"))
		.access_token_endpoint(url("https://example.com/oauth/access_token"))
		.user_authorization_endpoint(url("http://example.com/oauth/authorize"))
	}

	#[test]
	fn missing_profile_endpoint_is_rejected() {
		let err = builder().build().expect_err("Profile endpoint is mandatory.");

		assert_eq!(err, ProviderDescriptorError::MissingEndpoint { endpoint: "profile" });
	}

	#[test]
	fn non_http_endpoints_are_rejected() {
		let err = builder()
			.profile_endpoint(url("ftp://example.com/me"))
			.build()
			.expect_err("Non-http profile endpoint should be rejected.");

		assert!(matches!(
			err,
			ProviderDescriptorError::UnsupportedEndpoint { endpoint: "profile", .. }
		));
	}

	#[test]
	fn session_key_defaults_to_namespaced_name() {
		let descriptor = builder()
			.profile_endpoint(url("https://example.com/api/me"))
			.build()
			.expect("Descriptor should build with all endpoints set.");

		assert_eq!(descriptor.session_key.as_ref(), "oauth:example");
		assert_eq!(
			descriptor.authorization_url("hh5s93j4hdidpola").as_str(),
			"http://example.com/oauth/authorize?oauth_token=hh5s93j4hdidpola"
		);
	}
}
