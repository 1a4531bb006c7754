//! Caller-facing configuration with FreedomWorks defaults.

// self
use crate::{
	_prelude::*,
	auth::{ConsumerCredentials, SessionKey, StrategyName, TokenSecret},
	error::ConfigError,
	freedomworks::{
		ACCESS_TOKEN_URL, PROFILE_URL, PROVIDER, REQUEST_TOKEN_URL, SESSION_KEY,
		USER_AUTHORIZATION_URL,
	},
	oauth::SignatureMethod,
	provider::ProviderDescriptor,
};

/// Strategy options. Unset fields fall back to the FreedomWorks defaults; set fields always
/// win.
///
/// Deserializes from the conventional camelCase keys (`consumerKey`, `callbackURL`,
/// `requestTokenURL`, ...) so hosts can load it straight from JSON or TOML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreedomWorksOptions {
	/// Consumer key identifying the application.
	pub consumer_key: String,
	/// Consumer secret.
	pub consumer_secret: TokenSecret,
	/// Where the provider sends the user back; may be relative to the login request URL.
	#[serde(default, rename = "callbackURL", skip_serializing_if = "Option::is_none")]
	pub callback_url: Option<String>,
	/// Request token endpoint override.
	#[serde(default, rename = "requestTokenURL", skip_serializing_if = "Option::is_none")]
	pub request_token_url: Option<Url>,
	/// Access token endpoint override.
	#[serde(default, rename = "accessTokenURL", skip_serializing_if = "Option::is_none")]
	pub access_token_url: Option<Url>,
	/// Authorization page override.
	#[serde(default, rename = "userAuthorizationURL", skip_serializing_if = "Option::is_none")]
	pub user_authorization_url: Option<Url>,
	/// Profile endpoint override.
	#[serde(default, rename = "profileURL", skip_serializing_if = "Option::is_none")]
	pub profile_url: Option<Url>,
	/// Session key override.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub session_key: Option<SessionKey>,
	/// Request signature method.
	#[serde(default)]
	pub signature_method: SignatureMethod,
}
impl FreedomWorksOptions {
	/// Options with consumer credentials and every other field defaulted.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<TokenSecret>) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			..Default::default()
		}
	}

	/// Sets the callback URL.
	pub fn callback_url(mut self, callback_url: impl Into<String>) -> Self {
		self.callback_url = Some(callback_url.into());

		self
	}

	/// Consumer credentials for request signing.
	pub fn consumer_credentials(&self) -> Result<ConsumerCredentials, ConfigError> {
		if self.consumer_key.is_empty() {
			return Err(ConfigError::MissingConsumerKey);
		}

		Ok(ConsumerCredentials::new(&self.consumer_key, self.consumer_secret.clone()))
	}

	/// Merges the options with the FreedomWorks defaults into a validated descriptor.
	pub fn descriptor(&self) -> Result<ProviderDescriptor, ConfigError> {
		let session_key = match &self.session_key {
			Some(key) => key.clone(),
			None => SessionKey::new(SESSION_KEY)?,
		};

		ProviderDescriptor::builder(StrategyName::new(PROVIDER)?)
			.request_token_endpoint(or_default(&self.request_token_url, REQUEST_TOKEN_URL)?)
			.access_token_endpoint(or_default(&self.access_token_url, ACCESS_TOKEN_URL)?)
			.user_authorization_endpoint(or_default(
				&self.user_authorization_url,
				USER_AUTHORIZATION_URL,
			)?)
			.profile_endpoint(or_default(&self.profile_url, PROFILE_URL)?)
			.session_key(session_key)
			.build()
			.map_err(ConfigError::from)
	}
}

fn or_default(configured: &Option<Url>, default: &str) -> Result<Url, ConfigError> {
	match configured {
		Some(url) => Ok(url.clone()),
		None => Url::parse(default)
			.map_err(|source| ConfigError::InvalidUrl { value: default.to_owned(), source }),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn unset_options_resolve_to_provider_defaults() {
		let descriptor = FreedomWorksOptions::new("key", "secret")
			.descriptor()
			.expect("Default options should form a valid descriptor.");

		assert_eq!(descriptor.name.as_ref(), "freedomworks");
		assert_eq!(
			descriptor.endpoints.request_token.as_str(),
			"https://connect.freedomworks.org/oauth/request_token"
		);
		assert_eq!(
			descriptor.endpoints.access_token.as_str(),
			"https://connect.freedomworks.org/oauth/access_token"
		);
		assert_eq!(
			descriptor.endpoints.user_authorization.as_str(),
			"http://connect.freedomworks.org/oauth/authorize"
		);
		assert_eq!(
			descriptor.endpoints.profile.as_str(),
			"https://connect.freedomworks.org/api/me"
		);
		assert_eq!(descriptor.session_key.as_ref(), "oauth:freedomworks");
	}

	#[test]
	fn overrides_take_precedence_over_defaults() {
		let options: FreedomWorksOptions = serde_json::from_str(
			r#"{
				"consumerKey": "123-456-789",
				"consumerSecret": "shhh-its-a-secret",
				"callbackURL": "https://www.example.net/auth/freedomworks/callback",
				"requestTokenURL": "https://staging.example.org/oauth/request_token",
				"accessTokenURL": "https://staging.example.org/oauth/access_token",
				"userAuthorizationURL": "https://staging.example.org/oauth/authorize",
				"sessionKey": "oauth:staging",
				"signatureMethod": "HMAC-SHA256"
			}"#,
		)
		.expect("Options should deserialize from camelCase keys.");
		let descriptor = options.descriptor().expect("Overridden options should stay valid.");

		assert_eq!(options.consumer_key, "123-456-789");
		assert_eq!(options.consumer_secret.expose(), "shhh-its-a-secret");
		assert_eq!(
			options.callback_url.as_deref(),
			Some("https://www.example.net/auth/freedomworks/callback")
		);
		assert_eq!(options.signature_method, SignatureMethod::HmacSha256);
		assert_eq!(
			descriptor.endpoints.request_token.as_str(),
			"https://staging.example.org/oauth/request_token"
		);
		assert_eq!(
			descriptor.endpoints.access_token.as_str(),
			"https://staging.example.org/oauth/access_token"
		);
		assert_eq!(
			descriptor.endpoints.user_authorization.as_str(),
			"https://staging.example.org/oauth/authorize"
		);
		assert_eq!(
			descriptor.endpoints.profile.as_str(),
			"https://connect.freedomworks.org/api/me"
		);
		assert_eq!(descriptor.session_key.as_ref(), "oauth:staging");
	}

	#[test]
	fn partial_overrides_keep_remaining_defaults() {
		let options = FreedomWorksOptions {
			access_token_url: Some(
				Url::parse("https://alt.example.org/token").expect("Override URL should parse."),
			),
			..FreedomWorksOptions::new("key", "secret")
		};
		let descriptor = options.descriptor().expect("Partial override should stay valid.");

		assert_eq!(descriptor.endpoints.access_token.as_str(), "https://alt.example.org/token");
		assert_eq!(
			descriptor.endpoints.request_token.as_str(),
			"https://connect.freedomworks.org/oauth/request_token"
		);
		assert_eq!(descriptor.session_key.as_ref(), "oauth:freedomworks");
	}

	#[test]
	fn consumer_key_is_required_for_signing() {
		assert!(matches!(
			FreedomWorksOptions::default().consumer_credentials(),
			Err(ConfigError::MissingConsumerKey)
		));
		assert!(serde_json::from_str::<FreedomWorksOptions>(
			r#"{"consumerKey":"k","consumerSecret":"s","sessionKey":"has space"}"#
		)
		.is_err());
	}
}
