//! Generic OAuth 1.0a strategy flow.
//!
//! [`OAuthStrategy`] composes a provider descriptor, an [`OAuthClient`], a
//! [`ProfileStrategy`], and the caller's [`Verify`] callback. A login takes two HTTP requests:
//! the first has no `oauth_token` and yields a redirect to the provider
//! ([`OAuthStrategy::authorize`]); the provider then sends the user back with `oauth_token` and
//! `oauth_verifier`, which [`OAuthStrategy::callback`] turns into a verified user.

pub mod authorize;
pub mod callback;
pub mod verify;

pub use verify::*;

// self
use crate::{
	_prelude::*,
	auth::StrategyName,
	oauth::OAuthClient,
	provider::{ProfileStrategy, ProviderDescriptor},
	session::Session,
};

/// Incoming HTTP request as seen by the strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRequest {
	/// Full request URL, including the query string.
	pub url: Url,
}
impl AuthRequest {
	/// Wraps the request URL.
	pub fn new(url: Url) -> Self {
		Self { url }
	}

	/// First value of the query parameter `name`.
	pub fn query(&self, name: &str) -> Option<String> {
		self.url.query_pairs().find(|(key, _)| key == name).map(|(_, value)| value.into_owned())
	}
}

/// What the hosting framework should do with the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<U> {
	/// Send the user agent to `location`.
	Redirect {
		/// Provider authorization URL.
		location: Url,
	},
	/// Authentication succeeded.
	Success {
		/// Application user returned by the verify callback.
		user: U,
	},
	/// Authentication failed without an internal error.
	Fail {
		/// Optional reason suitable for flash messages.
		message: Option<String>,
	},
}
impl<U> Outcome<U> {
	fn fail(message: &str) -> Self {
		Self::Fail { message: Some(message.to_owned()) }
	}
}

/// OAuth 1.0a login strategy driven by a provider descriptor and a profile strategy.
pub struct OAuthStrategy<U> {
	/// Provider descriptor that defines endpoints and the session key.
	pub descriptor: Arc<ProviderDescriptor>,
	/// Signed-request client used for every provider call.
	pub client: Arc<dyn OAuthClient>,
	/// Provider-specific profile fetch.
	pub profile: Arc<dyn ProfileStrategy>,
	/// Absolute or request-relative callback URL sent with the request-token call.
	pub callback_url: Option<String>,
	verify: Arc<dyn Verify<U>>,
}
impl<U> OAuthStrategy<U> {
	/// Creates a strategy from its collaborators.
	pub fn new(
		descriptor: impl Into<Arc<ProviderDescriptor>>,
		client: Arc<dyn OAuthClient>,
		profile: Arc<dyn ProfileStrategy>,
		verify: impl 'static + Verify<U>,
	) -> Self {
		Self {
			descriptor: descriptor.into(),
			client,
			profile,
			callback_url: None,
			verify: Arc::new(verify),
		}
	}

	/// Name the hosting framework routes on.
	pub fn name(&self) -> &StrategyName {
		&self.descriptor.name
	}

	/// Runs whichever step `request` belongs to.
	///
	/// A provider denial (`denied` query parameter) fails immediately, a request carrying
	/// `oauth_token` is a provider callback, and anything else starts a new login.
	pub async fn authenticate(
		&self,
		request: &AuthRequest,
		session: &dyn Session,
	) -> Result<Outcome<U>> {
		if request.query("denied").is_some() {
			#[cfg(feature = "tracing")]
			tracing::debug!(strategy = %self.name(), "Provider reported a denied authorization.");

			return Ok(Outcome::fail("User denied authorization."));
		}

		if request.query("oauth_token").is_some() {
			self.callback(request, session).await
		} else {
			self.authorize(request, session).await
		}
	}
}
impl<U> Clone for OAuthStrategy<U> {
	fn clone(&self) -> Self {
		Self {
			descriptor: self.descriptor.clone(),
			client: self.client.clone(),
			profile: self.profile.clone(),
			callback_url: self.callback_url.clone(),
			verify: self.verify.clone(),
		}
	}
}
impl<U> Debug for OAuthStrategy<U> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthStrategy")
			.field("descriptor", &self.descriptor)
			.field("callback_url", &self.callback_url)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn query_returns_first_decoded_value() {
		let request = AuthRequest::new(
			Url::parse("https://app.example.com/auth/cb?oauth_token=a%2Bb&oauth_token=second")
				.expect("Request URL fixture should parse."),
		);

		assert_eq!(request.query("oauth_token").as_deref(), Some("a+b"));
		assert!(request.query("oauth_verifier").is_none());
	}
}
