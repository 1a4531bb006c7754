//! FreedomWorks Connect sign-in strategy.
//!
//! [`FreedomWorksStrategy`] fills in the provider's OAuth 1.0a endpoints, wires the generic
//! [`OAuthStrategy`] to a [`Consumer`], and plugs in the [`FreedomWorks`] profile strategy,
//! which reads `/api/me` and normalizes the `account` object:
//!
//! | Profile field | Source |
//! | --- | --- |
//! | `id` | `account.uid` |
//! | `username` | `account.name` |
//! | `displayName` | `first last`, or `name` when `first` is missing |
//! | `name.givenName` / `name.familyName` | `account.first` / `account.last` |
//! | `emails` | `[{ value: account.mail, type: "main" }]` |
//! | `_json` | the `account` object |

pub mod options;
pub mod profile;

pub use options::*;
pub use profile::*;

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	auth::{Profile, TokenCredentials, TokenSecret},
	flows::{OAuthStrategy, Verify},
	oauth::OAuthClient,
	provider::{ProfileStrategy, ProviderDescriptor},
};
#[cfg(feature = "reqwest")] use crate::oauth::Consumer;

/// Strategy name and `provider` label.
pub const PROVIDER: &str = "freedomworks";
/// Default temporary-credential endpoint.
pub const REQUEST_TOKEN_URL: &str = "https://connect.freedomworks.org/oauth/request_token";
/// Default token endpoint.
pub const ACCESS_TOKEN_URL: &str = "https://connect.freedomworks.org/oauth/access_token";
/// Default authorization page. The provider publishes it over plain http.
pub const USER_AUTHORIZATION_URL: &str = "http://connect.freedomworks.org/oauth/authorize";
/// Default profile endpoint.
pub const PROFILE_URL: &str = "https://connect.freedomworks.org/api/me";
/// Default session key.
pub const SESSION_KEY: &str = "oauth:freedomworks";

/// FreedomWorks strategy: the generic OAuth 1.0a flow plus the FreedomWorks profile mapping.
///
/// Dereferences to [`OAuthStrategy`] for `authenticate`, `authorize`, `callback`, and `name`.
pub struct FreedomWorksStrategy<U> {
	inner: OAuthStrategy<U>,
	profile: Arc<FreedomWorks>,
}
impl<U> FreedomWorksStrategy<U> {
	/// Builds the strategy with a reqwest-backed consumer.
	///
	/// Unset endpoints and the session key fall back to the FreedomWorks defaults.
	#[cfg(feature = "reqwest")]
	pub fn new(options: FreedomWorksOptions, verify: impl 'static + Verify<U>) -> Result<Self> {
		let descriptor = options.descriptor()?;
		let consumer =
			Consumer::new(options.consumer_credentials()?, &descriptor, options.signature_method);

		Ok(Self::assemble(options, descriptor, Arc::new(consumer), verify))
	}

	/// Builds the strategy around a caller-provided OAuth client.
	pub fn with_client(
		options: FreedomWorksOptions,
		client: Arc<dyn OAuthClient>,
		verify: impl 'static + Verify<U>,
	) -> Result<Self> {
		let descriptor = options.descriptor()?;

		Ok(Self::assemble(options, descriptor, client, verify))
	}

	fn assemble(
		options: FreedomWorksOptions,
		descriptor: ProviderDescriptor,
		client: Arc<dyn OAuthClient>,
		verify: impl 'static + Verify<U>,
	) -> Self {
		let profile = Arc::new(FreedomWorks::new(descriptor.endpoints.profile.clone()));
		let mut inner = OAuthStrategy::new(descriptor, client, profile.clone(), verify);

		inner.callback_url = options.callback_url;

		Self { inner, profile }
	}

	/// Fetches and normalizes the FreedomWorks profile for an access token.
	///
	/// Issues exactly one signed GET. Transport failures surface as
	/// [`Error::Transport`] and unparseable bodies as [`Error::ProfileParse`]; `params` is
	/// accepted for parity with the generic hook and otherwise ignored.
	pub async fn user_profile(
		&self,
		token: &str,
		token_secret: &TokenSecret,
		params: &BTreeMap<String, String>,
	) -> Result<Profile> {
		let credentials = TokenCredentials::new(token, token_secret.clone());

		self.profile.user_profile(self.inner.client.as_ref(), &credentials, params).await
	}

	/// Underlying generic strategy.
	pub fn strategy(&self) -> &OAuthStrategy<U> {
		&self.inner
	}
}
impl<U> Deref for FreedomWorksStrategy<U> {
	type Target = OAuthStrategy<U>;

	fn deref(&self) -> &Self::Target {
		&self.inner
	}
}
impl<U> Debug for FreedomWorksStrategy<U> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FreedomWorksStrategy").field("inner", &self.inner).finish()
	}
}
