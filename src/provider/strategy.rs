//! Profile strategy hook invoked once access credentials are available.
//!
//! Implementations fetch whatever resource identifies the signed-in account and map it into
//! the normalized [`Profile`] without tying flows to any particular provider.

// self
use crate::{
	_prelude::*,
	auth::{Profile, TokenCredentials},
	oauth::OAuthClient,
};

/// Boxed future returned by [`ProfileStrategy::user_profile`].
pub type ProfileFuture<'a> = Pin<Box<dyn Future<Output = Result<Profile>> + 'a + Send>>;

/// Provider-specific profile fetch.
///
/// The flow hands over the shared [`OAuthClient`] so the implementation can issue signed
/// requests with the freshly issued access credentials. `params` carries the extra fields the
/// access-token endpoint returned; providers that embed account data there may use it.
pub trait ProfileStrategy
where
	Self: Send + Sync,
{
	/// Fetches and normalizes the profile for `credentials`.
	fn user_profile<'a>(
		&'a self,
		client: &'a dyn OAuthClient,
		credentials: &'a TokenCredentials,
		params: &'a BTreeMap<String, String>,
	) -> ProfileFuture<'a>;
}
