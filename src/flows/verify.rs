//! Verify callback contract that maps provider credentials to an application user.

// self
use crate::{
	_prelude::*,
	auth::{Profile, TokenSecret},
};

/// Boxed future returned by [`Verify::verify`].
pub type VerifyFuture<'a, U> =
	Pin<Box<dyn Future<Output = Result<Verified<U>, BoxError>> + 'a + Send>>;

/// Arguments handed to the verify callback, in protocol order.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifyRequest {
	/// Access token.
	pub token: String,
	/// Access token secret.
	pub token_secret: TokenSecret,
	/// Normalized provider profile.
	pub profile: Profile,
}

/// Verify callback answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verified<U> {
	/// Credentials map to this user.
	User(U),
	/// Credentials are valid at the provider but not acceptable to the application.
	Rejected {
		/// Optional reason surfaced through [`Outcome::Fail`](crate::flows::Outcome::Fail).
		message: Option<String>,
	},
}

/// Application hook resolving provider credentials to a user record.
///
/// Any `Fn(VerifyRequest) -> impl Future<Output = Result<Verified<U>, BoxError>>` closure
/// implements the trait. Errors are returned to the caller as
/// [`Error::Verify`](crate::error::Error::Verify) without inspection or retries.
pub trait Verify<U>
where
	Self: Send + Sync,
{
	/// Resolves `request` to a user, a rejection, or an error.
	fn verify(&self, request: VerifyRequest) -> VerifyFuture<'_, U>;
}
impl<U, F, Fut> Verify<U> for F
where
	F: Send + Sync + Fn(VerifyRequest) -> Fut,
	Fut: 'static + Send + Future<Output = Result<Verified<U>, BoxError>>,
{
	fn verify(&self, request: VerifyRequest) -> VerifyFuture<'_, U> {
		Box::pin(self(request))
	}
}
