//! Callback step: exchange the verifier, fetch the profile, and run the verify callback.

// self
use crate::{
	_prelude::*,
	error::SessionError,
	flows::{AuthRequest, OAuthStrategy, Outcome, Verified, VerifyRequest},
	obs::{self, FlowStage},
	session::Session,
};

impl<U> OAuthStrategy<U> {
	/// Completes a login from the provider's redirect back to the application.
	///
	/// The stored request token is taken out of the session before it is compared, so two
	/// concurrent callbacks cannot both exchange it. A mismatched token puts it back.
	pub async fn callback(
		&self,
		request: &AuthRequest,
		session: &dyn Session,
	) -> Result<Outcome<U>> {
		let key = &self.descriptor.session_key;
		let returned = request.query("oauth_token").unwrap_or_default();
		let state = session
			.remove(key)
			.ok_or_else(|| SessionError::MissingRequestToken { key: key.to_string() })?;

		if !state.matches(&returned) {
			#[cfg(feature = "tracing")]
			tracing::warn!(
				strategy = %self.name(),
				"Callback request token does not match the session."
			);

			session.insert(key, state);

			return Ok(Outcome::fail("Invalid request token."));
		}

		let verifier = request.query("oauth_verifier");
		let request_credentials = state.credentials();
		let grant = obs::observe(self.name(), FlowStage::AccessToken, async {
			self.client
				.access_token(&request_credentials, verifier.as_deref())
				.await
				.map_err(Error::from)
		})
		.await?;
		let profile = obs::observe(
			self.name(),
			FlowStage::UserProfile,
			self.profile.user_profile(self.client.as_ref(), &grant.credentials, &grant.params),
		)
		.await?;
		let verify_request = VerifyRequest {
			token: grant.credentials.token.clone(),
			token_secret: grant.credentials.secret.clone(),
			profile,
		};
		let verified = obs::observe(self.name(), FlowStage::Verify, async {
			self.verify.verify(verify_request).await.map_err(Error::Verify)
		})
		.await?;

		Ok(match verified {
			Verified::User(user) => Outcome::Success { user },
			Verified::Rejected { message } => Outcome::Fail { message },
		})
	}
}
