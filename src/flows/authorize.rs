//! Redirect step: obtain temporary credentials and send the user to the provider.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	flows::{AuthRequest, OAuthStrategy, Outcome},
	obs::{self, FlowStage},
	session::{RequestTokenState, Session},
};

impl<U> OAuthStrategy<U> {
	/// Requests temporary credentials, parks them in `session`, and returns the redirect to the
	/// provider's authorization page.
	pub async fn authorize(
		&self,
		request: &AuthRequest,
		session: &dyn Session,
	) -> Result<Outcome<U>> {
		let callback = self.resolve_callback(request)?;
		let temporary = obs::observe(self.name(), FlowStage::RequestToken, async {
			self.client.request_token(callback.as_ref()).await.map_err(Error::from)
		})
		.await?;

		#[cfg(feature = "tracing")]
		if callback.is_some() && !temporary.callback_confirmed {
			tracing::warn!(
				strategy = %self.name(),
				"Provider did not confirm the callback URL; continuing with the request token."
			);
		}

		let location = self.descriptor.authorization_url(&temporary.credentials.token);

		session
			.insert(&self.descriptor.session_key, RequestTokenState::from(temporary.credentials));

		Ok(Outcome::Redirect { location })
	}

	/// Resolves the configured callback against the incoming request URL.
	pub fn resolve_callback(&self, request: &AuthRequest) -> Result<Option<Url>> {
		let Some(raw) = self.callback_url.as_deref() else {
			return Ok(None);
		};
		let resolved = match Url::parse(raw) {
			Err(url::ParseError::RelativeUrlWithoutBase) => request.url.join(raw),
			other => other,
		};

		resolved
			.map(Some)
			.map_err(|source| ConfigError::InvalidUrl { value: raw.to_owned(), source }.into())
	}
}
