//! Immutable provider descriptor shared by the consumer and the strategy flow.

// self
use crate::{
	_prelude::*,
	auth::{SessionKey, StrategyName},
	provider::ProviderDescriptorBuilder,
};

/// Endpoint set declared by a provider descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Temporary-credential (request token) endpoint.
	pub request_token: Url,
	/// Token (access token) endpoint.
	pub access_token: Url,
	/// Resource-owner authorization page users are redirected to.
	pub user_authorization: Url,
	/// Protected resource returning the signed-in account.
	pub profile: Url,
}

/// Immutable provider descriptor consumed by flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
	/// Strategy name the hosting framework routes on.
	pub name: StrategyName,
	/// Endpoint definitions exposed by the provider.
	pub endpoints: ProviderEndpoints,
	/// Session slot for in-flight request-token state.
	pub session_key: SessionKey,
}
impl ProviderDescriptor {
	/// Creates a new builder for the provided strategy name.
	pub fn builder(name: StrategyName) -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::new(name)
	}

	/// Authorization URL for `request_token`, carrying `oauth_token` as a query parameter.
	pub fn authorization_url(&self, request_token: &str) -> Url {
		let mut url = self.endpoints.user_authorization.clone();

		url.query_pairs_mut().append_pair("oauth_token", request_token);

		url
	}
}
