//! Session contract for in-flight request-token state, plus an in-memory implementation.
//!
//! The redirect step stores the temporary credentials under the descriptor's session key and
//! the callback step reads them back. Loading and persisting the session between HTTP requests
//! is the hosting framework's job; this trait only covers access to the already-loaded session.

// self
use crate::{
	_prelude::*,
	auth::{SessionKey, TokenCredentials, TokenSecret},
};

/// Temporary credentials parked between the redirect and the provider callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTokenState {
	/// Request token sent to the authorization page.
	pub oauth_token: String,
	/// Matching secret, needed to sign the access-token exchange.
	pub oauth_token_secret: TokenSecret,
}
impl RequestTokenState {
	/// Returns `true` when `token` is the request token this state was created for.
	pub fn matches(&self, token: &str) -> bool {
		self.oauth_token == token
	}

	/// Rebuilds the credential pair for signing.
	pub fn credentials(&self) -> TokenCredentials {
		TokenCredentials::new(&self.oauth_token, self.oauth_token_secret.clone())
	}
}
impl From<TokenCredentials> for RequestTokenState {
	fn from(credentials: TokenCredentials) -> Self {
		Self { oauth_token: credentials.token, oauth_token_secret: credentials.secret }
	}
}

/// Per-user session storage implemented by the hosting framework.
pub trait Session
where
	Self: Send + Sync,
{
	/// Returns the state stored under `key`, if any.
	fn get(&self, key: &SessionKey) -> Option<RequestTokenState>;

	/// Stores or replaces the state under `key`.
	fn insert(&self, key: &SessionKey, state: RequestTokenState);

	/// Removes and returns the state under `key`.
	fn remove(&self, key: &SessionKey) -> Option<RequestTokenState>;
}

type SessionMap = Arc<RwLock<HashMap<SessionKey, RequestTokenState>>>;

/// Thread-safe session that keeps state in-process for tests and single-node hosts.
#[derive(Clone, Debug, Default)]
pub struct MemorySession(SessionMap);
impl MemorySession {
	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
impl Session for MemorySession {
	fn get(&self, key: &SessionKey) -> Option<RequestTokenState> {
		self.0.read().get(key).cloned()
	}

	fn insert(&self, key: &SessionKey, state: RequestTokenState) {
		self.0.write().insert(key.clone(), state);
	}

	fn remove(&self, key: &SessionKey) -> Option<RequestTokenState> {
		self.0.write().remove(key)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn memory_session_round_trips_state() {
		let session = MemorySession::default();
		let key = SessionKey::new("oauth:test").expect("Session key fixture should be valid.");
		let state = RequestTokenState::from(TokenCredentials::new("rt", "rts"));

		assert!(session.is_empty());

		session.insert(&key, state.clone());

		assert_eq!(session.get(&key), Some(state.clone()));
		assert!(state.matches("rt"));
		assert!(!state.matches("other"));
		assert_eq!(state.credentials().secret.expose(), "rts");
		assert_eq!(session.remove(&key), Some(state));
		assert!(session.get(&key).is_none());
		assert_eq!(session.len(), 0);
	}
}
