#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use freedomworks_auth::{
	_preludet::*,
	auth::TokenSecret,
	error::TransportError,
	flows::{Verified, VerifyRequest},
	freedomworks::{FreedomWorksOptions, FreedomWorksStrategy},
	http::{HttpFuture, HttpRequest, HttpTransport, ReqwestHttpClient},
	oauth::Consumer,
};

const JDOE: &str = r#"{"account":{"uid":"42","name":"jdoe","first":"Jane","last":"Doe","mail":"jane@example.com"}}"#;

#[derive(Clone)]
struct RecordingTransport {
	inner: ReqwestHttpClient,
	seen: Arc<RwLock<Vec<HttpRequest>>>,
}
impl HttpTransport for RecordingTransport {
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_> {
		self.seen.write().push(request.clone());

		self.inner.execute(request)
	}
}

fn reject_all(_request: VerifyRequest) -> impl Future<Output = Result<Verified<()>, BoxError>> {
	async { Ok(Verified::Rejected { message: None }) }
}

fn build_strategy(server: &MockServer) -> FreedomWorksStrategy<()> {
	build_test_strategy(mock_options(&server.base_url()), reject_all)
}

fn access_secret() -> TokenSecret {
	TokenSecret::new("access-secret")
}

#[tokio::test]
async fn user_profile_normalizes_account() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/me").header_exists("authorization");
			then.status(200).header("content-type", "application/json").body(JDOE);
		})
		.await;
	let profile = strategy
		.user_profile("access-token", &access_secret(), &BTreeMap::new())
		.await
		.expect("Profile fetch should succeed against the mock provider.");

	mock.assert_async().await;

	assert_eq!(profile.provider, "freedomworks");
	assert_eq!(profile.id, "42");
	assert_eq!(profile.username, "jdoe");
	assert_eq!(profile.display_name, "Jane Doe");
	assert_eq!(profile.name.family_name.as_deref(), Some("Doe"));
	assert_eq!(profile.name.given_name.as_deref(), Some("Jane"));
	assert_eq!(profile.primary_email(), Some("jane@example.com"));
	assert_eq!(profile.emails[0].kind.as_deref(), Some("main"));
	assert_eq!(profile.raw, JDOE);
}

#[tokio::test]
async fn user_profile_without_names_uses_username() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/me");
			then.status(200)
				.body(r#"{"account":{"uid":"5","name":"nameless","mail":"n@example.com"}}"#);
		})
		.await;
	let profile = strategy
		.user_profile("access-token", &access_secret(), &BTreeMap::new())
		.await
		.expect("Profile without names should still map.");

	mock.assert_async().await;

	assert_eq!(profile.display_name, "nameless");
	assert_eq!(profile.display_name, profile.username);
}

#[tokio::test]
async fn user_profile_surfaces_upstream_status() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/me");
			then.status(401).body("Invalid OAuth token");
		})
		.await;
	let err = strategy
		.user_profile("expired-token", &access_secret(), &BTreeMap::new())
		.await
		.expect_err("Unauthorized profile fetch should fail.");

	mock.assert_async().await;

	match err {
		Error::Transport(TransportError::Status { status, body }) => {
			assert_eq!(status, 401);
			assert_eq!(body, "Invalid OAuth token");
		},
		other => panic!("Expected a status transport error, got {other:?}."),
	}
}

#[tokio::test]
async fn user_profile_rejects_non_json_body() {
	let server = MockServer::start_async().await;
	let strategy = build_strategy(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/me");
			then.status(200).body("<html>maintenance</html>");
		})
		.await;
	let err = strategy
		.user_profile("access-token", &access_secret(), &BTreeMap::new())
		.await
		.expect_err("HTML body should fail to parse.");

	mock.assert_calls_async(1).await;

	assert!(matches!(err, Error::ProfileParse(_)));
}

#[tokio::test]
async fn user_profile_reports_unreachable_provider() {
	let options = FreedomWorksOptions {
		profile_url: Some(
			Url::parse("http://127.0.0.1:9/api/me").expect("Discard-port URL should parse."),
		),
		..FreedomWorksOptions::new(TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET)
	};
	let strategy: FreedomWorksStrategy<()> = build_test_strategy(options, reject_all);
	let err = strategy
		.user_profile("access-token", &access_secret(), &BTreeMap::new())
		.await
		.expect_err("Closed port should fail at the transport layer.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}

#[tokio::test]
async fn user_profile_signs_with_access_credentials() {
	let server = MockServer::start_async().await;
	let options = mock_options(&server.base_url());
	let descriptor = options.descriptor().expect("Mock options should form a valid descriptor.");
	let seen = Arc::new(RwLock::new(Vec::new()));
	let transport = RecordingTransport { inner: test_reqwest_http_client(), seen: seen.clone() };
	let consumer = Consumer::with_transport(
		options.consumer_credentials().expect("Mock options should carry a consumer key."),
		&descriptor,
		options.signature_method,
		transport,
	);
	let strategy = FreedomWorksStrategy::<()>::with_client(options, Arc::new(consumer), reject_all)
		.expect("Strategy should build around a custom consumer.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/me");
			then.status(200).body(JDOE);
		})
		.await;

	strategy
		.user_profile("access-token", &access_secret(), &BTreeMap::new())
		.await
		.expect("Profile fetch should succeed.");

	mock.assert_async().await;

	let seen = seen.read();

	assert_eq!(seen.len(), 1);

	let authorization = &seen[0].authorization;

	assert!(authorization.starts_with("OAuth "));
	assert!(authorization.contains(&format!("oauth_consumer_key=\"{TEST_CONSUMER_KEY}\"")));
	assert!(authorization.contains("oauth_token=\"access-token\""));
	assert!(authorization.contains("oauth_signature_method=\"HMAC-SHA1\""));
	assert!(authorization.contains("oauth_signature=\""));
	assert!(!authorization.contains("access-secret"));
}
