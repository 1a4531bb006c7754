//! FreedomWorks sign-in over OAuth 1.0a, normalizing the signed-in account into a
//! provider-neutral profile behind a pluggable authentication strategy.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod freedomworks;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod provider;
pub mod session;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		freedomworks::{FreedomWorksOptions, FreedomWorksStrategy},
		http::ReqwestHttpClient,
		oauth::Consumer,
	};

	/// Consumer key used by integration fixtures.
	pub const TEST_CONSUMER_KEY: &str = "dpf43f3p2l4k3l03";
	/// Consumer secret used by integration fixtures.
	pub const TEST_CONSUMER_SECRET: &str = "kd94hf93k423kf44";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Options pointing every FreedomWorks endpoint at the provided mock base URL.
	pub fn mock_options(base: &str) -> FreedomWorksOptions {
		let endpoint = |path: &str| {
			Url::parse(&format!("{base}{path}")).expect("Mock endpoint should parse successfully.")
		};

		FreedomWorksOptions {
			request_token_url: Some(endpoint("/oauth/request_token")),
			access_token_url: Some(endpoint("/oauth/access_token")),
			user_authorization_url: Some(endpoint("/oauth/authorize")),
			profile_url: Some(endpoint("/api/me")),
			..FreedomWorksOptions::new(TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET)
		}
	}

	/// Constructs a [`FreedomWorksStrategy`] whose OAuth consumer uses the insecure test
	/// transport.
	pub fn build_test_strategy<U, V>(
		options: FreedomWorksOptions,
		verify: V,
	) -> FreedomWorksStrategy<U>
	where
		U: 'static + Send,
		V: 'static + crate::flows::Verify<U>,
	{
		let descriptor =
			options.descriptor().expect("Mock options should form a valid descriptor.");
		let consumer = Consumer::with_transport(
			options.consumer_credentials().expect("Mock options should carry a consumer key."),
			&descriptor,
			options.signature_method,
			test_reqwest_http_client(),
		);

		FreedomWorksStrategy::with_client(options, Arc::new(consumer), verify)
			.expect("Mock options should build a strategy.")
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::Client as ReqwestClient;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{BoxError, Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
