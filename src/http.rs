//! Transport primitives for signed OAuth 1.0a requests.
//!
//! The module exposes [`HttpTransport`] alongside the crate-owned [`HttpRequest`] and
//! [`HttpResponse`] types so downstream crates can plug in custom HTTP clients. The OAuth
//! consumer builds and signs every request before handing it to the transport; transports
//! only move bytes and report the status code.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`HttpTransport::execute`].
pub type HttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// HTTP verbs used by OAuth 1.0a exchanges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// Resource fetches (profile endpoint).
	Get,
	/// Temporary-credential and token requests.
	Post,
}
impl HttpMethod {
	/// Upper-case verb as it appears in the signature base string.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully signed outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// Request verb.
	pub method: HttpMethod,
	/// Target URL including any query string that was signed.
	pub url: Url,
	/// Rendered `Authorization: OAuth ...` header value.
	pub authorization: String,
}

/// Response captured by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}
impl HttpResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP stacks capable of executing signed OAuth requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared by
/// every request a strategy handles, and the returned futures must be `Send` so hosts can
/// drive them on multi-threaded executors. Transports report non-2xx replies as ordinary
/// [`HttpResponse`] values; the OAuth consumer decides how to classify them.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and returns the status plus body.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Token endpoints answer directly, so a custom [`ReqwestClient`] should not be configured to
/// follow redirects across hosts; signed headers are bound to the original URL.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_> {
		use reqwest::{
			Method,
			header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
		};

		Box::pin(async move {
			let HttpRequest { method, url, authorization } = request;
			let builder = match method {
				HttpMethod::Get => self.0.request(Method::GET, url.clone()),
				HttpMethod::Post => self
					.0
					.request(Method::POST, url.clone())
					.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
					.body(""),
			};
			let response = builder
				.header(AUTHORIZATION, authorization)
				.header(ACCEPT, "*/*")
				.send()
				.await
				.map_err(|e| TransportError::network(&url, e))?;
			let status = response.status().as_u16();
			let body = response.text().await.map_err(|e| TransportError::network(&url, e))?;

			Ok(HttpResponse { status, body })
		})
	}
}
