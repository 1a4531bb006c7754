//! OAuth 1.0a client: the signed-request capability strategies delegate to.
//!
//! [`OAuthClient`] is the seam between the generic strategy flow and the protocol work
//! (nonces, timestamps, signatures, token exchanges). [`Consumer`] is the stock
//! implementation and runs over any [`HttpTransport`].

pub mod response;
pub mod signature;

pub use response::*;
pub use signature::*;

// self
use crate::{
	_prelude::*,
	auth::{ConsumerCredentials, TokenCredentials},
	error::TransportError,
	http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport},
	provider::ProviderDescriptor,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// `oauth_callback` value used when no callback URL is configured.
pub const OUT_OF_BAND_CALLBACK: &str = "oob";

/// Boxed future returned by [`OAuthClient`] operations.
pub type OAuthFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// Signed-request capability consumed by strategies.
///
/// All three operations perform exactly one outbound request and never retry; timeouts are
/// whatever the underlying transport enforces.
pub trait OAuthClient
where
	Self: Send + Sync,
{
	/// Obtains temporary credentials, announcing `callback` (or `oob`) to the provider.
	fn request_token<'a>(
		&'a self,
		callback: Option<&'a Url>,
	) -> OAuthFuture<'a, TemporaryCredentials>;

	/// Exchanges authorized temporary credentials (plus verifier) for access credentials.
	fn access_token<'a>(
		&'a self,
		request: &'a TokenCredentials,
		verifier: Option<&'a str>,
	) -> OAuthFuture<'a, AccessGrant>;

	/// Performs a signed GET against a protected resource.
	///
	/// Non-2xx replies resolve to [`TransportError::Status`].
	fn get<'a>(
		&'a self,
		url: &'a Url,
		credentials: &'a TokenCredentials,
	) -> OAuthFuture<'a, HttpResponse>;
}

/// Stock [`OAuthClient`] bound to one provider's token endpoints.
pub struct Consumer<T>
where
	T: ?Sized + HttpTransport,
{
	credentials: ConsumerCredentials,
	request_token_url: Url,
	access_token_url: Url,
	signature_method: SignatureMethod,
	transport: Arc<T>,
}
impl<T> Consumer<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a consumer that reuses the caller-provided transport.
	pub fn with_transport(
		credentials: ConsumerCredentials,
		descriptor: &ProviderDescriptor,
		signature_method: SignatureMethod,
		transport: impl Into<Arc<T>>,
	) -> Self {
		Self {
			credentials,
			request_token_url: descriptor.endpoints.request_token.clone(),
			access_token_url: descriptor.endpoints.access_token.clone(),
			signature_method,
			transport: transport.into(),
		}
	}

	/// Signature method applied to every request.
	pub fn signature_method(&self) -> SignatureMethod {
		self.signature_method
	}

	async fn send(
		&self,
		method: HttpMethod,
		url: &Url,
		token: Option<&TokenCredentials>,
		protocol_params: &[(&'static str, &str)],
	) -> Result<HttpResponse, TransportError> {
		let authorization = SigningRequest {
			method,
			url,
			consumer: &self.credentials,
			token,
			protocol_params,
			signature_method: self.signature_method,
		}
		.authorization_header()?;
		let response =
			self.transport.execute(HttpRequest { method, url: url.clone(), authorization }).await?;

		if response.is_success() {
			Ok(response)
		} else {
			Err(TransportError::Status { status: response.status, body: response.body })
		}
	}
}
#[cfg(feature = "reqwest")]
impl Consumer<ReqwestHttpClient> {
	/// Creates a consumer backed by a default reqwest client.
	pub fn new(
		credentials: ConsumerCredentials,
		descriptor: &ProviderDescriptor,
		signature_method: SignatureMethod,
	) -> Self {
		Self::with_transport(
			credentials,
			descriptor,
			signature_method,
			ReqwestHttpClient::default(),
		)
	}
}
impl<T> OAuthClient for Consumer<T>
where
	T: ?Sized + HttpTransport,
{
	fn request_token<'a>(
		&'a self,
		callback: Option<&'a Url>,
	) -> OAuthFuture<'a, TemporaryCredentials> {
		Box::pin(async move {
			let callback = callback.map(Url::as_str).unwrap_or(OUT_OF_BAND_CALLBACK);
			let protocol_params = [("oauth_callback", callback)];
			let response =
				self.send(HttpMethod::Post, &self.request_token_url, None, &protocol_params).await?;

			parse_temporary_credentials(&response.body)
		})
	}

	fn access_token<'a>(
		&'a self,
		request: &'a TokenCredentials,
		verifier: Option<&'a str>,
	) -> OAuthFuture<'a, AccessGrant> {
		Box::pin(async move {
			let verifier_param = verifier.map(|value| [("oauth_verifier", value)]);
			let protocol_params =
				verifier_param.as_ref().map(|param| param.as_slice()).unwrap_or(&[]);
			let response = self
				.send(HttpMethod::Post, &self.access_token_url, Some(request), protocol_params)
				.await?;

			parse_access_grant(&response.body)
		})
	}

	fn get<'a>(
		&'a self,
		url: &'a Url,
		credentials: &'a TokenCredentials,
	) -> OAuthFuture<'a, HttpResponse> {
		Box::pin(self.send(HttpMethod::Get, url, Some(credentials), &[]))
	}
}
impl<T> Debug for Consumer<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Consumer")
			.field("consumer_key", &self.credentials.key)
			.field("request_token_url", &self.request_token_url)
			.field("access_token_url", &self.access_token_url)
			.field("signature_method", &self.signature_method)
			.finish()
	}
}
