//! RFC 5849 request signing: parameter encoding, base strings, and `Authorization` headers.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
use sha2::Sha256;
// self
use crate::{
	_prelude::*,
	auth::{ConsumerCredentials, TokenCredentials},
	error::{ConfigError, TransportError},
	http::HttpMethod,
};

const NONCE_LEN: usize = 32;
const OAUTH_VERSION: &str = "1.0";
// Everything outside ALPHA, DIGIT, `-`, `.`, `_` and `~`.
const OAUTH_RESERVED: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Signature methods understood by the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureMethod {
	/// `HMAC-SHA1`, the method every OAuth 1.0a provider supports.
	#[default]
	#[serde(rename = "HMAC-SHA1")]
	HmacSha1,
	/// `HMAC-SHA256`.
	#[serde(rename = "HMAC-SHA256")]
	HmacSha256,
	/// `PLAINTEXT`; only safe over TLS.
	#[serde(rename = "PLAINTEXT")]
	Plaintext,
}
impl SignatureMethod {
	/// Value sent as `oauth_signature_method`.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethod::HmacSha1 => "HMAC-SHA1",
			SignatureMethod::HmacSha256 => "HMAC-SHA256",
			SignatureMethod::Plaintext => "PLAINTEXT",
		}
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SignatureMethod {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"HMAC-SHA1" => Ok(Self::HmacSha1),
			"HMAC-SHA256" => Ok(Self::HmacSha256),
			"PLAINTEXT" => Ok(Self::Plaintext),
			_ => Err(ConfigError::UnsupportedSignatureMethod(s.to_owned())),
		}
	}
}

/// Everything needed to sign one request.
#[derive(Clone, Copy, Debug)]
pub struct SigningRequest<'a> {
	/// Request verb.
	pub method: HttpMethod,
	/// Target URL; its query parameters are folded into the signature.
	pub url: &'a Url,
	/// Application credentials.
	pub consumer: &'a ConsumerCredentials,
	/// Temporary or access credentials, absent for the request-token call.
	pub token: Option<&'a TokenCredentials>,
	/// Extra protocol parameters such as `oauth_callback` or `oauth_verifier`.
	pub protocol_params: &'a [(&'static str, &'a str)],
	/// Signature method to apply.
	pub signature_method: SignatureMethod,
}
impl SigningRequest<'_> {
	/// Renders the `Authorization` header with a fresh nonce and the current timestamp.
	pub fn authorization_header(&self) -> Result<String, TransportError> {
		self.authorization_header_with(&nonce(), &timestamp())
	}

	/// Renders the `Authorization` header with caller-supplied nonce and timestamp.
	pub fn authorization_header_with(
		&self,
		nonce: &str,
		timestamp: &str,
	) -> Result<String, TransportError> {
		let mut oauth_params = vec![
			("oauth_consumer_key", self.consumer.key.as_str()),
			("oauth_nonce", nonce),
			("oauth_signature_method", self.signature_method.as_str()),
			("oauth_timestamp", timestamp),
			("oauth_version", OAUTH_VERSION),
		];

		if let Some(token) = self.token {
			oauth_params.push(("oauth_token", token.token.as_str()));
		}

		oauth_params.extend(self.protocol_params.iter().copied());

		let base = base_string(self.method, self.url, &oauth_params);
		let signature = sign(
			self.signature_method,
			&base,
			self.consumer.secret.expose(),
			self.token.map(|token| token.secret.expose()).unwrap_or_default(),
		)?;

		oauth_params.push(("oauth_signature", signature.as_str()));
		oauth_params.sort_unstable();

		let rendered = oauth_params
			.iter()
			.map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
			.collect::<Vec<_>>()
			.join(", ");

		Ok(format!("OAuth {rendered}"))
	}
}

/// RFC 5849 §3.6 percent-encoding: unreserved characters pass through, everything else is
/// `%XX` with upper-case hex.
pub fn percent_encode(input: &str) -> String {
	utf8_percent_encode(input, OAUTH_RESERVED).to_string()
}

/// Builds the signature base string from the verb, the URL, and the protocol parameters.
///
/// Query parameters already present on `url` are decoded and merged into the parameter set;
/// the base URI itself drops query and fragment.
pub fn base_string(method: HttpMethod, url: &Url, oauth_params: &[(&str, &str)]) -> String {
	let mut pairs = oauth_params
		.iter()
		.map(|(key, value)| (percent_encode(key), percent_encode(value)))
		.chain(
			url.query_pairs().map(|(key, value)| (percent_encode(&key), percent_encode(&value))),
		)
		.collect::<Vec<_>>();

	pairs.sort_unstable();

	let normalized = pairs
		.iter()
		.map(|(key, value)| format!("{key}={value}"))
		.collect::<Vec<_>>()
		.join("&");
	let mut base_uri = url.clone();

	base_uri.set_query(None);
	base_uri.set_fragment(None);

	format!(
		"{}&{}&{}",
		method.as_str(),
		percent_encode(base_uri.as_str()),
		percent_encode(&normalized)
	)
}

/// Signs `base` with the consumer and token secrets.
pub fn sign(
	method: SignatureMethod,
	base: &str,
	consumer_secret: &str,
	token_secret: &str,
) -> Result<String, TransportError> {
	let key = format!("{}&{}", percent_encode(consumer_secret), percent_encode(token_secret));

	match method {
		SignatureMethod::HmacSha1 => hmac_base64::<Hmac<Sha1>>(&key, base),
		SignatureMethod::HmacSha256 => hmac_base64::<Hmac<Sha256>>(&key, base),
		SignatureMethod::Plaintext => Ok(key),
	}
}

/// 32 alphanumeric characters.
pub fn nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}

/// Current Unix time in seconds.
pub fn timestamp() -> String {
	time::OffsetDateTime::now_utc().unix_timestamp().to_string()
}

fn hmac_base64<M>(key: &str, data: &str) -> Result<String, TransportError>
where
	M: Mac + hmac::digest::KeyInit,
{
	let mut mac = <M as hmac::digest::KeyInit>::new_from_slice(key.as_bytes())
		.map_err(|e| TransportError::Signing { reason: e.to_string() })?;

	mac.update(data.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
