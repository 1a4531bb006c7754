//! Form-encoded token endpoint responses.

// self
use crate::{_prelude::*, auth::TokenCredentials, error::TransportError};

/// Temporary credentials returned by the request-token endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemporaryCredentials {
	/// Request token + secret.
	pub credentials: TokenCredentials,
	/// Whether the provider acknowledged `oauth_callback` (`oauth_callback_confirmed=true`).
	pub callback_confirmed: bool,
	/// Remaining provider-specific parameters.
	pub params: BTreeMap<String, String>,
}

/// Access credentials returned by the access-token endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGrant {
	/// Access token + secret.
	pub credentials: TokenCredentials,
	/// Remaining provider-specific parameters, forwarded to profile strategies.
	pub params: BTreeMap<String, String>,
}

pub(crate) fn parse_temporary_credentials(
	body: &str,
) -> Result<TemporaryCredentials, TransportError> {
	let (credentials, mut params) = parse_token_body(body)?;
	let callback_confirmed = params
		.remove("oauth_callback_confirmed")
		.is_some_and(|value| value.eq_ignore_ascii_case("true"));

	Ok(TemporaryCredentials { credentials, callback_confirmed, params })
}

pub(crate) fn parse_access_grant(body: &str) -> Result<AccessGrant, TransportError> {
	let (credentials, params) = parse_token_body(body)?;

	Ok(AccessGrant { credentials, params })
}

fn parse_token_body(
	body: &str,
) -> Result<(TokenCredentials, BTreeMap<String, String>), TransportError> {
	let mut params = url::form_urlencoded::parse(body.trim().as_bytes())
		.into_owned()
		.collect::<BTreeMap<String, String>>();
	let token = take_required(&mut params, "oauth_token")?;
	let secret = take_required(&mut params, "oauth_token_secret")?;

	Ok((TokenCredentials::new(token, secret), params))
}

fn take_required(
	params: &mut BTreeMap<String, String>,
	field: &'static str,
) -> Result<String, TransportError> {
	match params.remove(field) {
		Some(value) if !value.is_empty() => Ok(value),
		_ => Err(TransportError::MalformedTokenResponse { reason: format!("missing {field}") }),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn temporary_credentials_split_known_fields() {
		let parsed = parse_temporary_credentials(
			"oauth_token=hh5s93j4hdidpola&oauth_token_secret=hdhd0244k9j7ao03&oauth_callback_confirmed=true&extra=1",
		)
		.expect("Well-formed request token body should parse.");

		assert_eq!(parsed.credentials.token, "hh5s93j4hdidpola");
		assert_eq!(parsed.credentials.secret.expose(), "hdhd0244k9j7ao03");
		assert!(parsed.callback_confirmed);
		assert_eq!(parsed.params.get("extra").map(String::as_str), Some("1"));
	}

	#[test]
	fn access_grant_decodes_percent_escapes() {
		let parsed = parse_access_grant("oauth_token=a%2Bb&oauth_token_secret=c%20d")
			.expect("Encoded access token body should parse.");

		assert_eq!(parsed.credentials.token, "a+b");
		assert_eq!(parsed.credentials.secret.expose(), "c d");
		assert!(parsed.params.is_empty());
	}

	#[test]
	fn missing_secret_is_malformed() {
		let err = parse_access_grant("oauth_token=only")
			.expect_err("Body without a token secret must be rejected.");

		assert!(matches!(err, TransportError::MalformedTokenResponse { .. }));
		assert!(parse_access_grant("<html>oops</html>").is_err());
	}
}
