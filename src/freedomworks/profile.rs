//! `/api/me` fetch and mapping into the normalized profile.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::{Profile, ProfileEmail, ProfileName, TokenCredentials},
	error::ProfileParseError,
	freedomworks::PROVIDER,
	oauth::OAuthClient,
	provider::{ProfileFuture, ProfileStrategy},
};

const EMAIL_TYPE: &str = "main";

/// Profile strategy reading the FreedomWorks account resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreedomWorks {
	profile_url: Url,
}
impl FreedomWorks {
	/// Reads profiles from `profile_url`.
	pub fn new(profile_url: Url) -> Self {
		Self { profile_url }
	}
}
impl ProfileStrategy for FreedomWorks {
	fn user_profile<'a>(
		&'a self,
		client: &'a dyn OAuthClient,
		credentials: &'a TokenCredentials,
		_params: &'a BTreeMap<String, String>,
	) -> ProfileFuture<'a> {
		Box::pin(async move {
			let response = client.get(&self.profile_url, credentials).await?;

			Ok(parse_profile(&response.body)?)
		})
	}
}

#[derive(Deserialize)]
struct Envelope {
	account: Value,
}

#[derive(Deserialize)]
struct Account {
	uid: Uid,
	name: String,
	#[serde(default)]
	first: Option<String>,
	#[serde(default)]
	last: Option<String>,
	#[serde(default)]
	mail: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Uid {
	Text(String),
	Number(serde_json::Number),
}
impl From<Uid> for String {
	fn from(uid: Uid) -> Self {
		match uid {
			Uid::Text(text) => text,
			Uid::Number(number) => number.to_string(),
		}
	}
}

/// Maps a `/api/me` body of shape `{ "account": { uid, name, first?, last?, mail } }` into a
/// [`Profile`].
///
/// `displayName` is `"{first} {last}"` when `first` is non-empty (just `first` when `last` is
/// missing or empty) and the account name otherwise.
pub fn parse_profile(body: &str) -> Result<Profile, ProfileParseError> {
	let mut de = serde_json::Deserializer::from_str(body);
	let envelope: Envelope = serde_path_to_error::deserialize(&mut de)?;

	de.end().map_err(|source| ProfileParseError { path: ".".into(), source })?;

	let account: Account = serde_path_to_error::deserialize(&envelope.account)
		.map_err(|e| ProfileParseError::within("account", e))?;
	let given_name = account.first.filter(|first| !first.is_empty());
	let family_name = account.last.filter(|last| !last.is_empty());
	let display_name = match (&given_name, &family_name) {
		(Some(first), Some(last)) => format!("{first} {last}"),
		(Some(first), None) => first.clone(),
		(None, _) => account.name.clone(),
	};
	let emails = account
		.mail
		.filter(|mail| !mail.is_empty())
		.map(|value| ProfileEmail { value, kind: Some(EMAIL_TYPE.into()) })
		.into_iter()
		.collect();

	Ok(Profile {
		provider: PROVIDER.into(),
		id: account.uid.into(),
		username: account.name,
		display_name,
		name: ProfileName { family_name, given_name },
		emails,
		raw: body.to_owned(),
		json: envelope.account,
	})
}
