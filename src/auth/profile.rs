//! Provider-independent user profile handed to verify callbacks.

// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Normalized user profile produced by a profile strategy.
///
/// Serializes with the conventional field names (`displayName`, `_raw`, `_json`, ...) so
/// hosts can persist or forward it without a translation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	/// Provider label (for example `freedomworks`).
	pub provider: String,
	/// Provider account identifier.
	pub id: String,
	/// Provider account name.
	pub username: String,
	/// Human-readable name.
	pub display_name: String,
	/// Structured name parts.
	pub name: ProfileName,
	/// Email addresses in provider order.
	pub emails: Vec<ProfileEmail>,
	/// Original response body.
	#[serde(rename = "_raw")]
	pub raw: String,
	/// Parsed provider payload.
	#[serde(rename = "_json")]
	pub json: Value,
}
impl Profile {
	/// First email address, if the provider supplied any.
	pub fn primary_email(&self) -> Option<&str> {
		self.emails.first().map(|email| email.value.as_str())
	}
}

/// Name parts; either may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
	/// Family (last) name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub family_name: Option<String>,
	/// Given (first) name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub given_name: Option<String>,
}

/// Email entry with an optional provider-specific label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEmail {
	/// Address value.
	pub value: String,
	/// Label such as `main`.
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
}
