//! Validated identifiers used to route requests and address session state.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} cannot be empty.")]
	Empty {
		/// Kind of identifier (strategy name, session key).
		kind: &'static str,
	},
	/// The identifier contains whitespace or control characters.
	#[error("{kind} contains whitespace or control characters.")]
	ContainsWhitespace {
		/// Kind of identifier (strategy name, session key).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed byte count.
	#[error("{kind} exceeds {max} bytes.")]
	TooLong {
		/// Kind of identifier (strategy name, session key).
		kind: &'static str,
		/// Maximum permitted byte count.
		max: usize,
	},
}

def_id! { StrategyName, "Name the hosting framework routes strategy requests on.", "StrategyName" }
def_id! { SessionKey, "Session slot holding in-flight OAuth request-token state.", "SessionKey" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(|c| c.is_whitespace() || c.is_control()) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn session_keys_accept_namespaced_values() {
		let key = SessionKey::new("oauth:freedomworks")
			.expect("Namespaced session key should be considered valid.");

		assert_eq!(key.as_ref(), "oauth:freedomworks");
		assert_eq!(format!("{key:?}"), "SessionKey(oauth:freedomworks)");
		assert!(SessionKey::new("").is_err());
		assert!(SessionKey::new("oauth: freedomworks").is_err());
		assert!(StrategyName::new("free\tdom").is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let name: StrategyName = serde_json::from_str("\"freedomworks\"")
			.expect("Strategy name should deserialize successfully.");

		assert_eq!(name.as_ref(), "freedomworks");
		assert!(serde_json::from_str::<StrategyName>("\"with space\"").is_err());
		assert!(serde_json::from_str::<SessionKey>("\"\"").is_err());
	}

	#[test]
	fn length_limit_is_inclusive() {
		SessionKey::new("k".repeat(IDENTIFIER_MAX_LEN)).expect("Exact length should succeed.");

		assert!(matches!(
			SessionKey::new("k".repeat(IDENTIFIER_MAX_LEN + 1)),
			Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN, .. })
		));
	}
}
