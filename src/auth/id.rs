//! Strongly typed identifiers carried verbatim across the connector domain.
//!
//! None of these values are validated here: the provider is the authority on their
//! format, and malformed values surface when the transport first uses them.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);
		impl $name {
			/// Wraps the provided value without normalization.
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			/// Returns the identifier as a string slice.
			pub fn as_str(&self) -> &str {
				&self.0
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
		impl From<String> for $name {
			fn from(value: String) -> Self {
				Self(value)
			}
		}
		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				Self(value.to_owned())
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
	};
}

def_id! { ConsumerKey, "Provider-assigned consumer key identifying the connector.", "ConsumerKey" }
def_id! { ProjectKey, "Bitbucket project key (first half of a fullname).", "Project" }
def_id! { RepositorySlug, "Bitbucket repository slug (second half of a fullname).", "Slug" }

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_are_kept_verbatim() {
		let key = ConsumerKey::new(" cds consumer ");

		assert_eq!(key.as_str(), " cds consumer ");
		assert_eq!(ProjectKey::new("").as_str(), "");
		assert_eq!(format!("{:?}", RepositorySlug::from("my-repo")), "Slug(my-repo)");
	}

	#[test]
	fn serde_is_transparent() {
		let key: ConsumerKey =
			serde_json::from_str("\"cds-consumer\"").expect("Consumer key should deserialize.");

		assert_eq!(key.as_ref(), "cds-consumer");
		assert_eq!(
			serde_json::to_string(&key).expect("Consumer key should serialize."),
			"\"cds-consumer\""
		);
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<ProjectKey, u8> = HashMap::from_iter([(ProjectKey::new("CDS"), 7_u8)]);

		assert_eq!(map.get("CDS"), Some(&7));
	}
}
