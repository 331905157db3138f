//! OAuth token material that never leaves the process in readable form.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serializer;
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

const REDACTED: &str = "<redacted>";

/// Token, token secret, or verifier value.
///
/// `Debug`, `Display`, and `Serialize` all emit `<redacted>`, so credentials embedded in
/// descriptors, sessions, or log fields never leak. Deserialization accepts the plain
/// string so callers can load credentials they persisted themselves via [`Self::expose`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a token or secret received from Bitbucket.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw value for request signing. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when Bitbucket handed back an empty value.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// URL-safe SHA-256 digest of the value, usable in cache keys and log fields.
	pub fn fingerprint(&self) -> String {
		URL_SAFE_NO_PAD.encode(Sha256::digest(self.0.as_bytes()))
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "TokenSecret({REDACTED})")
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(REDACTED)
	}
}
impl Serialize for TokenSecret {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(REDACTED)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::AccessCredentials;

	#[test]
	fn formatters_hide_the_value() {
		let secret = TokenSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(<redacted>)");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "super-secret");
	}

	#[test]
	fn serialized_access_credentials_carry_no_material() {
		let credentials = AccessCredentials::new("access-token", "access-secret");
		let json = serde_json::to_string(&credentials).expect("Credentials should serialize.");

		assert_eq!(json, r#"{"token":"<redacted>","secret":"<redacted>"}"#);
	}

	#[test]
	fn deserialization_reads_plain_values() {
		let secret: TokenSecret =
			serde_json::from_str("\"verifier-123\"").expect("Secret should deserialize.");

		assert_eq!(secret.expose(), "verifier-123");
		assert!(!secret.is_empty());
		assert!(TokenSecret::new("").is_empty());
	}

	#[test]
	fn fingerprint_is_unpadded_and_value_specific() {
		let a = TokenSecret::new("token-a");

		assert_eq!(a.fingerprint(), TokenSecret::new("token-a").fingerprint());
		assert_ne!(a.fingerprint(), TokenSecret::new("token-b").fingerprint());
		assert!(!a.fingerprint().contains('='));
		assert!(!a.fingerprint().contains("token-a"));
	}
}
