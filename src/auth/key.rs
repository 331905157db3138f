//! Opaque private signing key held by a connector descriptor.

// self
use crate::_prelude::*;

/// RSA private key material used to sign OAuth1 requests (`RSA-SHA1`).
///
/// The bytes are opaque at this layer: no length or format check happens. Clones share the
/// same allocation, and the type implements neither `Serialize` nor a revealing `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(Arc<[u8]>);
impl PrivateKey {
	/// Wraps raw key bytes.
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self(Arc::from(bytes.into()))
	}

	/// Wraps PEM text as key bytes without decoding it.
	pub fn from_pem(pem: impl AsRef<str>) -> Self {
		Self::new(pem.as_ref().as_bytes())
	}

	/// Returns the inner key bytes. Callers must avoid logging them.
	pub fn expose(&self) -> &[u8] {
		&self.0
	}

	/// Returns `true` when two handles point at the same key allocation.
	pub fn shares_allocation(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}
impl From<Vec<u8>> for PrivateKey {
	fn from(value: Vec<u8>) -> Self {
		Self::new(value)
	}
}
impl From<&[u8]> for PrivateKey {
	fn from(value: &[u8]) -> Self {
		Self::new(value)
	}
}
impl Debug for PrivateKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("PrivateKey").field(&"<redacted>").finish()
	}
}
