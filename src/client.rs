//! Authenticated client: a connector descriptor bound to one user's access credentials.

// self
use crate::{
	_prelude::*,
	auth::{AccessCredentials, TokenSecret},
	provider::ConnectorDescriptor,
	store::CacheKey,
};

/// Per-user session against a configured Bitbucket Server.
///
/// Short-lived relative to the descriptor it borrows. VCS operations (statuses, webhooks,
/// pull requests) are layered on top of this type by the platform.
#[derive(Clone)]
pub struct AuthenticatedClient {
	descriptor: Arc<ConnectorDescriptor>,
	credentials: AccessCredentials,
}
impl AuthenticatedClient {
	/// Binds `credentials` to a shared descriptor.
	pub fn new(descriptor: Arc<ConnectorDescriptor>, credentials: AccessCredentials) -> Self {
		Self { descriptor, credentials }
	}

	/// Descriptor the session was created from.
	pub fn descriptor(&self) -> &ConnectorDescriptor {
		&self.descriptor
	}

	/// Per-user access token.
	pub fn access_token(&self) -> &TokenSecret {
		&self.credentials.token
	}

	/// Per-user access-token secret.
	pub fn access_token_secret(&self) -> &TokenSecret {
		&self.credentials.secret
	}

	/// Stable digest of the access token, safe to use in cache keys and logs.
	pub fn session_fingerprint(&self) -> String {
		self.credentials.token.fingerprint()
	}

	/// Cache key scoped to this session.
	pub fn session_cache_key(&self, kind: &str) -> CacheKey {
		CacheKey::new(kind, &self.session_fingerprint())
	}
}
impl Debug for AuthenticatedClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthenticatedClient")
			.field("server_url", &self.descriptor.server_url())
			.field("consumer_key", self.descriptor.consumer_key())
			.field("session", &self.session_fingerprint())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{auth::PrivateKey, store::MemoryStore};

	fn client(token: &str) -> AuthenticatedClient {
		let descriptor = ConnectorDescriptor::builder(
			"cds-consumer",
			PrivateKey::new(vec![1_u8]),
			"https://git.example.com",
			Arc::new(MemoryStore::default()),
		)
		.build();

		AuthenticatedClient::new(Arc::new(descriptor), AccessCredentials::new(token, "s3cr3t"))
	}

	#[test]
	fn fingerprint_is_stable_and_token_specific() {
		let a = client("token-a");

		assert_eq!(a.session_fingerprint(), client("token-a").session_fingerprint());
		assert_ne!(a.session_fingerprint(), client("token-b").session_fingerprint());
		assert!(!a.session_fingerprint().contains('='));
		assert!(a.session_cache_key("repos").as_str().starts_with("bitbucket:oauth1:repos:"));
	}

	#[test]
	fn debug_hides_tokens() {
		let rendered = format!("{:?}", client("token-a"));

		assert!(!rendered.contains("token-a"));
		assert!(!rendered.contains("s3cr3t"));
		assert!(rendered.contains("https://git.example.com"));
	}
}
