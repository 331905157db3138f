//! Authorize-step session and access-exchange values handed to the transport.

// self
use crate::{
	_prelude::*,
	auth::{RequestToken, TokenSecret},
	provider::Callback,
};

/// Authorize-step metadata returned by [`super::AuthorizationFlow::begin`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationSession {
	/// Public request token; the provider echoes it back after authorization.
	pub token: String,
	/// URL the user must visit to approve access.
	pub authorize_url: String,
	/// Callback registered for this handshake.
	pub callback: Callback,
}
impl AuthorizationSession {
	pub(super) fn new(token: String, authorize_url: String, callback: Callback) -> Self {
		Self { token, authorize_url, callback }
	}

	/// Returns `true` when the user has to copy the verifier manually.
	pub fn requires_manual_verifier(&self) -> bool {
		self.callback.is_out_of_band()
	}

	/// Validates the `oauth_token` echoed back by the provider's redirect.
	pub fn validate_token(&self, returned_token: &str) -> Result<()> {
		if returned_token == self.token {
			Ok(())
		} else {
			Err(Error::RequestTokenMismatch {
				expected: self.token.clone(),
				returned: returned_token.to_owned(),
			})
		}
	}
}

/// Everything the transport needs to call the access-token endpoint.
#[derive(Clone)]
pub struct PendingAccessExchange {
	/// Access-token endpoint of the descriptor.
	pub access_token_url: String,
	/// Request token together with its recovered secret.
	pub request_token: RequestToken,
	verifier: TokenSecret,
}
impl PendingAccessExchange {
	pub(super) fn new(
		access_token_url: String,
		request_token: RequestToken,
		verifier: String,
	) -> Self {
		Self { access_token_url, request_token, verifier: TokenSecret::new(verifier) }
	}

	/// `oauth_verifier` supplied by the user or the redirect. Callers must avoid logging it.
	pub fn verifier(&self) -> &str {
		self.verifier.expose()
	}
}
impl Debug for PendingAccessExchange {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PendingAccessExchange")
			.field("access_token_url", &self.access_token_url)
			.field("request_token", &self.request_token)
			.field("verifier", &self.verifier)
			.finish()
	}
}
