//! Request-token and access-token pairs.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Temporary credentials returned by the request-token leg.
///
/// The public `token` travels through the user's browser; the `secret` must stay
/// server-side until the access-token leg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestToken {
	/// Public `oauth_token` value.
	pub token: String,
	/// `oauth_token_secret` paired with the token.
	pub secret: TokenSecret,
}
impl RequestToken {
	/// Pairs a request token with its secret.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: TokenSecret::new(secret) }
	}
}

/// Per-user access token and secret issued by the access-token leg.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCredentials {
	/// Access token identifying the user grant.
	pub token: TokenSecret,
	/// Access-token secret used when signing user requests.
	pub secret: TokenSecret,
}
impl AccessCredentials {
	/// Pairs an access token with its secret.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: TokenSecret::new(token), secret: TokenSecret::new(secret) }
	}
}
