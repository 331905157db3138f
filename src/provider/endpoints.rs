//! OAuth1 endpoint derivation for Bitbucket Server.

// self
use crate::_prelude::*;

/// Suffix appended to the server URL for the request-token leg.
pub const REQUEST_TOKEN_PATH: &str = "/plugins/servlet/oauth/request-token";
/// Suffix appended to the server URL for the user-facing authorize step.
pub const AUTHORIZE_PATH: &str = "/plugins/servlet/oauth/authorize";
/// Suffix appended to the server URL for the access-token leg.
pub const ACCESS_TOKEN_PATH: &str = "/plugins/servlet/oauth/access-token";
/// OAuth 1.0a out-of-band callback sentinel.
pub const OUT_OF_BAND: &str = "oob";

/// Callback target sent with the request-token leg.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Callback {
	/// Redirect the user's browser to this URL after authorization.
	Url(String),
	/// No redirect is possible; the user copies the verifier by hand.
	#[default]
	OutOfBand,
}
impl Callback {
	/// Builds a callback from a caller-supplied URL, falling back to out-of-band when empty.
	pub fn new(url: impl Into<String>) -> Self {
		let url = url.into();

		if url.is_empty() { Self::OutOfBand } else { Self::Url(url) }
	}

	/// Returns the `oauth_callback` parameter value.
	pub fn as_str(&self) -> &str {
		match self {
			Callback::Url(url) => url,
			Callback::OutOfBand => OUT_OF_BAND,
		}
	}

	/// Returns `true` for the out-of-band sentinel.
	pub fn is_out_of_band(&self) -> bool {
		matches!(self, Callback::OutOfBand)
	}
}
impl Display for Callback {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl Serialize for Callback {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

/// The three OAuth1 endpoints of a Bitbucket Server instance.
///
/// Derived once by plain string concatenation; the server URL is neither parsed nor
/// normalized, so a trailing slash on the input is preserved in every endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OAuth1Endpoints {
	/// Request-token endpoint.
	pub request_token: String,
	/// Authorize endpoint the user visits.
	pub authorization: String,
	/// Access-token endpoint.
	pub access_token: String,
}
impl OAuth1Endpoints {
	/// Appends the fixed servlet suffixes to `server_url`.
	pub fn derive(server_url: &str) -> Self {
		Self {
			request_token: format!("{server_url}{REQUEST_TOKEN_PATH}"),
			authorization: format!("{server_url}{AUTHORIZE_PATH}"),
			access_token: format!("{server_url}{ACCESS_TOKEN_PATH}"),
		}
	}
}
