//! Connector-level error types shared by address parsing, flow helpers, and configuration.

// self
use crate::_prelude::*;

/// Connector-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical connector error exposed by public APIs.
///
/// Descriptor construction is infallible; only address parsing and the optional flow and
/// configuration helpers surface errors.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Repository fullname did not split into exactly two segments.
	#[error("Repository fullname `{fullname}` must be <project>/<slug>.")]
	MalformedIdentifier {
		/// Offending input, exactly as supplied by the caller.
		fullname: String,
	},
	/// No parked secret exists for the request token (never issued, already used, or expired).
	#[error("Request token `{token}` is unknown or has expired.")]
	UnknownRequestToken {
		/// Public request token value returned with the authorization redirect.
		token: String,
	},
	/// Authorization redirect came back carrying a token other than the one this session issued.
	#[error("Request token `{returned}` does not belong to this authorization session.")]
	RequestTokenMismatch {
		/// Token the session parked with the request-token leg.
		expected: String,
		/// Token the redirect actually carried.
		returned: String,
	},
	/// Cache collaborator failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Configuration failures raised while loading connector settings.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration payload could not be deserialized.
	#[error("Connector configuration is invalid at `{path}`.")]
	Parse {
		/// Dotted path of the field that failed to deserialize.
		path: String,
		/// Underlying deserialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}
