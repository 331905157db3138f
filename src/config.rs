//! Serializable connector settings supplied by the platform at startup.

// self
use crate::{
	_prelude::*,
	auth::{ConsumerKey, PrivateKey},
	error::ConfigError,
	provider::ConnectorDescriptor,
	store::CacheStore,
};

/// Construction inputs for one Bitbucket Server connector.
#[derive(Clone, Deserialize)]
pub struct ConnectorConfig {
	/// Provider-assigned consumer key.
	pub consumer_key: ConsumerKey,
	/// PEM-encoded private signing key.
	pub private_key: String,
	/// Base server URL.
	pub url: String,
	/// Platform API base URL.
	#[serde(default)]
	pub api_url: String,
	/// Platform UI base URL.
	#[serde(default)]
	pub ui_url: String,
	/// Redirect callback; absent or empty selects out-of-band.
	#[serde(default)]
	pub callback_url: Option<String>,
	/// Disables commit-status reporting.
	#[serde(default)]
	pub disable_status: bool,
}
impl ConnectorConfig {
	/// Parses a JSON payload, reporting the path of the first invalid field.
	pub fn from_json_str(payload: &str) -> Result<Self> {
		let de = &mut serde_json::Deserializer::from_str(payload);

		serde_path_to_error::deserialize(de).map_err(|e| ConfigError::from(e).into())
	}

	/// Builds the descriptor described by this configuration.
	pub fn into_descriptor(self, cache: Arc<dyn CacheStore>) -> ConnectorDescriptor {
		let private_key = PrivateKey::from_pem(&self.private_key);
		let builder = ConnectorDescriptor::builder(self.consumer_key, private_key, self.url, cache)
			.api_url(self.api_url)
			.ui_url(self.ui_url)
			.disable_status(self.disable_status);

		match self.callback_url {
			Some(url) => builder.callback_url(url),
			None => builder,
		}
		.build()
	}
}
impl Debug for ConnectorConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ConnectorConfig")
			.field("consumer_key", &self.consumer_key)
			.field("private_key", &"<redacted>")
			.field("url", &self.url)
			.field("api_url", &self.api_url)
			.field("ui_url", &self.ui_url)
			.field("callback_url", &self.callback_url)
			.field("disable_status", &self.disable_status)
			.finish()
	}
}
