// self
use crate::{
	_prelude::*,
	auth::{ConsumerKey, PrivateKey},
	provider::{Callback, ConnectorDescriptor},
	store::CacheStore,
};

/// Builder for [`ConnectorDescriptor`] values.
///
/// Every setter accepts input verbatim; [`ConnectorDescriptorBuilder::build`] cannot fail.
pub struct ConnectorDescriptorBuilder {
	/// Provider-assigned consumer key.
	pub consumer_key: ConsumerKey,
	/// Private signing key.
	pub private_key: PrivateKey,
	/// Base server URL that endpoint suffixes are appended to.
	pub server_url: String,
	/// Platform API base URL.
	pub api_url: String,
	/// Platform UI base URL.
	pub ui_url: String,
	/// Callback sent with the request-token leg.
	pub callback: Callback,
	/// Shared cache handle.
	pub cache: Arc<dyn CacheStore>,
	/// Disables commit-status reporting.
	pub disable_status: bool,
}
impl ConnectorDescriptorBuilder {
	/// Creates a new builder seeded with the connector identity, server, and cache.
	pub fn new(
		consumer_key: impl Into<ConsumerKey>,
		private_key: impl Into<PrivateKey>,
		server_url: impl Into<String>,
		cache: Arc<dyn CacheStore>,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			private_key: private_key.into(),
			server_url: server_url.into(),
			api_url: String::new(),
			ui_url: String::new(),
			callback: Callback::OutOfBand,
			cache,
			disable_status: false,
		}
	}

	/// Sets the platform API base URL.
	pub fn api_url(mut self, url: impl Into<String>) -> Self {
		self.api_url = url.into();

		self
	}

	/// Sets the platform UI base URL.
	pub fn ui_url(mut self, url: impl Into<String>) -> Self {
		self.ui_url = url.into();

		self
	}

	/// Sets the redirect callback; an empty string selects the out-of-band sentinel.
	pub fn callback_url(mut self, url: impl Into<String>) -> Self {
		self.callback = Callback::new(url);

		self
	}

	/// Enables or disables commit-status reporting.
	pub fn disable_status(mut self, disable: bool) -> Self {
		self.disable_status = disable;

		self
	}

	/// Consumes the builder and derives the descriptor's endpoints.
	pub fn build(self) -> ConnectorDescriptor {
		ConnectorDescriptor::assemble(self)
	}
}
impl Debug for ConnectorDescriptorBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ConnectorDescriptorBuilder")
			.field("consumer_key", &self.consumer_key)
			.field("private_key", &self.private_key)
			.field("server_url", &self.server_url)
			.field("api_url", &self.api_url)
			.field("ui_url", &self.ui_url)
			.field("callback", &self.callback)
			.field("disable_status", &self.disable_status)
			.finish_non_exhaustive()
	}
}
