//! Pure helpers around the OAuth 1.0a three-legged handshake.
//!
//! The HTTP legs themselves (request-token and access-token calls, RSA-SHA1 signing) belong
//! to the platform's transport. This module covers what happens between them: parking the
//! request-token secret in the shared cache while the user visits the authorize page,
//! recovering it once the provider redirects back with a verifier, and binding the issued
//! access credentials into an [`AuthenticatedClient`].

pub mod authorize;

pub use authorize::*;

// self
use crate::{
	_prelude::*,
	auth::{AccessCredentials, RequestToken},
	client::AuthenticatedClient,
	obs::{ConnectorOp, OpSpan},
	provider::{Callback, ConnectorDescriptor},
	store::CacheKey,
};

/// Coordinates the three-legged handshake against a single connector descriptor.
#[derive(Clone, Debug)]
pub struct AuthorizationFlow {
	/// Descriptor that defines endpoints and owns the cache handle.
	pub descriptor: Arc<ConnectorDescriptor>,
	/// How long a parked request-token secret stays recoverable.
	pub request_token_ttl: Duration,
}
impl AuthorizationFlow {
	/// Default lifetime of a parked request-token secret.
	pub const DEFAULT_REQUEST_TOKEN_TTL: Duration = Duration::minutes(10);

	/// Creates a flow for the provided descriptor.
	pub fn new(descriptor: Arc<ConnectorDescriptor>) -> Self {
		Self { descriptor, request_token_ttl: Self::DEFAULT_REQUEST_TOKEN_TTL }
	}

	/// Overrides the request-token TTL.
	pub fn with_request_token_ttl(mut self, ttl: Duration) -> Self {
		self.request_token_ttl = ttl;

		self
	}

	/// Parks the request-token secret and returns the authorize URL for the user.
	pub async fn begin(&self, request_token: RequestToken) -> Result<AuthorizationSession> {
		let span =
			OpSpan::for_server(ConnectorOp::BeginAuthorization, self.descriptor.server_url());

		span.attempt();

		let result = span
			.run_async(async move {
				let key = CacheKey::request_token(&request_token.token);

				self.descriptor
					.cache()
					.set(
						key.as_str(),
						request_token.secret.expose().to_owned(),
						self.request_token_ttl,
					)
					.await?;

				let authorize_url = self.descriptor.authorize_url(&request_token);

				Ok::<_, Error>(AuthorizationSession::new(
					request_token.token,
					authorize_url,
					self.descriptor.callback().clone(),
				))
			})
			.await;

		span.finish(&result);

		result
	}

	/// Recovers the parked secret for `token` and prepares the access-token exchange.
	///
	/// The parked secret is removed, so a request token can complete at most once.
	pub async fn complete(
		&self,
		token: &str,
		verifier: impl Into<String>,
	) -> Result<PendingAccessExchange> {
		let span =
			OpSpan::for_server(ConnectorOp::CompleteAuthorization, self.descriptor.server_url());
		let verifier = verifier.into();

		span.attempt();

		let result = span
			.run_async(async move {
				let key = CacheKey::request_token(token);
				let secret = self
					.descriptor
					.cache()
					.delete(key.as_str())
					.await?
					.ok_or_else(|| Error::UnknownRequestToken { token: token.to_owned() })?;

				Ok::<_, Error>(PendingAccessExchange::new(
					self.descriptor.access_token_url().to_owned(),
					RequestToken::new(token, secret),
					verifier,
				))
			})
			.await;

		span.finish(&result);

		result
	}

	/// Binds access credentials issued by the access-token leg.
	pub fn bind(&self, credentials: AccessCredentials) -> AuthenticatedClient {
		AuthenticatedClient::new(self.descriptor.clone(), credentials)
	}

	/// Callback the transport must send with the request-token leg.
	pub fn callback(&self) -> &Callback {
		self.descriptor.callback()
	}
}
