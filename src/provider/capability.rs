//! Capability contract shared by every VCS provider variant.
//!
//! Each provider (Bitbucket, GitHub, GitLab, ...) ships its own descriptor type and
//! implements [`VcsServer`]; the platform selects a variant once at configuration time and
//! then drives the OAuth handshake and address parsing through this trait alone.

// self
use crate::{
	_prelude::*,
	auth::{AccessCredentials, RequestToken},
	client::AuthenticatedClient,
	provider::ConnectorDescriptor,
	repo::RepositoryAddress,
};

/// Known provider families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
	/// Self-hosted Bitbucket Server (OAuth 1.0a).
	Bitbucket,
	/// GitHub or GitHub Enterprise.
	Github,
	/// GitLab.
	Gitlab,
}
impl ProviderKind {
	/// Returns a stable label for logs and configuration keys.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderKind::Bitbucket => "bitbucket",
			ProviderKind::Github => "github",
			ProviderKind::Gitlab => "gitlab",
		}
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Identity and bootstrap capabilities every configured VCS server exposes.
///
/// Implementors are required to be `Send + Sync` because descriptors are shared across
/// request handlers for the lifetime of the platform configuration.
pub trait VcsServer
where
	Self: Send + Sync,
{
	/// Per-user client produced once the OAuth handshake completes.
	type Client;

	/// Provider family of this server.
	fn kind(&self) -> ProviderKind;

	/// Returns `false` when commit-status reporting is administratively disabled.
	fn status_enabled(&self) -> bool;

	/// Builds the URL the user visits to approve `request_token`.
	fn authorize_url(&self, request_token: &RequestToken) -> String;

	/// Binds per-user access credentials to this server.
	fn client(&self, credentials: AccessCredentials) -> Self::Client;

	/// Parses a provider repository fullname.
	///
	/// The default implementation accepts the `<project>/<slug>` shape.
	fn parse_repository(&self, fullname: &str) -> Result<RepositoryAddress> {
		RepositoryAddress::parse(fullname)
	}
}
impl VcsServer for ConnectorDescriptor {
	type Client = AuthenticatedClient;

	fn kind(&self) -> ProviderKind {
		ProviderKind::Bitbucket
	}

	fn status_enabled(&self) -> bool {
		!self.disable_status()
	}

	fn authorize_url(&self, request_token: &RequestToken) -> String {
		ConnectorDescriptor::authorize_url(self, request_token)
	}

	fn client(&self, credentials: AccessCredentials) -> Self::Client {
		AuthenticatedClient::new(Arc::new(self.clone()), credentials)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{auth::PrivateKey, store::MemoryStore};

	fn server(disable_status: bool) -> ConnectorDescriptor {
		ConnectorDescriptor::builder(
			"cds-consumer",
			PrivateKey::new(vec![7_u8]),
			"https://git.example.com",
			Arc::new(MemoryStore::default()),
		)
		.disable_status(disable_status)
		.build()
	}

	fn parse_via_trait<S>(server: &S, fullname: &str) -> Result<RepositoryAddress>
	where
		S: VcsServer,
	{
		server.parse_repository(fullname)
	}

	#[test]
	fn bitbucket_variant_reports_kind_and_status() {
		assert_eq!(server(false).kind(), ProviderKind::Bitbucket);
		assert_eq!(ProviderKind::Bitbucket.to_string(), "bitbucket");
		assert!(server(false).status_enabled());
		assert!(!server(true).status_enabled());
	}

	#[test]
	fn trait_parsing_uses_project_slug_shape() {
		let server = server(false);
		let address = parse_via_trait(&server, "CDS/engine").expect("Fullname should parse.");

		assert_eq!(address.project.as_str(), "CDS");
		assert!(matches!(
			parse_via_trait(&server, "CDS"),
			Err(Error::MalformedIdentifier { .. })
		));
	}

	#[test]
	fn client_binds_credentials_to_descriptor() {
		let server = server(false);
		let client = VcsServer::client(&server, AccessCredentials::new("access", "secret"));

		assert_eq!(client.access_token().expose(), "access");
		assert_eq!(client.access_token_secret().expose(), "secret");
		assert!(client.descriptor().private_key().shares_allocation(server.private_key()));
	}
}
