//! Shared cache contract handed to connector descriptors, plus an in-memory backend.
//!
//! The connector never owns the cache: the platform injects an `Arc<dyn CacheStore>` at
//! construction time and remains responsible for its concurrency and persistence.

pub mod memory;

pub use memory::MemoryStore;

// self
use crate::_prelude::*;

/// Boxed future returned by [`CacheStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Key/value cache contract shared by every connector built from the same platform.
pub trait CacheStore
where
	Self: Send + Sync,
{
	/// Fetches the value stored under `key`, if present and not expired.
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>>;

	/// Stores `value` under `key` for at most `ttl`.
	fn set<'a>(&'a self, key: &'a str, value: String, ttl: Duration) -> StoreFuture<'a, ()>;

	/// Removes `key`, returning the previous live value.
	fn delete<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>>;
}

/// Error type produced by [`CacheStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// Namespaced cache key used by connector helpers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);
impl CacheKey {
	const PREFIX: &'static str = "bitbucket:oauth1";

	/// Builds `bitbucket:oauth1:<kind>:<id>`.
	pub fn new(kind: &str, id: &str) -> Self {
		Self(format!("{}:{kind}:{id}", Self::PREFIX))
	}

	/// Key under which a request token secret waits for the access-token leg.
	pub fn request_token(token: &str) -> Self {
		Self::new("request-token", token)
	}

	/// Returns the rendered key.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Display for CacheKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
