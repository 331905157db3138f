// crates.io
use time::Duration;
// self
use bitbucket_oauth1_connector::store::{CacheStore, MemoryStore};

#[tokio::test]
async fn set_get_and_delete_round_trip() {
	let store = MemoryStore::default();

	store
		.set("key", "value".into(), Duration::minutes(1))
		.await
		.expect("Saving a fixture entry into memory store should succeed.");

	assert_eq!(
		store.get("key").await.expect("Fetching from memory store should succeed."),
		Some("value".into())
	);
	assert_eq!(store.len(), 1);
	assert_eq!(
		store.delete("key").await.expect("Deleting from memory store should succeed."),
		Some("value".into())
	);
	assert_eq!(store.get("key").await.expect("Fetching from memory store should succeed."), None);
	assert!(store.is_empty());
}

#[tokio::test]
async fn set_replaces_existing_values() {
	let store = MemoryStore::default();

	for value in ["first", "second"] {
		store
			.set("key", value.into(), Duration::minutes(1))
			.await
			.expect("Saving into memory store should succeed.");
	}

	assert_eq!(
		store.get("key").await.expect("Fetching from memory store should succeed."),
		Some("second".into())
	);
}

#[tokio::test]
async fn zero_ttl_entries_are_never_visible() {
	let store = MemoryStore::default();

	store
		.set("key", "value".into(), Duration::ZERO)
		.await
		.expect("A zero TTL is accepted.");

	assert_eq!(store.get("key").await.expect("Fetching from memory store should succeed."), None);
}

#[tokio::test]
async fn clones_share_state() {
	let store = MemoryStore::default();
	let clone = store.clone();

	store
		.set("key", "value".into(), Duration::minutes(1))
		.await
		.expect("Saving into memory store should succeed.");

	assert_eq!(
		clone.get("key").await.expect("Fetching from the clone should succeed."),
		Some("value".into())
	);
}
