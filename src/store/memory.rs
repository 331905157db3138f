//! Thread-safe in-memory [`CacheStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	store::{CacheStore, StoreError, StoreFuture},
};

type StoreMap = Arc<RwLock<HashMap<String, Entry>>>;

#[derive(Clone, Debug)]
struct Entry {
	value: String,
	expires_at: OffsetDateTime,
}
impl Entry {
	fn is_live(&self, now: OffsetDateTime) -> bool {
		now < self.expires_at
	}
}

/// Thread-safe cache backend that keeps entries in-process for tests and demos.
///
/// Expired entries are treated as absent. They are evicted when their key is read or
/// deleted, and every write sweeps all expired entries so abandoned keys do not accumulate.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	/// Returns the number of live entries.
	pub fn len(&self) -> usize {
		let now = OffsetDateTime::now_utc();

		self.0.read().values().filter(|entry| entry.is_live(now)).count()
	}

	/// Returns `true` when no live entries remain.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn get_now(map: StoreMap, key: &str, now: OffsetDateTime) -> Option<String> {
		if let Some(entry) = map.read().get(key).filter(|entry| entry.is_live(now)) {
			return Some(entry.value.clone());
		}

		Self::evict_expired(&mut map.write(), key, now)
	}

	// Re-checks under the write lock: a writer may have replaced the key after the read lock
	// saw it expired.
	fn evict_expired(
		guard: &mut HashMap<String, Entry>,
		key: &str,
		now: OffsetDateTime,
	) -> Option<String> {
		match guard.get(key) {
			Some(entry) if entry.is_live(now) => Some(entry.value.clone()),
			Some(_) => {
				guard.remove(key);

				None
			},
			None => None,
		}
	}

	fn set_now(
		map: StoreMap,
		key: &str,
		value: String,
		ttl: Duration,
		now: OffsetDateTime,
	) -> Result<(), StoreError> {
		if ttl.is_negative() {
			return Err(StoreError::Backend { message: format!("negative TTL for key {key}") });
		}

		let expires_at = now.checked_add(ttl).ok_or_else(|| StoreError::Backend {
			message: format!("TTL {ttl} for key {key} overflows the supported time range"),
		})?;
		let mut guard = map.write();

		guard.retain(|_, entry| entry.is_live(now));
		guard.insert(key.to_owned(), Entry { value, expires_at });

		Ok(())
	}

	fn delete_now(map: StoreMap, key: &str, now: OffsetDateTime) -> Option<String> {
		map.write().remove(key).filter(|entry| entry.is_live(now)).map(|entry| entry.value)
	}
}
impl CacheStore for MemoryStore {
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(Self::get_now(map, key, OffsetDateTime::now_utc())) })
	}

	fn set<'a>(&'a self, key: &'a str, value: String, ttl: Duration) -> StoreFuture<'a, ()> {
		let map = self.0.clone();

		Box::pin(async move { Self::set_now(map, key, value, ttl, OffsetDateTime::now_utc()) })
	}

	fn delete<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(Self::delete_now(map, key, OffsetDateTime::now_utc())) })
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn expired_entries_read_as_absent() {
		let map = StoreMap::default();
		let issued = macros::datetime!(2025-11-10 12:00 UTC);

		MemoryStore::set_now(map.clone(), "k", "v".into(), Duration::minutes(5), issued)
			.expect("Setting a fixture entry should succeed.");

		assert_eq!(
			MemoryStore::get_now(map.clone(), "k", issued + Duration::minutes(1)),
			Some("v".into())
		);
		assert_eq!(MemoryStore::get_now(map.clone(), "k", issued + Duration::minutes(5)), None);
		assert!(map.read().is_empty(), "Expired entries should be evicted on read.");
	}

	#[test]
	fn delete_skips_expired_values() {
		let map = StoreMap::default();
		let issued = macros::datetime!(2025-11-10 12:00 UTC);

		MemoryStore::set_now(map.clone(), "k", "v".into(), Duration::seconds(1), issued)
			.expect("Setting a fixture entry should succeed.");

		assert_eq!(MemoryStore::delete_now(map.clone(), "k", issued + Duration::hours(1)), None);
		assert!(map.read().is_empty());
	}

	#[test]
	fn overflowing_ttl_is_rejected() {
		let map = StoreMap::default();
		let err = MemoryStore::set_now(
			map.clone(),
			"k",
			"v".into(),
			Duration::MAX,
			OffsetDateTime::now_utc(),
		)
		.expect_err("A TTL beyond the representable range should be rejected.");

		assert!(
			matches!(err, StoreError::Backend { ref message } if message.contains("overflows"))
		);
		assert!(map.read().is_empty());
	}

	#[test]
	fn writes_sweep_expired_entries() {
		let map = StoreMap::default();
		let issued = macros::datetime!(2025-11-10 12:00 UTC);

		for key in ["abandoned-1", "abandoned-2"] {
			MemoryStore::set_now(map.clone(), key, "v".into(), Duration::minutes(1), issued)
				.expect("Setting a fixture entry should succeed.");
		}

		MemoryStore::set_now(
			map.clone(),
			"fresh",
			"v".into(),
			Duration::minutes(1),
			issued + Duration::hours(1),
		)
		.expect("Setting a fresh entry should succeed.");

		let guard = map.read();

		assert_eq!(guard.len(), 1);
		assert!(guard.contains_key("fresh"));
	}

	#[test]
	fn eviction_keeps_value_rewritten_between_locks() {
		let now = macros::datetime!(2025-11-10 12:00 UTC);
		let fresh = Entry { value: "new".into(), expires_at: now + Duration::minutes(5) };
		let stale = Entry { value: "old".into(), expires_at: now };
		let mut entries =
			HashMap::from_iter([("fresh".to_owned(), fresh), ("stale".to_owned(), stale)]);

		assert_eq!(MemoryStore::evict_expired(&mut entries, "fresh", now), Some("new".into()));
		assert_eq!(MemoryStore::evict_expired(&mut entries, "stale", now), None);
		assert!(entries.contains_key("fresh"), "Live entries must survive the eviction path.");
		assert!(!entries.contains_key("stale"));
	}

	#[test]
	fn negative_ttl_is_rejected() {
		let err = MemoryStore::set_now(
			StoreMap::default(),
			"k",
			"v".into(),
			Duration::seconds(-1),
			OffsetDateTime::now_utc(),
		)
		.expect_err("Negative TTLs should be rejected.");

		assert!(matches!(err, StoreError::Backend { .. }));
	}
}
