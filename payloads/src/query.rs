//! Client-side query cache backing the UI data hooks.
//!
//! Entries are keyed by query name plus the JSON-serialized request
//! parameters and stored as JSON so a single cache can hold every response
//! type. An entry is fresh while it is younger than the staleness window;
//! stale entries are still served but should be refetched. The last error
//! of each key is kept alongside, so every hook on a key sees a failure.

use crate::ServiceError;
use jiff::{SignedDuration, Timestamp};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_STALE_TIME: SignedDuration = SignedDuration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey {
    pub name: &'static str,
    pub params: String,
}

impl QueryKey {
    /// Key a query by its name and the parameters it sends. Parameters are
    /// serialized as JSON, so equal requests produce equal keys.
    ///
    /// Parameters that fail to serialize are keyed by their type name, which
    /// never collides with a parameterless key.
    pub fn new<P: Serialize>(name: &'static str, params: &P) -> Self {
        let params = match serde_json::to_string(params) {
            Ok(params) => params,
            Err(e) => {
                tracing::warn!(name, "query params did not serialize: {e}");
                format!("<{}>", std::any::type_name::<P>())
            }
        };
        Self { name, params }
    }

    pub fn bare(name: &'static str) -> Self {
        Self {
            name,
            params: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub value: serde_json::Value,
    pub fetched_at: Timestamp,
}

/// A cached value together with whether it is still inside its window.
#[derive(Debug, Clone, PartialEq)]
pub struct Cached<T> {
    pub value: T,
    pub fetched_at: Timestamp,
    pub is_stale: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashSet<QueryKey>,
    errors: HashMap<QueryKey, ServiceError>,
}

impl QueryCache {
    pub fn is_fresh(
        &self,
        key: &QueryKey,
        now: Timestamp,
        stale_time: SignedDuration,
    ) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| now.duration_since(entry.fetched_at) < stale_time)
    }

    /// Whether a hook should start a fetch: nothing fresh is cached and no
    /// request for the same key is running.
    pub fn should_fetch(
        &self,
        key: &QueryKey,
        now: Timestamp,
        stale_time: SignedDuration,
    ) -> bool {
        !self.in_flight.contains(key) && !self.is_fresh(key, now, stale_time)
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        key: &QueryKey,
        now: Timestamp,
        stale_time: SignedDuration,
    ) -> Option<Cached<T>> {
        let entry = self.entries.get(key)?;
        let value = match serde_json::from_value(entry.value.clone()) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(?key, "discarding undecodable cache entry: {e}");
                return None;
            }
        };
        Some(Cached {
            value,
            fetched_at: entry.fetched_at,
            is_stale: now.duration_since(entry.fetched_at) >= stale_time,
        })
    }

    pub fn insert<T: Serialize>(
        &mut self,
        key: QueryKey,
        value: &T,
        fetched_at: Timestamp,
    ) {
        self.in_flight.remove(&key);
        self.errors.remove(&key);
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(key, CacheEntry { value, fetched_at });
            }
            Err(e) => tracing::warn!(?key, "not caching query result: {e}"),
        }
    }

    /// Seed an entry with server-rendered data. Existing entries that are
    /// newer win.
    pub fn hydrate<T: Serialize>(
        &mut self,
        key: QueryKey,
        value: &T,
        generated_at: Timestamp,
    ) {
        let newer_exists = self
            .entries
            .get(&key)
            .is_some_and(|entry| entry.fetched_at >= generated_at);
        if !newer_exists {
            self.insert(key, value, generated_at);
        }
    }

    /// Returns false if the key was already in flight.
    pub fn begin_fetch(&mut self, key: QueryKey) -> bool {
        self.in_flight.insert(key)
    }

    /// End a fetch with an error. The error stays until the key is
    /// fetched successfully or invalidated.
    pub fn fetch_failed(&mut self, key: &QueryKey, error: ServiceError) {
        self.in_flight.remove(key);
        self.errors.insert(key.clone(), error);
    }

    /// Error of the last failed fetch for `key`.
    pub fn error(&self, key: &QueryKey) -> Option<&ServiceError> {
        self.errors.get(key)
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.in_flight.contains(key)
    }

    /// Drop every entry for a query name, e.g. after a mutation.
    pub fn invalidate(&mut self, name: &str) {
        self.entries.retain(|key, _| key.name != name);
        self.errors.retain(|key, _| key.name != name);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::PageQuery;

    fn t0() -> Timestamp {
        "2025-06-01T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn fresh_strictly_within_window() {
        let mut cache = QueryCache::default();
        let key = QueryKey::new("my_auctions", &PageQuery::first(10));
        cache.insert(key.clone(), &vec![1, 2, 3], t0());

        let window = DEFAULT_STALE_TIME;
        let at = |secs: i64| t0() + SignedDuration::from_secs(secs);

        assert!(cache.is_fresh(&key, at(0), window));
        assert!(cache.is_fresh(&key, at(29), window));
        assert!(!cache.is_fresh(&key, at(30), window));

        let stale: Cached<Vec<i32>> = cache.get(&key, at(45), window).unwrap();
        assert_eq!(stale.value, vec![1, 2, 3]);
        assert!(stale.is_stale);
        assert!(cache.should_fetch(&key, at(45), window));
        assert!(!cache.should_fetch(&key, at(10), window));
    }

    #[test]
    fn keys_depend_on_params() {
        let a = QueryKey::new("gallery", &PageQuery::new(1, 12));
        let b = QueryKey::new("gallery", &PageQuery::new(2, 12));
        let c = QueryKey::new("wishlist", &PageQuery::new(1, 12));
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, QueryKey::new("gallery", &PageQuery::new(1, 12)));
    }

    #[test]
    fn in_flight_queries_are_not_duplicated() {
        let mut cache = QueryCache::default();
        let key = QueryKey::bare("general_rules");
        assert!(cache.should_fetch(&key, t0(), DEFAULT_STALE_TIME));
        assert!(cache.begin_fetch(key.clone()));
        assert!(!cache.begin_fetch(key.clone()));
        assert!(!cache.should_fetch(&key, t0(), DEFAULT_STALE_TIME));

        cache.fetch_failed(&key, ServiceError::new("gagal"));
        assert!(cache.should_fetch(&key, t0(), DEFAULT_STALE_TIME));

        cache.begin_fetch(key.clone());
        cache.insert(key.clone(), &"rules", t0());
        assert!(!cache.is_fetching(&key));
    }

    #[test]
    fn failures_are_visible_to_every_reader_of_a_key() {
        let mut cache = QueryCache::default();
        let key = QueryKey::new("gallery", &PageQuery::new(1, 12));
        let other = QueryKey::new("gallery", &PageQuery::new(2, 12));

        // a second reader arrives while the first fetch runs
        assert!(cache.begin_fetch(key.clone()));
        assert!(!cache.should_fetch(&key, t0(), DEFAULT_STALE_TIME));

        cache.fetch_failed(&key, ServiceError::new("Gagal memuat galeri"));
        assert!(!cache.is_fetching(&key));
        assert_eq!(
            cache.error(&key).map(|e| e.message.as_str()),
            Some("Gagal memuat galeri")
        );
        assert!(cache.error(&other).is_none());

        cache.begin_fetch(key.clone());
        assert!(cache.error(&key).is_some());
        cache.insert(key.clone(), &vec![1], t0());
        assert!(cache.error(&key).is_none());

        cache.fetch_failed(&other, ServiceError::new("Gagal memuat galeri"));
        cache.invalidate("gallery");
        assert!(cache.error(&other).is_none());
    }

    #[test]
    fn unserializable_params_do_not_share_the_bare_key() {
        let mut params = HashMap::new();
        params.insert((1u8, 2u8), 3u8);
        let key = QueryKey::new("auctions", &params);
        assert_ne!(key, QueryKey::bare("auctions"));
        assert!(key.params.contains("HashMap"));
    }

    #[test]
    fn hydration_does_not_overwrite_newer_data() {
        let mut cache = QueryCache::default();
        let key = QueryKey::bare("gallery");
        let later = t0() + SignedDuration::from_secs(5);
        cache.insert(key.clone(), &"client", later);
        cache.hydrate(key.clone(), &"server", t0());
        let cached: Cached<String> =
            cache.get(&key, later, DEFAULT_STALE_TIME).unwrap();
        assert_eq!(cached.value, "client");

        let mut empty = QueryCache::default();
        empty.hydrate(key.clone(), &"server", t0());
        let cached: Cached<String> =
            empty.get(&key, later, DEFAULT_STALE_TIME).unwrap();
        assert_eq!(cached.value, "server");
        assert!(!cached.is_stale);
    }

    #[test]
    fn invalidate_drops_only_that_query() {
        let mut cache = QueryCache::default();
        cache.insert(QueryKey::new("wishlist", &1), &1, t0());
        cache.insert(QueryKey::new("wishlist", &2), &2, t0());
        cache.insert(QueryKey::bare("gallery"), &3, t0());
        cache.invalidate("wishlist");
        assert!(!cache.is_fresh(&QueryKey::new("wishlist", &1), t0(), DEFAULT_STALE_TIME));
        assert!(cache.is_fresh(&QueryKey::bare("gallery"), t0(), DEFAULT_STALE_TIME));
    }
}
