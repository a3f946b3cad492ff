// In-memory cache with TTL checking and bounded capacity.
// Owned by the worker and passed by reference into the fetch functions;
// there are no ambient maps.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::github::Repository;

/// How long a fetched entry stays valid.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Bound on cached repository lists (one per username key).
const REPOSITORY_LISTS_CAPACITY: usize = 16;

/// Bound on cached README extracts (one per `username/repo` key).
const README_CAPACITY: usize = 256;

/// A cached value with its insertion time.
#[derive(Debug, Clone)]
struct CachedEntry<T> {
    data: T,
    cached_at: Instant,
}

impl<T> CachedEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() > ttl
    }
}

/// Keyed store with a TTL and a capacity. When full, the oldest insertion
/// is evicted. An expired entry reads as absent.
#[derive(Debug)]
pub struct MemoryCache<T> {
    entries: HashMap<String, CachedEntry<T>>,
    order: VecDeque<String>,
    capacity: usize,
    ttl: Duration,
}

impl<T> MemoryCache<T> {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
            ttl,
        }
    }

    /// Look up an unexpired entry.
    pub fn get(&self, key: &str) -> Option<&T> {
        let entry = self.entries.get(key)?;
        if entry.is_expired(self.ttl) {
            return None;
        }
        Some(&entry.data)
    }

    /// Insert a value, replacing any previous entry under the key and
    /// evicting the oldest entries past capacity.
    pub fn insert(&mut self, key: String, data: T) {
        if self.entries.insert(key.clone(), CachedEntry::new(data)).is_some() {
            self.order.retain(|existing| *existing != key);
        }
        self.order.push_back(key);

        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two stores behind the showcase pipeline: repository lists keyed by
/// username (plus the pinned-selection key), README extracts keyed by
/// `username/repo`. A cached `None` extract records "this repository has no
/// usable README paragraph" and is distinct from a miss.
#[derive(Debug)]
pub struct ShowcaseCache {
    pub repositories: MemoryCache<Vec<Repository>>,
    pub readmes: MemoryCache<Option<String>>,
}

impl Default for ShowcaseCache {
    fn default() -> Self {
        Self {
            repositories: MemoryCache::new(REPOSITORY_LISTS_CAPACITY, DEFAULT_TTL),
            readmes: MemoryCache::new(README_CAPACITY, DEFAULT_TTL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = MemoryCache::new(4, DEFAULT_TTL);
        cache.insert("user".to_string(), 42);

        assert_eq!(cache.get("user"), Some(&42));
        assert_eq!(cache.get("other"), None);
    }

    #[test]
    fn test_expired_entry_reads_as_absent() {
        let mut cache = MemoryCache::new(4, Duration::from_secs(300));
        cache.insert("user".to_string(), 42);

        // Backdate past the TTL
        cache.entries.get_mut("user").unwrap().cached_at =
            Instant::now() - Duration::from_secs(600);

        assert_eq!(cache.get("user"), None);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut cache = MemoryCache::new(2, DEFAULT_TTL);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("c".to_string(), 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some(&2));
        assert_eq!(cache.get("c"), Some(&3));
    }

    #[test]
    fn test_reinsert_refreshes_eviction_order() {
        let mut cache = MemoryCache::new(2, DEFAULT_TTL);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("a".to_string(), 10);
        cache.insert("c".to_string(), 3);

        // "b" was the oldest untouched key
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some(&10));
        assert_eq!(cache.get("c"), Some(&3));
    }

    #[test]
    fn test_cached_none_extract_is_a_hit() {
        let mut cache = ShowcaseCache::default();
        cache.readmes.insert("user/repo".to_string(), None);

        // A recorded "no extract" outcome must not look like a miss
        assert_eq!(cache.readmes.get("user/repo"), Some(&None));
        assert_eq!(cache.readmes.get("user/other"), None);
    }
}
