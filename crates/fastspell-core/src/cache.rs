// Fixed-capacity cache with first-in-first-out eviction

use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;

use hashbrown::HashMap;

/// Fraction of the capacity dropped in one eviction round (1/10).
const EVICTION_DIVISOR: usize = 10;

/// A bounded key-value cache.
///
/// Keys are remembered in a ring in the order they were first inserted.
/// When an insert finds the cache full, the oldest tenth of the keys
/// (at least one) is dropped before the new entry is stored.
///
/// Reads never reorder keys and overwriting an existing key keeps its
/// original slot, so eviction order is insertion order rather than
/// recency of use.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    order: VecDeque<K>,
    entries: HashMap<K, V>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero produces a cache that stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity.min(1024)),
            entries: HashMap::with_capacity(capacity.min(1024)),
        }
    }

    /// Look up a cached value.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Whether `key` currently has an entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Store a value, evicting the oldest entries first if the cache is full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return;
        }
        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_oldest(&mut self) {
        let count = (self.capacity / EVICTION_DIVISOR).max(1);
        for _ in 0..count {
            match self.order.pop_front() {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, n: usize) -> BoundedCache<String, usize> {
        let mut cache = BoundedCache::new(capacity);
        for i in 0..n {
            cache.insert(format!("k{i}"), i);
        }
        cache
    }

    #[test]
    fn new_cache_is_empty() {
        let cache: BoundedCache<String, bool> = BoundedCache::new(10);
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 10);
        assert!(cache.get("anything").is_none());
    }

    #[test]
    fn get_with_borrowed_key() {
        let mut cache = BoundedCache::new(4);
        cache.insert("hello".to_string(), true);
        assert_eq!(cache.get("hello"), Some(&true));
        assert!(cache.contains_key("hello"));
    }

    #[test]
    fn evicts_oldest_tenth_when_full() {
        let mut cache = filled(20, 20);
        assert_eq!(cache.len(), 20);

        cache.insert("new".to_string(), 99);
        // 20 / 10 = 2 evicted, then one inserted
        assert_eq!(cache.len(), 19);
        assert!(!cache.contains_key("k0"));
        assert!(!cache.contains_key("k1"));
        assert!(cache.contains_key("k2"));
        assert_eq!(cache.get("new"), Some(&99));
    }

    #[test]
    fn small_capacity_evicts_at_least_one() {
        let mut cache = filled(3, 3);
        cache.insert("x".to_string(), 7);
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key("k0"));
        assert!(cache.contains_key("k1"));
    }

    #[test]
    fn reads_do_not_protect_from_eviction() {
        let mut cache = filled(10, 10);
        // Reading k0 does not move it: eviction is by insertion order.
        assert_eq!(cache.get("k0"), Some(&0));
        cache.insert("k10".to_string(), 10);
        assert!(!cache.contains_key("k0"));
        assert!(cache.contains_key("k1"));
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut cache = filled(10, 10);
        cache.insert("k0".to_string(), 100);
        assert_eq!(cache.len(), 10);
        assert_eq!(cache.get("k0"), Some(&100));

        cache.insert("k10".to_string(), 10);
        assert!(!cache.contains_key("k0"));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = BoundedCache::new(0);
        cache.insert("a".to_string(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut cache = filled(5, 5);
        cache.clear();
        assert!(cache.is_empty());
        cache.insert("k0".to_string(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut cache = BoundedCache::new(50);
        for i in 0..1000 {
            cache.insert(i, i * 2);
            assert!(cache.len() <= 50);
        }
    }
}
