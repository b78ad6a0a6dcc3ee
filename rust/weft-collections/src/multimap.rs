//! One-to-many index produced by the `group_by` family.

use std::hash::Hash;

use ahash::AHashMap;

use crate::{FastList, UnifiedSet};

/// Maps each key to a collection `C` of values.
///
/// Keys are only present while they hold at least one value.
#[derive(Debug, Clone)]
pub struct Multimap<K, C> {
    map: AHashMap<K, C>,
}

/// Values per key keep insertion order and duplicates.
pub type ListMultimap<K, V> = Multimap<K, FastList<V>>;

/// Values per key are de-duplicated.
pub type SetMultimap<K, V> = Multimap<K, UnifiedSet<V>>;

impl<K, C> Multimap<K, C>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Multimap {
            map: AHashMap::new(),
        }
    }

    pub fn put<V>(&mut self, key: K, value: V)
    where
        C: Default + Extend<V>,
    {
        self.map
            .entry(key)
            .or_default()
            .extend(std::iter::once(value));
    }

    pub fn get(&self, key: &K) -> Option<&C> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &C)> {
        self.map.iter()
    }

    pub fn into_map(self) -> AHashMap<K, C> {
        self.map
    }
}

impl<K, C> Default for Multimap<K, C>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Multimap::new()
    }
}

impl<K, C> PartialEq for Multimap<K, C>
where
    K: Eq + Hash,
    C: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        *self.map == *other.map
    }
}
