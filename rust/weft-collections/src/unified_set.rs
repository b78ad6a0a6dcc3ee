//! Hash set implementing the full set API.

use std::fmt;
use std::hash::{Hash, Hasher};

use ahash::AHashSet;
use weft_common::Result;

use crate::set_iterable::{MutableSet, SetIterable};
use crate::synchronized::SynchronizedSet;
use crate::unmodifiable_set::UnmodifiableSet;

#[derive(Clone)]
pub struct UnifiedSet<T> {
    items: AHashSet<T>,
}

impl<T> UnifiedSet<T> {
    pub fn new() -> Self {
        UnifiedSet {
            items: AHashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        UnifiedSet {
            items: AHashSet::with_capacity(capacity),
        }
    }

    pub fn into_inner(self) -> AHashSet<T> {
        self.items
    }

    pub fn as_inner(&self) -> &AHashSet<T> {
        &self.items
    }

    /// Wraps this set in a read-only decorator.
    pub fn into_unmodifiable(self) -> UnmodifiableSet<Self> {
        UnmodifiableSet::new(self)
    }

    /// Read-only view borrowing this set.
    pub fn as_unmodifiable(&self) -> UnmodifiableSet<&Self> {
        UnmodifiableSet::new(self)
    }

    /// Wraps this set in a mutual-exclusion decorator.
    pub fn into_synchronized(self) -> SynchronizedSet<Self> {
        SynchronizedSet::new(self)
    }
}

impl<T: Eq + Hash> UnifiedSet<T> {
    /// Inserts `item`; unlike [`MutableSet::add`] this cannot fail.
    #[inline]
    pub fn put(&mut self, item: T) -> bool {
        self.items.insert(item)
    }
}

impl<T> Default for UnifiedSet<T> {
    fn default() -> Self {
        UnifiedSet::new()
    }
}

impl<T: Eq + Hash> SetIterable for UnifiedSet<T> {
    type Item = T;

    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }
}

impl<T: Eq + Hash> MutableSet for UnifiedSet<T> {
    fn add(&mut self, item: T) -> Result<bool> {
        Ok(self.items.insert(item))
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        Ok(self.items.remove(item))
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }

    fn remove_if<P>(&mut self, mut predicate: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        Ok(self.items.len() != before)
    }
}

impl_set_eq!([T] UnifiedSet<T>, T);

impl<T: Eq + Hash> Eq for UnifiedSet<T> {}

impl<T: Eq + Hash> Hash for UnifiedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: fmt::Debug> fmt::Debug for UnifiedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for UnifiedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        UnifiedSet {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for UnifiedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> From<AHashSet<T>> for UnifiedSet<T> {
    fn from(items: AHashSet<T>) -> Self {
        UnifiedSet { items }
    }
}

impl<T> IntoIterator for UnifiedSet<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UnifiedSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::ser::Serialize for UnifiedSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Deserialize<'de> for UnifiedSet<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <Vec<T> as serde::de::Deserialize>::deserialize(deserializer).map(|items| items.into_iter().collect())
    }
}

/// Builds a [`UnifiedSet`] from its elements.
#[macro_export]
macro_rules! unified_set {
    () => {
        $crate::UnifiedSet::new()
    };
    ($($x:expr),+ $(,)?) => {
        [$($x),+].into_iter().collect::<$crate::UnifiedSet<_>>()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_iterable::ListIterable;
    use crate::unified_set;

    #[test]
    fn set_algebra() {
        let a = unified_set![1, 2, 3, 4];
        let b = unified_set![3, 4, 5];
        assert_eq!(a.union(&b), unified_set![1, 2, 3, 4, 5]);
        assert_eq!(a.intersect(&b), unified_set![3, 4]);
        assert_eq!(a.difference(&b), unified_set![1, 2]);
        assert_eq!(a.symmetric_difference(&b), unified_set![1, 2, 5]);
        assert!(unified_set![3, 4].is_subset_of(&b));
        assert!(unified_set![3, 4].is_proper_subset_of(&b));
        assert!(!b.is_proper_subset_of(&b));
        assert!(b.is_subset_of(&b));
    }

    #[test]
    fn power_set_counts_subsets() {
        let set = unified_set!['a', 'b', 'c'];
        let subsets = set.power_set();
        assert_eq!(subsets.len(), 8);
        assert!(subsets.contains(&UnifiedSet::new()));
        assert!(subsets.contains(&set));
    }

    #[test]
    fn cartesian_product_pairs_everything() {
        let numbers = unified_set![1, 2];
        let letters = unified_set!['x', 'y', 'z'];
        let product = numbers.cartesian_product(&letters).to_sorted_list();
        assert_eq!(product.len(), 6);
        assert_eq!(product.first(), Some(&(1, 'x')));
        assert_eq!(product.last(), Some(&(2, 'z')));
    }

    #[test]
    fn mutation_reports_change() {
        let mut set = UnifiedSet::new();
        assert!(set.add(1).unwrap());
        assert!(!set.add(1).unwrap());
        assert!(set.add_all([2, 3, 4]).unwrap());
        assert!(set.remove_if(|item| item % 2 == 0).unwrap());
        assert_eq!(set, unified_set![1, 3]);
        assert!(set.retain_all(&[3]).unwrap());
        assert_eq!(set, unified_set![3]);
    }

    #[test]
    fn hash_code_ignores_insertion_order() {
        let forward: UnifiedSet<i32> = (0..50).collect();
        let backward: UnifiedSet<i32> = (0..50).rev().collect();
        assert_eq!(forward.hash_code(), backward.hash_code());
    }
}
