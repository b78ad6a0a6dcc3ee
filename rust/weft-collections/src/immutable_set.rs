use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ahash::AHashSet;

use crate::UnifiedSet;
use crate::set_iterable::SetIterable;

/// A shared, immutable set. Clones share storage.
#[derive(Clone)]
pub struct ImmutableSet<T> {
    items: Arc<AHashSet<T>>,
}

impl<T> ImmutableSet<T> {
    pub fn empty() -> Self {
        ImmutableSet {
            items: Arc::new(AHashSet::new()),
        }
    }
}

impl<T: Clone + Eq + Hash> ImmutableSet<T> {
    /// A new set with `item` added; this set is left untouched.
    pub fn new_with(&self, item: T) -> Self {
        let mut items = AHashSet::clone(&self.items);
        items.insert(item);
        ImmutableSet {
            items: Arc::new(items),
        }
    }

    /// A new set without `item`.
    pub fn new_without(&self, item: &T) -> Self {
        let mut items = AHashSet::clone(&self.items);
        items.remove(item);
        ImmutableSet {
            items: Arc::new(items),
        }
    }

    /// A mutable copy of the contents.
    pub fn to_mutable(&self) -> UnifiedSet<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> SetIterable for ImmutableSet<T> {
    type Item = T;

    type Iter<'a>
        = std::collections::hash_set::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }
}

impl<T> Default for ImmutableSet<T> {
    fn default() -> Self {
        ImmutableSet::empty()
    }
}

impl_set_eq!([T] ImmutableSet<T>, T);

impl<T: Eq + Hash> Eq for ImmutableSet<T> {}

impl<T: Eq + Hash> Hash for ImmutableSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableSet {
            items: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl<T: Eq + Hash> From<UnifiedSet<T>> for ImmutableSet<T> {
    fn from(set: UnifiedSet<T>) -> Self {
        ImmutableSet {
            items: Arc::new(set.into_inner()),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::ser::Serialize for ImmutableSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Deserialize<'de> for ImmutableSet<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <Vec<T> as serde::de::Deserialize>::deserialize(deserializer)
            .map(|items| items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set_iterable::MutableSet;
    use crate::unified_set;

    #[test]
    fn snapshot_is_independent() {
        let mut source = unified_set![1, 2, 3];
        let snapshot = source.to_immutable();
        source.add(4).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert!(!snapshot.contains(&4));
        assert_eq!(snapshot, unified_set![1, 2, 3]);
    }

    #[test]
    fn new_with_shares_nothing() {
        let set: ImmutableSet<&str> = ["a", "b"].into_iter().collect();
        let larger = set.new_with("c");
        assert_eq!(set.len(), 2);
        assert_eq!(larger.len(), 3);
        assert_eq!(larger.new_without(&"a"), unified_set!["b", "c"]);
    }
}
