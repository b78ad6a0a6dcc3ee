//! `Vec`-backed list implementing the full list API.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use weft_common::result::verify_position;
use weft_common::{Error, Result};

use crate::cursor::ListCursor;
use crate::list_iterable::ListIterable;
use crate::list_iterate::INSERTION_SORT_THRESHOLD;
use crate::mutable_list::{MutableList, OrderedMutableContainer};
use crate::synchronized::SynchronizedList;
use crate::unmodifiable_list::UnmodifiableList;

/// A growable list stored contiguously.
#[derive(Clone)]
pub struct FastList<T> {
    items: Vec<T>,
}

impl<T> FastList<T> {
    pub fn new() -> Self {
        FastList { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FastList {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        FastList { items }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Appends `element`; unlike [`OrderedMutableContainer::append`] this cannot fail.
    #[inline]
    pub fn add(&mut self, element: T) {
        self.items.push(element);
    }

    /// Hybrid stable sort of the backing storage: adjacent-swap insertion sort
    /// below [`INSERTION_SORT_THRESHOLD`] elements, the slice sort above it.
    pub fn sort_items_by<F>(&mut self, mut comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.items.len();
        if len < INSERTION_SORT_THRESHOLD {
            log::trace!("insertion sort of {len} elements");
            for i in 1..len {
                let mut j = i;
                while j > 0 && comparator(&self.items[j - 1], &self.items[j]) == Ordering::Greater {
                    self.items.swap(j - 1, j);
                    j -= 1;
                }
            }
        } else {
            log::trace!("stable slice sort of {len} elements");
            self.items.sort_by(comparator);
        }
    }

    /// Wraps this list in a read-only decorator.
    pub fn into_unmodifiable(self) -> UnmodifiableList<Self> {
        UnmodifiableList::new(self)
    }

    /// Read-only view borrowing this list; the list keeps its owner.
    pub fn as_unmodifiable(&self) -> UnmodifiableList<&Self> {
        UnmodifiableList::new(self)
    }

    /// Wraps this list in a mutual-exclusion decorator.
    pub fn into_synchronized(self) -> SynchronizedList<Self> {
        SynchronizedList::new(self)
    }
}

impl<T> Default for FastList<T> {
    fn default() -> Self {
        FastList::new()
    }
}

impl<T> ListIterable for FastList<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.items.len()))
    }
}

impl<T> OrderedMutableContainer for FastList<T> {
    type Cursor<'c>
        = ListCursor<'c, Self>
    where
        Self: 'c;

    fn set(&mut self, index: usize, element: T) -> Result<T> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        Ok(std::mem::replace(slot, element))
    }

    fn insert(&mut self, index: usize, element: T) -> Result<()> {
        verify_position(index, self.items.len())?;
        self.items.insert(index, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.items.len() {
            return Err(Error::index_out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.items.len();
        if a >= len || b >= len {
            return Err(Error::index_out_of_range(a.max(b), len));
        }
        self.items.swap(a, b);
        Ok(())
    }

    fn cursor(&mut self, index: usize) -> Result<ListCursor<'_, Self>> {
        ListCursor::new(self, index)
    }

    fn append(&mut self, element: T) -> Result<()> {
        self.items.push(element);
        Ok(())
    }

    fn insert_all<I>(&mut self, index: usize, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        verify_position(index, self.items.len())?;
        let before = self.items.len();
        self.items.splice(index..index, items);
        Ok(self.items.len() > before)
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }
}

impl<T> MutableList for FastList<T> {
    fn sort_this_by<F>(&mut self, comparator: F) -> Result<&mut Self>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_items_by(comparator);
        Ok(self)
    }

    fn reverse_this(&mut self) -> Result<&mut Self> {
        self.items.reverse();
        Ok(self)
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

impl_list_eq!([T] FastList<T>, T);

impl<T: Eq> Eq for FastList<T> {}

impl<T: Hash> Hash for FastList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        crate::hashing::hash_sequence(&self.items, self.items.len(), state);
    }
}

impl<T: fmt::Debug> fmt::Debug for FastList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> From<Vec<T>> for FastList<T> {
    fn from(items: Vec<T>) -> Self {
        FastList::from_vec(items)
    }
}

impl<T> From<FastList<T>> for Vec<T> {
    fn from(list: FastList<T>) -> Self {
        list.items
    }
}

impl<T: Clone> From<&[T]> for FastList<T> {
    fn from(slice: &[T]) -> Self {
        FastList::from_vec(slice.to_vec())
    }
}

impl<T> FromIterator<T> for FastList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FastList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FastList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for FastList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FastList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::ser::Serialize for FastList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serde::ser::Serialize::serialize(&self.items, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Deserialize<'de> for FastList<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <Vec<T> as serde::de::Deserialize>::deserialize(deserializer).map(FastList::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::BidirectionalCursor;

    #[test]
    fn positional_primitives_check_bounds() {
        let mut list = fast_list![1, 2, 3];
        assert_eq!(list.set(1, 20).unwrap(), 2);
        assert!(list.set(3, 0).unwrap_err().is_index_out_of_range());
        list.insert(3, 4).unwrap();
        assert!(list.insert(5, 0).is_err());
        assert_eq!(list.remove_at(0).unwrap(), 1);
        assert!(list.remove_at(3).is_err());
        assert_eq!(list, vec![20, 3, 4]);
    }

    #[test]
    fn insert_all_reports_change() {
        let mut list = fast_list![1, 4];
        assert!(list.insert_all(1, vec![2, 3]).unwrap());
        assert!(!list.insert_all(0, Vec::new()).unwrap());
        assert_eq!(list, [1, 2, 3, 4]);
    }

    #[test]
    fn cursor_walks_and_edits() {
        let mut list = fast_list!['a', 'b', 'c'];
        {
            let mut cursor = list.cursor(0).unwrap();
            assert!(cursor.remove().is_err());
            assert_eq!(*cursor.next().unwrap(), 'a');
            assert_eq!(*cursor.next().unwrap(), 'b');
            cursor.remove().unwrap();
            assert_eq!(cursor.next_index(), 1);
            cursor.add('x').unwrap();
            assert_eq!(*cursor.previous().unwrap(), 'x');
            assert_eq!(cursor.set('y').unwrap(), 'x');
        }
        assert_eq!(list, ['a', 'y', 'c']);
    }

    #[test]
    fn bulk_removal_by_membership() {
        let mut list = fast_list![1, 2, 3, 2, 4, 5];
        assert!(list.remove_all([&2, &9]).unwrap());
        assert_eq!(list, [1, 3, 4, 5]);
        assert!(!list.remove_all([&9]).unwrap());
        assert!(list.retain_all(&[5, 1, 7]).unwrap());
        assert_eq!(list, [1, 5]);
        assert!(!list.retain_all([&1, &5]).unwrap());
        assert_eq!(list.without_all([&1]).unwrap(), [5]);
    }

    #[test]
    fn builders_chain() {
        let list = FastList::new()
            .with(1)
            .unwrap()
            .with_all([2, 3, 2])
            .unwrap()
            .without(&2)
            .unwrap();
        assert_eq!(list, [1, 3, 2]);
    }

    #[test]
    fn hash_matches_other_list_types() {
        let state = ahash::RandomState::with_seeds(1, 2, 3, 4);
        let list = fast_list![1, 2, 3];
        let immutable = list.to_immutable();
        assert_eq!(state.hash_one(&list), state.hash_one(&immutable));
        assert_eq!(list.hash_code(), immutable.hash_code());
    }
}
