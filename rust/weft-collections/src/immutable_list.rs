//! An immutable, cheaply cloneable and sliceable list.
//!
//! Storage is an `Arc<Vec<T>>` shared by every clone and slice; a slice only
//! records its own offset and length, so neither operation copies elements.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use weft_common::result::verify_position;
use weft_common::{Error, Result};

use crate::FastList;
use crate::list_iterable::ListIterable;

pub struct ImmutableList<T> {
    inner: Arc<Vec<T>>,
    offset: usize,
    len: usize,
}

impl<T> Clone for ImmutableList<T> {
    fn clone(&self) -> Self {
        ImmutableList {
            inner: self.inner.clone(),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T> ImmutableList<T> {
    pub fn empty() -> Self {
        ImmutableList::from_vec(Vec::new())
    }

    pub fn from_vec(vec: Vec<T>) -> Self {
        let len = vec.len();
        ImmutableList {
            inner: Arc::new(vec),
            offset: 0,
            len,
        }
    }

    pub fn from_arc_vec(arc: Arc<Vec<T>>) -> Self {
        let len = arc.len();
        ImmutableList {
            inner: arc,
            offset: 0,
            len,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner[self.offset..self.offset + self.len]
    }

    /// A list sharing this one's storage, restricted to `range`.
    ///
    /// Fails with `IndexOutOfRange` when the range ends past `len()` and with
    /// `InvalidRange` when it starts after it ends.
    pub fn slice<R>(&self, range: R) -> Result<Self>
    where
        R: RangeBounds<usize>,
    {
        let past = |n: usize| {
            n.checked_add(1)
                .ok_or_else(|| Error::index_out_of_range(n, self.len))
        };
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => past(n)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => past(n)?,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };
        verify_position(end, self.len)?;
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        Ok(ImmutableList {
            inner: self.inner.clone(),
            offset: self.offset + start,
            len: end - start,
        })
    }

    /// A new list with `element` appended; this list is left untouched.
    pub fn new_with(&self, element: T) -> Self
    where
        T: Clone,
    {
        let mut items = self.as_slice().to_vec();
        items.push(element);
        ImmutableList::from_vec(items)
    }

    /// A new list without the first occurrence of `element`.
    pub fn new_without(&self, element: &T) -> Self
    where
        T: Clone + PartialEq,
    {
        let mut items = self.as_slice().to_vec();
        if let Some(index) = items.iter().position(|item| item == element) {
            items.remove(index);
        }
        ImmutableList::from_vec(items)
    }

    /// A mutable copy of the contents.
    pub fn to_mutable(&self) -> FastList<T>
    where
        T: Clone,
    {
        FastList::from_vec(self.as_slice().to_vec())
    }
}

impl<T> ListIterable for ImmutableList<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.len))
    }
}

impl<T> Default for ImmutableList<T> {
    fn default() -> Self {
        ImmutableList::empty()
    }
}

impl_list_eq!([T] ImmutableList<T>, T);

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        crate::hashing::hash_sequence(self.as_slice(), self.len, state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> AsRef<[T]> for ImmutableList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for ImmutableList<T> {
    fn from(vec: Vec<T>) -> Self {
        ImmutableList::from_vec(vec)
    }
}

impl<T> From<Arc<Vec<T>>> for ImmutableList<T> {
    fn from(arc: Arc<Vec<T>>) -> Self {
        ImmutableList::from_arc_vec(arc)
    }
}

impl<T> From<FastList<T>> for ImmutableList<T> {
    fn from(list: FastList<T>) -> Self {
        ImmutableList::from_vec(list.into_vec())
    }
}

impl<T> FromIterator<T> for ImmutableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ImmutableList::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::ser::Serialize for ImmutableList<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serde::ser::Serialize::serialize(self.as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Deserialize<'de> for ImmutableList<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <Vec<T> as serde::de::Deserialize>::deserialize(deserializer).map(ImmutableList::from_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_share_storage() {
        let list = ImmutableList::from_vec(vec![1, 2, 3, 4, 5]);
        let middle = list.slice(1..4).unwrap();
        assert_eq!(middle, [2, 3, 4]);
        assert!(Arc::ptr_eq(&list.inner, &middle.inner));
        assert_eq!(middle.slice(..=1).unwrap(), [2, 3]);
        assert!(middle.slice(2..5).is_err());
        assert!(middle.slice(2..1).is_err());
    }

    #[test]
    fn slice_bounds_at_usize_max_fail() {
        let list = ImmutableList::from_vec(vec![1, 2, 3]);
        assert!(list.slice(0..=usize::MAX).unwrap_err().is_index_out_of_range());
        let start = (Bound::Excluded(usize::MAX), Bound::Unbounded);
        assert!(list.slice(start).unwrap_err().is_index_out_of_range());
        assert_eq!(list.slice(..=2).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn new_with_leaves_original() {
        let list: ImmutableList<i32> = (1..=3).collect();
        let longer = list.new_with(4);
        assert_eq!(list, [1, 2, 3]);
        assert_eq!(longer, [1, 2, 3, 4]);
        assert_eq!(longer.new_without(&2), [1, 3, 4]);
    }

    #[test]
    fn empty_and_default() {
        let empty = ImmutableList::<i32>::empty();
        assert!(empty.is_empty());
        assert_eq!(empty, ImmutableList::<i32>::default());
        assert!(empty.get(0).is_err());
    }
}
