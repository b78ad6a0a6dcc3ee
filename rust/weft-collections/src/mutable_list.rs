//! Mutation capabilities layered on top of [`ListIterable`].

use std::cmp::Ordering;
use std::hash::Hash;

use ahash::AHashSet;
use weft_common::Result;
use weft_common::result::verify_position;

use crate::cursor::BidirectionalCursor;
use crate::list_iterable::ListIterable;
use crate::list_iterate;
use crate::sub_list::SubList;

/// The positional contract every mutable list, view and decorator satisfies.
///
/// Reads are bounded by `[0, len)`, insertion points by `[0, len]`. Violations
/// are reported as `IndexOutOfRange` before any element is touched.
pub trait OrderedMutableContainer: ListIterable {
    type Cursor<'c>: BidirectionalCursor<Item = Self::Item>
    where
        Self: 'c;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, element: Self::Item) -> Result<Self::Item>;

    fn insert(&mut self, index: usize, element: Self::Item) -> Result<()>;

    fn remove_at(&mut self, index: usize) -> Result<Self::Item>;

    fn swap(&mut self, a: usize, b: usize) -> Result<()>;

    /// Cursor positioned before the element at `index` (`index <= len()`).
    fn cursor(&mut self, index: usize) -> Result<Self::Cursor<'_>>;

    fn append(&mut self, element: Self::Item) -> Result<()> {
        let len = self.len();
        self.insert(len, element)
    }

    /// Inserts `items` starting at `index`; `Ok(false)` when `items` is empty.
    fn insert_all<I>(&mut self, index: usize, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        verify_position(index, self.len())?;
        let mut position = index;
        for item in items {
            self.insert(position, item)?;
            position += 1;
        }
        Ok(position > index)
    }

    fn append_all<I>(&mut self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let len = self.len();
        self.insert_all(len, items)
    }

    /// Removes from the front until empty, using only `remove_at`.
    fn clear(&mut self) -> Result<()> {
        while !self.is_empty() {
            self.remove_at(0)?;
        }
        Ok(())
    }
}

/// The rich mutating API of a list.
pub trait MutableList: OrderedMutableContainer {
    /// Stable in-place sort by natural order.
    fn sort_this(&mut self) -> Result<&mut Self>
    where
        Self::Item: Ord,
    {
        self.sort_this_by(Ord::cmp)
    }

    /// Stable in-place sort; insertion sort below
    /// [`INSERTION_SORT_THRESHOLD`](list_iterate::INSERTION_SORT_THRESHOLD) elements.
    fn sort_this_by<F>(&mut self, comparator: F) -> Result<&mut Self>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        list_iterate::sort_this(self, comparator)?;
        Ok(self)
    }

    fn sort_this_by_key<K, F>(&mut self, mut function: F) -> Result<&mut Self>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.sort_this_by(|a, b| function(a).cmp(&function(b)))
    }

    fn reverse_this(&mut self) -> Result<&mut Self> {
        list_iterate::reverse_this(self)?;
        Ok(self)
    }

    /// Removes every element matching `predicate`; `Ok(true)` if any was removed.
    fn remove_if<P>(&mut self, predicate: P) -> Result<bool>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::remove_if(self, predicate)
    }

    fn remove_if_with<Q, P>(&mut self, mut predicate: P, parameter: &Q) -> Result<bool>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
    {
        self.remove_if(|item| predicate(item, parameter))
    }

    /// Removes the first occurrence of `item`.
    fn remove_item(&mut self, item: &Self::Item) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => {
                self.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every element equal to one of `items`.
    fn remove_all<'a, I>(&mut self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: Eq + Hash + 'a,
    {
        let items: AHashSet<&Self::Item> = items.into_iter().collect();
        self.remove_if(|element| items.contains(element))
    }

    /// Keeps only the elements equal to one of `items`.
    fn retain_all<'a, I>(&mut self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: Eq + Hash + 'a,
    {
        let items: AHashSet<&Self::Item> = items.into_iter().collect();
        self.remove_if(|element| !items.contains(element))
    }

    fn with(mut self, element: Self::Item) -> Result<Self>
    where
        Self: Sized,
    {
        self.append(element)?;
        Ok(self)
    }

    fn without(mut self, element: &Self::Item) -> Result<Self>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        self.remove_item(element)?;
        Ok(self)
    }

    fn with_all<I>(mut self, items: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        self.append_all(items)?;
        Ok(self)
    }

    fn without_all<'a, I>(mut self, items: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: Eq + Hash + 'a,
    {
        self.remove_all(items)?;
        Ok(self)
    }

    /// Live view over `[from, to)`. Mutations through the view reach this list.
    fn sub_list(&mut self, from: usize, to: usize) -> Result<SubList<'_, Self>> {
        SubList::new(self, from, to)
    }
}
