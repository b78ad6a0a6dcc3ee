//! Live windows over a backing list.
//!
//! A [`SubList`] stores no elements. View index `i` addresses backing index
//! `offset + i`, and every structural change made through the view adjusts the
//! view's own `size` by the same delta it applies to the backing list, so
//! `offset + size <= backing.len()` holds after each call.
//!
//! The view borrows its backing list exclusively for its whole lifetime. The
//! backing list therefore cannot be mutated behind the view's back; a nested
//! view in turn borrows its parent view, and its bounds are checked against the
//! parent view's size rather than the root list.

use weft_common::result::{verify_index, verify_position};
use weft_common::{Error, Result};

use crate::cursor::BidirectionalCursor;
use crate::list_iterable::ListIterable;
use crate::mutable_list::{MutableList, OrderedMutableContainer};

pub struct SubList<'a, L: ?Sized> {
    list: &'a mut L,
    offset: usize,
    size: usize,
}

impl<'a, L> SubList<'a, L>
where
    L: OrderedMutableContainer + ?Sized,
{
    /// Window over `[from, to)` of `list`.
    ///
    /// Fails with `IndexOutOfRange` when `to > list.len()` and with
    /// `InvalidRange` when `from > to`.
    pub fn new(list: &'a mut L, from: usize, to: usize) -> Result<Self> {
        verify_position(to, list.len())?;
        if from > to {
            return Err(Error::invalid_range(from, to));
        }
        Ok(SubList {
            list,
            offset: from,
            size: to - from,
        })
    }

    /// Position of the first element of this view in the backing list.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The backing list, read-only.
    pub fn backing(&self) -> &L {
        &*self.list
    }
}

impl<L> ListIterable for SubList<'_, L>
where
    L: OrderedMutableContainer + ?Sized,
{
    type Item = L::Item;

    fn len(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> Result<&L::Item> {
        verify_index(index, self.size)?;
        self.list.get(self.offset + index)
    }
}

impl<'a, L> OrderedMutableContainer for SubList<'a, L>
where
    L: OrderedMutableContainer + ?Sized,
{
    type Cursor<'c>
        = SubListCursor<'c, L::Cursor<'c>>
    where
        Self: 'c;

    fn set(&mut self, index: usize, element: L::Item) -> Result<L::Item> {
        verify_index(index, self.size)?;
        self.list.set(self.offset + index, element)
    }

    fn insert(&mut self, index: usize, element: L::Item) -> Result<()> {
        verify_position(index, self.size)?;
        self.list.insert(self.offset + index, element)?;
        self.size += 1;
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<L::Item> {
        verify_index(index, self.size)?;
        let removed = self.list.remove_at(self.offset + index)?;
        self.size -= 1;
        Ok(removed)
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        verify_index(a, self.size)?;
        verify_index(b, self.size)?;
        self.list.swap(self.offset + a, self.offset + b)
    }

    fn cursor(&mut self, index: usize) -> Result<Self::Cursor<'_>> {
        verify_position(index, self.size)?;
        let inner = self.list.cursor(self.offset + index)?;
        Ok(SubListCursor {
            inner,
            offset: self.offset,
            size: &mut self.size,
        })
    }

    fn insert_all<I>(&mut self, index: usize, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = L::Item>,
    {
        verify_position(index, self.size)?;
        let before = self.list.len();
        let changed = self.list.insert_all(self.offset + index, items)?;
        self.size += self.list.len() - before;
        Ok(changed)
    }
}

impl<L> MutableList for SubList<'_, L> where L: OrderedMutableContainer + ?Sized {}

impl_list_eq!(['a, L: OrderedMutableContainer + ?Sized] SubList<'a, L>, L::Item);

impl<L> std::fmt::Debug for SubList<'_, L>
where
    L: OrderedMutableContainer + ?Sized,
    L::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<L> std::hash::Hash for SubList<'_, L>
where
    L: OrderedMutableContainer + ?Sized,
    L::Item: std::hash::Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        crate::hashing::hash_sequence(self.iter(), self.size, state);
    }
}

/// Cursor over a [`SubList`], driving the backing list's own cursor.
///
/// Positions are reported relative to the view. `remove` and `add` keep the
/// view's size in step with the backing list.
pub struct SubListCursor<'c, C> {
    inner: C,
    offset: usize,
    size: &'c mut usize,
}

impl<C> SubListCursor<'_, C>
where
    C: BidirectionalCursor,
{
    fn position(&self) -> usize {
        self.inner.next_index() - self.offset
    }
}

impl<C> BidirectionalCursor for SubListCursor<'_, C>
where
    C: BidirectionalCursor,
{
    type Item = C::Item;

    fn has_next(&self) -> bool {
        self.position() < *self.size
    }

    fn next(&mut self) -> Result<&C::Item> {
        if !self.has_next() {
            return Err(Error::no_such_element());
        }
        self.inner.next()
    }

    fn has_previous(&self) -> bool {
        self.position() > 0
    }

    fn previous(&mut self) -> Result<&C::Item> {
        if !self.has_previous() {
            return Err(Error::no_such_element());
        }
        self.inner.previous()
    }

    fn next_index(&self) -> usize {
        self.position()
    }

    fn remove(&mut self) -> Result<C::Item> {
        let removed = self.inner.remove()?;
        *self.size -= 1;
        Ok(removed)
    }

    fn set(&mut self, element: C::Item) -> Result<C::Item> {
        self.inner.set(element)
    }

    fn add(&mut self, element: C::Item) -> Result<()> {
        self.inner.add(element)?;
        *self.size += 1;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<L> serde::ser::Serialize for SubList<'_, L>
where
    L: OrderedMutableContainer + ?Sized,
    L::Item: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
