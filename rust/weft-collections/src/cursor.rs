//! Bidirectional cursors over positional containers.
//!
//! A cursor sits *between* elements: `next_index()` is the position of the
//! element that the next call to [`BidirectionalCursor::next`] returns. `remove`
//! and `set` act on the element returned by the most recent `next`/`previous`.

use weft_common::{Error, Result};

use crate::mutable_list::OrderedMutableContainer;

pub trait BidirectionalCursor {
    type Item;

    fn has_next(&self) -> bool;

    fn next(&mut self) -> Result<&Self::Item>;

    fn has_previous(&self) -> bool;

    fn previous(&mut self) -> Result<&Self::Item>;

    fn next_index(&self) -> usize;

    /// Position of the element that `previous` would return, `None` at the start.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Removes the element last returned by `next` or `previous`.
    fn remove(&mut self) -> Result<Self::Item>;

    /// Replaces the element last returned by `next` or `previous`.
    fn set(&mut self, element: Self::Item) -> Result<Self::Item>;

    /// Inserts `element` immediately before the cursor position.
    fn add(&mut self, element: Self::Item) -> Result<()>;
}

/// Cursor expressed purely through the positional primitives of the container
/// it borrows. Every [`OrderedMutableContainer`] can hand one out.
pub struct ListCursor<'c, L: ?Sized> {
    list: &'c mut L,
    cursor: usize,
    last_returned: Option<usize>,
}

impl<'c, L> ListCursor<'c, L>
where
    L: OrderedMutableContainer + ?Sized,
{
    pub fn new(list: &'c mut L, index: usize) -> Result<Self> {
        weft_common::result::verify_position(index, list.len())?;
        Ok(ListCursor {
            list,
            cursor: index,
            last_returned: None,
        })
    }

    fn last_returned(&self, operation: &str) -> Result<usize> {
        self.last_returned
            .ok_or_else(|| Error::invalid_operation(operation))
    }
}

impl<L> BidirectionalCursor for ListCursor<'_, L>
where
    L: OrderedMutableContainer + ?Sized,
{
    type Item = L::Item;

    fn has_next(&self) -> bool {
        self.cursor < self.list.len()
    }

    fn next(&mut self) -> Result<&Self::Item> {
        if !self.has_next() {
            return Err(Error::no_such_element());
        }
        let index = self.cursor;
        self.cursor += 1;
        self.last_returned = Some(index);
        self.list.get(index)
    }

    fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    fn previous(&mut self) -> Result<&Self::Item> {
        if !self.has_previous() {
            return Err(Error::no_such_element());
        }
        self.cursor -= 1;
        self.last_returned = Some(self.cursor);
        self.list.get(self.cursor)
    }

    fn next_index(&self) -> usize {
        self.cursor
    }

    fn remove(&mut self) -> Result<Self::Item> {
        let index = self.last_returned("remove")?;
        let removed = self.list.remove_at(index)?;
        if index < self.cursor {
            self.cursor -= 1;
        }
        self.last_returned = None;
        Ok(removed)
    }

    fn set(&mut self, element: Self::Item) -> Result<Self::Item> {
        let index = self.last_returned("set")?;
        self.list.set(index, element)
    }

    fn add(&mut self, element: Self::Item) -> Result<()> {
        self.list.insert(self.cursor, element)?;
        self.cursor += 1;
        self.last_returned = None;
        Ok(())
    }
}
