use std::fmt;

use weft_common::{Error, Result, verify_arg};

use crate::FastList;

/// Last-in, first-out stack stored contiguously; the top is the last slot.
///
/// Iteration and conversion run from the top down.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        ArrayStack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ArrayStack {
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Fails with `NoSuchElement` on an empty stack.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or_else(Error::no_such_element)
    }

    /// Pops `count` elements, top first.
    pub fn pop_n(&mut self, count: usize) -> Result<FastList<T>> {
        verify_arg!(count, count <= self.items.len());
        let split = self.items.len() - count;
        Ok(self.items.drain(split..).rev().collect())
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or_else(Error::no_such_element)
    }

    /// Copies of the top `count` elements, top first.
    pub fn peek_n(&self, count: usize) -> Result<FastList<T>>
    where
        T: Clone,
    {
        verify_arg!(count, count <= self.items.len());
        Ok(self.iter().take(count).cloned().collect())
    }

    /// Element `index` positions below the top.
    pub fn peek_at(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }
        Ok(&self.items[len - 1 - index])
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Top-first iteration.
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Top-first copy of the contents.
    pub fn to_list(&self) -> FastList<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        ArrayStack::new()
    }
}

/// Pushes in iteration order, so the last element ends on top.
impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayStack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::ser::Serialize for ArrayStack<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_pushed_is_on_top() {
        let mut stack: ArrayStack<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(*stack.peek().unwrap(), 3);
        assert_eq!(*stack.peek_at(2).unwrap(), 1);
        assert!(stack.peek_at(3).is_err());
        stack.push(4);
        assert_eq!(stack.pop().unwrap(), 4);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn peek_and_pop_many() {
        let mut stack: ArrayStack<i32> = (1..=5).collect();
        assert_eq!(stack.peek_n(2).unwrap(), [5, 4]);
        assert!(stack.peek_n(6).is_err());
        assert_eq!(stack.pop_n(3).unwrap(), [5, 4, 3]);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn empty_stack_fails() {
        let mut stack = ArrayStack::<u8>::new();
        assert!(stack.pop().is_err());
        assert!(stack.peek().is_err());
    }
}
