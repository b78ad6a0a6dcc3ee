//! Mutual-exclusion decorators.
//!
//! Each call takes the lock for its own duration only. Compound operations that
//! must observe a consistent state use [`SynchronizedList::with_read`] or
//! [`SynchronizedList::with_write`]. Results are returned by value, since no
//! reference may outlive the lock.
//!
//! A poisoned lock is recovered rather than propagated: the next caller gets
//! the collection in whatever state the panicking call left it. A panic inside
//! a `with_write` closure or a sort comparator may therefore leave a partial
//! update behind; the collection stays memory-safe and usable, but callers
//! that need all-or-nothing updates must not panic while holding the lock.

use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use weft_common::Result;

use crate::list_iterable::ListIterable;
use crate::mutable_list::MutableList;
use crate::set_iterable::MutableSet;
use crate::{FastList, ImmutableList, ImmutableSet, UnifiedSet};

pub struct SynchronizedList<L> {
    inner: Arc<Mutex<L>>,
}

impl<L> SynchronizedList<L> {
    pub fn new(list: L) -> Self {
        SynchronizedList {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, L> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with shared access while holding the lock.
    pub fn with_read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&L) -> R,
    {
        f(&self.lock())
    }

    /// Runs `f` with exclusive access while holding the lock.
    pub fn with_write<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut L) -> R,
    {
        f(&mut self.lock())
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Already synchronized: returns a handle sharing this lock.
    pub fn as_synchronized(&self) -> Self {
        self.clone()
    }

    /// Unwraps the list when this is the last handle.
    pub fn into_inner(self) -> std::result::Result<L, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(SynchronizedList { inner }),
        }
    }
}

impl<L> Clone for SynchronizedList<L> {
    fn clone(&self) -> Self {
        SynchronizedList {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<L: MutableList> SynchronizedList<L> {
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn get_cloned(&self, index: usize) -> Result<L::Item>
    where
        L::Item: Clone,
    {
        self.lock().get(index).cloned()
    }

    pub fn contains(&self, item: &L::Item) -> bool
    where
        L::Item: PartialEq,
    {
        self.lock().contains(item)
    }

    pub fn set(&self, index: usize, element: L::Item) -> Result<L::Item> {
        self.lock().set(index, element)
    }

    pub fn insert(&self, index: usize, element: L::Item) -> Result<()> {
        self.lock().insert(index, element)
    }

    pub fn append(&self, element: L::Item) -> Result<()> {
        self.lock().append(element)
    }

    pub fn append_all<I>(&self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = L::Item>,
    {
        self.lock().append_all(items)
    }

    pub fn remove_at(&self, index: usize) -> Result<L::Item> {
        self.lock().remove_at(index)
    }

    pub fn remove_if<P>(&self, predicate: P) -> Result<bool>
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.lock().remove_if(predicate)
    }

    pub fn clear(&self) -> Result<()> {
        self.lock().clear()
    }

    pub fn sort_this_by<F>(&self, comparator: F) -> Result<()>
    where
        F: FnMut(&L::Item, &L::Item) -> Ordering,
    {
        self.lock().sort_this_by(comparator).map(|_| ())
    }

    pub fn for_each<F>(&self, procedure: F)
    where
        F: FnMut(&L::Item),
    {
        self.lock().for_each(procedure)
    }

    pub fn select<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.lock().select(predicate)
    }

    pub fn reject<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.lock().reject(predicate)
    }

    pub fn collect<V, F>(&self, function: F) -> FastList<V>
    where
        F: FnMut(&L::Item) -> V,
    {
        self.lock().collect(function)
    }

    pub fn detect_cloned<P>(&self, predicate: P) -> Option<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.lock().detect(predicate).cloned()
    }

    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.lock().count(predicate)
    }

    pub fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.lock().any_satisfy(predicate)
    }

    pub fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.lock().all_satisfy(predicate)
    }

    pub fn inject_into<A, F>(&self, seed: A, function: F) -> A
    where
        F: FnMut(A, &L::Item) -> A,
    {
        self.lock().inject_into(seed, function)
    }

    pub fn to_list(&self) -> FastList<L::Item>
    where
        L::Item: Clone,
    {
        self.lock().to_list()
    }

    pub fn to_immutable(&self) -> ImmutableList<L::Item>
    where
        L::Item: Clone,
    {
        self.lock().to_immutable()
    }

    pub fn hash_code(&self) -> u64
    where
        L::Item: Hash,
    {
        self.lock().hash_code()
    }
}

pub struct SynchronizedSet<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SynchronizedSet<S> {
    pub fn new(set: S) -> Self {
        SynchronizedSet {
            inner: Arc::new(Mutex::new(set)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        f(&self.lock())
    }

    pub fn with_write<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut S) -> R,
    {
        f(&mut self.lock())
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn as_synchronized(&self) -> Self {
        self.clone()
    }
}

impl<S> Clone for SynchronizedSet<S> {
    fn clone(&self) -> Self {
        SynchronizedSet {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: MutableSet> SynchronizedSet<S> {
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, item: &S::Item) -> bool {
        self.lock().contains(item)
    }

    pub fn add(&self, item: S::Item) -> Result<bool> {
        self.lock().add(item)
    }

    pub fn add_all<I>(&self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = S::Item>,
    {
        self.lock().add_all(items)
    }

    pub fn remove(&self, item: &S::Item) -> Result<bool> {
        self.lock().remove(item)
    }

    pub fn remove_if<P>(&self, predicate: P) -> Result<bool>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.lock().remove_if(predicate)
    }

    pub fn clear(&self) -> Result<()> {
        self.lock().clear()
    }

    pub fn select<P>(&self, predicate: P) -> UnifiedSet<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.lock().select(predicate)
    }

    pub fn reject<P>(&self, predicate: P) -> UnifiedSet<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.lock().reject(predicate)
    }

    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.lock().count(predicate)
    }

    pub fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.lock().any_satisfy(predicate)
    }

    pub fn to_set(&self) -> UnifiedSet<S::Item>
    where
        S::Item: Clone + Eq + Hash,
    {
        self.lock().to_set()
    }

    pub fn to_immutable(&self) -> ImmutableSet<S::Item>
    where
        S::Item: Clone + Eq + Hash,
    {
        self.lock().to_immutable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutable_list::OrderedMutableContainer;
    use crate::unified_set;

    #[test]
    fn concurrent_appends_are_all_kept() {
        let list = SynchronizedList::new(FastList::new());
        std::thread::scope(|scope| {
            for worker in 0..4 {
                let list = list.clone();
                scope.spawn(move || {
                    for i in 0..100 {
                        list.append(worker * 100 + i).unwrap();
                    }
                });
            }
        });
        assert_eq!(list.len(), 400);
        let sorted = list.with_read(|inner| inner.to_sorted_list());
        assert_eq!(sorted, (0..400).collect::<Vec<_>>());
    }

    #[test]
    fn compound_update_under_one_lock() {
        let list = fast_list![3, 1, 2].into_synchronized();
        list.with_write(|inner| {
            inner.sort_this().unwrap();
            inner.append(4).unwrap();
        });
        assert_eq!(list.to_list(), [1, 2, 3, 4]);
        assert_eq!(list.get_cloned(0).unwrap(), 1);
    }

    #[test]
    fn poisoned_lock_keeps_the_partial_update() {
        let list = fast_list![1, 2].into_synchronized();
        let shared = list.clone();
        let outcome = std::thread::spawn(move || {
            shared.with_write(|inner| {
                inner.append(3).unwrap();
                if inner.len() == 3 {
                    panic!("interrupted mid-update");
                }
            })
        })
        .join();
        assert!(outcome.is_err());

        assert_eq!(list.to_list(), [1, 2, 3]);
        list.append(4).unwrap();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn synchronized_set_forwards() {
        let set = unified_set![1, 2].into_synchronized();
        assert!(set.add(3).unwrap());
        assert!(!set.add(3).unwrap());
        assert_eq!(set.select(|item| *item > 1), unified_set![2, 3]);
    }

    #[test]
    fn wrapping_a_read_only_view_keeps_it_read_only() {
        let list = fast_list![1, 2].into_unmodifiable().as_synchronized();
        assert!(list.append(3).unwrap_err().is_unsupported());
        assert_eq!(list.len(), 2);
    }
}
