//! The read capability of an ordered, positionally addressable sequence.
//!
//! [`ListIterable`] requires only `len` and `get`; everything else (filtering,
//! mapping, searching, folding, grouping, zipping, sorting into a new list) is
//! provided once by default methods that hand the sequence to [`list_iterate`].
//! Containers and views implement the two primitives and inherit the rest;
//! decorators override the defaults with explicit forwarding calls.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use ahash::AHashMap;
use rayon::ThreadPool;
use weft_common::Result;

use crate::list_iterate;
use crate::multimap::ListMultimap;
use crate::parallel::ParallelListIterable;
use crate::partition::PartitionList;
use crate::{ArrayStack, FastList, ImmutableList, UnifiedSet};

pub trait ListIterable {
    type Item;

    fn len(&self) -> usize;

    /// Fails with `IndexOutOfRange` unless `index < len()`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> ListIter<'_, Self> {
        ListIter::new(self)
    }

    fn first(&self) -> Option<&Self::Item> {
        self.iter().next()
    }

    fn last(&self) -> Option<&Self::Item> {
        self.iter().next_back()
    }

    fn for_each<F>(&self, procedure: F)
    where
        F: FnMut(&Self::Item),
    {
        list_iterate::for_each(self, procedure)
    }

    fn for_each_with<Q, F>(&self, procedure: F, parameter: &Q)
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q),
    {
        list_iterate::for_each_with(self, procedure, parameter)
    }

    fn for_each_with_index<F>(&self, procedure: F)
    where
        F: FnMut(&Self::Item, usize),
    {
        list_iterate::for_each_with_index(self, procedure)
    }

    /// Visits `from..=to`, descending when `from > to`.
    fn for_each_in_range<F>(&self, from: usize, to: usize, procedure: F) -> Result<()>
    where
        F: FnMut(&Self::Item),
    {
        list_iterate::for_each_in_range(self, from, to, procedure)
    }

    fn reverse_for_each<F>(&self, procedure: F)
    where
        F: FnMut(&Self::Item),
    {
        list_iterate::reverse_for_each(self, procedure)
    }

    fn tap<F>(&self, procedure: F) -> &Self
    where
        F: FnMut(&Self::Item),
    {
        self.for_each(procedure);
        self
    }

    fn select<P>(&self, predicate: P) -> FastList<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        list_iterate::select(self, predicate)
    }

    fn select_with<Q, P>(&self, predicate: P, parameter: &Q) -> FastList<Self::Item>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        Self::Item: Clone,
    {
        list_iterate::select_with(self, predicate, parameter)
    }

    fn reject<P>(&self, predicate: P) -> FastList<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        list_iterate::reject(self, predicate)
    }

    fn reject_with<Q, P>(&self, predicate: P, parameter: &Q) -> FastList<Self::Item>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        Self::Item: Clone,
    {
        list_iterate::reject_with(self, predicate, parameter)
    }

    fn partition<P>(&self, predicate: P) -> PartitionList<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        list_iterate::partition(self, predicate)
    }

    fn partition_with<Q, P>(&self, predicate: P, parameter: &Q) -> PartitionList<Self::Item>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        Self::Item: Clone,
    {
        list_iterate::partition_with(self, predicate, parameter)
    }

    /// Selected and rejected elements as a pair of lists.
    fn select_and_reject_with<Q, P>(
        &self,
        predicate: P,
        parameter: &Q,
    ) -> (FastList<Self::Item>, FastList<Self::Item>)
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        Self::Item: Clone,
    {
        self.partition_with(predicate, parameter).into_parts()
    }

    /// Splits at the first element failing `predicate`.
    fn partition_while<P>(&self, predicate: P) -> PartitionList<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        list_iterate::partition_while(self, predicate)
    }

    fn collect<V, F>(&self, function: F) -> FastList<V>
    where
        F: FnMut(&Self::Item) -> V,
    {
        list_iterate::collect(self, function)
    }

    fn collect_with<Q, V, F>(&self, function: F, parameter: &Q) -> FastList<V>
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> V,
    {
        list_iterate::collect_with(self, function, parameter)
    }

    fn collect_if<V, P, F>(&self, predicate: P, function: F) -> FastList<V>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(&Self::Item) -> V,
    {
        list_iterate::collect_if(self, predicate, function)
    }

    fn flat_collect<V, J, F>(&self, function: F) -> FastList<V>
    where
        F: FnMut(&Self::Item) -> J,
        J: IntoIterator<Item = V>,
    {
        list_iterate::flat_collect(self, function)
    }

    fn detect<P>(&self, predicate: P) -> Option<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::detect(self, predicate)
    }

    fn detect_with<Q, P>(&self, predicate: P, parameter: &Q) -> Option<&Self::Item>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
    {
        list_iterate::detect_with(self, predicate, parameter)
    }

    /// Like [`ListIterable::detect`], but calls `fallback` when nothing matches.
    fn detect_if_none<P, F>(&self, predicate: P, fallback: F) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnOnce() -> Self::Item,
        Self::Item: Clone,
    {
        list_iterate::detect_if_none(self, predicate, fallback)
    }

    fn detect_with_if_none<Q, P, F>(&self, predicate: P, parameter: &Q, fallback: F) -> Self::Item
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        F: FnOnce() -> Self::Item,
        Self::Item: Clone,
    {
        match self.detect_with(predicate, parameter) {
            Some(found) => found.clone(),
            None => fallback(),
        }
    }

    fn detect_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::detect_index(self, predicate)
    }

    fn detect_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::detect_last_index(self, predicate)
    }

    fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::count(self, predicate)
    }

    fn count_with<Q, P>(&self, predicate: P, parameter: &Q) -> usize
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
    {
        list_iterate::count_with(self, predicate, parameter)
    }

    fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::any_satisfy(self, predicate)
    }

    fn any_satisfy_with<Q, P>(&self, predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
    {
        list_iterate::any_satisfy_with(self, predicate, parameter)
    }

    fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::all_satisfy(self, predicate)
    }

    fn all_satisfy_with<Q, P>(&self, predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
    {
        list_iterate::all_satisfy_with(self, predicate, parameter)
    }

    fn none_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        list_iterate::none_satisfy(self, predicate)
    }

    fn none_satisfy_with<Q, P>(&self, predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
    {
        list_iterate::none_satisfy_with(self, predicate, parameter)
    }

    fn inject_into<A, F>(&self, seed: A, function: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        list_iterate::inject_into(self, seed, function)
    }

    fn inject_into_with<A, Q, F>(&self, seed: A, function: F, parameter: &Q) -> A
    where
        Q: ?Sized,
        F: FnMut(A, &Self::Item, &Q) -> A,
    {
        list_iterate::inject_into_with(self, seed, function, parameter)
    }

    fn inject_into_i64<F>(&self, seed: i64, function: F) -> i64
    where
        F: FnMut(i64, &Self::Item) -> i64,
    {
        list_iterate::inject_into(self, seed, function)
    }

    fn inject_into_f64<F>(&self, seed: f64, function: F) -> f64
    where
        F: FnMut(f64, &Self::Item) -> f64,
    {
        list_iterate::inject_into(self, seed, function)
    }

    fn sum_of_i64<F>(&self, function: F) -> i64
    where
        F: FnMut(&Self::Item) -> i64,
    {
        list_iterate::sum_of_i64(self, function)
    }

    fn sum_of_f64<F>(&self, function: F) -> f64
    where
        F: FnMut(&Self::Item) -> f64,
    {
        list_iterate::sum_of_f64(self, function)
    }

    fn min(&self) -> Option<&Self::Item>
    where
        Self::Item: Ord,
    {
        list_iterate::min_by(self, Ord::cmp)
    }

    fn max(&self) -> Option<&Self::Item>
    where
        Self::Item: Ord,
    {
        list_iterate::max_by(self, Ord::cmp)
    }

    fn min_by<F>(&self, comparator: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        list_iterate::min_by(self, comparator)
    }

    fn max_by<F>(&self, comparator: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        list_iterate::max_by(self, comparator)
    }

    fn min_by_key<K, F>(&self, function: F) -> Option<&Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        list_iterate::min_by_key(self, function)
    }

    fn max_by_key<K, F>(&self, function: F) -> Option<&Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        list_iterate::max_by_key(self, function)
    }

    /// Same length and `predicate` holds for every positional pair.
    fn corresponds<R, P>(&self, other: &R, predicate: P) -> bool
    where
        R: ListIterable + ?Sized,
        P: FnMut(&Self::Item, &R::Item) -> bool,
    {
        list_iterate::corresponds(self, other, predicate)
    }

    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        list_iterate::index_of(self, item).is_some()
    }

    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    fn index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        list_iterate::index_of(self, item)
    }

    fn last_index_of(&self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        list_iterate::last_index_of(self, item)
    }

    fn distinct(&self) -> FastList<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        list_iterate::distinct(self)
    }

    /// The first `count` elements; a full copy when `count >= len()`.
    fn take(&self, count: usize) -> FastList<Self::Item>
    where
        Self::Item: Clone,
    {
        list_iterate::take(self, count)
    }

    /// All but the first `count` elements; empty when `count >= len()`.
    fn drop(&self, count: usize) -> FastList<Self::Item>
    where
        Self::Item: Clone,
    {
        list_iterate::drop(self, count)
    }

    fn take_while<P>(&self, predicate: P) -> FastList<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        list_iterate::take_while(self, predicate)
    }

    fn drop_while<P>(&self, predicate: P) -> FastList<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        list_iterate::drop_while(self, predicate)
    }

    fn group_by<K, F>(&self, function: F) -> ListMultimap<K, Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
        Self::Item: Clone,
    {
        list_iterate::group_by(self, function)
    }

    fn group_by_each<K, J, F>(&self, function: F) -> ListMultimap<K, Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> J,
        J: IntoIterator<Item = K>,
        Self::Item: Clone,
    {
        list_iterate::group_by_each(self, function)
    }

    /// Fails with `DuplicateKey` when two elements derive the same key.
    fn group_by_unique_key<K, F>(&self, function: F) -> Result<AHashMap<K, Self::Item>>
    where
        K: Eq + Hash + Debug,
        F: FnMut(&Self::Item) -> K,
        Self::Item: Clone,
    {
        list_iterate::group_by_unique_key(self, function)
    }

    fn zip<S, J>(&self, other: J) -> FastList<(Self::Item, S)>
    where
        J: IntoIterator<Item = S>,
        Self::Item: Clone,
    {
        list_iterate::zip(self, other)
    }

    fn zip_with_index(&self) -> FastList<(Self::Item, usize)>
    where
        Self::Item: Clone,
    {
        list_iterate::zip_with_index(self)
    }

    /// Assumes the sequence is sorted consistently with `Ord`.
    fn binary_search(&self, key: &Self::Item) -> std::result::Result<usize, usize>
    where
        Self::Item: Ord,
    {
        list_iterate::binary_search_by(self, |candidate| candidate.cmp(key))
    }

    fn binary_search_by<F>(&self, function: F) -> std::result::Result<usize, usize>
    where
        F: FnMut(&Self::Item) -> Ordering,
    {
        list_iterate::binary_search_by(self, function)
    }

    /// Materializes a standalone copy of the current contents.
    fn to_list(&self) -> FastList<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    fn to_sorted_list(&self) -> FastList<Self::Item>
    where
        Self::Item: Clone + Ord,
    {
        list_iterate::to_sorted_list_by(self, Ord::cmp)
    }

    fn to_sorted_list_by<F>(&self, comparator: F) -> FastList<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
        Self::Item: Clone,
    {
        list_iterate::to_sorted_list_by(self, comparator)
    }

    fn to_sorted_list_by_key<K, F>(&self, mut function: F) -> FastList<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
        Self::Item: Clone,
    {
        list_iterate::to_sorted_list_by(self, |a, b| function(a).cmp(&function(b)))
    }

    fn to_reversed(&self) -> FastList<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().rev().cloned().collect()
    }

    fn to_set(&self) -> UnifiedSet<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.iter().cloned().collect()
    }

    /// The last element ends up on top.
    fn to_stack(&self) -> ArrayStack<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Independent snapshot of the current contents.
    fn to_immutable(&self) -> ImmutableList<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Pairwise element equality in order, regardless of the concrete list type.
    fn equals<R>(&self, other: &R) -> bool
    where
        R: ListIterable<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        list_iterate::equals(self, other)
    }

    /// Order-sensitive hash: `h = 31 * h + hash(e)` folded from `1`.
    fn hash_code(&self) -> u64
    where
        Self::Item: Hash,
    {
        crate::hashing::ordered_hash_code(self.iter())
    }

    fn make_string(&self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        let mut out = String::new();
        let _ = self.append_string(&mut out, "", separator, "");
        out
    }

    fn append_string<W>(
        &self,
        out: &mut W,
        start: &str,
        separator: &str,
        end: &str,
    ) -> std::fmt::Result
    where
        W: std::fmt::Write,
        Self::Item: Display,
    {
        crate::iterate::append_string(self.iter(), out, start, separator, end)
    }

    /// Batched parallel iteration on `pool`; fails when `batch_size == 0`.
    fn as_parallel<'a>(
        &'a self,
        pool: &'a ThreadPool,
        batch_size: usize,
    ) -> Result<ParallelListIterable<'a, Self>>
    where
        Self: Sync,
        Self::Item: Sync,
    {
        ParallelListIterable::new(self, pool, batch_size)
    }
}

/// A shared borrow reads through to the list it points at.
impl<L> ListIterable for &L
where
    L: ListIterable + ?Sized,
{
    type Item = L::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&L::Item> {
        (**self).get(index)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn first(&self) -> Option<&L::Item> {
        (**self).first()
    }

    fn last(&self) -> Option<&L::Item> {
        (**self).last()
    }
}

/// Double-ended iterator over any [`ListIterable`], driven by `get`.
pub struct ListIter<'a, L: ?Sized> {
    list: &'a L,
    front: usize,
    back: usize,
}

impl<'a, L> ListIter<'a, L>
where
    L: ListIterable + ?Sized,
{
    pub fn new(list: &'a L) -> Self {
        ListIter {
            list,
            front: 0,
            back: list.len(),
        }
    }
}

impl<L: ?Sized> Clone for ListIter<'_, L> {
    fn clone(&self) -> Self {
        ListIter {
            list: self.list,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, L> Iterator for ListIter<'a, L>
where
    L: ListIterable + ?Sized,
{
    type Item = &'a L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let item = self.list.get(self.front).ok();
            self.front += 1;
            item
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<L> DoubleEndedIterator for ListIter<'_, L>
where
    L: ListIterable + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.list.get(self.back).ok()
        } else {
            None
        }
    }
}

impl<L> ExactSizeIterator for ListIter<'_, L> where L: ListIterable + ?Sized {}

impl<L> std::iter::FusedIterator for ListIter<'_, L> where L: ListIterable + ?Sized {}
