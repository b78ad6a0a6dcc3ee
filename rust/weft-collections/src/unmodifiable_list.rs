//! Read-only list decorator.
//!
//! [`UnmodifiableList`] forwards every read and transform call to the wrapped
//! list and fails every mutating call with `UnsupportedOperation` before the
//! wrapped list is reached. Results of transforms are ordinary, fully mutable
//! new collections; only the wrapped instance is protected.
//!
//! The wrapped list is held behind an `Arc`. Cloning the decorator, or asking
//! it for [`UnmodifiableList::as_unmodifiable`], yields another handle to the
//! same instance. The wrapped value may itself be a borrow (`&FastList<T>`),
//! in which case the decorator owns no elements and the list stays with its
//! owner, who regains write access once the view is dropped.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ahash::AHashMap;
use weft_common::{Error, Result};

use crate::cursor::ListCursor;
use crate::list_iterable::ListIterable;
use crate::multimap::ListMultimap;
use crate::mutable_list::{MutableList, OrderedMutableContainer};
use crate::partition::PartitionList;
use crate::synchronized::SynchronizedList;
use crate::{ArrayStack, FastList, ImmutableList, UnifiedSet};

pub struct UnmodifiableList<L> {
    delegate: Arc<L>,
}

impl<L> UnmodifiableList<L> {
    pub fn new(list: L) -> Self {
        UnmodifiableList {
            delegate: Arc::new(list),
        }
    }

    pub fn from_arc(list: Arc<L>) -> Self {
        UnmodifiableList { delegate: list }
    }

    /// Already read-only: returns a handle to this same instance.
    pub fn as_unmodifiable(&self) -> Self {
        self.clone()
    }

    /// Wraps this read-only view in a mutual-exclusion decorator.
    pub fn as_synchronized(&self) -> SynchronizedList<Self> {
        SynchronizedList::new(self.clone())
    }

    /// `true` when both handles decorate the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.delegate, &other.delegate)
    }

    pub fn delegate(&self) -> &L {
        &self.delegate
    }
}

impl<L> Clone for UnmodifiableList<L> {
    fn clone(&self) -> Self {
        UnmodifiableList {
            delegate: Arc::clone(&self.delegate),
        }
    }
}

impl<L: ListIterable> ListIterable for UnmodifiableList<L> {
    type Item = L::Item;

    fn len(&self) -> usize {
        self.delegate.len()
    }

    fn get(&self, index: usize) -> Result<&L::Item> {
        self.delegate.get(index)
    }

    fn is_empty(&self) -> bool {
        self.delegate.is_empty()
    }

    fn first(&self) -> Option<&L::Item> {
        self.delegate.first()
    }

    fn last(&self) -> Option<&L::Item> {
        self.delegate.last()
    }

    fn for_each<F>(&self, procedure: F)
    where
        F: FnMut(&L::Item),
    {
        self.delegate.for_each(procedure)
    }

    fn for_each_with<Q, F>(&self, procedure: F, parameter: &Q)
    where
        Q: ?Sized,
        F: FnMut(&L::Item, &Q),
    {
        self.delegate.for_each_with(procedure, parameter)
    }

    fn for_each_with_index<F>(&self, procedure: F)
    where
        F: FnMut(&L::Item, usize),
    {
        self.delegate.for_each_with_index(procedure)
    }

    fn for_each_in_range<F>(&self, from: usize, to: usize, procedure: F) -> Result<()>
    where
        F: FnMut(&L::Item),
    {
        self.delegate.for_each_in_range(from, to, procedure)
    }

    fn reverse_for_each<F>(&self, procedure: F)
    where
        F: FnMut(&L::Item),
    {
        self.delegate.reverse_for_each(procedure)
    }

    fn select<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.delegate.select(predicate)
    }

    fn select_with<Q, P>(&self, predicate: P, parameter: &Q) -> FastList<L::Item>
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
        L::Item: Clone,
    {
        self.delegate.select_with(predicate, parameter)
    }

    fn reject<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.delegate.reject(predicate)
    }

    fn reject_with<Q, P>(&self, predicate: P, parameter: &Q) -> FastList<L::Item>
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
        L::Item: Clone,
    {
        self.delegate.reject_with(predicate, parameter)
    }

    fn partition<P>(&self, predicate: P) -> PartitionList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.delegate.partition(predicate)
    }

    fn partition_with<Q, P>(&self, predicate: P, parameter: &Q) -> PartitionList<L::Item>
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
        L::Item: Clone,
    {
        self.delegate.partition_with(predicate, parameter)
    }

    fn select_and_reject_with<Q, P>(
        &self,
        predicate: P,
        parameter: &Q,
    ) -> (FastList<L::Item>, FastList<L::Item>)
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
        L::Item: Clone,
    {
        self.delegate.select_and_reject_with(predicate, parameter)
    }

    fn partition_while<P>(&self, predicate: P) -> PartitionList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.delegate.partition_while(predicate)
    }

    fn collect<V, F>(&self, function: F) -> FastList<V>
    where
        F: FnMut(&L::Item) -> V,
    {
        self.delegate.collect(function)
    }

    fn collect_with<Q, V, F>(&self, function: F, parameter: &Q) -> FastList<V>
    where
        Q: ?Sized,
        F: FnMut(&L::Item, &Q) -> V,
    {
        self.delegate.collect_with(function, parameter)
    }

    fn collect_if<V, P, F>(&self, predicate: P, function: F) -> FastList<V>
    where
        P: FnMut(&L::Item) -> bool,
        F: FnMut(&L::Item) -> V,
    {
        self.delegate.collect_if(predicate, function)
    }

    fn flat_collect<V, J, F>(&self, function: F) -> FastList<V>
    where
        F: FnMut(&L::Item) -> J,
        J: IntoIterator<Item = V>,
    {
        self.delegate.flat_collect(function)
    }

    fn detect<P>(&self, predicate: P) -> Option<&L::Item>
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.delegate.detect(predicate)
    }

    fn detect_with<Q, P>(&self, predicate: P, parameter: &Q) -> Option<&L::Item>
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
    {
        self.delegate.detect_with(predicate, parameter)
    }

    fn detect_with_if_none<Q, P, F>(&self, predicate: P, parameter: &Q, fallback: F) -> L::Item
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
        F: FnOnce() -> L::Item,
        L::Item: Clone,
    {
        self.delegate.detect_with_if_none(predicate, parameter, fallback)
    }

    fn detect_if_none<P, F>(&self, predicate: P, fallback: F) -> L::Item
    where
        P: FnMut(&L::Item) -> bool,
        F: FnOnce() -> L::Item,
        L::Item: Clone,
    {
        self.delegate.detect_if_none(predicate, fallback)
    }

    fn detect_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.delegate.detect_index(predicate)
    }

    fn detect_last_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.delegate.detect_last_index(predicate)
    }

    fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.delegate.count(predicate)
    }

    fn count_with<Q, P>(&self, predicate: P, parameter: &Q) -> usize
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
    {
        self.delegate.count_with(predicate, parameter)
    }

    fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.delegate.any_satisfy(predicate)
    }

    fn any_satisfy_with<Q, P>(&self, predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
    {
        self.delegate.any_satisfy_with(predicate, parameter)
    }

    fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.delegate.all_satisfy(predicate)
    }

    fn all_satisfy_with<Q, P>(&self, predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
    {
        self.delegate.all_satisfy_with(predicate, parameter)
    }

    fn none_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&L::Item) -> bool,
    {
        self.delegate.none_satisfy(predicate)
    }

    fn none_satisfy_with<Q, P>(&self, predicate: P, parameter: &Q) -> bool
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
    {
        self.delegate.none_satisfy_with(predicate, parameter)
    }

    fn inject_into<A, F>(&self, seed: A, function: F) -> A
    where
        F: FnMut(A, &L::Item) -> A,
    {
        self.delegate.inject_into(seed, function)
    }

    fn inject_into_with<A, Q, F>(&self, seed: A, function: F, parameter: &Q) -> A
    where
        Q: ?Sized,
        F: FnMut(A, &L::Item, &Q) -> A,
    {
        self.delegate.inject_into_with(seed, function, parameter)
    }

    fn inject_into_i64<F>(&self, seed: i64, function: F) -> i64
    where
        F: FnMut(i64, &L::Item) -> i64,
    {
        self.delegate.inject_into_i64(seed, function)
    }

    fn inject_into_f64<F>(&self, seed: f64, function: F) -> f64
    where
        F: FnMut(f64, &L::Item) -> f64,
    {
        self.delegate.inject_into_f64(seed, function)
    }

    fn sum_of_i64<F>(&self, function: F) -> i64
    where
        F: FnMut(&L::Item) -> i64,
    {
        self.delegate.sum_of_i64(function)
    }

    fn sum_of_f64<F>(&self, function: F) -> f64
    where
        F: FnMut(&L::Item) -> f64,
    {
        self.delegate.sum_of_f64(function)
    }

    fn min(&self) -> Option<&L::Item>
    where
        L::Item: Ord,
    {
        ListIterable::min(&*self.delegate)
    }

    fn max(&self) -> Option<&L::Item>
    where
        L::Item: Ord,
    {
        ListIterable::max(&*self.delegate)
    }

    fn min_by<F>(&self, comparator: F) -> Option<&L::Item>
    where
        F: FnMut(&L::Item, &L::Item) -> Ordering,
    {
        self.delegate.min_by(comparator)
    }

    fn max_by<F>(&self, comparator: F) -> Option<&L::Item>
    where
        F: FnMut(&L::Item, &L::Item) -> Ordering,
    {
        self.delegate.max_by(comparator)
    }

    fn min_by_key<K, F>(&self, function: F) -> Option<&L::Item>
    where
        K: Ord,
        F: FnMut(&L::Item) -> K,
    {
        self.delegate.min_by_key(function)
    }

    fn max_by_key<K, F>(&self, function: F) -> Option<&L::Item>
    where
        K: Ord,
        F: FnMut(&L::Item) -> K,
    {
        self.delegate.max_by_key(function)
    }

    fn corresponds<R, P>(&self, other: &R, predicate: P) -> bool
    where
        R: ListIterable + ?Sized,
        P: FnMut(&L::Item, &R::Item) -> bool,
    {
        self.delegate.corresponds(other, predicate)
    }

    fn contains(&self, item: &L::Item) -> bool
    where
        L::Item: PartialEq,
    {
        self.delegate.contains(item)
    }

    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a L::Item>,
        L::Item: PartialEq + 'a,
    {
        self.delegate.contains_all(items)
    }

    fn index_of(&self, item: &L::Item) -> Option<usize>
    where
        L::Item: PartialEq,
    {
        self.delegate.index_of(item)
    }

    fn last_index_of(&self, item: &L::Item) -> Option<usize>
    where
        L::Item: PartialEq,
    {
        self.delegate.last_index_of(item)
    }

    fn distinct(&self) -> FastList<L::Item>
    where
        L::Item: Clone + Eq + Hash,
    {
        self.delegate.distinct()
    }

    fn take(&self, count: usize) -> FastList<L::Item>
    where
        L::Item: Clone,
    {
        self.delegate.take(count)
    }

    fn drop(&self, count: usize) -> FastList<L::Item>
    where
        L::Item: Clone,
    {
        ListIterable::drop(&*self.delegate, count)
    }

    fn take_while<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.delegate.take_while(predicate)
    }

    fn drop_while<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: FnMut(&L::Item) -> bool,
        L::Item: Clone,
    {
        self.delegate.drop_while(predicate)
    }

    fn group_by<K, F>(&self, function: F) -> ListMultimap<K, L::Item>
    where
        K: Eq + Hash,
        F: FnMut(&L::Item) -> K,
        L::Item: Clone,
    {
        self.delegate.group_by(function)
    }

    fn group_by_each<K, J, F>(&self, function: F) -> ListMultimap<K, L::Item>
    where
        K: Eq + Hash,
        F: FnMut(&L::Item) -> J,
        J: IntoIterator<Item = K>,
        L::Item: Clone,
    {
        self.delegate.group_by_each(function)
    }

    fn group_by_unique_key<K, F>(&self, function: F) -> Result<AHashMap<K, L::Item>>
    where
        K: Eq + Hash + Debug,
        F: FnMut(&L::Item) -> K,
        L::Item: Clone,
    {
        self.delegate.group_by_unique_key(function)
    }

    fn zip<S, J>(&self, other: J) -> FastList<(L::Item, S)>
    where
        J: IntoIterator<Item = S>,
        L::Item: Clone,
    {
        self.delegate.zip(other)
    }

    fn zip_with_index(&self) -> FastList<(L::Item, usize)>
    where
        L::Item: Clone,
    {
        self.delegate.zip_with_index()
    }

    fn binary_search(&self, key: &L::Item) -> std::result::Result<usize, usize>
    where
        L::Item: Ord,
    {
        self.delegate.binary_search(key)
    }

    fn binary_search_by<F>(&self, function: F) -> std::result::Result<usize, usize>
    where
        F: FnMut(&L::Item) -> Ordering,
    {
        self.delegate.binary_search_by(function)
    }

    fn to_list(&self) -> FastList<L::Item>
    where
        L::Item: Clone,
    {
        self.delegate.to_list()
    }

    fn to_sorted_list(&self) -> FastList<L::Item>
    where
        L::Item: Clone + Ord,
    {
        self.delegate.to_sorted_list()
    }

    fn to_sorted_list_by<F>(&self, comparator: F) -> FastList<L::Item>
    where
        F: FnMut(&L::Item, &L::Item) -> Ordering,
        L::Item: Clone,
    {
        self.delegate.to_sorted_list_by(comparator)
    }

    fn to_sorted_list_by_key<K, F>(&self, function: F) -> FastList<L::Item>
    where
        K: Ord,
        F: FnMut(&L::Item) -> K,
        L::Item: Clone,
    {
        self.delegate.to_sorted_list_by_key(function)
    }

    fn to_reversed(&self) -> FastList<L::Item>
    where
        L::Item: Clone,
    {
        self.delegate.to_reversed()
    }

    fn to_set(&self) -> UnifiedSet<L::Item>
    where
        L::Item: Clone + Eq + Hash,
    {
        self.delegate.to_set()
    }

    fn to_stack(&self) -> ArrayStack<L::Item>
    where
        L::Item: Clone,
    {
        self.delegate.to_stack()
    }

    fn to_immutable(&self) -> ImmutableList<L::Item>
    where
        L::Item: Clone,
    {
        self.delegate.to_immutable()
    }

    fn equals<R>(&self, other: &R) -> bool
    where
        R: ListIterable<Item = L::Item> + ?Sized,
        L::Item: PartialEq,
    {
        self.delegate.equals(other)
    }

    fn hash_code(&self) -> u64
    where
        L::Item: Hash,
    {
        self.delegate.hash_code()
    }

    fn make_string(&self, separator: &str) -> String
    where
        L::Item: Display,
    {
        self.delegate.make_string(separator)
    }

    fn append_string<W>(
        &self,
        out: &mut W,
        start: &str,
        separator: &str,
        end: &str,
    ) -> fmt::Result
    where
        W: fmt::Write,
        L::Item: Display,
    {
        self.delegate.append_string(out, start, separator, end)
    }
}

impl<L: ListIterable> OrderedMutableContainer for UnmodifiableList<L> {
    type Cursor<'c>
        = ListCursor<'c, Self>
    where
        Self: 'c;

    fn set(&mut self, _index: usize, _element: L::Item) -> Result<L::Item> {
        Err(Error::unsupported("set"))
    }

    fn insert(&mut self, _index: usize, _element: L::Item) -> Result<()> {
        Err(Error::unsupported("insert"))
    }

    fn remove_at(&mut self, _index: usize) -> Result<L::Item> {
        Err(Error::unsupported("remove_at"))
    }

    fn swap(&mut self, _a: usize, _b: usize) -> Result<()> {
        Err(Error::unsupported("swap"))
    }

    /// Traversal works; `remove`, `set` and `add` through the cursor fail.
    fn cursor(&mut self, index: usize) -> Result<ListCursor<'_, Self>> {
        ListCursor::new(self, index)
    }

    fn append(&mut self, _element: L::Item) -> Result<()> {
        Err(Error::unsupported("append"))
    }

    fn insert_all<I>(&mut self, _index: usize, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = L::Item>,
    {
        Err(Error::unsupported("insert_all"))
    }

    fn append_all<I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = L::Item>,
    {
        Err(Error::unsupported("append_all"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::unsupported("clear"))
    }
}

impl<L: ListIterable> MutableList for UnmodifiableList<L> {
    fn sort_this(&mut self) -> Result<&mut Self>
    where
        L::Item: Ord,
    {
        Err(Error::unsupported("sort_this"))
    }

    fn sort_this_by<F>(&mut self, _comparator: F) -> Result<&mut Self>
    where
        F: FnMut(&L::Item, &L::Item) -> Ordering,
    {
        Err(Error::unsupported("sort_this_by"))
    }

    fn sort_this_by_key<K, F>(&mut self, _function: F) -> Result<&mut Self>
    where
        K: Ord,
        F: FnMut(&L::Item) -> K,
    {
        Err(Error::unsupported("sort_this_by_key"))
    }

    fn reverse_this(&mut self) -> Result<&mut Self> {
        Err(Error::unsupported("reverse_this"))
    }

    fn remove_if<P>(&mut self, _predicate: P) -> Result<bool>
    where
        P: FnMut(&L::Item) -> bool,
    {
        Err(Error::unsupported("remove_if"))
    }

    fn remove_if_with<Q, P>(&mut self, _predicate: P, _parameter: &Q) -> Result<bool>
    where
        Q: ?Sized,
        P: FnMut(&L::Item, &Q) -> bool,
    {
        Err(Error::unsupported("remove_if_with"))
    }

    fn remove_item(&mut self, _item: &L::Item) -> Result<bool>
    where
        L::Item: PartialEq,
    {
        Err(Error::unsupported("remove_item"))
    }

    fn remove_all<'a, I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a L::Item>,
        L::Item: Eq + Hash + 'a,
    {
        Err(Error::unsupported("remove_all"))
    }

    fn retain_all<'a, I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a L::Item>,
        L::Item: Eq + Hash + 'a,
    {
        Err(Error::unsupported("retain_all"))
    }

    fn with(self, _element: L::Item) -> Result<Self> {
        Err(Error::unsupported("with"))
    }

    fn without(self, _element: &L::Item) -> Result<Self>
    where
        L::Item: PartialEq,
    {
        Err(Error::unsupported("without"))
    }

    fn with_all<I>(self, _items: I) -> Result<Self>
    where
        I: IntoIterator<Item = L::Item>,
    {
        Err(Error::unsupported("with_all"))
    }

    fn without_all<'a, I>(self, _items: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a L::Item>,
        L::Item: Eq + Hash + 'a,
    {
        Err(Error::unsupported("without_all"))
    }
}

impl_list_eq!([L: ListIterable] UnmodifiableList<L>, L::Item);

impl<L> Eq for UnmodifiableList<L>
where
    L: ListIterable,
    L::Item: Eq,
{
}

impl<L> Hash for UnmodifiableList<L>
where
    L: ListIterable,
    L::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        crate::hashing::hash_sequence(self.delegate.iter(), self.delegate.len(), state);
    }
}

impl<L> Debug for UnmodifiableList<L>
where
    L: ListIterable,
    L::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.delegate.iter()).finish()
    }
}

/// Serializes the current contents as a plain sequence.
#[cfg(feature = "serde")]
impl<L> serde::ser::Serialize for UnmodifiableList<L>
where
    L: ListIterable,
    L::Item: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_seq(self.delegate.iter())
    }
}
