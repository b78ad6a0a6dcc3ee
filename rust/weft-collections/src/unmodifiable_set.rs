//! Read-only set decorator, the set counterpart of
//! [`UnmodifiableList`](crate::UnmodifiableList).

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rayon::ThreadPool;
use weft_common::{Error, Result};

use crate::multimap::SetMultimap;
use crate::parallel::ParallelSetIterable;
use crate::partition::PartitionSet;
use crate::set_iterable::{MutableSet, SetIterable};
use crate::synchronized::SynchronizedSet;
use crate::{FastList, ImmutableSet, UnifiedSet};

pub struct UnmodifiableSet<S> {
    delegate: Arc<S>,
}

impl<S> UnmodifiableSet<S> {
    pub fn new(set: S) -> Self {
        UnmodifiableSet {
            delegate: Arc::new(set),
        }
    }

    pub fn from_arc(set: Arc<S>) -> Self {
        UnmodifiableSet { delegate: set }
    }

    /// Already read-only: returns a handle to this same instance.
    pub fn as_unmodifiable(&self) -> Self {
        self.clone()
    }

    pub fn as_synchronized(&self) -> SynchronizedSet<Self> {
        SynchronizedSet::new(self.clone())
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.delegate, &other.delegate)
    }

    pub fn delegate(&self) -> &S {
        &self.delegate
    }
}

impl<S> Clone for UnmodifiableSet<S> {
    fn clone(&self) -> Self {
        UnmodifiableSet {
            delegate: Arc::clone(&self.delegate),
        }
    }
}

impl<S: SetIterable> SetIterable for UnmodifiableSet<S> {
    type Item = S::Item;

    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.delegate.len()
    }

    fn contains(&self, item: &S::Item) -> bool {
        self.delegate.contains(item)
    }

    fn iter(&self) -> S::Iter<'_> {
        self.delegate.iter()
    }

    fn is_empty(&self) -> bool {
        self.delegate.is_empty()
    }

    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a S::Item>,
        S::Item: 'a,
    {
        self.delegate.contains_all(items)
    }

    fn for_each<F>(&self, procedure: F)
    where
        F: FnMut(&S::Item),
    {
        self.delegate.for_each(procedure)
    }

    fn select<P>(&self, predicate: P) -> UnifiedSet<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.select(predicate)
    }

    fn select_with<Q, P>(&self, predicate: P, parameter: &Q) -> UnifiedSet<S::Item>
    where
        Q: ?Sized,
        P: FnMut(&S::Item, &Q) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.select_with(predicate, parameter)
    }

    fn reject<P>(&self, predicate: P) -> UnifiedSet<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.reject(predicate)
    }

    fn reject_with<Q, P>(&self, predicate: P, parameter: &Q) -> UnifiedSet<S::Item>
    where
        Q: ?Sized,
        P: FnMut(&S::Item, &Q) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.reject_with(predicate, parameter)
    }

    fn partition<P>(&self, predicate: P) -> PartitionSet<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.partition(predicate)
    }

    fn partition_with<Q, P>(&self, predicate: P, parameter: &Q) -> PartitionSet<S::Item>
    where
        Q: ?Sized,
        P: FnMut(&S::Item, &Q) -> bool,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.partition_with(predicate, parameter)
    }

    fn collect<V, F>(&self, function: F) -> UnifiedSet<V>
    where
        F: FnMut(&S::Item) -> V,
        V: Eq + Hash,
    {
        self.delegate.collect(function)
    }

    fn collect_with<Q, V, F>(&self, function: F, parameter: &Q) -> UnifiedSet<V>
    where
        Q: ?Sized,
        F: FnMut(&S::Item, &Q) -> V,
        V: Eq + Hash,
    {
        self.delegate.collect_with(function, parameter)
    }

    fn collect_if<V, P, F>(&self, predicate: P, function: F) -> UnifiedSet<V>
    where
        P: FnMut(&S::Item) -> bool,
        F: FnMut(&S::Item) -> V,
        V: Eq + Hash,
    {
        self.delegate.collect_if(predicate, function)
    }

    fn flat_collect<V, J, F>(&self, function: F) -> UnifiedSet<V>
    where
        F: FnMut(&S::Item) -> J,
        J: IntoIterator<Item = V>,
        V: Eq + Hash,
    {
        self.delegate.flat_collect(function)
    }

    fn detect<P>(&self, predicate: P) -> Option<&S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.delegate.detect(predicate)
    }

    fn detect_if_none<P, F>(&self, predicate: P, fallback: F) -> S::Item
    where
        P: FnMut(&S::Item) -> bool,
        F: FnOnce() -> S::Item,
        S::Item: Clone,
    {
        self.delegate.detect_if_none(predicate, fallback)
    }

    fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.delegate.count(predicate)
    }

    fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.delegate.any_satisfy(predicate)
    }

    fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.delegate.all_satisfy(predicate)
    }

    fn none_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.delegate.none_satisfy(predicate)
    }

    fn inject_into<A, F>(&self, seed: A, function: F) -> A
    where
        F: FnMut(A, &S::Item) -> A,
    {
        self.delegate.inject_into(seed, function)
    }

    fn sum_of_i64<F>(&self, function: F) -> i64
    where
        F: FnMut(&S::Item) -> i64,
    {
        self.delegate.sum_of_i64(function)
    }

    fn sum_of_f64<F>(&self, function: F) -> f64
    where
        F: FnMut(&S::Item) -> f64,
    {
        self.delegate.sum_of_f64(function)
    }

    fn min_by<F>(&self, comparator: F) -> Option<&S::Item>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.delegate.min_by(comparator)
    }

    fn max_by<F>(&self, comparator: F) -> Option<&S::Item>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.delegate.max_by(comparator)
    }

    fn group_by<K, F>(&self, function: F) -> SetMultimap<K, S::Item>
    where
        K: Eq + Hash,
        F: FnMut(&S::Item) -> K,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.group_by(function)
    }

    fn group_by_each<K, J, F>(&self, function: F) -> SetMultimap<K, S::Item>
    where
        K: Eq + Hash,
        F: FnMut(&S::Item) -> J,
        J: IntoIterator<Item = K>,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.group_by_each(function)
    }

    fn zip<V, J>(&self, other: J) -> UnifiedSet<(S::Item, V)>
    where
        J: IntoIterator<Item = V>,
        S::Item: Clone + Eq + Hash,
        V: Eq + Hash,
    {
        self.delegate.zip(other)
    }

    fn zip_with_index(&self) -> UnifiedSet<(S::Item, usize)>
    where
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.zip_with_index()
    }

    fn to_list(&self) -> FastList<S::Item>
    where
        S::Item: Clone,
    {
        self.delegate.to_list()
    }

    fn to_sorted_list(&self) -> FastList<S::Item>
    where
        S::Item: Clone + Ord,
    {
        self.delegate.to_sorted_list()
    }

    fn to_sorted_list_by<F>(&self, comparator: F) -> FastList<S::Item>
    where
        F: FnMut(&S::Item, &S::Item) -> Ordering,
        S::Item: Clone,
    {
        self.delegate.to_sorted_list_by(comparator)
    }

    fn to_set(&self) -> UnifiedSet<S::Item>
    where
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.to_set()
    }

    fn to_immutable(&self) -> ImmutableSet<S::Item>
    where
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.to_immutable()
    }

    fn union<R>(&self, other: &R) -> UnifiedSet<S::Item>
    where
        R: SetIterable<Item = S::Item> + ?Sized,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.union(other)
    }

    fn intersect<R>(&self, other: &R) -> UnifiedSet<S::Item>
    where
        R: SetIterable<Item = S::Item> + ?Sized,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.intersect(other)
    }

    fn difference<R>(&self, other: &R) -> UnifiedSet<S::Item>
    where
        R: SetIterable<Item = S::Item> + ?Sized,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.difference(other)
    }

    fn symmetric_difference<R>(&self, other: &R) -> UnifiedSet<S::Item>
    where
        R: SetIterable<Item = S::Item> + ?Sized,
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.symmetric_difference(other)
    }

    fn is_subset_of<R>(&self, other: &R) -> bool
    where
        R: SetIterable<Item = S::Item> + ?Sized,
    {
        self.delegate.is_subset_of(other)
    }

    fn is_proper_subset_of<R>(&self, other: &R) -> bool
    where
        R: SetIterable<Item = S::Item> + ?Sized,
    {
        self.delegate.is_proper_subset_of(other)
    }

    fn power_set(&self) -> FastList<UnifiedSet<S::Item>>
    where
        S::Item: Clone + Eq + Hash,
    {
        self.delegate.power_set()
    }

    fn cartesian_product<R>(&self, other: &R) -> FastList<(S::Item, R::Item)>
    where
        R: SetIterable + ?Sized,
        S::Item: Clone,
        R::Item: Clone,
    {
        self.delegate.cartesian_product(other)
    }

    fn equals<R>(&self, other: &R) -> bool
    where
        R: SetIterable<Item = S::Item> + ?Sized,
    {
        self.delegate.equals(other)
    }

    fn hash_code(&self) -> u64
    where
        S::Item: Hash,
    {
        self.delegate.hash_code()
    }

    fn make_string(&self, separator: &str) -> String
    where
        S::Item: Display,
    {
        self.delegate.make_string(separator)
    }

    fn as_parallel<'a>(
        &'a self,
        pool: &'a ThreadPool,
        batch_size: usize,
    ) -> Result<ParallelSetIterable<'a, S::Item>>
    where
        S::Item: Sync + 'a,
    {
        self.delegate.as_parallel(pool, batch_size)
    }
}

impl<S: SetIterable> MutableSet for UnmodifiableSet<S> {
    fn add(&mut self, _item: S::Item) -> Result<bool> {
        Err(Error::unsupported("add"))
    }

    fn remove(&mut self, _item: &S::Item) -> Result<bool> {
        Err(Error::unsupported("remove"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::unsupported("clear"))
    }

    fn remove_if<P>(&mut self, _predicate: P) -> Result<bool>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Err(Error::unsupported("remove_if"))
    }

    fn add_all<I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = S::Item>,
    {
        Err(Error::unsupported("add_all"))
    }

    fn remove_all<'a, I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a S::Item>,
        S::Item: 'a,
    {
        Err(Error::unsupported("remove_all"))
    }

    fn retain_all<'a, I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a S::Item>,
        S::Item: Eq + Hash + 'a,
    {
        Err(Error::unsupported("retain_all"))
    }

    fn with(self, _item: S::Item) -> Result<Self> {
        Err(Error::unsupported("with"))
    }

    fn without(self, _item: &S::Item) -> Result<Self> {
        Err(Error::unsupported("without"))
    }

    fn with_all<I>(self, _items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S::Item>,
    {
        Err(Error::unsupported("with_all"))
    }

    fn without_all<'a, I>(self, _items: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a S::Item>,
        S::Item: 'a,
    {
        Err(Error::unsupported("without_all"))
    }
}

impl_set_eq!([S: SetIterable] UnmodifiableSet<S>, S::Item);

impl<S: SetIterable> Eq for UnmodifiableSet<S> {}

impl<S> Hash for UnmodifiableSet<S>
where
    S: SetIterable,
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.delegate.hash_code());
    }
}

impl<S> Debug for UnmodifiableSet<S>
where
    S: SetIterable,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.delegate.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<S> serde::ser::Serialize for UnmodifiableSet<S>
where
    S: SetIterable,
    S::Item: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error>
    where
        Z: serde::ser::Serializer,
    {
        serializer.collect_seq(self.delegate.iter())
    }
}
