//! Read and mutation capabilities of unordered, duplicate-free collections.

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

use ahash::AHashSet;
use itertools::Itertools;
use rayon::ThreadPool;
use weft_common::Result;

use crate::iterate;
use crate::multimap::SetMultimap;
use crate::parallel::ParallelSetIterable;
use crate::partition::PartitionSet;
use crate::{FastList, ImmutableSet, UnifiedSet};

pub trait SetIterable {
    type Item;

    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn contains(&self, item: &Self::Item) -> bool;

    /// Visits every element once, in unspecified order.
    fn iter(&self) -> Self::Iter<'_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    fn for_each<F>(&self, mut procedure: F)
    where
        F: FnMut(&Self::Item),
    {
        for item in self.iter() {
            procedure(item);
        }
    }

    /// Runs `procedure` over every element and returns this set.
    fn tap<F>(&self, procedure: F) -> &Self
    where
        F: FnMut(&Self::Item),
    {
        self.for_each(procedure);
        self
    }

    fn select<P>(&self, predicate: P) -> UnifiedSet<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone + Eq + Hash,
    {
        iterate::select_into(self.iter(), predicate, UnifiedSet::new())
    }

    fn select_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> UnifiedSet<Self::Item>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        Self::Item: Clone + Eq + Hash,
    {
        self.select(|item| predicate(item, parameter))
    }

    fn reject<P>(&self, predicate: P) -> UnifiedSet<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone + Eq + Hash,
    {
        iterate::reject_into(self.iter(), predicate, UnifiedSet::new())
    }

    fn reject_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> UnifiedSet<Self::Item>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        Self::Item: Clone + Eq + Hash,
    {
        self.reject(|item| predicate(item, parameter))
    }

    fn partition<P>(&self, predicate: P) -> PartitionSet<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone + Eq + Hash,
    {
        iterate::partition_into(self.iter(), predicate)
    }

    fn partition_with<Q, P>(&self, mut predicate: P, parameter: &Q) -> PartitionSet<Self::Item>
    where
        Q: ?Sized,
        P: FnMut(&Self::Item, &Q) -> bool,
        Self::Item: Clone + Eq + Hash,
    {
        self.partition(|item| predicate(item, parameter))
    }

    /// Mapped values, de-duplicated.
    fn collect<V, F>(&self, function: F) -> UnifiedSet<V>
    where
        F: FnMut(&Self::Item) -> V,
        V: Eq + Hash,
    {
        iterate::collect_into(self.iter(), function, UnifiedSet::new())
    }

    fn collect_with<Q, V, F>(&self, mut function: F, parameter: &Q) -> UnifiedSet<V>
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> V,
        V: Eq + Hash,
    {
        self.collect(|item| function(item, parameter))
    }

    fn collect_if<V, P, F>(&self, predicate: P, function: F) -> UnifiedSet<V>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(&Self::Item) -> V,
        V: Eq + Hash,
    {
        iterate::collect_if_into(self.iter(), predicate, function, UnifiedSet::new())
    }

    fn flat_collect<V, J, F>(&self, function: F) -> UnifiedSet<V>
    where
        F: FnMut(&Self::Item) -> J,
        J: IntoIterator<Item = V>,
        V: Eq + Hash,
    {
        iterate::flat_collect_into(self.iter(), function, UnifiedSet::new())
    }

    fn detect<P>(&self, predicate: P) -> Option<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        iterate::detect(self.iter(), predicate)
    }

    fn detect_if_none<P, F>(&self, predicate: P, fallback: F) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnOnce() -> Self::Item,
        Self::Item: Clone,
    {
        match self.detect(predicate) {
            Some(found) => found.clone(),
            None => fallback(),
        }
    }

    fn count<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        iterate::count(self.iter(), predicate)
    }

    fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        iterate::any_satisfy(self.iter(), predicate)
    }

    fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        iterate::all_satisfy(self.iter(), predicate)
    }

    fn none_satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        iterate::none_satisfy(self.iter(), predicate)
    }

    fn inject_into<A, F>(&self, seed: A, function: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        iterate::inject_into(self.iter(), seed, function)
    }

    fn sum_of_i64<F>(&self, function: F) -> i64
    where
        F: FnMut(&Self::Item) -> i64,
    {
        iterate::sum_of_i64(self.iter(), function)
    }

    fn sum_of_f64<F>(&self, function: F) -> f64
    where
        F: FnMut(&Self::Item) -> f64,
    {
        iterate::sum_of_f64(self.iter(), function)
    }

    fn min_by<F>(&self, comparator: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        iterate::min_by(self.iter(), comparator)
    }

    fn max_by<F>(&self, comparator: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        iterate::max_by(self.iter(), comparator)
    }

    fn group_by<K, F>(&self, function: F) -> SetMultimap<K, Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
        Self::Item: Clone + Eq + Hash,
    {
        iterate::group_by_into(self.iter(), function)
    }

    fn group_by_each<K, J, F>(&self, function: F) -> SetMultimap<K, Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> J,
        J: IntoIterator<Item = K>,
        Self::Item: Clone + Eq + Hash,
    {
        iterate::group_by_each_into(self.iter(), function)
    }

    /// Pairs elements, in iteration order, with the items of `other`; stops at
    /// the shorter input.
    fn zip<V, J>(&self, other: J) -> UnifiedSet<(Self::Item, V)>
    where
        J: IntoIterator<Item = V>,
        Self::Item: Clone + Eq + Hash,
        V: Eq + Hash,
    {
        iterate::zip_into(self.iter(), other, UnifiedSet::new())
    }

    /// Pairs every element with its position in iteration order.
    fn zip_with_index(&self) -> UnifiedSet<(Self::Item, usize)>
    where
        Self::Item: Clone + Eq + Hash,
    {
        iterate::zip_with_index_into(self.iter(), UnifiedSet::new())
    }

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
        self.to_sorted_list_by(Ord::cmp)
    }

    fn to_sorted_list_by<F>(&self, comparator: F) -> FastList<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
        Self::Item: Clone,
    {
        let mut sorted = self.to_list();
        sorted.sort_items_by(comparator);
        sorted
    }

    fn to_set(&self) -> UnifiedSet<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.iter().cloned().collect()
    }

    /// Independent snapshot of the current contents.
    fn to_immutable(&self) -> ImmutableSet<Self::Item>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.iter().cloned().collect()
    }

    fn union<S>(&self, other: &S) -> UnifiedSet<Self::Item>
    where
        S: SetIterable<Item = Self::Item> + ?Sized,
        Self::Item: Clone + Eq + Hash,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }

    fn intersect<S>(&self, other: &S) -> UnifiedSet<Self::Item>
    where
        S: SetIterable<Item = Self::Item> + ?Sized,
        Self::Item: Clone + Eq + Hash,
    {
        self.select(|item| other.contains(item))
    }

    fn difference<S>(&self, other: &S) -> UnifiedSet<Self::Item>
    where
        S: SetIterable<Item = Self::Item> + ?Sized,
        Self::Item: Clone + Eq + Hash,
    {
        self.reject(|item| other.contains(item))
    }

    fn symmetric_difference<S>(&self, other: &S) -> UnifiedSet<Self::Item>
    where
        S: SetIterable<Item = Self::Item> + ?Sized,
        Self::Item: Clone + Eq + Hash,
    {
        let mut result = self.difference(other);
        result.extend(other.iter().filter(|item| !self.contains(*item)).cloned());
        result
    }

    fn is_subset_of<S>(&self, other: &S) -> bool
    where
        S: SetIterable<Item = Self::Item> + ?Sized,
    {
        self.len() <= other.len() && self.all_satisfy(|item| other.contains(item))
    }

    fn is_proper_subset_of<S>(&self, other: &S) -> bool
    where
        S: SetIterable<Item = Self::Item> + ?Sized,
    {
        self.len() < other.len() && self.all_satisfy(|item| other.contains(item))
    }

    /// Every subset, the empty set included.
    fn power_set(&self) -> FastList<UnifiedSet<Self::Item>>
    where
        Self::Item: Clone + Eq + Hash,
    {
        self.iter()
            .cloned()
            .powerset()
            .map(|subset| subset.into_iter().collect())
            .collect()
    }

    fn cartesian_product<S>(&self, other: &S) -> FastList<(Self::Item, S::Item)>
    where
        S: SetIterable + ?Sized,
        Self::Item: Clone,
        S::Item: Clone,
    {
        let others: Vec<&S::Item> = other.iter().collect();
        self.iter()
            .cartesian_product(others)
            .map(|(left, right)| (left.clone(), right.clone()))
            .collect()
    }

    /// Same size and every element of `other` is contained here.
    fn equals<S>(&self, other: &S) -> bool
    where
        S: SetIterable<Item = Self::Item> + ?Sized,
    {
        self.len() == other.len() && other.iter().all(|item| self.contains(item))
    }

    /// Order-independent: the wrapping sum of element hashes.
    fn hash_code(&self) -> u64
    where
        Self::Item: Hash,
    {
        crate::hashing::unordered_hash_code(self.iter())
    }

    fn make_string(&self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        let mut out = String::new();
        let _ = iterate::append_string(self.iter(), &mut out, "", separator, "");
        out
    }

    /// Batched parallel iteration on `pool`; fails when `batch_size == 0`.
    fn as_parallel<'a>(
        &'a self,
        pool: &'a ThreadPool,
        batch_size: usize,
    ) -> Result<ParallelSetIterable<'a, Self::Item>>
    where
        Self::Item: Sync + 'a,
    {
        ParallelSetIterable::new(self, pool, batch_size)
    }
}

impl<S> SetIterable for &S
where
    S: SetIterable + ?Sized,
{
    type Item = S::Item;

    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn contains(&self, item: &S::Item) -> bool {
        (**self).contains(item)
    }

    fn iter(&self) -> S::Iter<'_> {
        (**self).iter()
    }
}

pub trait MutableSet: SetIterable {
    /// `Ok(true)` when `item` was not present before.
    fn add(&mut self, item: Self::Item) -> Result<bool>;

    /// `Ok(true)` when `item` was present.
    fn remove(&mut self, item: &Self::Item) -> Result<bool>;

    fn clear(&mut self) -> Result<()>;

    fn remove_if<P>(&mut self, predicate: P) -> Result<bool>
    where
        P: FnMut(&Self::Item) -> bool;

    fn add_all<I>(&mut self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut changed = false;
        for item in items {
            changed |= self.add(item)?;
        }
        Ok(changed)
    }

    fn remove_all<'a, I>(&mut self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: 'a,
    {
        let mut changed = false;
        for item in items {
            changed |= self.remove(item)?;
        }
        Ok(changed)
    }

    /// Keeps only the elements also found in `items`.
    fn retain_all<'a, I>(&mut self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: Eq + Hash + 'a,
    {
        let keep: AHashSet<&Self::Item> = items.into_iter().collect();
        self.remove_if(|item| !keep.contains(item))
    }

    fn with(mut self, item: Self::Item) -> Result<Self>
    where
        Self: Sized,
    {
        self.add(item)?;
        Ok(self)
    }

    fn without(mut self, item: &Self::Item) -> Result<Self>
    where
        Self: Sized,
    {
        self.remove(item)?;
        Ok(self)
    }

    fn with_all<I>(mut self, items: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        self.add_all(items)?;
        Ok(self)
    }

    fn without_all<'a, I>(mut self, items: I) -> Result<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: 'a,
    {
        self.remove_all(items)?;
        Ok(self)
    }
}
