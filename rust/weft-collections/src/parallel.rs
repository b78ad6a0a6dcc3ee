//! Batched parallel iteration over a [`ListIterable`] or a [`SetIterable`].
//!
//! The list is split into contiguous index ranges of `batch_size` elements and
//! each range is processed as one task on the supplied `rayon` pool. Side
//! effects of [`ParallelListIterable::for_each`] may interleave across batches
//! in any order. Operations producing a new collection gather per-batch results
//! back in batch order, so their output matches the sequential equivalent.
//!
//! Sets have no positions, so [`ParallelSetIterable`] snapshots the element
//! references once and batches over that snapshot.

use std::hash::Hash;
use std::ops::Range;

use rayon::ThreadPool;
use rayon::prelude::*;
use weft_common::{Result, verify_arg};

use crate::list_iterable::ListIterable;
use crate::set_iterable::SetIterable;
use crate::{FastList, UnifiedSet};

pub struct ParallelListIterable<'a, L: ?Sized> {
    list: &'a L,
    pool: &'a ThreadPool,
    batch_size: usize,
}

impl<L: ?Sized> Clone for ParallelListIterable<'_, L> {
    fn clone(&self) -> Self {
        ParallelListIterable {
            list: self.list,
            pool: self.pool,
            batch_size: self.batch_size,
        }
    }
}

impl<'a, L> ParallelListIterable<'a, L>
where
    L: ListIterable + Sync + ?Sized,
    L::Item: Sync,
{
    pub fn new(list: &'a L, pool: &'a ThreadPool, batch_size: usize) -> Result<Self> {
        verify_arg!(batch_size, batch_size > 0);
        Ok(ParallelListIterable {
            list,
            pool,
            batch_size,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn batches(&self) -> Vec<Range<usize>> {
        let len = self.list.len();
        let batches = (0..len)
            .step_by(self.batch_size)
            .map(|start| start..(start + self.batch_size).min(len))
            .collect::<Vec<_>>();
        log::debug!(
            "dispatching {} batches of up to {} elements",
            batches.len(),
            self.batch_size
        );
        batches
    }

    fn items(&self, range: Range<usize>) -> impl Iterator<Item = &'a L::Item> + 'a {
        let list = self.list;
        range.filter_map(move |i| list.get(i).ok())
    }

    /// Runs `procedure` once per element; no ordering across batches.
    pub fn for_each<F>(&self, procedure: F)
    where
        F: Fn(&L::Item) + Sync + Send,
    {
        let batches = self.batches();
        self.pool.install(|| {
            batches
                .into_par_iter()
                .for_each(|range| self.items(range).for_each(&procedure));
        });
    }

    pub fn select<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: Fn(&L::Item) -> bool + Sync + Send,
        L::Item: Clone + Send,
    {
        self.gather(|range| {
            self.items(range)
                .filter(|item| predicate(item))
                .cloned()
                .collect()
        })
    }

    pub fn reject<P>(&self, predicate: P) -> FastList<L::Item>
    where
        P: Fn(&L::Item) -> bool + Sync + Send,
        L::Item: Clone + Send,
    {
        self.select(|item| !predicate(item))
    }

    pub fn collect<V, F>(&self, function: F) -> FastList<V>
    where
        V: Send,
        F: Fn(&L::Item) -> V + Sync + Send,
    {
        self.gather(|range| self.items(range).map(&function).collect())
    }

    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&L::Item) -> bool + Sync + Send,
    {
        let batches = self.batches();
        self.pool.install(|| {
            batches
                .into_par_iter()
                .map(|range| self.items(range).filter(|item| predicate(item)).count())
                .sum()
        })
    }

    pub fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: Fn(&L::Item) -> bool + Sync + Send,
    {
        let batches = self.batches();
        self.pool.install(|| {
            batches
                .into_par_iter()
                .any(|range| self.items(range).any(&predicate))
        })
    }

    pub fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: Fn(&L::Item) -> bool + Sync + Send,
    {
        let batches = self.batches();
        self.pool.install(|| {
            batches
                .into_par_iter()
                .all(|range| self.items(range).all(&predicate))
        })
    }

    /// The first matching element in list order.
    pub fn detect<P>(&self, predicate: P) -> Option<&'a L::Item>
    where
        P: Fn(&L::Item) -> bool + Sync + Send,
    {
        let batches = self.batches();
        self.pool.install(|| {
            batches
                .into_par_iter()
                .find_map_first(|range| self.items(range).find(|item| predicate(item)))
        })
    }

    pub fn to_list(&self) -> FastList<L::Item>
    where
        L::Item: Clone + Send,
    {
        self.gather(|range| self.items(range).cloned().collect())
    }

    fn gather<V, F>(&self, batch: F) -> FastList<V>
    where
        V: Send,
        F: Fn(Range<usize>) -> Vec<V> + Sync + Send,
    {
        let batches = self.batches();
        let parts = self.pool.install(|| {
            batches
                .into_par_iter()
                .map(batch)
                .collect::<Vec<Vec<V>>>()
        });
        parts.into_iter().flatten().collect()
    }
}

pub struct ParallelSetIterable<'a, T> {
    items: Vec<&'a T>,
    pool: &'a ThreadPool,
    batch_size: usize,
}

impl<'a, T: Sync> ParallelSetIterable<'a, T> {
    pub fn new<S>(set: &'a S, pool: &'a ThreadPool, batch_size: usize) -> Result<Self>
    where
        S: SetIterable<Item = T> + ?Sized,
    {
        verify_arg!(batch_size, batch_size > 0);
        Ok(ParallelSetIterable {
            items: set.iter().collect(),
            pool,
            batch_size,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn batches(&self) -> rayon::slice::Chunks<'_, &'a T> {
        log::debug!(
            "dispatching {} batches of up to {} elements",
            self.items.len().div_ceil(self.batch_size),
            self.batch_size
        );
        self.items.par_chunks(self.batch_size)
    }

    /// Runs `procedure` once per element, in no particular order.
    pub fn for_each<F>(&self, procedure: F)
    where
        F: Fn(&T) + Sync + Send,
    {
        self.pool.install(|| {
            self.batches()
                .for_each(|batch| batch.iter().for_each(|item| procedure(item)));
        });
    }

    pub fn select<P>(&self, predicate: P) -> UnifiedSet<T>
    where
        P: Fn(&T) -> bool + Sync + Send,
        T: Clone + Eq + Hash + Send,
    {
        self.gather(|batch| {
            batch
                .iter()
                .filter(|item| predicate(item))
                .map(|item| T::clone(item))
                .collect()
        })
    }

    pub fn reject<P>(&self, predicate: P) -> UnifiedSet<T>
    where
        P: Fn(&T) -> bool + Sync + Send,
        T: Clone + Eq + Hash + Send,
    {
        self.select(|item| !predicate(item))
    }

    pub fn collect<V, F>(&self, function: F) -> UnifiedSet<V>
    where
        V: Eq + Hash + Send,
        F: Fn(&T) -> V + Sync + Send,
    {
        self.gather(|batch| batch.iter().map(|item| function(item)).collect())
    }

    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.pool.install(|| {
            self.batches()
                .map(|batch| batch.iter().filter(|item| predicate(item)).count())
                .sum()
        })
    }

    pub fn any_satisfy<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.pool.install(|| {
            self.batches()
                .any(|batch| batch.iter().any(|item| predicate(item)))
        })
    }

    pub fn all_satisfy<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.pool.install(|| {
            self.batches()
                .all(|batch| batch.iter().all(|item| predicate(item)))
        })
    }

    /// Any matching element; sets define no first one.
    pub fn detect<P>(&self, predicate: P) -> Option<&'a T>
    where
        P: Fn(&T) -> bool + Sync + Send,
    {
        self.pool.install(|| {
            self.batches()
                .find_map_any(|batch| batch.iter().copied().find(|item| predicate(item)))
        })
    }

    pub fn to_set(&self) -> UnifiedSet<T>
    where
        T: Clone + Eq + Hash + Send,
    {
        self.gather(|batch| batch.iter().map(|item| T::clone(item)).collect())
    }

    fn gather<V, F>(&self, batch: F) -> UnifiedSet<V>
    where
        V: Eq + Hash + Send,
        F: Fn(&[&'a T]) -> Vec<V> + Sync + Send,
    {
        let parts = self
            .pool
            .install(|| self.batches().map(batch).collect::<Vec<Vec<V>>>());
        parts.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::mutable_list::MutableList;
    use crate::unified_set;

    fn pool() -> ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .thread_name(|i| format!("weft_test_{i}"))
            .build()
            .unwrap()
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let pool = pool();
        let list = (0..10).collect::<FastList<i32>>();
        let err = list.as_parallel(&pool, 0).err().unwrap();
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn results_keep_list_order() {
        let pool = pool();
        let list = (0..1000).collect::<FastList<i32>>();
        let parallel = list.as_parallel(&pool, 7).unwrap();
        assert_eq!(
            parallel.select(|i| i % 3 == 0),
            list.select(|i| i % 3 == 0)
        );
        assert_eq!(parallel.reject(|i| i % 3 == 0).len(), 666);
        assert_eq!(parallel.collect(|i| i * 2), list.collect(|i| i * 2));
        assert_eq!(parallel.to_list(), list);
        assert_eq!(parallel.count(|i| *i >= 500), 500);
        assert_eq!(parallel.detect(|i| *i > 10 && i % 100 == 0), Some(&100));
        assert!(parallel.any_satisfy(|i| *i == 999));
        assert!(parallel.all_satisfy(|i| *i < 1000));
    }

    #[test]
    fn for_each_visits_every_element_once() {
        let pool = pool();
        let list = (1..=100).collect::<FastList<usize>>();
        let total = AtomicUsize::new(0);
        list.as_parallel(&pool, 16)
            .unwrap()
            .for_each(|i| {
                total.fetch_add(*i, Ordering::Relaxed);
            });
        assert_eq!(total.into_inner(), 5050);
    }

    #[test]
    fn works_over_a_view() {
        let pool = pool();
        let mut list = (0..20).collect::<FastList<i32>>();
        let view = list.sub_list(5, 15).unwrap();
        let parallel = view.as_parallel(&pool, 3).unwrap();
        assert_eq!(parallel.to_list(), (5..15).collect::<Vec<_>>());
    }

    #[test]
    fn empty_list_dispatches_nothing() {
        let pool = pool();
        let list = FastList::<i32>::new();
        let parallel = list.as_parallel(&pool, 4).unwrap();
        assert!(parallel.to_list().is_empty());
        assert!(parallel.all_satisfy(|_| false));
        assert_eq!(parallel.detect(|_| true), None);
    }

    #[test]
    fn set_batches_cover_every_element() {
        let pool = pool();
        let set = (0..500).collect::<UnifiedSet<i32>>();
        assert!(set.as_parallel(&pool, 0).is_err());

        let parallel = set.as_parallel(&pool, 9).unwrap();
        assert_eq!(parallel.batch_size(), 9);
        assert_eq!(parallel.select(|i| i % 5 == 0), set.select(|i| i % 5 == 0));
        assert_eq!(parallel.reject(|i| *i >= 10).len(), 10);
        assert_eq!(parallel.collect(|i| i / 100), unified_set![0, 1, 2, 3, 4]);
        assert_eq!(parallel.to_set(), set);
        assert_eq!(parallel.count(|i| *i < 50), 50);
        assert_eq!(parallel.detect(|i| *i == 321), Some(&321));
        assert!(parallel.any_satisfy(|i| *i == 499));
        assert!(!parallel.all_satisfy(|i| *i < 499));

        let total = AtomicUsize::new(0);
        parallel.for_each(|i| {
            total.fetch_add(*i as usize, Ordering::Relaxed);
        });
        assert_eq!(total.into_inner(), 124_750);
    }
}
