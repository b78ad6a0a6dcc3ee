//! Positional iteration algorithms, written once against [`ListIterable`] and
//! [`OrderedMutableContainer`] and shared by every list, view and decorator.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use weft_common::Result;
use weft_common::result::verify_index;

use crate::iterate;
use crate::list_iterable::ListIterable;
use crate::multimap::ListMultimap;
use crate::mutable_list::OrderedMutableContainer;
use crate::partition::PartitionList;
use crate::FastList;

/// Sequences shorter than this are sorted by adjacent-swap insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 10;

pub fn for_each<L, F>(list: &L, mut procedure: F)
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item),
{
    for item in list.iter() {
        procedure(item);
    }
}

pub fn for_each_with<L, Q, F>(list: &L, mut procedure: F, parameter: &Q)
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    F: FnMut(&L::Item, &Q),
{
    for item in list.iter() {
        procedure(item, parameter);
    }
}

pub fn for_each_with_index<L, F>(list: &L, mut procedure: F)
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item, usize),
{
    for (index, item) in list.iter().enumerate() {
        procedure(item, index);
    }
}

/// Visits the inclusive range `from..=to`; walks backwards when `from > to`.
/// Both ends must address existing elements.
pub fn for_each_in_range<L, F>(list: &L, from: usize, to: usize, mut procedure: F) -> Result<()>
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item),
{
    for_each_with_index_in_range(list, from, to, |item, _| procedure(item))
}

pub fn for_each_with_index_in_range<L, F>(
    list: &L,
    from: usize,
    to: usize,
    mut procedure: F,
) -> Result<()>
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item, usize),
{
    verify_index(from, list.len())?;
    verify_index(to, list.len())?;
    if from <= to {
        for index in from..=to {
            procedure(list.get(index)?, index);
        }
    } else {
        for index in (to..=from).rev() {
            procedure(list.get(index)?, index);
        }
    }
    Ok(())
}

pub fn reverse_for_each<L, F>(list: &L, mut procedure: F)
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item),
{
    for item in list.iter().rev() {
        procedure(item);
    }
}

pub fn select<L, P>(list: &L, predicate: P) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> bool,
{
    iterate::select_into(list.iter(), predicate, FastList::with_capacity(list.len()))
}

pub fn select_with<L, Q, P>(list: &L, mut predicate: P, parameter: &Q) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    select(list, |item| predicate(item, parameter))
}

pub fn reject<L, P>(list: &L, predicate: P) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> bool,
{
    iterate::reject_into(list.iter(), predicate, FastList::new())
}

pub fn reject_with<L, Q, P>(list: &L, mut predicate: P, parameter: &Q) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    reject(list, |item| predicate(item, parameter))
}

pub fn partition<L, P>(list: &L, predicate: P) -> PartitionList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> bool,
{
    iterate::partition_into(list.iter(), predicate)
}

pub fn partition_with<L, Q, P>(list: &L, mut predicate: P, parameter: &Q) -> PartitionList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    partition(list, |item| predicate(item, parameter))
}

/// `selected` holds the longest prefix satisfying `predicate`, `rejected` the rest.
pub fn partition_while<L, P>(list: &L, mut predicate: P) -> PartitionList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> bool,
{
    let split = list
        .iter()
        .position(|item| !predicate(item))
        .unwrap_or(list.len());
    PartitionList {
        selected: list.iter().take(split).cloned().collect(),
        rejected: list.iter().skip(split).cloned().collect(),
    }
}

pub fn collect<L, V, F>(list: &L, function: F) -> FastList<V>
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item) -> V,
{
    iterate::collect_into(list.iter(), function, FastList::with_capacity(list.len()))
}

pub fn collect_with<L, Q, V, F>(list: &L, mut function: F, parameter: &Q) -> FastList<V>
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    F: FnMut(&L::Item, &Q) -> V,
{
    collect(list, |item| function(item, parameter))
}

pub fn collect_if<L, V, P, F>(list: &L, predicate: P, function: F) -> FastList<V>
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
    F: FnMut(&L::Item) -> V,
{
    iterate::collect_if_into(list.iter(), predicate, function, FastList::new())
}

pub fn flat_collect<L, V, J, F>(list: &L, function: F) -> FastList<V>
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item) -> J,
    J: IntoIterator<Item = V>,
{
    iterate::flat_collect_into(list.iter(), function, FastList::new())
}

pub fn detect<L, P>(list: &L, predicate: P) -> Option<&L::Item>
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    iterate::detect(list.iter(), predicate)
}

pub fn detect_with<'a, L, Q, P>(list: &'a L, mut predicate: P, parameter: &Q) -> Option<&'a L::Item>
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    detect(list, |item| predicate(item, parameter))
}

pub fn detect_if_none<L, P, F>(list: &L, predicate: P, fallback: F) -> L::Item
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> bool,
    F: FnOnce() -> L::Item,
{
    match detect(list, predicate) {
        Some(found) => found.clone(),
        None => fallback(),
    }
}

pub fn detect_index<L, P>(list: &L, mut predicate: P) -> Option<usize>
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    list.iter().position(|item| predicate(item))
}

pub fn detect_last_index<L, P>(list: &L, mut predicate: P) -> Option<usize>
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    list.iter().rposition(|item| predicate(item))
}

pub fn count<L, P>(list: &L, predicate: P) -> usize
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    iterate::count(list.iter(), predicate)
}

pub fn count_with<L, Q, P>(list: &L, mut predicate: P, parameter: &Q) -> usize
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    count(list, |item| predicate(item, parameter))
}

pub fn any_satisfy<L, P>(list: &L, predicate: P) -> bool
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    iterate::any_satisfy(list.iter(), predicate)
}

pub fn any_satisfy_with<L, Q, P>(list: &L, mut predicate: P, parameter: &Q) -> bool
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    any_satisfy(list, |item| predicate(item, parameter))
}

pub fn all_satisfy<L, P>(list: &L, predicate: P) -> bool
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    iterate::all_satisfy(list.iter(), predicate)
}

pub fn all_satisfy_with<L, Q, P>(list: &L, mut predicate: P, parameter: &Q) -> bool
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    all_satisfy(list, |item| predicate(item, parameter))
}

pub fn none_satisfy<L, P>(list: &L, predicate: P) -> bool
where
    L: ListIterable + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    iterate::none_satisfy(list.iter(), predicate)
}

pub fn none_satisfy_with<L, Q, P>(list: &L, mut predicate: P, parameter: &Q) -> bool
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    P: FnMut(&L::Item, &Q) -> bool,
{
    none_satisfy(list, |item| predicate(item, parameter))
}

pub fn inject_into<L, A, F>(list: &L, seed: A, function: F) -> A
where
    L: ListIterable + ?Sized,
    F: FnMut(A, &L::Item) -> A,
{
    iterate::inject_into(list.iter(), seed, function)
}

pub fn inject_into_with<L, A, Q, F>(list: &L, seed: A, mut function: F, parameter: &Q) -> A
where
    L: ListIterable + ?Sized,
    Q: ?Sized,
    F: FnMut(A, &L::Item, &Q) -> A,
{
    inject_into(list, seed, |accumulator, item| {
        function(accumulator, item, parameter)
    })
}

pub fn sum_of_i64<L, F>(list: &L, function: F) -> i64
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item) -> i64,
{
    iterate::sum_of_i64(list.iter(), function)
}

pub fn sum_of_f64<L, F>(list: &L, function: F) -> f64
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item) -> f64,
{
    iterate::sum_of_f64(list.iter(), function)
}

pub fn min_by<L, F>(list: &L, comparator: F) -> Option<&L::Item>
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    iterate::min_by(list.iter(), comparator)
}

pub fn max_by<L, F>(list: &L, comparator: F) -> Option<&L::Item>
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    iterate::max_by(list.iter(), comparator)
}

pub fn min_by_key<L, K, F>(list: &L, mut function: F) -> Option<&L::Item>
where
    L: ListIterable + ?Sized,
    K: Ord,
    F: FnMut(&L::Item) -> K,
{
    min_by(list, |a, b| function(a).cmp(&function(b)))
}

pub fn max_by_key<L, K, F>(list: &L, mut function: F) -> Option<&L::Item>
where
    L: ListIterable + ?Sized,
    K: Ord,
    F: FnMut(&L::Item) -> K,
{
    max_by(list, |a, b| function(a).cmp(&function(b)))
}

pub fn corresponds<L, R, P>(list: &L, other: &R, mut predicate: P) -> bool
where
    L: ListIterable + ?Sized,
    R: ListIterable + ?Sized,
    P: FnMut(&L::Item, &R::Item) -> bool,
{
    list.len() == other.len()
        && list
            .iter()
            .zip(other.iter())
            .all(|(left, right)| predicate(left, right))
}

pub fn equals<L, R>(list: &L, other: &R) -> bool
where
    L: ListIterable + ?Sized,
    R: ListIterable<Item = L::Item> + ?Sized,
    L::Item: PartialEq,
{
    corresponds(list, other, |left, right| left == right)
}

pub fn index_of<L>(list: &L, item: &L::Item) -> Option<usize>
where
    L: ListIterable + ?Sized,
    L::Item: PartialEq,
{
    list.iter().position(|candidate| candidate == item)
}

pub fn last_index_of<L>(list: &L, item: &L::Item) -> Option<usize>
where
    L: ListIterable + ?Sized,
    L::Item: PartialEq,
{
    list.iter().rposition(|candidate| candidate == item)
}

/// Keeps the first occurrence of each element.
pub fn distinct<L>(list: &L) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone + Eq + Hash,
{
    let mut seen = AHashSet::with_capacity(list.len());
    list.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

pub fn take<L>(list: &L, count: usize) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
{
    list.iter().take(count).cloned().collect()
}

pub fn drop<L>(list: &L, count: usize) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
{
    list.iter().skip(count).cloned().collect()
}

pub fn take_while<L, P>(list: &L, mut predicate: P) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> bool,
{
    list.iter()
        .take_while(|item| predicate(item))
        .cloned()
        .collect()
}

pub fn drop_while<L, P>(list: &L, mut predicate: P) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> bool,
{
    list.iter()
        .skip_while(|item| predicate(item))
        .cloned()
        .collect()
}

pub fn group_by<L, K, F>(list: &L, function: F) -> ListMultimap<K, L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    K: Eq + Hash,
    F: FnMut(&L::Item) -> K,
{
    iterate::group_by_into(list.iter(), function)
}

pub fn group_by_each<L, K, J, F>(list: &L, function: F) -> ListMultimap<K, L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    K: Eq + Hash,
    F: FnMut(&L::Item) -> J,
    J: IntoIterator<Item = K>,
{
    iterate::group_by_each_into(list.iter(), function)
}

pub fn group_by_unique_key<L, K, F>(list: &L, function: F) -> Result<AHashMap<K, L::Item>>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    K: Eq + Hash + Debug,
    F: FnMut(&L::Item) -> K,
{
    iterate::group_by_unique_key(list.iter(), function)
}

pub fn zip<L, S, J>(list: &L, other: J) -> FastList<(L::Item, S)>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    J: IntoIterator<Item = S>,
{
    iterate::zip_into(list.iter(), other, FastList::new())
}

pub fn zip_with_index<L>(list: &L) -> FastList<(L::Item, usize)>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
{
    iterate::zip_with_index_into(list.iter(), FastList::with_capacity(list.len()))
}

/// `Ok(index)` of a matching element, or `Err(insertion point)`.
pub fn binary_search_by<L, F>(list: &L, mut function: F) -> std::result::Result<usize, usize>
where
    L: ListIterable + ?Sized,
    F: FnMut(&L::Item) -> Ordering,
{
    let mut low = 0;
    let mut high = list.len();
    while low < high {
        let middle = low + (high - low) / 2;
        let Ok(candidate) = list.get(middle) else {
            return Err(low);
        };
        match function(candidate) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Ok(middle),
        }
    }
    Err(low)
}

pub fn to_sorted_list_by<L, F>(list: &L, comparator: F) -> FastList<L::Item>
where
    L: ListIterable + ?Sized,
    L::Item: Clone,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    let mut sorted: FastList<L::Item> = list.iter().cloned().collect();
    sorted.sort_items_by(comparator);
    sorted
}

/// Hybrid stable sort: insertion sort below [`INSERTION_SORT_THRESHOLD`],
/// a stable merge sort of positions otherwise. Only `get` and `swap` are used,
/// so any container (or view) can be sorted in place.
pub fn sort_this<L, F>(list: &mut L, comparator: F) -> Result<()>
where
    L: OrderedMutableContainer + ?Sized,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    if list.len() < INSERTION_SORT_THRESHOLD {
        log::trace!("insertion sort of {} elements", list.len());
        insertion_sort(list, comparator)
    } else {
        log::trace!("stable merge sort of {} elements", list.len());
        permutation_sort(list, comparator)
    }
}

/// Adjacent-swap insertion sort; stable.
pub fn insertion_sort<L, F>(list: &mut L, mut comparator: F) -> Result<()>
where
    L: OrderedMutableContainer + ?Sized,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    for i in 0..list.len() {
        let mut j = i;
        while j > 0 && comparator(list.get(j - 1)?, list.get(j)?) == Ordering::Greater {
            list.swap(j, j - 1)?;
            j -= 1;
        }
    }
    Ok(())
}

/// Sorts a permutation of positions with the standard stable sort, then
/// applies it in place one cycle at a time.
fn permutation_sort<L, F>(list: &mut L, mut comparator: F) -> Result<()>
where
    L: OrderedMutableContainer + ?Sized,
    F: FnMut(&L::Item, &L::Item) -> Ordering,
{
    let mut order: Vec<usize> = (0..list.len()).collect();
    {
        let items: Vec<&L::Item> = list.iter().collect();
        order.sort_by(|&a, &b| comparator(items[a], items[b]));
    }

    // order[k] is the current position of the element that belongs at k.
    let mut placed = vec![false; order.len()];
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        let mut position = start;
        loop {
            placed[position] = true;
            let source = order[position];
            if source == start {
                break;
            }
            list.swap(position, source)?;
            position = source;
        }
    }
    Ok(())
}

pub fn reverse_this<L>(list: &mut L) -> Result<()>
where
    L: OrderedMutableContainer + ?Sized,
{
    let len = list.len();
    for i in 0..len / 2 {
        list.swap(i, len - 1 - i)?;
    }
    Ok(())
}

/// Removes every element matching `predicate`; `true` if anything was removed.
pub fn remove_if<L, P>(list: &mut L, mut predicate: P) -> Result<bool>
where
    L: OrderedMutableContainer + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    let mut removed = false;
    let mut index = 0;
    while index < list.len() {
        if predicate(list.get(index)?) {
            list.remove_at(index)?;
            removed = true;
        } else {
            index += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranged_for_each_walks_both_directions() {
        let list = fast_list![1, 2, 3, 4, 5];
        let mut ascending = Vec::new();
        for_each_in_range(&list, 1, 3, |item| ascending.push(*item)).unwrap();
        assert_eq!(ascending, vec![2, 3, 4]);

        let mut descending = Vec::new();
        for_each_with_index_in_range(&list, 4, 2, |item, index| descending.push((*item, index)))
            .unwrap();
        assert_eq!(descending, vec![(5, 4), (4, 3), (3, 2)]);

        assert!(for_each_in_range(&list, 0, 5, |_| {}).is_err());
    }

    #[test]
    fn partition_while_splits_at_first_failure() {
        let list = fast_list![1, 2, 5, 1, 7];
        let partition = partition_while(&list, |item| *item < 3);
        assert_eq!(partition.selected, vec![1, 2]);
        assert_eq!(partition.rejected, vec![5, 1, 7]);
    }

    #[test]
    fn permutation_sort_applies_cycles() {
        let mut list: FastList<i32> = (0..25).rev().collect();
        permutation_sort(&mut list, |a, b| a.cmp(b)).unwrap();
        assert_eq!(list, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn binary_search_reports_insertion_point() {
        let list = fast_list![10, 20, 30, 40];
        assert_eq!(binary_search_by(&list, |candidate| candidate.cmp(&30)), Ok(2));
        assert_eq!(binary_search_by(&list, |candidate| candidate.cmp(&25)), Err(2));
        assert_eq!(binary_search_by(&list, |candidate| candidate.cmp(&99)), Err(4));
    }

    #[test]
    fn distinct_keeps_first_occurrence() {
        let list = fast_list![3, 1, 3, 2, 1];
        assert_eq!(distinct(&list), vec![3, 1, 2]);
    }

    #[test]
    fn remove_if_compacts() {
        let mut list = fast_list![1, 2, 3, 4, 5, 6];
        assert!(remove_if(&mut list, |item| item % 2 == 0).unwrap());
        assert_eq!(list, vec![1, 3, 5]);
        assert!(!remove_if(&mut list, |item| *item > 10).unwrap());
    }
}
