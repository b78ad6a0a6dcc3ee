//! Iteration algorithms over any stream of element references.
//!
//! These are the order-agnostic building blocks shared by lists and sets. Every
//! function takes `IntoIterator<Item = &T>` and, where it builds a result, an
//! explicit target collection, so a list selects into a [`FastList`] while a
//! set selects into a [`UnifiedSet`] through the very same code.
//!
//! [`FastList`]: crate::FastList
//! [`UnifiedSet`]: crate::UnifiedSet

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;
use weft_common::{Error, Result};

use crate::multimap::Multimap;
use crate::partition::Partition;

pub fn select_into<'a, T, I, P, R>(items: I, mut predicate: P, mut target: R) -> R
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
    R: Extend<T>,
{
    target.extend(items.into_iter().filter(|item| predicate(*item)).cloned());
    target
}

pub fn reject_into<'a, T, I, P, R>(items: I, mut predicate: P, target: R) -> R
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
    R: Extend<T>,
{
    select_into(items, |item| !predicate(item), target)
}

pub fn partition_into<'a, T, I, P, C>(items: I, mut predicate: P) -> Partition<C>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
    C: Default + Extend<T>,
{
    let mut partition = Partition::<C>::default();
    for item in items {
        let target = if predicate(item) {
            &mut partition.selected
        } else {
            &mut partition.rejected
        };
        target.extend(std::iter::once(item.clone()));
    }
    partition
}

pub fn collect_into<'a, T, V, I, F, R>(items: I, function: F, mut target: R) -> R
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> V,
    R: Extend<V>,
{
    target.extend(items.into_iter().map(function));
    target
}

pub fn collect_if_into<'a, T, V, I, P, F, R>(
    items: I,
    mut predicate: P,
    function: F,
    mut target: R,
) -> R
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> V,
    R: Extend<V>,
{
    target.extend(
        items
            .into_iter()
            .filter(|item| predicate(*item))
            .map(function),
    );
    target
}

pub fn flat_collect_into<'a, T, V, I, F, J, R>(items: I, function: F, mut target: R) -> R
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> J,
    J: IntoIterator<Item = V>,
    R: Extend<V>,
{
    target.extend(items.into_iter().flat_map(function));
    target
}

pub fn detect<'a, T, I, P>(items: I, mut predicate: P) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().find(|item| predicate(*item))
}

pub fn count<'a, T, I, P>(items: I, mut predicate: P) -> usize
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| predicate(*item)).count()
}

pub fn any_satisfy<'a, T, I, P>(items: I, mut predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().any(|item| predicate(item))
}

/// `true` on an empty input.
pub fn all_satisfy<'a, T, I, P>(items: I, mut predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().all(|item| predicate(item))
}

/// `true` on an empty input.
pub fn none_satisfy<'a, T, I, P>(items: I, mut predicate: P) -> bool
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    !items.into_iter().any(|item| predicate(item))
}

pub fn inject_into<'a, T, A, I, F>(items: I, seed: A, mut function: F) -> A
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(A, &T) -> A,
{
    items
        .into_iter()
        .fold(seed, |accumulator, item| function(accumulator, item))
}

pub fn sum_of_i64<'a, T, I, F>(items: I, mut function: F) -> i64
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> i64,
{
    items
        .into_iter()
        .fold(0i64, |sum, item| sum.wrapping_add(function(item)))
}

/// Compensated (Kahan) summation.
pub fn sum_of_f64<'a, T, I, F>(items: I, mut function: F) -> f64
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> f64,
{
    let mut sum = 0.0f64;
    let mut compensation = 0.0f64;
    for item in items {
        let adjusted = function(item) - compensation;
        let next = sum + adjusted;
        compensation = (next - sum) - adjusted;
        sum = next;
    }
    sum
}

/// First element that no other element orders strictly before.
pub fn min_by<'a, T, I, F>(items: I, mut comparator: F) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &T) -> Ordering,
{
    items.into_iter().fold(None, |min, item| match min {
        Some(current) if comparator(item, current) != Ordering::Less => Some(current),
        _ => Some(item),
    })
}

/// First element that no other element orders strictly after.
pub fn max_by<'a, T, I, F>(items: I, mut comparator: F) -> Option<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T, &T) -> Ordering,
{
    items.into_iter().fold(None, |max, item| match max {
        Some(current) if comparator(item, current) != Ordering::Greater => Some(current),
        _ => Some(item),
    })
}

pub fn group_by_into<'a, T, K, I, F, C>(items: I, mut function: F) -> Multimap<K, C>
where
    T: Clone + 'a,
    K: Eq + Hash,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> K,
    C: Default + Extend<T>,
{
    let mut multimap = Multimap::new();
    for item in items {
        multimap.put(function(item), item.clone());
    }
    multimap
}

pub fn group_by_each_into<'a, T, K, I, F, J, C>(items: I, mut function: F) -> Multimap<K, C>
where
    T: Clone + 'a,
    K: Eq + Hash,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> J,
    J: IntoIterator<Item = K>,
    C: Default + Extend<T>,
{
    let mut multimap = Multimap::new();
    for item in items {
        for key in function(item) {
            multimap.put(key, item.clone());
        }
    }
    multimap
}

/// Fails with `DuplicateKey` on the first key derived twice.
pub fn group_by_unique_key<'a, T, K, I, F>(items: I, mut function: F) -> Result<AHashMap<K, T>>
where
    T: Clone + 'a,
    K: Eq + Hash + Debug,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> K,
{
    let mut map = AHashMap::new();
    for item in items {
        let key = function(item);
        if map.contains_key(&key) {
            return Err(Error::duplicate_key(key));
        }
        map.insert(key, item.clone());
    }
    Ok(map)
}

/// Pairs elements positionally; stops at the shorter input.
pub fn zip_into<'a, T, S, I, J, R>(items: I, other: J, mut target: R) -> R
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    J: IntoIterator<Item = S>,
    R: Extend<(T, S)>,
{
    target.extend(
        items
            .into_iter()
            .zip(other)
            .map(|(item, paired)| (item.clone(), paired)),
    );
    target
}

pub fn zip_with_index_into<'a, T, I, R>(items: I, mut target: R) -> R
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    R: Extend<(T, usize)>,
{
    target.extend(
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (item.clone(), index)),
    );
    target
}

/// Writes `start`, the elements joined by `separator`, then `end`.
pub fn append_string<'a, T, I, W>(
    items: I,
    out: &mut W,
    start: &str,
    separator: &str,
    end: &str,
) -> std::fmt::Result
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
    W: std::fmt::Write,
{
    out.write_str(start)?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.write_str(separator)?;
        }
        write!(out, "{item}")?;
    }
    out.write_str(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max_prefer_first_of_equals() {
        let items = [(1, 'a'), (0, 'b'), (0, 'c'), (2, 'd'), (2, 'e')];
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        assert_eq!(min_by(&items, by_key), Some(&(0, 'b')));
        assert_eq!(max_by(&items, by_key), Some(&(2, 'd')));
        assert_eq!(min_by(&[] as &[(i32, char)], by_key), None);
    }

    #[test]
    fn vacuous_truth_on_empty() {
        let empty: [i32; 0] = [];
        assert!(all_satisfy(&empty, |_| false));
        assert!(none_satisfy(&empty, |_| true));
        assert!(!any_satisfy(&empty, |_| true));
    }

    #[test]
    fn kahan_sum_is_compensated() {
        let items = vec![0.1f64; 10];
        let sum = sum_of_f64(&items, |x| *x);
        assert!((sum - 1.0).abs() < 1e-15);
    }

    #[test]
    fn zip_stops_at_shorter() {
        let items = [1, 2, 3];
        let zipped: Vec<(i32, char)> = zip_into(&items, ['a', 'b'], Vec::new());
        assert_eq!(zipped, vec![(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn append_string_joins() {
        let mut out = String::new();
        append_string(&[1, 2, 3], &mut out, "[", ", ", "]").unwrap();
        assert_eq!(out, "[1, 2, 3]");
    }
}
