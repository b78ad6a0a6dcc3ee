use std::collections::HashSet;

use crate::list_iterable::ListIterable;
use crate::set_iterable::{MutableSet, SetIterable};
use crate::{ImmutableSet, UnifiedSet, unified_set};

#[test]
fn test_select_reject_partition() {
    let set: UnifiedSet<i32> = (1..=10).collect();
    assert_eq!(set.select(|i| i % 5 == 0), unified_set![5, 10]);
    assert_eq!(set.reject(|i| *i > 2), unified_set![1, 2]);
    assert_eq!(set.select_with(|i, m| i % m == 0, &4), unified_set![4, 8]);
    assert_eq!(set.reject_with(|i, m| i % m != 0, &3), unified_set![3, 6, 9]);

    let partition = set.partition(|i| *i <= 3);
    assert_eq!(*partition.selected(), unified_set![1, 2, 3]);
    assert_eq!(partition.rejected().len(), 7);
}

#[test]
fn test_collect_collapses_duplicates() {
    let set = unified_set![-2, -1, 1, 2];
    assert_eq!(set.collect(|i| i32::abs(*i)), unified_set![1, 2]);
    assert_eq!(set.collect_if(|i| *i > 0, |i| i * 10), unified_set![10, 20]);
    assert_eq!(set.flat_collect(|i| [*i, -*i]), set);
}

#[test]
fn test_queries() {
    let set = unified_set![2, 4, 6];
    assert_eq!(set.detect(|i| *i > 3).map(|i| i % 2), Some(0));
    assert_eq!(set.detect_if_none(|i| *i > 10, || 0), 0);
    assert_eq!(set.count(|i| *i >= 4), 2);
    assert!(set.all_satisfy(|i| i % 2 == 0));
    assert!(set.none_satisfy(|i| i % 2 == 1));
    assert!(!set.any_satisfy(|i| *i == 5));
    assert_eq!(set.inject_into(0, |acc, i| acc + i), 12);
    assert_eq!(set.sum_of_i64(|i| i64::from(*i)), 12);
    assert_eq!(set.min_by(|a, b| a.cmp(b)), Some(&2));
    assert_eq!(set.max_by(|a, b| a.cmp(b)), Some(&6));
    assert!(set.contains_all([&2, &6]));
}

#[test]
fn test_group_by_on_sets() {
    let set = unified_set!["one", "two", "three", "four"];
    let by_length = set.group_by(|s| s.len());
    assert_eq!(by_length.get(&3).unwrap(), &unified_set!["one", "two"]);
    assert_eq!(by_length.key_count(), 3);
}

#[test]
fn test_conversions() {
    let set = unified_set![3, 1, 2];
    assert_eq!(set.to_sorted_list(), [1, 2, 3]);
    assert_eq!(set.to_sorted_list_by(|a, b| b.cmp(a)), [3, 2, 1]);
    assert_eq!(set.to_list().len(), 3);
    assert_eq!(set.to_set(), set);

    let immutable: ImmutableSet<i32> = set.to_immutable();
    assert_eq!(immutable, set);
    assert_eq!(immutable.to_mutable(), set);
    assert_eq!(unified_set![7].make_string(", "), "7");
}

#[test]
fn test_equality_across_set_types() {
    let unified = unified_set!['a', 'b'];
    let immutable: ImmutableSet<char> = ['b', 'a'].into_iter().collect();
    assert_eq!(unified, immutable);
    assert_eq!(immutable, unified);
    assert!(unified.equals(&immutable));
    assert_eq!(unified.hash_code(), immutable.hash_code());
    assert_ne!(unified, unified_set!['a']);
}

#[test]
fn test_sets_as_hash_keys() {
    let mut seen = HashSet::new();
    assert!(seen.insert(unified_set![1, 2, 3]));
    assert!(!seen.insert((1..=3).rev().collect::<UnifiedSet<_>>()));
    assert_eq!(seen.len(), 1);
}

#[test]
fn test_builders_and_bulk_mutation() {
    let set = UnifiedSet::new().with(1).unwrap().with(2).unwrap().without(&1).unwrap();
    assert_eq!(set, unified_set![2]);

    let set = UnifiedSet::new()
        .with_all([1, 2, 2, 3])
        .unwrap()
        .without_all([&1, &7])
        .unwrap();
    assert_eq!(set, unified_set![2, 3]);

    let mut set = unified_set![1, 2, 3, 4];
    assert!(set.remove_all([&1, &9]).unwrap());
    assert!(!set.remove_all([&9]).unwrap());
    assert!(!set.retain_all([&2, &3, &4]).unwrap());
    assert!(set.remove(&4).unwrap());
    assert!(!set.remove(&4).unwrap());
    set.clear().unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_cartesian_product_with_empty_side() {
    let numbers = unified_set![1, 2];
    let nothing = UnifiedSet::<char>::new();
    assert!(numbers.cartesian_product(&nothing).is_empty());
    assert_eq!(nothing.power_set().len(), 1);
}
