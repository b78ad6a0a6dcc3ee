use weft_common::ErrorKind;

use crate::list_iterable::ListIterable;
use crate::{FastList, ImmutableList};

#[test]
fn test_take_and_drop() {
    let list = fast_list![1, 2, 3, 4, 5];
    assert_eq!(list.take(3), [1, 2, 3]);
    assert_eq!(list.take(0), Vec::<i32>::new());
    assert_eq!(list.take(10), list);
    assert_eq!(ListIterable::drop(&list, 2), [3, 4, 5]);
    assert!(ListIterable::drop(&list, 9).is_empty());
    assert_eq!(list.take_while(|i| *i < 3), [1, 2]);
    assert_eq!(list.drop_while(|i| *i < 3), [3, 4, 5]);
}

#[test]
fn test_group_by_unique_key_rejects_duplicates() {
    let words = fast_list!["apple", "avocado", "banana"];
    let by_length = words.group_by_unique_key(|w| w.len()).unwrap();
    assert_eq!(by_length.len(), 3);
    assert_eq!(by_length[&6], "banana");

    let err = words
        .group_by_unique_key(|w| w.chars().next().unwrap_or_default())
        .unwrap_err();
    match err.kind() {
        ErrorKind::DuplicateKey { key } => assert_eq!(key, "'a'"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_group_by_and_group_by_each() {
    let list = fast_list![1, 2, 3, 4, 5, 6];
    let parity = list.group_by(|i| i % 2 == 0);
    assert_eq!(parity.key_count(), 2);
    assert_eq!(parity.get(&true).unwrap(), &[2, 4, 6]);
    assert_eq!(parity.get(&false).unwrap(), &[1, 3, 5]);

    let divisors = list.group_by_each(|i| {
        let n = *i;
        (1..=n).filter(move |d| n % d == 0)
    });
    assert_eq!(divisors.get(&3).unwrap(), &[3, 6]);
    assert_eq!(divisors.get(&1).unwrap().len(), 6);
    assert!(!divisors.contains_key(&7));
}

#[test]
fn test_select_reject_partition_with_parameter() {
    let list = fast_list![5, 10, 15, 20];
    let threshold = 12;
    assert_eq!(list.select_with(|i, t| i > t, &threshold), [15, 20]);
    assert_eq!(list.reject_with(|i, t| i > t, &threshold), [5, 10]);
    let partition = list.partition_with(|i, t| i > t, &threshold);
    assert_eq!(*partition.selected(), [15, 20]);
    assert_eq!(*partition.rejected(), [5, 10]);
    assert_eq!(list.count_with(|i, t| i < t, &threshold), 2);
    assert!(list.any_satisfy_with(|i, t| i == t, &20));
    assert!(list.all_satisfy_with(|i, t| i % t == 0, &5));
    assert!(list.none_satisfy_with(|i, t| i > t, &20));
    assert_eq!(list.detect_with(|i, t| i > t, &threshold), Some(&15));
    assert_eq!(list.detect_with_if_none(|i, t| i > t, &50, || 0), 0);
    let (selected, rejected) = list.select_and_reject_with(|i, t| i % t == 0, &10);
    assert_eq!(selected, [10, 20]);
    assert_eq!(rejected, [5, 15]);
    assert_eq!(
        list.inject_into_with(0, |acc, i, t| acc + i * t, &2),
        100
    );
    assert_eq!(list.collect_with(|i, t| i / t, &5), [1, 2, 3, 4]);
}

#[test]
fn test_partition_while_stops_at_first_failure() {
    let list = fast_list![2, 4, 5, 6];
    let partition = list.partition_while(|i| i % 2 == 0);
    let (selected, rejected) = partition.into_parts();
    assert_eq!(selected, [2, 4]);
    assert_eq!(rejected, [5, 6]);
}

#[test]
fn test_collect_variants() {
    let list = fast_list![1, 2, 3];
    assert_eq!(list.collect(|i| i.to_string()), ["1", "2", "3"].map(String::from));
    assert_eq!(list.collect_if(|i| *i != 2, |i| i * 100), [100, 300]);
    assert_eq!(list.flat_collect(|i| vec![*i; *i as usize]), [1, 2, 2, 3, 3, 3]);
}

#[test]
fn test_detect_variants() {
    let list = fast_list![4, 8, 15, 16, 23, 42];
    assert_eq!(list.detect(|i| i % 2 == 1), Some(&15));
    assert_eq!(list.detect(|i| *i > 100), None);
    assert_eq!(list.detect_if_none(|i| *i > 100, || -1), -1);
    assert_eq!(list.detect_index(|i| i % 2 == 1), Some(2));
    assert_eq!(list.detect_last_index(|i| i % 2 == 1), Some(4));
    assert_eq!(list.detect_last_index(|i| *i < 0), None);
}

#[test]
fn test_folds_and_extremes() {
    let list = fast_list![3, -1, 4, -1, 5];
    assert_eq!(list.inject_into(String::new(), |acc, i| acc + &i.to_string()), "3-14-15");
    assert_eq!(list.inject_into_i64(10, |acc, i| acc + i64::from(*i)), 20);
    assert_eq!(list.sum_of_i64(|i| i64::from(*i)), 10);
    assert!((list.sum_of_f64(|i| f64::from(*i) * 0.5) - 5.0).abs() < 1e-9);
    assert_eq!(ListIterable::min(&list), Some(&-1));
    assert_eq!(ListIterable::max(&list), Some(&5));
    assert_eq!(list.max_by(|a, b| b.cmp(a)), Some(&-1));
    assert_eq!(list.min_by_key(|i| i32::abs(*i - 4)), Some(&4));
    assert_eq!(list.max_by_key(|i| i32::abs(*i)), Some(&5));

    let empty = FastList::<i32>::new();
    assert_eq!(ListIterable::min(&empty), None);
    assert_eq!(empty.inject_into(7, |acc, i| acc + i), 7);
}

#[test]
fn test_min_prefers_first_of_equals() {
    let list = fast_list![(2, 'a'), (1, 'b'), (1, 'c')];
    assert_eq!(list.min_by_key(|pair| pair.0), Some(&(1, 'b')));
}

#[test]
fn test_traversal_order() {
    let list = fast_list!['a', 'b', 'c'];
    let mut forward = String::new();
    list.for_each(|c| forward.push(*c));
    let mut backward = String::new();
    list.reverse_for_each(|c| backward.push(*c));
    assert_eq!(forward, "abc");
    assert_eq!(backward, "cba");

    let mut indexed = Vec::new();
    list.for_each_with_index(|c, i| indexed.push((i, *c)));
    assert_eq!(indexed, [(0, 'a'), (1, 'b'), (2, 'c')]);

    let mut with = Vec::new();
    list.for_each_with(|c, suffix| with.push(format!("{c}{suffix}")), "!");
    assert_eq!(with, ["a!", "b!", "c!"]);

    let mut ranged = String::new();
    list.for_each_in_range(2, 0, |c| ranged.push(*c)).unwrap();
    assert_eq!(ranged, "cba");
    assert!(list.for_each_in_range(0, 3, |_| {}).is_err());

    let mut tapped = 0;
    assert_eq!(list.tap(|_| tapped += 1).len(), 3);
    assert_eq!(tapped, 3);
}

#[test]
fn test_searching() {
    let list = fast_list![1, 2, 3, 2, 1];
    assert!(list.contains(&3));
    assert!(!list.contains(&9));
    assert!(list.contains_all([&1, &2]));
    assert!(!list.contains_all([&1, &9]));
    assert_eq!(list.index_of(&2), Some(1));
    assert_eq!(list.last_index_of(&2), Some(3));
    assert_eq!(list.index_of(&9), None);
    assert_eq!(list.distinct(), [1, 2, 3]);
    assert!(list.corresponds(&fast_list![2, 4, 6, 4, 2], |a, b| a * 2 == *b));
    assert!(!list.corresponds(&fast_list![2, 4], |a, b| a * 2 == *b));
}

#[test]
fn test_binary_search() {
    let list = fast_list![1, 3, 5, 7];
    assert_eq!(list.binary_search(&5), Ok(2));
    assert_eq!(list.binary_search(&4), Err(2));
    assert_eq!(list.binary_search(&0), Err(0));
    assert_eq!(list.binary_search_by(|candidate| candidate.cmp(&7)), Ok(3));
}

#[test]
fn test_zip() {
    let list = fast_list!['x', 'y', 'z'];
    assert_eq!(list.zip([1, 2]), [('x', 1), ('y', 2)]);
    assert_eq!(list.zip_with_index(), [('x', 0), ('y', 1), ('z', 2)]);
}

#[test]
fn test_conversions() {
    let list = fast_list![3, 1, 2, 1];
    assert_eq!(list.to_sorted_list(), [1, 1, 2, 3]);
    assert_eq!(list.to_sorted_list_by(|a, b| b.cmp(a)), [3, 2, 1, 1]);
    assert_eq!(list.to_sorted_list_by_key(|i| -i), [3, 2, 1, 1]);
    assert_eq!(list.to_reversed(), [1, 2, 1, 3]);
    assert_eq!(crate::SetIterable::len(&list.to_set()), 3);

    let mut stack = list.to_stack();
    assert_eq!(stack.pop().unwrap(), 1);
    assert_eq!(*stack.peek().unwrap(), 2);

    let immutable: ImmutableList<i32> = list.to_immutable();
    assert_eq!(immutable, list);
}

#[test]
fn test_make_string_and_append_string() {
    let list = fast_list![1, 2, 3];
    assert_eq!(list.make_string(", "), "1, 2, 3");
    assert_eq!(FastList::<i32>::new().make_string(", "), "");

    let mut out = String::from(">");
    list.append_string(&mut out, "[", "|", "]").unwrap();
    assert_eq!(out, ">[1|2|3]");
}

#[test]
fn test_hash_code_is_order_sensitive() {
    let a = fast_list![1, 2, 3];
    let b = fast_list![3, 2, 1];
    assert_ne!(a.hash_code(), b.hash_code());
    assert_eq!(a.hash_code(), fast_list![1, 2, 3].hash_code());
    assert_eq!(FastList::<i32>::new().hash_code(), 1);
}

#[test]
fn test_iter_is_double_ended_and_exact() {
    let list = fast_list![1, 2, 3, 4];
    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.collect::<Vec<_>>(), [&2, &3]);
}
