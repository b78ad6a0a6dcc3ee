use weft_common::ErrorKind;

use crate::cursor::BidirectionalCursor;
use crate::list_iterable::ListIterable;
use crate::mutable_list::{MutableList, OrderedMutableContainer};

#[test]
fn test_view_reads_through_offset() {
    let mut list = fast_list![10, 20, 30, 40, 50];
    let view = list.sub_list(1, 4).unwrap();
    assert_eq!(view.len(), 3);
    assert_eq!(view.offset(), 1);
    assert_eq!(*view.get(0).unwrap(), 20);
    assert_eq!(*view.get(2).unwrap(), 40);
    assert!(view.get(3).unwrap_err().is_index_out_of_range());
    assert_eq!(view, [20, 30, 40]);
}

#[test]
fn test_remove_through_view_updates_backing() {
    let mut list = fast_list![10, 20, 30, 40, 50];
    {
        let mut view = list.sub_list(1, 4).unwrap();
        assert_eq!(view.remove_at(0).unwrap(), 20);
        assert_eq!(view, [30, 40]);
        assert_eq!(*view.backing(), [10, 30, 40, 50]);
    }
    assert_eq!(list, [10, 30, 40, 50]);
}

#[test]
fn test_insert_and_set_through_view() {
    let mut list = fast_list![1, 2, 3, 4];
    {
        let mut view = list.sub_list(1, 3).unwrap();
        view.insert(2, 99).unwrap();
        assert_eq!(view, [2, 3, 99]);
        assert!(view.insert(4, 0).unwrap_err().is_index_out_of_range());
        assert_eq!(view.set(0, 20).unwrap(), 2);
        view.append(100).unwrap();
        assert_eq!(view.len(), 4);
    }
    assert_eq!(list, [1, 20, 3, 99, 100, 4]);
}

#[test]
fn test_view_bounds_are_validated() {
    let mut list = fast_list!['a', 'b', 'c'];
    let err = list.sub_list(2, 1).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::InvalidRange { from: 2, to: 1 }
    ));
    assert!(list.sub_list(0, 4).unwrap_err().is_index_out_of_range());
    assert!(list.sub_list(3, 3).unwrap().is_empty());
}

#[test]
fn test_nested_view_is_bounded_by_parent() {
    let mut list = (0..10).collect::<crate::FastList<i32>>();
    {
        let mut outer = list.sub_list(2, 8).unwrap();
        assert!(outer.sub_list(0, 7).unwrap_err().is_index_out_of_range());
        {
            let mut inner = outer.sub_list(1, 3).unwrap();
            assert_eq!(inner, [3, 4]);
            inner.remove_at(1).unwrap();
            inner.append(-1).unwrap();
            assert_eq!(inner, [3, -1]);
        }
        assert_eq!(outer, [2, 3, -1, 5, 6, 7]);
    }
    assert_eq!(list, [0, 1, 2, 3, -1, 5, 6, 7, 8, 9]);
}

#[test]
fn test_insert_all_grows_view_by_inserted_count() {
    let mut list = fast_list![1, 2, 3];
    {
        let mut view = list.sub_list(0, 2).unwrap();
        assert!(view.insert_all(1, [7, 8]).unwrap());
        assert_eq!(view, [1, 7, 8, 2]);
        assert!(!view.append_all(Vec::new()).unwrap());
        assert_eq!(view.len(), 4);
    }
    assert_eq!(list, [1, 7, 8, 2, 3]);
}

#[test]
fn test_clear_removes_only_the_window() {
    let mut list = fast_list![1, 2, 3, 4, 5];
    {
        let mut view = list.sub_list(1, 4).unwrap();
        view.clear().unwrap();
        assert!(view.is_empty());
    }
    assert_eq!(list, [1, 5]);
}

#[test]
fn test_cursor_is_confined_to_view() {
    let mut list = fast_list![10, 20, 30, 40, 50];
    {
        let mut view = list.sub_list(1, 4).unwrap();
        let mut cursor = view.cursor(0).unwrap();
        assert!(!cursor.has_previous());
        assert!(matches!(
            cursor.previous().unwrap_err().kind(),
            ErrorKind::NoSuchElement
        ));
        assert_eq!(*cursor.next().unwrap(), 20);
        assert_eq!(*cursor.next().unwrap(), 30);
        cursor.remove().unwrap();
        cursor.add(35).unwrap();
        assert_eq!(*cursor.next().unwrap(), 40);
        assert!(!cursor.has_next());
        assert!(cursor.next().is_err());
        assert_eq!(cursor.next_index(), 3);
        assert_eq!(cursor.previous_index(), Some(2));
    }
    assert_eq!(list, [10, 20, 35, 40, 50]);
}

#[test]
fn test_cursor_start_position_is_checked() {
    let mut list = fast_list![1, 2, 3];
    let mut view = list.sub_list(0, 2).unwrap();
    assert!(view.cursor(2).is_ok());
    assert!(view.cursor(3).is_err());
}

#[test]
fn test_sort_and_reverse_stay_inside_view() {
    let mut list = fast_list![9, 5, 3, 4, 1, 0];
    {
        let mut view = list.sub_list(1, 5).unwrap();
        view.sort_this().unwrap();
        assert_eq!(view, [1, 3, 4, 5]);
        view.reverse_this().unwrap();
    }
    assert_eq!(list, [9, 5, 4, 3, 1, 0]);
}

#[test]
fn test_remove_if_and_builders_on_view() {
    let mut list = (1..=8).collect::<crate::FastList<i32>>();
    {
        let mut view = list.sub_list(2, 6).unwrap();
        assert!(view.remove_if(|i| i % 2 == 0).unwrap());
        assert_eq!(view, [3, 5]);
        assert!(view.remove_item(&5).unwrap());
        assert!(!view.remove_item(&5).unwrap());
    }
    assert_eq!(list, [1, 2, 3, 7, 8]);
}

#[test]
fn test_view_transforms_produce_independent_lists() {
    let mut list = fast_list![1, 2, 3, 4, 5, 6];
    let view = list.sub_list(1, 5).unwrap();
    assert_eq!(view.select(|i| i % 2 == 0), [2, 4]);
    assert_eq!(view.reject(|i| i % 2 == 0), [3, 5]);
    assert_eq!(view.collect(|i| i * 10), [20, 30, 40, 50]);
    assert_eq!(view.detect(|i| *i > 3), Some(&4));
    assert_eq!(view.inject_into(0, |acc, i| acc + i), 14);
    assert_eq!(view.take(2), [2, 3]);
    assert_eq!(view.drop(3), [5]);
    assert_eq!(view.to_reversed(), [5, 4, 3, 2]);
    assert_eq!(view.index_of(&4), Some(2));
    assert_eq!(view.make_string(", "), "2, 3, 4, 5");

    let mut copy = view.to_list();
    copy.append(7).unwrap();
    assert_eq!(view.len(), 4);
    assert_eq!(copy.len(), 5);
}

#[test]
fn test_view_equals_and_hashes_like_a_list() {
    let mut list = fast_list![1, 2, 3, 4];
    let expected = fast_list![2, 3];
    let view = list.sub_list(1, 3).unwrap();
    assert!(view.equals(&expected));
    assert_eq!(view.hash_code(), expected.hash_code());
    assert_eq!(format!("{view:?}"), "[2, 3]");
}
