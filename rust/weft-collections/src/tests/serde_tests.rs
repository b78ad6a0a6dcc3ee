use crate::mutable_list::MutableList;
use crate::set_iterable::SetIterable;
use crate::{ArrayStack, FastList, ImmutableList, ImmutableSet, UnifiedSet, unified_set};

#[test]
fn test_lists_serialize_as_plain_sequences() {
    let list = fast_list![1, 2, 3];
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");

    let immutable = ImmutableList::from_vec(vec![1, 2, 3, 4]).slice(1..3).unwrap();
    assert_eq!(serde_json::to_string(&immutable).unwrap(), "[2,3]");

    let decoded: FastList<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
    assert_eq!(decoded, ["a".to_string(), "b".to_string()]);
    let decoded: ImmutableList<u8> = serde_json::from_str("[7]").unwrap();
    assert_eq!(decoded, [7]);
}

#[test]
fn test_views_serialize_their_logical_contents() {
    let mut list = fast_list![10, 20, 30, 40];
    {
        let view = list.sub_list(1, 3).unwrap();
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, "[20,30]");
        let restored: FastList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, view);
    }

    let unmodifiable = list.into_unmodifiable();
    assert_eq!(
        serde_json::to_string(&unmodifiable).unwrap(),
        "[10,20,30,40]"
    );
}

#[test]
fn test_sets_round_trip_through_json() {
    let set = unified_set![1, 2, 3];
    let json = serde_json::to_string(&set).unwrap();
    let restored: UnifiedSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, set);

    let immutable: ImmutableSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(immutable.len(), 3);

    let json = serde_json::to_string(&set.into_unmodifiable()).unwrap();
    let restored: UnifiedSet<i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.contains(&2));
}

#[test]
fn test_duplicate_elements_collapse_when_decoding_sets() {
    let set: UnifiedSet<i32> = serde_json::from_str("[1,1,2]").unwrap();
    assert_eq!(set, unified_set![1, 2]);
}

#[test]
fn test_stack_serializes_top_first() {
    let mut stack = ArrayStack::new();
    stack.push("bottom");
    stack.push("top");
    assert_eq!(
        serde_json::to_string(&stack).unwrap(),
        r#"["top","bottom"]"#
    );
}
