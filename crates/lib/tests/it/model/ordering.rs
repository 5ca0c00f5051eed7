//! Tests for the shared segment-wise ordering of paths and keys.

use std::collections::{BTreeSet, HashSet};

use docmodel::FieldPath;

use crate::helpers::*;

#[test]
fn test_field_path_prefix_orders_first() {
    let a = field(&["a"]);
    let ab = field(&["a", "b"]);
    let b = field(&["b"]);
    assert!(a < ab && ab < b);

    let mut sorted = vec![b.clone(), ab.clone(), a.clone()];
    sorted.sort();
    assert_eq!(sorted, vec![a, ab, b]);
}

#[test]
fn test_document_key_prefix_orders_first() {
    let a = key(&["a", "1"]);
    let ab = key(&["a", "1", "b", "1"]);
    let b = key(&["b", "1"]);
    assert!(a < ab && ab < b);

    let set: BTreeSet<_> = [b.clone(), a.clone(), ab.clone()].into_iter().collect();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![a, ab, b]);
}

#[test]
fn test_order_is_not_joined_text_order() {
    // "a.b/1" < "a/c" as text, but ["a", "c"] sorts first segment-wise.
    let dotted = key(&["a.b", "1"]);
    let nested = key(&["a", "c"]);
    assert!(nested < dotted);

    let quoted = FieldPath::parse("`a.b`").unwrap();
    let split = FieldPath::parse("a.c").unwrap();
    assert!(split < quoted);
}

#[test]
fn test_parsed_and_built_paths_are_interchangeable() {
    let parsed = FieldPath::parse("a.`b.c`").unwrap();
    let built = field(&["a", "b.c"]);
    assert_eq!(parsed, built);

    let set: HashSet<_> = [parsed, built].into_iter().collect();
    assert_eq!(set.len(), 1);
}
