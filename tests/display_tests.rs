//! Integration tests for Display and Debug implementations.
//!
//! Rendering is part of the observable contract: ascending order, `", "`
//! separators and `[]` for an empty container, whatever the hasher.

use rstest::rstest;
use tallyset::{Bag, OrderedFloat, Set, bag, set};

// =============================================================================
// Set Display Tests
// =============================================================================

#[rstest]
fn test_set_empty_display() {
    let set: Set<String> = Set::new();
    assert_eq!(format!("{set}"), "[]");
}

#[rstest]
fn test_set_strings_display() {
    let set = set!["sheepdog", "cat", "parakeet", "goldfish"];
    assert_eq!(format!("{set}"), "[cat, goldfish, parakeet, sheepdog]");
}

#[rstest]
fn test_set_integers_display() {
    let set = set![10_i16, -3, 7];
    assert_eq!(format!("{set}"), "[-3, 7, 10]");
}

#[rstest]
fn test_set_floats_display() {
    let set = set![OrderedFloat(3.5_f32), OrderedFloat(-1.5), OrderedFloat(0.25)];
    assert_eq!(format!("{set}"), "[-1.5, 0.25, 3.5]");
}

#[rstest]
fn test_set_display_after_mutation() {
    let mut set = set![1, 2, 3];
    set.remove(&2);
    set.add(0);
    assert_eq!(set.to_string(), "[0, 1, 3]");
}

#[rstest]
fn test_set_debug() {
    let set = set!["b", "a"];
    assert_eq!(format!("{set:?}"), r#"["a", "b"]"#);
}

// =============================================================================
// Bag Display Tests
// =============================================================================

#[rstest]
fn test_bag_empty_display() {
    let bag: Bag<i32> = Bag::new();
    assert_eq!(format!("{bag}"), "[]");
}

#[rstest]
fn test_bag_display_repeats_elements() {
    let bag = bag!["dog", "cat", "dog", "cat", "cat"];
    assert_eq!(format!("{bag}"), "[cat, cat, cat, dog, dog]");
}

#[rstest]
fn test_bag_display_matches_items() {
    let bag = bag![9_u32, 1, 9, 4];
    let joined = bag
        .items()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    assert_eq!(bag.to_string(), format!("[{joined}]"));
}

#[rstest]
fn test_bag_debug() {
    let bag = bag![2, 1, 2];
    assert_eq!(format!("{bag:?}"), "[1, 2, 2]");
}

#[rstest]
fn test_display_is_stable_across_clones() {
    let bag = bag!["x", "y", "z", "y"];
    let copy = bag.clone();
    assert_eq!(bag.to_string(), copy.to_string());
}
