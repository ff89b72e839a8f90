//! Unit tests for Bag.
//!
//! These tests exercise every public operation of `Bag`, including the
//! clamp-and-delete removal policy and the distinct-element `count`.

use rstest::rstest;
use tallyset::{Bag, Set, bag};

fn bag_of(counts: &[(&'static str, usize)]) -> Bag<&'static str> {
    counts.iter().copied().collect()
}

// =============================================================================
// Add / Contains
// =============================================================================

#[rstest]
fn test_add_returns_total_count() {
    let mut bag = Bag::new();
    assert_eq!(bag.add("cat", 1), 1);
    assert_eq!(bag.add("cow", 2), 2);

    let items = bag.items();
    assert_eq!(items.iter().filter(|item| **item == "cat").count(), 1);
    assert_eq!(items.iter().filter(|item| **item == "cow").count(), 2);

    assert_eq!(bag.contains("cat"), 1);
    assert_eq!(bag.contains("cow"), 2);
    assert_eq!(bag.contains("martian"), 0);
}

#[rstest]
fn test_add_one_twice_counts_two() {
    let mut bag = Bag::new();
    bag.add('x', 1);
    bag.add('x', 1);
    assert_eq!(bag.contains(&'x'), 2);
}

#[rstest]
fn test_add_negative_reduces_count() {
    let mut bag = bag_of(&[("cat", 4)]);
    assert_eq!(bag.add("cat", -1), 3);
    assert_eq!(bag.add("cat", -3), 0);
    assert_eq!(bag.count(), 0);
}

#[rstest]
fn test_add_all_adds_one_each() {
    let mut bag = Bag::new();
    bag.add_all(["cat", "cat", "cow", "cow", "cow"]);
    assert_eq!(bag.contains("cat"), 2);
    assert_eq!(bag.contains("cow"), 3);
    assert_eq!(bag.count(), 2);
    assert_eq!(bag.total(), 5);
}

// =============================================================================
// Remove
// =============================================================================

#[rstest]
fn test_remove_sequence() {
    let mut bag = Bag::new();
    assert_eq!(bag.add("cat", 3), 3);
    assert_eq!(bag.remove("cat", 1), 2);
    assert_eq!(bag.remove("cat", 2), 0);
    assert_eq!(bag.remove("cat", 3), 0);
    assert!(bag.is_empty());
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(usize::MAX)]
fn test_remove_at_least_count_deletes(#[case] copies: usize) {
    let mut bag = bag_of(&[("cat", 3), ("dog", 1)]);
    assert_eq!(bag.remove("cat", copies), 0);
    assert_eq!(bag.contains("cat"), 0);
    assert_eq!(bag.count(), 1);
    assert_eq!(bag.items(), vec!["dog"]);
}

#[rstest]
fn test_remove_zero_copies_keeps_count() {
    let mut bag = bag_of(&[("cat", 2)]);
    assert_eq!(bag.remove("cat", 0), 2);
}

// =============================================================================
// Items / Count
// =============================================================================

#[rstest]
fn test_items_flat_and_sorted() {
    let bag = bag_of(&[("pig", 1), ("cat", 2), ("dog", 3)]);
    assert_eq!(bag.items(), vec!["cat", "cat", "dog", "dog", "dog", "pig"]);
}

#[rstest]
fn test_count_is_distinct_elements() {
    let bag = bag![5, 5, 5, 7];
    assert_eq!(bag.count(), 2);
    assert_eq!(bag.total(), 4);
}

// =============================================================================
// Algebra
// =============================================================================

#[rstest]
fn test_intersection_uses_minimum() {
    let mut bag1 = Bag::new();
    bag1.add_all(["cat", "cat", "cow", "cow", "cow"]);
    let mut bag2 = Bag::new();
    bag2.add_all(["cat", "cow", "cow", "pig"]);

    let intersection = bag1.intersection(&bag2);
    assert_eq!(intersection.contains("cat"), 1);
    assert_eq!(intersection.contains("cow"), 2);
    assert_eq!(intersection.contains("pig"), 0);
    assert_eq!(intersection.count(), 2);
}

#[rstest]
fn test_union_scenario() {
    let bag1 = bag_of(&[("cat", 2), ("cow", 3), ("chicken", 1)]);
    let bag2 = bag_of(&[("cat", 1), ("martian", 1), ("cow", 1), ("pig", 2)]);
    let union = bag1.union(&bag2);

    assert_eq!(union.contains("cat"), 3);
    assert_eq!(union.contains("cow"), 4);
    assert_eq!(union.contains("pig"), 2);
    assert_eq!(union.contains("chicken"), 1);
    assert_eq!(union.contains("martian"), 1);
}

#[rstest]
fn test_difference_scenario() {
    let bag1 = bag_of(&[("cat", 2), ("dog", 1), ("pig", 1)]);
    let bag2 = bag_of(&[("cat", 1), ("dog", 1), ("elephant", 1)]);

    assert_eq!(bag1.difference(&bag2), bag_of(&[("cat", 1), ("pig", 1)]));
    assert_eq!(bag2.difference(&bag1), bag_of(&[("elephant", 1)]));
}

#[rstest]
fn test_complement_scenario() {
    let bag1 = bag_of(&[("cat", 2), ("dog", 1), ("pig", 1)]);
    let bag2 = bag_of(&[("cat", 1), ("dog", 1), ("elephant", 1)]);
    let expected = bag_of(&[("cat", 1), ("pig", 1), ("elephant", 1)]);

    assert_eq!(bag1.complement(&bag2), expected);
    assert_eq!(bag2.complement(&bag1), expected);
}

#[rstest]
fn test_operations_leave_operands_untouched() {
    let bag1 = bag_of(&[("cat", 2)]);
    let bag2 = bag_of(&[("cat", 1), ("dog", 1)]);
    let _ = bag1.union(&bag2);
    let _ = bag1.intersection(&bag2);
    let _ = bag1.difference(&bag2);
    let _ = bag1.complement(&bag2);

    assert_eq!(bag1, bag_of(&[("cat", 2)]));
    assert_eq!(bag2, bag_of(&[("cat", 1), ("dog", 1)]));
}

#[rstest]
fn test_equals() {
    let bag1 = bag!["a", "b", "b"];
    let bag2 = bag!["b", "a", "b"];
    let bag3 = bag!["a", "b"];
    assert!(bag1.equals(&bag2));
    assert!(!bag1.equals(&bag3));
    assert!(!bag3.equals(&bag1));
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

#[rstest]
fn test_distinct_and_from_set() {
    let bag = bag!["x", "y", "y"];
    let set = bag.distinct();
    assert_eq!(set, Set::of(["x", "y"]));
    assert_eq!(Bag::from(set).total(), 2);
}

#[rstest]
fn test_iter_yields_pairs() {
    let bag = bag_of(&[("cat", 2), ("dog", 1)]);
    let mut pairs: Vec<(&str, usize)> = bag.iter().map(|(element, count)| (*element, count)).collect();
    pairs.sort_unstable();
    assert_eq!(pairs, vec![("cat", 2), ("dog", 1)]);
}

#[rstest]
fn test_into_iter_matches_items() {
    let bag = bag![3, 1, 3];
    let items = bag.items();
    let collected: Vec<i32> = bag.into_iter().collect();
    assert_eq!(collected, items);
}
