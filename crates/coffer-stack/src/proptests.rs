//! Property-based tests for the stack and container laws.

use coffer_container::{all_items_match, Container, SuffixableContainer};
use proptest::prelude::*;

use crate::Stack;

// Strategy for generating element sequences
fn elements() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000i64, 0..64)
}

// Strategy for generating a sequence together with a valid suffix size
fn elements_and_size() -> impl Strategy<Value = (Vec<i64>, usize)> {
    elements().prop_flat_map(|v| {
        let n = v.len();
        (Just(v), 0..=n)
    })
}

proptest! {
    // LIFO laws

    #[test]
    fn pops_come_out_in_reverse_push_order(items in elements()) {
        let mut stack = Stack::new();
        for &item in &items {
            stack.push(item);
        }

        let mut popped = Vec::with_capacity(items.len());
        while !stack.is_empty() {
            popped.push(stack.pop());
        }

        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn push_increments_count_and_sets_top(items in elements(), extra in any::<i64>()) {
        let mut stack: Stack<i64> = items.into();
        let before = stack.count();

        stack.push(extra);
        prop_assert_eq!(stack.count(), before + 1);
        prop_assert_eq!(stack.top_item(), Some(&extra));
        prop_assert!(stack.is_top(&extra));
    }

    // Suffix laws

    #[test]
    fn suffix_is_the_trailing_run((items, size) in elements_and_size()) {
        let stack: Stack<i64> = items.clone().into();
        let suffix = stack.suffix(size);

        prop_assert_eq!(suffix.count(), size);
        let tail = &items[items.len() - size..];
        for (i, expected) in tail.iter().enumerate() {
            prop_assert_eq!(suffix.at(i), expected);
        }

        // Extraction never mutates the source.
        prop_assert_eq!(stack.count(), items.len());
        prop_assert_eq!(stack.top_item(), items.last());
    }

    #[test]
    fn full_suffix_equals_the_source(items in elements()) {
        let stack: Stack<i64> = items.into();
        prop_assert!(all_items_match(&stack.suffix(stack.count()), &stack));
    }

    // Matching laws

    #[test]
    fn matching_is_reflexive(items in elements()) {
        let stack: Stack<i64> = items.into();
        prop_assert!(all_items_match(&stack, &stack));
    }

    #[test]
    fn matching_crosses_container_shapes(items in elements()) {
        let stack: Stack<i64> = items.clone().into();
        prop_assert!(all_items_match(&stack, &items));
        prop_assert!(all_items_match(&items, &stack));
    }

    #[test]
    fn length_mismatch_never_matches(items in elements(), extra in any::<i64>()) {
        let stack: Stack<i64> = items.clone().into();
        let mut longer = stack.clone();
        longer.push(extra);

        prop_assert!(!all_items_match(&stack, &longer));
        prop_assert!(!all_items_match(&longer, &stack));
    }

    // Value semantics

    #[test]
    fn clones_never_alias(items in elements(), extra in any::<i64>()) {
        let original: Stack<i64> = items.clone().into();
        let mut copy = original.clone();

        copy.push(extra);
        prop_assert_eq!(original.count(), items.len());
        prop_assert!(all_items_match(&original, &items));
    }
}
