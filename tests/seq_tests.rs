#![cfg(feature = "seq")]
//! Integration tests for `Seq`.

use std::io;
use std::sync::{Arc, Mutex};

use fp_prelude::ord::{Orderable, Value};
use fp_prelude::seq::{self, Seq};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn test_from_list_sorts_and_dedupes_arrays() {
    let sequence = Seq::from_list(vec![vec![1], vec![1], vec![2, 1], vec![], vec![3], vec![]]);
    assert_eq!(sequence.as_slice(), &[vec![], vec![1], vec![2, 1], vec![3]]);
}

#[rstest]
fn test_order_equal_but_distinct_elements_survive() {
    let sequence = Seq::from_list(vec![(1, "b"), (1, "a"), (1, "b")]);
    assert_eq!(sequence.as_slice(), &[(1, "b"), (1, "a")]);
}

#[rstest]
fn test_text_uses_locale_order() {
    let sequence = Seq::from_list(vec!["b", "B", "a", "A"]);
    assert_eq!(sequence.as_slice(), &["a", "A", "b", "B"]);
}

#[rstest]
fn test_insert_leaves_original_untouched() {
    let original = Seq::from_list(vec![1, 3]);
    let inserted = seq::insert(2, &original);
    assert_eq!(inserted.as_slice(), &[1, 2, 3]);
    assert_eq!(original.as_slice(), &[1, 3]);
}

#[rstest]
fn test_equals_ignores_input_order() {
    let left = Seq::from_list(vec![vec![1, 2], vec![3]]);
    let right = Seq::from_list(vec![vec![3], vec![1, 2], vec![3]]);
    assert!(seq::equals(&left, &right));
}

#[rstest]
fn test_mixed_kinds_sort_by_rank() {
    let sequence = Seq::from_list(vec![Value::from(true), Value::from("a"), Value::from(2)]);
    assert_eq!(
        sequence.as_slice(),
        &[Value::from(2), Value::from("a"), Value::from(true)]
    );
}

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn test_sorting_incomparable_values_is_logged() {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _ = Seq::from_list(vec![Value::from(1), Value::from("a")]);
    });

    let logged = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("sorted incomparable elements by kind rank"));
}

#[rstest]
fn test_sorting_comparable_values_is_silent() {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let _ = Seq::from_list(vec![Value::from(2), Value::from(1)]);
    });

    assert!(output.0.lock().unwrap().is_empty());
}

/// Short arrays over a tiny alphabet, so equal heads with different tails
/// are common.
fn nested_array() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0_i32..3, 0..4)
}

fn any_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        (0_i32..3).prop_map(Value::from),
        prop::sample::select(vec!["a", "A", "b"]).prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::array),
            (inner.clone(), inner.clone()).prop_map(|(first, second)| Value::tuple(first, second)),
            inner.prop_map(Value::just),
            Just(Value::nothing()),
        ]
    })
}

fn occurrences<T: PartialEq>(sequence: &Seq<T>, element: &T) -> usize {
    sequence.iter().filter(|candidate| *candidate == element).count()
}

fn assert_sorted_and_unique<T: Orderable + PartialEq + std::fmt::Debug>(
    sequence: &Seq<T>,
) -> Result<(), TestCaseError> {
    for window in sequence.as_slice().windows(2) {
        prop_assert!(window[0].total_order(&window[1]).is_le(), "out of order: {:?}", window);
    }
    for (index, left) in sequence.iter().enumerate() {
        for right in sequence.iter().skip(index + 1) {
            prop_assert!(left != right, "duplicate element {:?}", left);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_from_list_is_sorted_and_unique(values in prop::collection::vec(-50_i32..50, 0..40)) {
        let sequence = Seq::from_list(values);
        for window in sequence.as_slice().windows(2) {
            prop_assert!(window[0].total_order(&window[1]).is_lt());
        }
    }

    #[test]
    fn prop_from_list_is_idempotent(values in prop::collection::vec(-50_i32..50, 0..40)) {
        let once = Seq::from_list(values);
        let twice = Seq::from_list(once.to_vec());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_insert_then_contains(values in prop::collection::vec(-50_i32..50, 0..40), element in -50_i32..50) {
        let sequence = Seq::from_list(values);
        let inserted = sequence.insert(element);
        prop_assert!(inserted.contains(&element));
        prop_assert!(inserted.len() == sequence.len() || inserted.len() == sequence.len() + 1);
    }

    #[test]
    fn prop_nested_arrays_keep_invariant(values in prop::collection::vec(nested_array(), 0..20)) {
        assert_sorted_and_unique(&Seq::from_list(values))?;
    }

    #[test]
    fn prop_nested_arrays_are_idempotent(values in prop::collection::vec(nested_array(), 0..20)) {
        let once = Seq::from_list(values);
        prop_assert_eq!(Seq::from_list(once.to_vec()), once);
    }

    #[test]
    fn prop_nested_arrays_insert_exactly_once(values in prop::collection::vec(nested_array(), 0..20), element in nested_array()) {
        let inserted = Seq::from_list(values).insert(element.clone());
        prop_assert_eq!(occurrences(&inserted, &element), 1);
        assert_sorted_and_unique(&inserted)?;
    }

    #[test]
    fn prop_values_keep_invariant(values in prop::collection::vec(any_value(), 0..20)) {
        let sequence = Seq::from_list(values.clone());
        assert_sorted_and_unique(&sequence)?;
        for value in &values {
            prop_assert!(sequence.contains(value));
        }
    }

    #[test]
    fn prop_values_are_idempotent(values in prop::collection::vec(any_value(), 0..20)) {
        let once = Seq::from_list(values);
        prop_assert_eq!(Seq::from_list(once.to_vec()), once);
    }

    #[test]
    fn prop_values_insert_exactly_once(values in prop::collection::vec(any_value(), 0..20), element in any_value()) {
        let inserted = Seq::from_list(values).insert(element.clone());
        prop_assert_eq!(occurrences(&inserted, &element), 1);
        assert_sorted_and_unique(&inserted)?;
    }

    #[test]
    fn prop_contains_matches_input(values in prop::collection::vec(-50_i32..50, 0..40), lookup in -50_i32..50) {
        let sequence = Seq::from_list(values.clone());
        prop_assert_eq!(sequence.contains(&lookup), values.contains(&lookup));
    }
}
