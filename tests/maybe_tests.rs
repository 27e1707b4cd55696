#![cfg(feature = "maybe")]
//! Integration tests for `Maybe`.

use fp_prelude::maybe::{self, Maybe};
use rstest::rstest;

fn to_valid_month(month: i64) -> Maybe<i64> {
    if (1..=12).contains(&month) {
        Maybe::Just(month)
    } else {
        Maybe::Nothing
    }
}

#[rstest]
#[case(Maybe::Just(7), Maybe::Just(7))]
#[case(Maybe::Just(13), Maybe::Nothing)]
#[case(Maybe::Nothing, Maybe::Nothing)]
fn test_and_then_chain(#[case] input: Maybe<i64>, #[case] expected: Maybe<i64>) {
    assert_eq!(maybe::and_then(to_valid_month, input), expected);
}

#[rstest]
fn test_falsy_payloads_are_present() {
    assert_eq!(Maybe::Just(0).map(|n| n + 1), Maybe::Just(1));
    assert_eq!(Maybe::Just(false).map(|b| !b), Maybe::Just(true));
    assert_eq!(Maybe::Just("").map(str::len), Maybe::Just(0));
}

#[rstest]
fn test_map5_requires_every_argument() {
    let sum = |a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e;
    assert_eq!(
        maybe::map5(sum, Maybe::Just(1), Maybe::Just(2), Maybe::Just(3), Maybe::Just(4), Maybe::Just(5)),
        Maybe::Just(15)
    );
    assert_eq!(
        maybe::map5(sum, Maybe::Just(1), Maybe::Just(2), Maybe::Nothing, Maybe::Just(4), Maybe::Just(5)),
        Maybe::Nothing
    );
}

#[rstest]
fn test_fold_selects_branch() {
    let describe = |value: Maybe<i32>| value.fold(|| "none".to_owned(), |n| format!("got {n}"));
    assert_eq!(describe(Maybe::Just(3)), "got 3");
    assert_eq!(describe(Maybe::Nothing), "none");
}

#[rstest]
fn test_iterates_like_option() {
    let collected: Vec<i32> = vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(collected, vec![1, 3]);
}

#[rstest]
fn test_flatten_nested() {
    assert_eq!(Maybe::Just(Maybe::Just(2)).flatten(), Maybe::Just(2));
    assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
}
