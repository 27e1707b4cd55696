#![cfg(feature = "text")]
//! Integration tests for the string helpers.

use fp_prelude::maybe::Maybe;
use fp_prelude::text;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("0", Maybe::Just(0))]
#[case("-12", Maybe::Just(-12))]
#[case("1e3", Maybe::Just(1000))]
#[case("0e400", Maybe::Just(0))]
#[case("", Maybe::Nothing)]
#[case("12abc", Maybe::Nothing)]
#[case(" 12", Maybe::Nothing)]
fn test_to_int(#[case] input: &str, #[case] expected: Maybe<i64>) {
    assert_eq!(text::to_int(input), expected);
}

#[rstest]
#[case("0.5", Maybe::Just(0.5))]
#[case(".5", Maybe::Just(0.5))]
#[case("-1e-2", Maybe::Just(-0.01))]
#[case("1.", Maybe::Nothing)]
#[case("inf", Maybe::Nothing)]
fn test_to_float(#[case] input: &str, #[case] expected: Maybe<f64>) {
    assert_eq!(text::to_float(input), expected);
}

#[rstest]
fn test_counts_characters_not_bytes() {
    assert_eq!(text::length("héllo"), 5);
    assert_eq!(text::left(2, "héllo"), "hé");
    assert_eq!(text::slice(1, 3, "日本語です"), "本語");
}

#[rstest]
#[case(0, "Scully", "")]
#[case(3, "Scully", "lly")]
#[case(10, "Scully", "Scully")]
fn test_right(#[case] count: usize, #[case] input: &str, #[case] expected: &str) {
    assert_eq!(text::right(count, input), expected);
}

#[rstest]
fn test_cons_uncons() {
    assert_eq!(text::cons('T', "he truth is out there"), "The truth is out there");
    assert_eq!(text::uncons("abc"), Maybe::Just(('a', "bc".to_owned())));
    assert_eq!(text::uncons(""), Maybe::Nothing);
}

#[rstest]
fn test_pad_variants() {
    assert_eq!(text::pad_left(3, "0", "7"), "0007");
    assert_eq!(text::pad_right(2, ".", "end"), "end..");
}

#[rstest]
fn test_character_folds() {
    let reversed = text::foldl(|character, mut acc: String| {
        acc.insert(0, character);
        acc
    }, String::new(), "abc");
    assert_eq!(reversed, "cba");
    assert_eq!(text::filter(char::is_alphabetic, "R2-D2"), "RD");
    assert!(text::any(char::is_numeric, "R2-D2"));
    assert!(!text::all(char::is_numeric, "R2-D2"));
}

proptest! {
    #[test]
    fn prop_split_join_roundtrip(parts in prop::collection::vec("[a-z]{0,5}", 1..6)) {
        let joined = text::join(",", &parts);
        prop_assert_eq!(text::split(",", &joined), parts);
    }

    #[test]
    fn prop_reverse_is_involution(input in "\\PC{0,20}") {
        prop_assert_eq!(text::reverse(&text::reverse(&input)), input);
    }

    #[test]
    fn prop_from_number_to_int_roundtrip(number in any::<i64>()) {
        prop_assert_eq!(text::to_int(&text::from_number(number)), Maybe::Just(number));
    }

    #[test]
    fn prop_left_plus_drop_left_is_whole(input in "\\PC{0,20}", count in 0_usize..25) {
        prop_assert_eq!(text::left(count, &input) + &text::drop_left(count, &input), input);
    }
}
