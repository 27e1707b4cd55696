#![cfg(all(feature = "serde", feature = "seq"))]
//! Serialization tests for the data types.

use fp_prelude::dict::Dict;
use fp_prelude::maybe::Maybe;
use fp_prelude::ord::Value;
use fp_prelude::seq::Seq;
use rstest::rstest;

#[rstest]
fn test_maybe_serializes_as_option() {
    assert_eq!(serde_json::to_string(&Maybe::Just(1)).unwrap(), "1");
    assert_eq!(serde_json::to_string(&Maybe::<i32>::Nothing).unwrap(), "null");
    let parsed: Maybe<i32> = serde_json::from_str("null").unwrap();
    assert_eq!(parsed, Maybe::Nothing);
}

#[rstest]
fn test_dict_serializes_as_sorted_object() {
    let dict = Dict::from_list(vec![("b", 2), ("a", 1)]);
    assert_eq!(serde_json::to_string(&dict).unwrap(), r#"{"a":1,"b":2}"#);
}

#[rstest]
fn test_seq_deserialization_sorts_and_dedupes() {
    let sequence: Seq<i32> = serde_json::from_str("[3, 1, 3, 2]").unwrap();
    assert_eq!(sequence.as_slice(), &[1, 2, 3]);
    assert_eq!(serde_json::to_string(&sequence).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_value_roundtrip() {
    let value = Value::array(vec![
        Value::from(1),
        Value::tuple("a", true),
        Value::just(Value::from(vec![2.5])),
        Value::nothing(),
        Value::from(Dict::singleton("key", "value")),
    ]);
    let json = serde_json::to_string(&value).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}
