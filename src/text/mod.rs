//! String helpers.
//!
//! Functions take their parameters first and the string last, so they read
//! well inside [`pipe!`](crate::pipe) and [`flow!`](crate::flow). Every
//! length, index and count is measured in `char`s, not bytes. Operations
//! that can fail return [`Maybe`].
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::maybe::Maybe;
//! use fp_prelude::text;
//!
//! assert_eq!(text::reverse("stressed"), "desserts");
//! assert_eq!(text::slice(-6, -1, "snakes on a plane!"), "plane");
//! assert_eq!(text::to_int("42"), Maybe::Just(42));
//! assert_eq!(text::to_int("4.2"), Maybe::Nothing);
//! ```

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

use crate::maybe::Maybe;

static FLOAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$").expect("float pattern is valid")
});

static INT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<mantissa>[-+]?[0-9]+)([eE]\+?(?P<exponent>[0-9]+))?$")
        .expect("int pattern is valid")
});

// =============================================================================
// Basics
// =============================================================================

/// Returns `true` for the empty string.
#[inline]
#[must_use]
pub const fn is_empty(text: &str) -> bool {
    text.is_empty()
}

/// Number of characters in `text`.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::length("innumerable"), 11);
/// assert_eq!(text::length("日本"), 2);
/// ```
#[inline]
#[must_use]
pub fn length(text: &str) -> usize {
    text.chars().count()
}

/// Reverses the characters of `text`.
#[must_use]
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Repeats `text` `times` times.
#[must_use]
pub fn repeat(times: usize, text: &str) -> String {
    text.repeat(times)
}

// =============================================================================
// Building and Splitting
// =============================================================================

/// Joins two strings.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::append("butter", "fly"), "butterfly");
/// ```
#[must_use]
pub fn append(left: &str, right: &str) -> String {
    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    joined
}

/// Concatenates many strings into one.
#[must_use]
pub fn concat<S: AsRef<str>>(strings: &[S]) -> String {
    strings.iter().map(AsRef::as_ref).collect()
}

/// Splits `text` on every occurrence of `separator`.
///
/// An empty separator splits into single characters.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::split(",", "cat,dog,cow"), vec!["cat", "dog", "cow"]);
/// assert_eq!(text::split("", "abc"), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split(separator: &str, text: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split(separator).map(str::to_owned).collect()
}

/// Puts many strings together with `separator` between them.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::join("a", &["H", "w", "ii", "n"]), "Hawaiian");
/// assert_eq!(text::join("/", &["home", "user", "Desktop"]), "home/user/Desktop");
/// ```
#[must_use]
pub fn join<S: AsRef<str>>(separator: &str, strings: &[S]) -> String {
    let mut joined = String::new();
    for (index, string) in strings.iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        joined.push_str(string.as_ref());
    }
    joined
}

/// Breaks `text` into words, splitting on runs of whitespace.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::words("How are \t you? \n Good?"), vec!["How", "are", "you?", "Good?"]);
/// ```
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Breaks `text` into lines, splitting on `'\n'`.
#[must_use]
pub fn lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

// =============================================================================
// Substrings
// =============================================================================

/// Resolves a possibly negative index against `length`.
fn resolve_index(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(length)
    }
}

/// Takes the characters from `start` up to, not including, `end`.
///
/// Negative indexes count from the end of the string. An empty string is
/// returned when `start` does not come before `end`.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::slice(7, 9, "snakes on a plane!"), "on");
/// assert_eq!(text::slice(0, 6, "snakes on a plane!"), "snakes");
/// assert_eq!(text::slice(0, -7, "snakes on a plane!"), "snakes on a");
/// assert_eq!(text::slice(-6, -1, "snakes on a plane!"), "plane");
/// ```
#[must_use]
pub fn slice(start: isize, end: isize, text: &str) -> String {
    let length = length(text);
    let start = resolve_index(start, length);
    let end = resolve_index(end, length);
    if start >= end {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}

/// Takes `count` characters from the left.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::left(2, "Mulder"), "Mu");
/// ```
#[must_use]
pub fn left(count: usize, text: &str) -> String {
    text.chars().take(count).collect()
}

/// Takes `count` characters from the right.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::right(2, "Scully"), "ly");
/// assert_eq!(text::right(0, "Scully"), "");
/// ```
#[must_use]
pub fn right(count: usize, text: &str) -> String {
    let skip = length(text).saturating_sub(count);
    text.chars().skip(skip).collect()
}

/// Drops `count` characters from the left.
#[must_use]
pub fn drop_left(count: usize, text: &str) -> String {
    text.chars().skip(count).collect()
}

/// Drops `count` characters from the right.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::drop_right(2, "Cigarette Smoking Man"), "Cigarette Smoking M");
/// assert_eq!(text::drop_right(0, "Krycek"), "Krycek");
/// ```
#[must_use]
pub fn drop_right(count: usize, text: &str) -> String {
    let keep = length(text).saturating_sub(count);
    text.chars().take(keep).collect()
}

// =============================================================================
// Padding
// =============================================================================

/// Surrounds `text` with `padding` repeated `times` times on each side.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::pad(2, "*", "x"), "**x**");
/// ```
#[must_use]
pub fn pad(times: usize, padding: &str, text: &str) -> String {
    let padding = padding.repeat(times);
    [padding.as_str(), text, padding.as_str()].concat()
}

/// Prefixes `text` with `padding` repeated `times` times.
#[must_use]
pub fn pad_left(times: usize, padding: &str, text: &str) -> String {
    padding.repeat(times) + text
}

/// Suffixes `text` with `padding` repeated `times` times.
#[must_use]
pub fn pad_right(times: usize, padding: &str, text: &str) -> String {
    let mut padded = text.to_owned();
    padded.push_str(&padding.repeat(times));
    padded
}

// =============================================================================
// Numbers
// =============================================================================

/// Formats a number.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::from_number(1.0), "1");
/// assert_eq!(text::from_number(-0.5), "-0.5");
/// assert_eq!(text::from_number(42), "42");
/// ```
#[must_use]
pub fn from_number<N: Display>(number: N) -> String {
    number.to_string()
}

/// Returns `true` if `text` is a decimal number, optionally signed and
/// optionally with an exponent.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert!(text::is_float("3.14"));
/// assert!(text::is_float("-.5e10"));
/// assert!(!text::is_float("5."));
/// assert!(!text::is_float("1,000"));
/// ```
#[must_use]
pub fn is_float(text: &str) -> bool {
    FLOAT_PATTERN.is_match(text)
}

/// Parses a decimal number.
///
/// Only strings accepted by [`is_float`] are parsed; anything else is
/// `Nothing`.
///
/// ```rust
/// use fp_prelude::maybe::Maybe;
/// use fp_prelude::text;
///
/// assert_eq!(text::to_float("2.5e2"), Maybe::Just(250.0));
/// assert_eq!(text::to_float("NaN"), Maybe::Nothing);
/// ```
#[must_use]
pub fn to_float(text: &str) -> Maybe<f64> {
    if !is_float(text) {
        return Maybe::Nothing;
    }
    text.parse::<f64>().ok().into()
}

/// Returns `true` if `text` is an integer, optionally signed and optionally
/// with a non-negative exponent.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert!(text::is_int("-17"));
/// assert!(text::is_int("3e2"));
/// assert!(!text::is_int("3e-2"));
/// assert!(!text::is_int("1.0"));
/// ```
#[must_use]
pub fn is_int(text: &str) -> bool {
    INT_PATTERN.is_match(text)
}

/// Parses an integer.
///
/// Only strings accepted by [`is_int`] are parsed. An exponent multiplies
/// the mantissa by a power of ten. Values that do not fit in an `i64` are
/// `Nothing`.
///
/// ```rust
/// use fp_prelude::maybe::Maybe;
/// use fp_prelude::text;
///
/// assert_eq!(text::to_int("7"), Maybe::Just(7));
/// assert_eq!(text::to_int("+3e2"), Maybe::Just(300));
/// assert_eq!(text::to_int("9e99"), Maybe::Nothing);
/// assert_eq!(text::to_int("seven"), Maybe::Nothing);
/// ```
#[must_use]
pub fn to_int(text: &str) -> Maybe<i64> {
    let Some(captures) = INT_PATTERN.captures(text) else {
        return Maybe::Nothing;
    };
    let Ok(mantissa) = captures["mantissa"].parse::<i64>() else {
        return Maybe::Nothing;
    };
    let Some(exponent) = captures.name("exponent") else {
        return Maybe::Just(mantissa);
    };
    if mantissa == 0 {
        return Maybe::Just(0);
    }
    exponent
        .as_str()
        .parse::<u32>()
        .ok()
        .and_then(|exponent| 10_i64.checked_pow(exponent))
        .and_then(|scale| mantissa.checked_mul(scale))
        .into()
}

// =============================================================================
// Characters
// =============================================================================

/// Splits `text` into its characters.
#[must_use]
pub fn to_list(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Builds a string from characters.
#[must_use]
pub fn from_list(characters: &[char]) -> String {
    characters.iter().collect()
}

/// Prepends a character.
#[must_use]
pub fn cons(character: char, text: &str) -> String {
    let mut joined = String::with_capacity(character.len_utf8() + text.len());
    joined.push(character);
    joined.push_str(text);
    joined
}

/// Splits off the first character.
///
/// ```rust
/// use fp_prelude::maybe::Maybe;
/// use fp_prelude::text;
///
/// assert_eq!(text::uncons("abc"), Maybe::Just(('a', "bc".to_owned())));
/// assert_eq!(text::uncons(""), Maybe::Nothing);
/// ```
#[must_use]
pub fn uncons(text: &str) -> Maybe<(char, String)> {
    let mut characters = text.chars();
    characters
        .next()
        .map(|first| (first, characters.as_str().to_owned()))
        .into()
}

/// Transforms every character.
#[must_use]
pub fn map<F>(function: F, text: &str) -> String
where
    F: FnMut(char) -> char,
{
    text.chars().map(function).collect()
}

/// Keeps the characters that satisfy `predicate`.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::filter(|c| c.is_ascii_digit(), "R2-D2"), "22");
/// ```
#[must_use]
pub fn filter<P>(mut predicate: P, text: &str) -> String
where
    P: FnMut(char) -> bool,
{
    text.chars().filter(|character| predicate(*character)).collect()
}

/// Folds over the characters from the left.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::foldl(|c, acc: String| format!("{c}{acc}"), String::new(), "abc"), "cba");
/// ```
#[must_use]
pub fn foldl<B, F>(mut function: F, initial: B, text: &str) -> B
where
    F: FnMut(char, B) -> B,
{
    text.chars()
        .fold(initial, |accumulator, character| function(character, accumulator))
}

/// Folds over the characters from the right.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert_eq!(text::foldr(|c, acc: String| format!("{c}{acc}"), String::new(), "abc"), "abc");
/// ```
#[must_use]
pub fn foldr<B, F>(mut function: F, initial: B, text: &str) -> B
where
    F: FnMut(char, B) -> B,
{
    text.chars()
        .rev()
        .fold(initial, |accumulator, character| function(character, accumulator))
}

/// Returns `true` if any character satisfies `predicate`.
#[must_use]
pub fn any<P>(predicate: P, text: &str) -> bool
where
    P: FnMut(char) -> bool,
{
    text.chars().any(predicate)
}

/// Returns `true` if every character satisfies `predicate`.
///
/// ```rust
/// use fp_prelude::text;
///
/// assert!(text::all(|c| c.is_ascii_digit(), "90210"));
/// assert!(!text::all(|c| c.is_ascii_digit(), "R2-D2"));
/// assert!(text::all(|c| c.is_ascii_digit(), ""));
/// ```
#[must_use]
pub fn all<P>(predicate: P, text: &str) -> bool
where
    P: FnMut(char) -> bool,
{
    text.chars().all(predicate)
}
