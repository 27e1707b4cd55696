//! Indexed array helpers.
//!
//! Arrays are plain slices on the way in and fresh `Vec`s on the way out;
//! the input is never modified. Lookups that can miss return [`Maybe`].
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::array;
//! use fp_prelude::maybe::Maybe;
//!
//! let squares = array::initialize(4, |index| index * index);
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//! assert_eq!(array::get(2, &squares), Maybe::Just(&4));
//! assert_eq!(array::get(9, &squares), Maybe::Nothing);
//!
//! let updated = array::set(0, 100, &squares);
//! assert_eq!(updated, vec![100, 1, 4, 9]);
//! assert_eq!(squares[0], 0);
//! ```

use crate::maybe::Maybe;

/// Creates an empty array.
#[inline]
#[must_use]
pub const fn empty<T>() -> Vec<T> {
    Vec::new()
}

/// Returns `true` if `array` has no elements.
#[inline]
#[must_use]
pub const fn is_empty<T>(array: &[T]) -> bool {
    array.is_empty()
}

/// Number of elements in `array`.
#[inline]
#[must_use]
pub const fn length<T>(array: &[T]) -> usize {
    array.len()
}

/// Creates an array of `length` elements, computing each from its index.
#[must_use]
pub fn initialize<T, F>(length: usize, function: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..length).map(function).collect()
}

/// Creates an array holding `count` copies of `value`.
///
/// ```rust
/// use fp_prelude::array;
///
/// assert_eq!(array::repeat(3, "ha"), vec!["ha", "ha", "ha"]);
/// ```
#[must_use]
pub fn repeat<T: Clone>(count: usize, value: T) -> Vec<T> {
    vec![value; count]
}

/// Returns the element at `index`.
#[inline]
#[must_use]
pub fn get<T>(index: usize, array: &[T]) -> Maybe<&T> {
    array.get(index).into()
}

/// Returns a copy of `array` with the element at `index` replaced.
///
/// An index out of range yields an unchanged copy.
#[must_use]
pub fn set<T: Clone>(index: usize, value: T, array: &[T]) -> Vec<T> {
    let mut updated = array.to_vec();
    if let Some(slot) = updated.get_mut(index) {
        *slot = value;
    }
    updated
}

/// Returns a copy of `array` with `value` added at the end.
#[must_use]
pub fn push<T: Clone>(value: T, array: &[T]) -> Vec<T> {
    let mut pushed = Vec::with_capacity(array.len() + 1);
    pushed.extend_from_slice(array);
    pushed.push(value);
    pushed
}

/// Returns a copy of `array` with `value` added at the front.
#[must_use]
pub fn prepend<T: Clone>(value: T, array: &[T]) -> Vec<T> {
    let mut prepended = Vec::with_capacity(array.len() + 1);
    prepended.push(value);
    prepended.extend_from_slice(array);
    prepended
}

/// Folds from the first element to the last.
///
/// ```rust
/// use fp_prelude::array;
///
/// let digits = array::foldl(|digit, number| number * 10 + digit, 0, &[1, 2, 3]);
/// assert_eq!(digits, 123);
/// ```
#[must_use]
pub fn foldl<T, B, F>(mut function: F, initial: B, array: &[T]) -> B
where
    F: FnMut(&T, B) -> B,
{
    array
        .iter()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// Folds from the last element to the first.
///
/// ```rust
/// use fp_prelude::array;
///
/// let digits = array::foldr(|digit, number| number * 10 + digit, 0, &[1, 2, 3]);
/// assert_eq!(digits, 321);
/// ```
#[must_use]
pub fn foldr<T, B, F>(mut function: F, initial: B, array: &[T]) -> B
where
    F: FnMut(&T, B) -> B,
{
    array
        .iter()
        .rev()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// Applies `function` to every element.
#[must_use]
pub fn map<T, U, F>(function: F, array: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    array.iter().map(function).collect()
}

/// Applies `function` to every element and its index.
///
/// ```rust
/// use fp_prelude::array;
///
/// let labelled = array::indexed_map(|index, name| format!("{index}:{name}"), &["a", "b"]);
/// assert_eq!(labelled, vec!["0:a", "1:b"]);
/// ```
#[must_use]
pub fn indexed_map<T, U, F>(mut function: F, array: &[T]) -> Vec<U>
where
    F: FnMut(usize, &T) -> U,
{
    array
        .iter()
        .enumerate()
        .map(|(index, element)| function(index, element))
        .collect()
}

/// Keeps the elements satisfying `predicate`.
#[must_use]
pub fn filter<T: Clone, P>(mut predicate: P, array: &[T]) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    array
        .iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Joins two arrays.
#[must_use]
pub fn append<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
    [left, right].concat()
}

/// Takes the elements from `start` up to, not including, `end`.
///
/// Negative indexes count from the end.
///
/// ```rust
/// use fp_prelude::array;
///
/// let letters = ['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(array::slice(1, 3, &letters), vec!['b', 'c']);
/// assert_eq!(array::slice(-2, 5, &letters), vec!['d', 'e']);
/// assert_eq!(array::slice(0, -3, &letters), vec!['a', 'b']);
/// ```
#[must_use]
pub fn slice<T: Clone>(start: isize, end: isize, array: &[T]) -> Vec<T> {
    let start = resolve_index(start, array.len());
    let end = resolve_index(end, array.len());
    if start >= end {
        return Vec::new();
    }
    array[start..end].to_vec()
}

fn resolve_index(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(length)
    }
}
