//! List helpers.
//!
//! Elm-style list functions over slices. Extremes and sorting go through the
//! Ord engine, so lists of strings sort by locale-style collation and lists
//! of arrays sort by first element.
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::list;
//! use fp_prelude::maybe::Maybe;
//!
//! let names = ["bob", "Alice", "carol"];
//! assert_eq!(list::sort(&names), vec!["Alice", "bob", "carol"]);
//! assert_eq!(list::maximum(&names), Maybe::Just(&"carol"));
//! assert_eq!(list::head(&names), Maybe::Just(&"bob"));
//! assert_eq!(list::sum(&list::range(1, 4)), 10);
//! ```

use std::cmp::Ordering;
use std::iter::{Product, Sum};

use crate::maybe::Maybe;
use crate::ord::Orderable;

/// Wraps a value in a one-element list.
#[inline]
#[must_use]
pub fn singleton<T>(value: T) -> Vec<T> {
    vec![value]
}

/// All integers from `low` to `high`, inclusive.
///
/// ```rust
/// use fp_prelude::list;
///
/// assert_eq!(list::range(3, 6), vec![3, 4, 5, 6]);
/// assert_eq!(list::range(3, 3), vec![3]);
/// assert!(list::range(6, 3).is_empty());
/// ```
#[must_use]
pub fn range(low: i64, high: i64) -> Vec<i64> {
    (low..=high).collect()
}

/// Returns `true` if `list` has no elements.
#[inline]
#[must_use]
pub const fn is_empty<T>(list: &[T]) -> bool {
    list.is_empty()
}

/// Number of elements in `list`.
#[inline]
#[must_use]
pub const fn length<T>(list: &[T]) -> usize {
    list.len()
}

/// The first element.
#[inline]
#[must_use]
pub fn head<T>(list: &[T]) -> Maybe<&T> {
    list.first().into()
}

/// Everything but the first element, or `Nothing` for an empty list.
///
/// ```rust
/// use fp_prelude::list;
/// use fp_prelude::maybe::Maybe;
///
/// assert_eq!(list::tail(&[1, 2, 3]), Maybe::Just(&[2, 3][..]));
/// assert_eq!(list::tail::<i32>(&[]), Maybe::Nothing);
/// ```
#[must_use]
pub fn tail<T>(list: &[T]) -> Maybe<&[T]> {
    list.split_first().map(|(_, rest)| rest).into()
}

/// The first `count` elements.
#[must_use]
pub fn take<T: Clone>(count: usize, list: &[T]) -> Vec<T> {
    list.iter().take(count).cloned().collect()
}

/// Everything after the first `count` elements.
#[must_use]
pub fn drop<T: Clone>(count: usize, list: &[T]) -> Vec<T> {
    list.iter().skip(count).cloned().collect()
}

/// The elements in reverse order.
#[must_use]
pub fn reverse<T: Clone>(list: &[T]) -> Vec<T> {
    list.iter().rev().cloned().collect()
}

/// Returns `true` if `value` is in `list`.
#[must_use]
pub fn member<T: PartialEq>(value: &T, list: &[T]) -> bool {
    list.contains(value)
}

/// Returns `true` if every element satisfies `predicate`.
#[must_use]
pub fn all<T, P>(predicate: P, list: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    list.iter().all(predicate)
}

/// Returns `true` if some element satisfies `predicate`.
#[must_use]
pub fn any<T, P>(predicate: P, list: &[T]) -> bool
where
    P: FnMut(&T) -> bool,
{
    list.iter().any(predicate)
}

/// Applies `function` to every element.
#[must_use]
pub fn map<T, U, F>(function: F, list: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    list.iter().map(function).collect()
}

/// Keeps the elements satisfying `predicate`.
#[must_use]
pub fn filter<T: Clone, P>(mut predicate: P, list: &[T]) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    list.iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Applies `function` and keeps the `Just` results.
///
/// ```rust
/// use fp_prelude::list;
/// use fp_prelude::text;
///
/// let numbers = list::filter_map(|raw: &&str| text::to_int(raw), &["3", "hi", "4e1"]);
/// assert_eq!(numbers, vec![3, 40]);
/// ```
#[must_use]
pub fn filter_map<T, U, F>(function: F, list: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> Maybe<U>,
{
    list.iter().flat_map(function).collect()
}

/// Folds from the first element to the last.
#[must_use]
pub fn foldl<T, B, F>(mut function: F, initial: B, list: &[T]) -> B
where
    F: FnMut(&T, B) -> B,
{
    list.iter()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// Folds from the last element to the first.
#[must_use]
pub fn foldr<T, B, F>(mut function: F, initial: B, list: &[T]) -> B
where
    F: FnMut(&T, B) -> B,
{
    list.iter()
        .rev()
        .fold(initial, |accumulator, element| function(element, accumulator))
}

/// The largest element under the Ord engine; the last one wins a tie.
#[must_use]
pub fn maximum<T: Orderable>(list: &[T]) -> Maybe<&T> {
    list.iter()
        .max_by(|left, right| left.total_order(right))
        .into()
}

/// The smallest element under the Ord engine; the first one wins a tie.
#[must_use]
pub fn minimum<T: Orderable>(list: &[T]) -> Maybe<&T> {
    list.iter()
        .min_by(|left, right| left.total_order(right))
        .into()
}

/// Adds the elements.
#[inline]
#[must_use]
pub fn sum<T: Copy + Sum<T>>(list: &[T]) -> T {
    list.iter().copied().sum()
}

/// Multiplies the elements.
///
/// The product of an empty list is zero (the default value).
///
/// ```rust
/// use fp_prelude::list;
///
/// assert_eq!(list::product(&[2, 3, 4]), 24);
/// assert_eq!(list::product::<i32>(&[]), 0);
/// ```
#[must_use]
pub fn product<T: Copy + Default + Product<T>>(list: &[T]) -> T {
    if list.is_empty() {
        return T::default();
    }
    list.iter().copied().product()
}

/// Joins two lists.
#[must_use]
pub fn append<T: Clone>(left: &[T], right: &[T]) -> Vec<T> {
    [left, right].concat()
}

/// Flattens a list of lists.
#[must_use]
pub fn concat<T: Clone>(lists: &[Vec<T>]) -> Vec<T> {
    lists.concat()
}

/// Maps every element to a list and flattens the results.
///
/// ```rust
/// use fp_prelude::list;
///
/// assert_eq!(list::concat_map(|n: &usize| vec![*n; *n], &[1, 2, 3]), vec![1, 2, 2, 3, 3, 3]);
/// ```
#[must_use]
pub fn concat_map<T, U, F>(function: F, list: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> Vec<U>,
{
    list.iter().flat_map(function).collect()
}

/// Places `separator` between every pair of elements.
///
/// ```rust
/// use fp_prelude::list;
///
/// assert_eq!(list::intersperse("on", &["turtles", "turtles", "turtles"]),
///            vec!["turtles", "on", "turtles", "on", "turtles"]);
/// ```
#[must_use]
pub fn intersperse<T: Clone>(separator: T, list: &[T]) -> Vec<T> {
    let mut interspersed = Vec::with_capacity(list.len().saturating_mul(2));
    for (index, element) in list.iter().enumerate() {
        if index > 0 {
            interspersed.push(separator.clone());
        }
        interspersed.push(element.clone());
    }
    interspersed
}

/// Sorts ascending under the Ord engine. The sort is stable.
#[must_use]
pub fn sort<T: Orderable + Clone>(list: &[T]) -> Vec<T> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|left, right| left.total_order(right));
    sorted
}

/// Sorts by a derived key under the Ord engine.
///
/// ```rust
/// use fp_prelude::list;
///
/// let words = ["kiwi", "fig", "banana"];
/// assert_eq!(list::sort_by(|word: &&str| word.len(), &words), vec!["fig", "kiwi", "banana"]);
/// ```
#[must_use]
pub fn sort_by<T, K, F>(mut key: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    K: Orderable,
    F: FnMut(&T) -> K,
{
    let mut sorted = list.to_vec();
    sorted.sort_by(|left, right| key(left).total_order(&key(right)));
    sorted
}

/// Sorts with a custom comparator.
#[must_use]
pub fn sort_with<T, F>(comparator: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = list.to_vec();
    sorted.sort_by(comparator);
    sorted
}

/// Splits into the elements that satisfy `predicate` and those that do not.
#[must_use]
pub fn partition<T: Clone, P>(mut predicate: P, list: &[T]) -> (Vec<T>, Vec<T>)
where
    P: FnMut(&T) -> bool,
{
    list.iter().cloned().partition(|element| predicate(element))
}

/// Splits a list of pairs into a pair of lists.
#[must_use]
pub fn unzip<A: Clone, B: Clone>(pairs: &[(A, B)]) -> (Vec<A>, Vec<B>) {
    pairs.iter().cloned().unzip()
}

/// Combines two lists element-wise. The longer list is truncated.
///
/// ```rust
/// use fp_prelude::list;
///
/// assert_eq!(list::map2(|a, b| a + b, &[1, 2, 3], &[10, 20]), vec![11, 22]);
/// ```
#[must_use]
pub fn map2<A, B, C, F>(mut function: F, first: &[A], second: &[B]) -> Vec<C>
where
    F: FnMut(&A, &B) -> C,
{
    first
        .iter()
        .zip(second)
        .map(|(a, b)| function(a, b))
        .collect()
}

/// Combines three lists element-wise, truncating to the shortest.
#[must_use]
pub fn map3<A, B, C, D, F>(mut function: F, first: &[A], second: &[B], third: &[C]) -> Vec<D>
where
    F: FnMut(&A, &B, &C) -> D,
{
    first
        .iter()
        .zip(second)
        .zip(third)
        .map(|((a, b), c)| function(a, b, c))
        .collect()
}
