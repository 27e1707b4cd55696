//! Pair helpers.
//!
//! ```rust
//! use fp_prelude::tuple;
//!
//! let pair = tuple::pair("age", 41);
//! assert_eq!(tuple::map_second(|age| age + 1, pair), ("age", 42));
//! assert_eq!(tuple::swap(pair), (41, "age"));
//! ```

/// Builds a pair.
#[inline]
#[must_use]
pub const fn pair<A, B>(first: A, second: B) -> (A, B) {
    (first, second)
}

/// The first component.
#[inline]
#[must_use]
pub fn first<A, B>((first, _): (A, B)) -> A {
    first
}

/// The second component.
#[inline]
#[must_use]
pub fn second<A, B>((_, second): (A, B)) -> B {
    second
}

/// Transforms the first component.
#[must_use]
pub fn map_first<A, B, X, F>(function: F, (first, second): (A, B)) -> (X, B)
where
    F: FnOnce(A) -> X,
{
    (function(first), second)
}

/// Transforms the second component.
#[must_use]
pub fn map_second<A, B, Y, F>(function: F, (first, second): (A, B)) -> (A, Y)
where
    F: FnOnce(B) -> Y,
{
    (first, function(second))
}

/// Transforms both components.
///
/// ```rust
/// use fp_prelude::tuple;
///
/// let lengths = tuple::map_both(str::len, |n: i32| n * 2, ("four", 5));
/// assert_eq!(lengths, (4, 10));
/// ```
#[must_use]
pub fn map_both<A, B, X, Y, F, G>(first_function: F, second_function: G, (first, second): (A, B)) -> (X, Y)
where
    F: FnOnce(A) -> X,
    G: FnOnce(B) -> Y,
{
    (first_function(first), second_function(second))
}

/// Exchanges the components.
#[inline]
#[must_use]
pub fn swap<A, B>((first, second): (A, B)) -> (B, A) {
    (second, first)
}
