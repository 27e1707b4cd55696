//! Small combinators used as pipeline steps.

/// Returns its argument.
///
/// ```rust
/// use fp_prelude::compose::identity;
/// use fp_prelude::maybe::Maybe;
///
/// let nested = Maybe::Just(Maybe::Just(3));
/// assert_eq!(nested.and_then(identity), Maybe::Just(3));
/// ```
#[inline]
#[must_use]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields a clone of `value`.
///
/// ```rust
/// use fp_prelude::compose::constant;
///
/// let blanks: Vec<&str> = vec![1, 2, 3].into_iter().map(constant("")).collect();
/// assert_eq!(blanks, vec!["", "", ""]);
/// ```
#[inline]
#[must_use]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of `function`.
///
/// Handy for the function-first helpers of this crate when the collection
/// is at hand before the function.
///
/// ```rust
/// use fp_prelude::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
#[must_use]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
