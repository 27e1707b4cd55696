//! Maybe type - a value that may or may not be present.
//!
//! This module provides the [`Maybe<T>`] type, which is either `Just(T)` or
//! `Nothing`. It is the prelude's way of reporting absence: lookups that
//! miss, parsers that fail and combinators whose inputs are missing all
//! return `Nothing` instead of failing.
//!
//! Presence is decided by the tag alone. `Just(0)`, `Just("")` and
//! `Just(false)` are present values like any other.
//!
//! The combinators come in two shapes:
//!
//! - methods, for chaining: `value.map(f).and_then(g)`
//! - Elm-style free functions taking the function first: `maybe::map(f, value)`
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::maybe::{self, Maybe};
//!
//! // Transforming a present value
//! assert_eq!(maybe::map(f64::sqrt, Maybe::Just(9.0)), Maybe::Just(3.0));
//! assert_eq!(maybe::map(f64::sqrt, Maybe::Nothing), Maybe::Nothing);
//!
//! // All-or-nothing combination
//! let add = |x: i32, y: i32| x + y;
//! assert_eq!(maybe::map2(add, Maybe::Just(3), Maybe::Just(4)), Maybe::Just(7));
//! assert_eq!(maybe::map2(add, Maybe::Just(3), Maybe::Nothing), Maybe::Nothing);
//!
//! // Chaining computations that may fail
//! let to_valid_month = |month: i32| {
//!     if (1..=12).contains(&month) { Maybe::Just(month) } else { Maybe::Nothing }
//! };
//! assert_eq!(Maybe::Just(7).and_then(to_valid_month), Maybe::Just(7));
//! assert_eq!(Maybe::Just(13).and_then(to_valid_month), Maybe::Nothing);
//!
//! // Unfolding with a default
//! assert_eq!(maybe::with_default(100, Maybe::Just(42)), 42);
//! assert_eq!(maybe::with_default(100, Maybe::Nothing), 100);
//! ```

use std::fmt;
use std::hash::Hash;

/// A value that may be absent.
///
/// `Maybe<T>` is either `Just(value)` or `Nothing`. Values are immutable;
/// every combinator consumes its input and produces a new `Maybe`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fp_prelude::maybe::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(42);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert_eq!(present.map(|x| x * 2), Maybe::Just(84));
/// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    #[doc(alias = "Absent")]
    Nothing,
    /// Holds some value.
    #[doc(alias = "Present")]
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert!(Maybe::Just(0).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Just(false).is_nothing());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Unfolding
    // =========================================================================

    /// Returns the contained value, or `default` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).with_default(100), 42);
    /// assert_eq!(Maybe::Nothing.with_default(100), 100);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_default(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value, or computes one if this is `Nothing`.
    ///
    /// The closure is only called for `Nothing`.
    #[inline]
    #[must_use]
    pub fn with_default_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => function(),
        }
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "none".to_string(), |x| x.to_string());
    /// assert_eq!(describe(Maybe::Just(3)), "3");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    #[must_use]
    pub fn fold<U, N, J>(self, nothing_function: N, just_function: J) -> U
    where
        N: FnOnce() -> U,
        J: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => just_function(value),
            Self::Nothing => nothing_function(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// If this is `Just(v)`, returns `Just(function(v))`; otherwise `Nothing`.
    /// A panic inside `function` propagates; it is not turned into `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(0).map(|x| x + 1), Maybe::Just(1));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|x| x + 1), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Combines two values with a binary function if both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).map2(Maybe::Just(4), |x, y| x + y), Maybe::Just(7));
    /// assert_eq!(Maybe::Just(3).map2(Maybe::<i32>::Nothing, |x, y| x + y), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Just(first), Maybe::Just(second)) => Maybe::Just(function(first, second)),
            _ => Maybe::Nothing,
        }
    }

    /// Combines three values with a ternary function if all are present.
    #[inline]
    #[must_use]
    pub fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(first), Maybe::Just(second), Maybe::Just(third)) => {
                Maybe::Just(function(first, second, third))
            }
            _ => Maybe::Nothing,
        }
    }

    /// Combines four values with a quaternary function if all are present.
    #[inline]
    #[must_use]
    pub fn map4<B, C, D, E, F>(
        self,
        second: Maybe<B>,
        third: Maybe<C>,
        fourth: Maybe<D>,
        function: F,
    ) -> Maybe<E>
    where
        F: FnOnce(T, B, C, D) -> E,
    {
        match (self, second, third, fourth) {
            (Self::Just(first), Maybe::Just(second), Maybe::Just(third), Maybe::Just(fourth)) => {
                Maybe::Just(function(first, second, third, fourth))
            }
            _ => Maybe::Nothing,
        }
    }

    /// Combines five values with a five-argument function if all are present.
    #[inline]
    #[must_use]
    pub fn map5<B, C, D, E, G, F>(
        self,
        second: Maybe<B>,
        third: Maybe<C>,
        fourth: Maybe<D>,
        fifth: Maybe<E>,
        function: F,
    ) -> Maybe<G>
    where
        F: FnOnce(T, B, C, D, E) -> G,
    {
        match (self, second, third, fourth, fifth) {
            (
                Self::Just(first),
                Maybe::Just(second),
                Maybe::Just(third),
                Maybe::Just(fourth),
                Maybe::Just(fifth),
            ) => Maybe::Just(function(first, second, third, fourth, fifth)),
            _ => Maybe::Nothing,
        }
    }

    /// Pairs two values if both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
    /// ```
    #[inline]
    #[must_use]
    pub fn product<B>(self, other: Maybe<B>) -> Maybe<(T, B)> {
        self.map2(other, |first, second| (first, second))
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// For `Just(v)` the callback is invoked with `v` and its result is
    /// returned as is. For `Nothing` the callback is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Just(x / 2) } else { Maybe::Nothing };
    /// assert_eq!(Maybe::Just(8).and_then(half).and_then(half), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(6).and_then(half).and_then(half), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).or(Maybe::Just(2)), Maybe::Just(1));
    /// assert_eq!(Maybe::Nothing.or(Maybe::Just(2)), Maybe::Just(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => alternative,
        }
    }

    /// Returns `self` if present, otherwise the result of `function`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => function(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the standard library's `Option`.
    #[inline]
    #[must_use]
    pub fn to_option(self) -> Option<T> {
        self.into()
    }

    /// Returns an iterator yielding the contained value, if any.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().to_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_prelude::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(1)).flatten(), Maybe::Just(1));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).flatten(), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Free Functions (function-first argument order)
// =============================================================================

/// Returns the contained value, or `default` if `maybe` is `Nothing`.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::maybe::{self, Maybe};
///
/// assert_eq!(maybe::with_default("unknown", Maybe::Nothing), "unknown");
/// ```
#[inline]
#[must_use]
pub fn with_default<T>(default: T, maybe: Maybe<T>) -> T {
    maybe.with_default(default)
}

/// Returns `true` if `maybe` is `Nothing`.
#[inline]
#[must_use]
pub const fn is_nothing<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_nothing()
}

/// Transforms a present value with `function`.
#[inline]
#[must_use]
pub fn map<T, U, F>(function: F, maybe: Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    maybe.map(function)
}

/// Applies `function` if both arguments are present.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::maybe::{self, Maybe};
/// use fp_prelude::text;
///
/// let add = |x: i64, y: i64| x + y;
/// assert_eq!(maybe::map2(add, text::to_int("1"), text::to_int("123")), Maybe::Just(124));
/// assert_eq!(maybe::map2(add, text::to_int("x"), text::to_int("123")), Maybe::Nothing);
/// assert_eq!(maybe::map2(add, text::to_int("1"), text::to_int("1.3")), Maybe::Nothing);
/// ```
#[inline]
#[must_use]
pub fn map2<A, B, C, F>(function: F, first: Maybe<A>, second: Maybe<B>) -> Maybe<C>
where
    F: FnOnce(A, B) -> C,
{
    first.map2(second, function)
}

/// Applies `function` if all three arguments are present.
#[inline]
#[must_use]
pub fn map3<A, B, C, D, F>(
    function: F,
    first: Maybe<A>,
    second: Maybe<B>,
    third: Maybe<C>,
) -> Maybe<D>
where
    F: FnOnce(A, B, C) -> D,
{
    first.map3(second, third, function)
}

/// Applies `function` if all four arguments are present.
#[inline]
#[must_use]
pub fn map4<A, B, C, D, E, F>(
    function: F,
    first: Maybe<A>,
    second: Maybe<B>,
    third: Maybe<C>,
    fourth: Maybe<D>,
) -> Maybe<E>
where
    F: FnOnce(A, B, C, D) -> E,
{
    first.map4(second, third, fourth, function)
}

/// Applies `function` if all five arguments are present.
#[inline]
#[must_use]
pub fn map5<A, B, C, D, E, G, F>(
    function: F,
    first: Maybe<A>,
    second: Maybe<B>,
    third: Maybe<C>,
    fourth: Maybe<D>,
    fifth: Maybe<E>,
) -> Maybe<G>
where
    F: FnOnce(A, B, C, D, E) -> G,
{
    first.map5(second, third, fourth, fifth, function)
}

/// Chains a computation that may fail onto a present value.
#[inline]
#[must_use]
pub fn and_then<T, U, F>(function: F, maybe: Maybe<T>) -> Maybe<U>
where
    F: FnOnce(T) -> Maybe<U>,
{
    maybe.and_then(function)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Maybe::Just(0))]
    #[case(Maybe::Just(-1))]
    fn test_map_invokes_function_for_falsy_payloads(#[case] value: Maybe<i32>) {
        let calls = Cell::new(0);
        let result = value.map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(calls.get(), 1);
        assert!(result.is_just());
    }

    #[rstest]
    fn test_map_empty_string_payload_is_present() {
        assert_eq!(Maybe::Just(String::new()).map(|s| s.len()), Maybe::Just(0));
        assert_eq!(Maybe::Just(false).map(|b| !b), Maybe::Just(true));
    }

    #[rstest]
    fn test_and_then_does_not_call_function_on_nothing() {
        let called = Cell::new(false);
        let result: Maybe<i32> = Maybe::<i32>::Nothing.and_then(|x| {
            called.set(true);
            Maybe::Just(x)
        });
        assert_eq!(result, Maybe::Nothing);
        assert!(!called.get());
    }

    #[rstest]
    fn test_map2_with_zero_payloads() {
        assert_eq!(Maybe::Just(0).map2(Maybe::Just(0), |x, y| x + y), Maybe::Just(0));
    }

    #[rstest]
    fn test_default_is_nothing() {
        let value: Maybe<String> = Maybe::default();
        assert!(value.is_nothing());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let option = Some(3);
        let maybe: Maybe<i32> = option.into();
        assert_eq!(maybe, Maybe::Just(3));
        assert_eq!(Option::from(maybe), Some(3));
        assert_eq!(Maybe::<i32>::from(None).to_option(), None);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Maybe::Just(1)), "Just(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::Nothing), "Nothing");
    }
}
