//! The closed universe of dynamically shaped values.
//!
//! [`Value`] is used where heterogeneous nested containers have to be
//! compared or tested for equality: arrays mixing numbers and nested
//! arrays, optional values holding dictionaries, and so on. Every shape is
//! an explicit variant, so every comparison is an exhaustive match.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

use super::comparison::Comparison;
use super::orderable::{Orderable, compare_by_head, total_order_by_head};
use crate::dict::Dict;
use crate::maybe::Maybe;

// =============================================================================
// Kinds
// =============================================================================

/// The kind of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    /// A number.
    Number,
    /// A text string.
    Text,
    /// A point in time.
    Date,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Text => "text",
            Self::Date => "date",
        };
        formatter.write_str(name)
    }
}

/// The shape of a [`Value`], without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// A scalar of the given kind.
    Scalar(ScalarKind),
    /// A boolean.
    Bool,
    /// A pair.
    Tuple,
    /// An array.
    Array,
    /// An optional value.
    Maybe,
    /// A dictionary.
    Dict,
}

impl ValueKind {
    /// Position used to order values of different kinds when sorting.
    const fn rank(self) -> u8 {
        match self {
            Self::Scalar(ScalarKind::Number) => 0,
            Self::Scalar(ScalarKind::Text) => 1,
            Self::Scalar(ScalarKind::Date) => 2,
            Self::Bool => 3,
            Self::Tuple | Self::Array => 4,
            Self::Maybe => 5,
            Self::Dict => 6,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => kind.fmt(formatter),
            Self::Bool => formatter.write_str("bool"),
            Self::Tuple => formatter.write_str("tuple"),
            Self::Array => formatter.write_str("array"),
            Self::Maybe => formatter.write_str("maybe"),
            Self::Dict => formatter.write_str("dict"),
        }
    }
}

// =============================================================================
// Scalar
// =============================================================================

/// A leaf value: text, a number or a date.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::ord::{Comparison, Orderable, Scalar};
///
/// let apple = Scalar::from("apple");
/// let banana = Scalar::from("Banana");
/// assert_eq!(apple.compare(&banana), Comparison::Less);
/// assert_eq!(apple.compare(&Scalar::from(1.0)), Comparison::Incomparable);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    /// A text string, ordered by locale-style collation.
    Text(String),
    /// A number, ordered numerically.
    Number(f64),
    /// A point in time, ordered chronologically.
    Date(DateTime<Utc>),
}

impl Scalar {
    /// Returns the kind of this scalar.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Text(_) => ScalarKind::Text,
            Self::Number(_) => ScalarKind::Number,
            Self::Date(_) => ScalarKind::Date,
        }
    }
}

impl Orderable for Scalar {
    fn compare(&self, other: &Self) -> Comparison {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.compare(right),
            (Self::Number(left), Self::Number(right)) => left.compare(right),
            (Self::Date(left), Self::Date(right)) => left.compare(right),
            _ => Comparison::Incomparable,
        }
    }

    fn total_order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.total_order(right),
            (Self::Number(left), Self::Number(right)) => left.total_order(right),
            (Self::Date(left), Self::Date(right)) => left.total_order(right),
            _ => ValueKind::Scalar(self.kind())
                .rank()
                .cmp(&ValueKind::Scalar(other.kind()).rank()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(formatter, "{text:?}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Date(date) => write!(formatter, "{}", date.to_rfc3339()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Scalar {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

// =============================================================================
// Value
// =============================================================================

/// A value of any shape the Ord engine understands.
///
/// Ordering is defined for scalars of the same kind and for tuples and
/// arrays (recursively, by first element then length). Every other pairing
/// is [`Comparison::Incomparable`]. Equality is structural and total: two
/// values of different shapes are simply unequal.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::ord::{Comparison, Orderable, Value};
///
/// let nested = Value::array(vec![Value::from(1), Value::from(vec![2, 3])]);
/// let same = Value::array(vec![Value::from(1), Value::from(vec![2, 3])]);
/// let other = Value::array(vec![Value::from(1), Value::from(vec![2, 4])]);
///
/// assert_eq!(nested, same);
/// assert_ne!(nested, other);
/// assert_eq!(nested.compare(&other), Comparison::Equal);
/// assert_eq!(Value::from(true).compare(&Value::from(true)), Comparison::Incomparable);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Text, a number or a date.
    Scalar(Scalar),
    /// A boolean.
    Bool(bool),
    /// A pair, ordered as a 2-element array.
    Tuple(Box<Value>, Box<Value>),
    /// An array of values.
    Array(Vec<Value>),
    /// An optional value.
    Maybe(Box<Maybe<Value>>),
    /// A text-keyed dictionary of values.
    Dict(Dict<Value>),
}

/// The elements of a tuple or array, viewed as a sequence.
#[derive(Clone, Copy)]
enum Elements<'a> {
    Pair(&'a Value, &'a Value),
    Items(&'a [Value]),
}

impl<'a> Elements<'a> {
    const fn first(self) -> Option<&'a Value> {
        match self {
            Self::Pair(first, _) => Some(first),
            Self::Items(items) => items.first(),
        }
    }

    const fn len(self) -> usize {
        match self {
            Self::Pair(..) => 2,
            Self::Items(items) => items.len(),
        }
    }

    fn iter(self) -> impl Iterator<Item = &'a Value> {
        let (pair, items) = match self {
            Self::Pair(first, second) => ([Some(first), Some(second)], &[][..]),
            Self::Items(items) => ([None, None], items),
        };
        pair.into_iter().flatten().chain(items)
    }
}

impl Value {
    /// Creates a number.
    #[inline]
    #[must_use]
    pub const fn number(number: f64) -> Self {
        Self::Scalar(Scalar::Number(number))
    }

    /// Creates a text value.
    #[inline]
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(text.into()))
    }

    /// Creates a date.
    #[inline]
    #[must_use]
    pub const fn date(date: DateTime<Utc>) -> Self {
        Self::Scalar(Scalar::Date(date))
    }

    /// Creates an array.
    #[inline]
    #[must_use]
    pub const fn array(items: Vec<Self>) -> Self {
        Self::Array(items)
    }

    /// Creates a pair.
    #[inline]
    #[must_use]
    pub fn tuple(first: impl Into<Self>, second: impl Into<Self>) -> Self {
        Self::Tuple(Box::new(first.into()), Box::new(second.into()))
    }

    /// Creates a present optional value.
    #[inline]
    #[must_use]
    pub fn just(value: impl Into<Self>) -> Self {
        Self::Maybe(Box::new(Maybe::Just(value.into())))
    }

    /// Creates an absent optional value.
    #[inline]
    #[must_use]
    pub fn nothing() -> Self {
        Self::Maybe(Box::new(Maybe::Nothing))
    }

    /// Creates a dictionary value.
    #[inline]
    #[must_use]
    pub const fn dict(entries: Dict<Self>) -> Self {
        Self::Dict(entries)
    }

    /// Returns the shape of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(scalar) => ValueKind::Scalar(scalar.kind()),
            Self::Bool(_) => ValueKind::Bool,
            Self::Tuple(..) => ValueKind::Tuple,
            Self::Array(_) => ValueKind::Array,
            Self::Maybe(_) => ValueKind::Maybe,
            Self::Dict(_) => ValueKind::Dict,
        }
    }

    /// Deep structural equality.
    ///
    /// Scalars compare by value, containers by shape and contents
    /// recursively. Values of different shapes are unequal; a tuple never
    /// equals an array, even one with the same two elements.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(left), Self::Scalar(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Tuple(left_first, left_second), Self::Tuple(right_first, right_second)) => {
                left_first.equals(right_first) && left_second.equals(right_second)
            }
            (Self::Array(left), Self::Array(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(left, right)| left.equals(right))
            }
            (Self::Maybe(left), Self::Maybe(right)) => match (&**left, &**right) {
                (Maybe::Just(left), Maybe::Just(right)) => left.equals(right),
                (Maybe::Nothing, Maybe::Nothing) => true,
                _ => false,
            },
            (Self::Dict(left), Self::Dict(right)) => {
                left.size() == right.size()
                    && left.iter().zip(right.iter()).all(
                        |((left_key, left_value), (right_key, right_value))| {
                            left_key == right_key && left_value.equals(right_value)
                        },
                    )
            }
            _ => false,
        }
    }

    /// Returns the kinds of the innermost pair that has no order, following
    /// the first elements of nested sequences.
    pub(crate) fn innermost_incomparable(&self, other: &Self) -> (ValueKind, ValueKind) {
        if let (Some(left), Some(right)) = (self.elements(), other.elements())
            && let (Some(left_head), Some(right_head)) = (left.first(), right.first())
        {
            return left_head.innermost_incomparable(right_head);
        }
        (self.kind(), other.kind())
    }

    fn elements(&self) -> Option<Elements<'_>> {
        match self {
            Self::Tuple(first, second) => Some(Elements::Pair(first, second)),
            Self::Array(items) => Some(Elements::Items(items)),
            _ => None,
        }
    }

    fn total_order_within_kind(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            (Self::Maybe(left), Self::Maybe(right)) => match (&**left, &**right) {
                (Maybe::Nothing, Maybe::Nothing) => Ordering::Equal,
                (Maybe::Nothing, Maybe::Just(_)) => Ordering::Less,
                (Maybe::Just(_), Maybe::Nothing) => Ordering::Greater,
                (Maybe::Just(left), Maybe::Just(right)) => left.total_order(right),
            },
            (Self::Dict(left), Self::Dict(right)) => left
                .iter()
                .zip(right.iter())
                .map(|((left_key, left_value), (right_key, right_value))| {
                    left_key
                        .cmp(right_key)
                        .then_with(|| left_value.total_order(right_value))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left.size().cmp(&right.size())),
            _ => self.kind().rank().cmp(&other.kind().rank()),
        }
    }
}

impl Orderable for Value {
    fn compare(&self, other: &Self) -> Comparison {
        if let (Self::Scalar(left), Self::Scalar(right)) = (self, other) {
            return left.compare(right);
        }
        match (self.elements(), other.elements()) {
            (Some(left), Some(right)) => compare_by_head(
                left.first(),
                left.len(),
                right.first(),
                right.len(),
                Self::compare,
            ),
            _ => Comparison::Incomparable,
        }
    }

    fn total_order(&self, other: &Self) -> Ordering {
        if let (Self::Scalar(left), Self::Scalar(right)) = (self, other) {
            return left.total_order(right);
        }
        match (self.elements(), other.elements()) {
            (Some(left), Some(right)) => total_order_by_head(
                left.first(),
                left.len(),
                right.first(),
                right.len(),
                Self::total_order,
            ),
            _ => self.total_order_within_kind(other),
        }
    }

    /// Tuples and arrays are equivalent when they have the same length and
    /// pairwise equivalent elements. Values without an order between them
    /// fall back to structural equality.
    fn equivalent(&self, other: &Self) -> bool {
        if let (Some(left), Some(right)) = (self.elements(), other.elements()) {
            return left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(left, right)| left.equivalent(right));
        }
        match self.compare(other) {
            Comparison::Incomparable => self.equals(other),
            comparison => comparison.is_eq(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => scalar.fmt(formatter),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Tuple(first, second) => write!(formatter, "({first}, {second})"),
            Self::Array(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Maybe(maybe) => maybe.fmt(formatter),
            Self::Dict(entries) => entries.fmt(formatter),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Self::date(date)
    }
}

macro_rules! impl_from_number_for_value {
    ($($number:ty),* $(,)?) => {
        $(
            impl From<$number> for Value {
                #[inline]
                fn from(number: $number) -> Self {
                    Self::number(f64::from(number))
                }
            }
        )*
    };
}

impl_from_number_for_value!(i8, i16, i32, u8, u16, u32, f32, f64);

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Self>, B: Into<Self>> From<(A, B)> for Value {
    fn from((first, second): (A, B)) -> Self {
        Self::tuple(first, second)
    }
}

impl<T: Into<Self>> From<Maybe<T>> for Value {
    fn from(maybe: Maybe<T>) -> Self {
        Self::Maybe(Box::new(maybe.map(Into::into)))
    }
}

impl<T: Into<Self> + Clone> From<Dict<T>> for Value {
    fn from(entries: Dict<T>) -> Self {
        Self::Dict(entries.into_iter().map(|(key, value)| (key, value.into())).collect())
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
