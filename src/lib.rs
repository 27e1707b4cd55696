//! # fp-prelude
//!
//! An Elm-flavoured functional prelude for Rust.
//!
//! ## Overview
//!
//! Every module is a flat namespace of small pure functions over ordinary
//! containers. Nothing is mutated in place: operations that "change" a
//! structure return a new one and leave their input untouched.
//!
//! - **Maybe**: `Just`/`Nothing` with `map`, `map2`..`map5`, `and_then`, `with_default`
//! - **Ord/Eq engine**: structural three-way comparison and deep equality
//!   over scalars, tuples, arrays, optional values and dictionaries
//! - **Seq**: a sorted, duplicate-free sequence built on the Ord engine
//! - **Dict**: text-keyed dictionaries iterated in key order
//! - **Text, Array, List, Tuple, Boolean, Num**: the everyday helpers
//! - **Compose**: `pipe!`, `flow!`, `identity`, `constant`, `flip`
//!
//! ## Feature Flags
//!
//! - `maybe`: the [`Maybe`](maybe::Maybe) type and its combinators
//! - `dict`: text-keyed dictionaries
//! - `ord`: the comparison and equality engine
//! - `seq`: sorted, duplicate-free sequences
//! - `text`, `array`, `list`, `tuple`, `boolean`, `num`: helper modules
//! - `compose`: pipelines and function composition
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fp_prelude::prelude::*;
//!
//! let to_valid_month = |month: i64| {
//!     if (1..=12).contains(&month) { Maybe::Just(month) } else { Maybe::Nothing }
//! };
//!
//! assert_eq!(text::to_int("7").and_then(to_valid_month), Maybe::Just(7));
//! assert_eq!(text::to_int("13").and_then(to_valid_month), Maybe::Nothing);
//!
//! let sequence = Seq::from_list(vec![3, 1, 2, 3, 1]);
//! assert_eq!(sequence.as_slice(), &[1, 2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the main types and every enabled module namespace.
///
/// # Usage
///
/// ```rust
/// use fp_prelude::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "maybe")]
    pub use crate::maybe::{self, Maybe};

    #[cfg(feature = "dict")]
    pub use crate::dict::{self, Dict};

    #[cfg(feature = "ord")]
    pub use crate::ord::{self, Comparison, IncomparableError, Orderable, Scalar, Value};

    #[cfg(feature = "seq")]
    pub use crate::seq::{self, Seq};

    #[cfg(feature = "text")]
    pub use crate::text;

    #[cfg(feature = "array")]
    pub use crate::array;

    #[cfg(feature = "list")]
    pub use crate::list;

    #[cfg(feature = "tuple")]
    pub use crate::tuple;

    #[cfg(feature = "boolean")]
    pub use crate::boolean;

    #[cfg(feature = "num")]
    pub use crate::num;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "maybe")]
pub mod maybe;

#[cfg(feature = "dict")]
pub mod dict;

#[cfg(feature = "ord")]
pub mod ord;

#[cfg(feature = "seq")]
pub mod seq;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "tuple")]
pub mod tuple;

#[cfg(feature = "boolean")]
pub mod boolean;

#[cfg(feature = "num")]
pub mod num;

#[cfg(feature = "compose")]
pub mod compose;
