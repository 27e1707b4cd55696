//! Pipelines and function composition.
//!
//! - [`pipe!`](crate::pipe): feeds a value through functions left to right
//! - [`flow!`](crate::flow): composes functions left to right into a closure
//! - [`identity`], [`constant`] and [`flip`]: small combinators
//!
//! Functions in this crate take every argument at once; there is no
//! automatic currying. A pipeline step that needs extra arguments is written
//! as a closure.
//!
//! # Examples
//!
//! ```rust
//! use fp_prelude::{flow, pipe};
//! use fp_prelude::maybe::{self, Maybe};
//! use fp_prelude::text;
//!
//! let parsed = pipe!(
//!     "  42 ",
//!     str::trim,
//!     text::to_int,
//!     |value: Maybe<i64>| maybe::map(|number| number * 2, value),
//! );
//! assert_eq!(parsed, Maybe::Just(84));
//!
//! let mirror = flow!(text::reverse, |word: String| text::append(&word, "!"));
//! assert_eq!(mirror("stressed"), "desserts!");
//! ```

mod flow_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};
