//! Error types for the Ord engine.
//!
//! Ordinary absence is reported with [`Maybe::Nothing`](crate::maybe::Maybe);
//! the only failure the engine can report is a request to order two values
//! that have no order between them.

use super::value::ValueKind;

/// Two values of kinds that cannot be ordered against each other.
///
/// Returned by [`ord::try_compare`](crate::ord::try_compare). The kinds name
/// the innermost pair that failed: comparing `[1]` against `["a"]` reports
/// `number` and `text`, not `array` and `array`.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::ord::{self, IncomparableError, ScalarKind, Value, ValueKind};
///
/// let error = ord::try_compare(&Value::from(1), &Value::from("a")).unwrap_err();
/// assert_eq!(
///     error,
///     IncomparableError {
///         left: ValueKind::Scalar(ScalarKind::Number),
///         right: ValueKind::Scalar(ScalarKind::Text),
///     }
/// );
/// assert_eq!(format!("{error}"), "cannot order number against text");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomparableError {
    /// The kind of the left value.
    pub left: ValueKind,
    /// The kind of the right value.
    pub right: ValueKind,
}

impl std::fmt::Display for IncomparableError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "cannot order {} against {}",
            self.left, self.right
        )
    }
}

impl std::error::Error for IncomparableError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ord::ScalarKind;

    #[test]
    fn test_incomparable_error_display() {
        let error = IncomparableError {
            left: ValueKind::Bool,
            right: ValueKind::Bool,
        };
        assert_eq!(
            format!("{error}"),
            "cannot order bool against bool"
        );
    }

    #[test]
    fn test_incomparable_error_display_scalars() {
        let error = IncomparableError {
            left: ValueKind::Scalar(ScalarKind::Date),
            right: ValueKind::Dict,
        };
        assert_eq!(
            format!("{error}"),
            "cannot order date against dict"
        );
    }

    #[test]
    fn test_incomparable_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(IncomparableError {
            left: ValueKind::Maybe,
            right: ValueKind::Array,
        });
        assert_eq!(
            error.to_string(),
            "cannot order maybe against array"
        );
    }
}
