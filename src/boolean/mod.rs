//! Boolean combinators in function form.
//!
//! ```rust
//! use fp_prelude::boolean;
//!
//! let flags = [true, false, true];
//! assert!(flags.iter().copied().reduce(boolean::xor).is_some_and(boolean::not));
//! ```

/// Logical or.
#[inline]
#[must_use]
pub const fn or(left: bool, right: bool) -> bool {
    left || right
}

/// Logical and.
#[inline]
#[must_use]
pub const fn and(left: bool, right: bool) -> bool {
    left && right
}

/// Logical negation.
#[inline]
#[must_use]
pub const fn not(value: bool) -> bool {
    !value
}

/// Exclusive or: `true` when exactly one side is `true`.
#[inline]
#[must_use]
pub const fn xor(left: bool, right: bool) -> bool {
    left != right
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, false, false, false)]
    #[case(false, true, true, false, true)]
    #[case(true, false, true, false, true)]
    #[case(true, true, true, true, false)]
    fn test_truth_table(
        #[case] left: bool,
        #[case] right: bool,
        #[case] expected_or: bool,
        #[case] expected_and: bool,
        #[case] expected_xor: bool,
    ) {
        assert_eq!(or(left, right), expected_or);
        assert_eq!(and(left, right), expected_and);
        assert_eq!(xor(left, right), expected_xor);
        assert_eq!(not(left), !left);
    }
}
