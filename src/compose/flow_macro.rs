//! The `flow!` macro.

/// Composes functions from left to right into a single closure.
///
/// `flow!(f, g, h)` is `move |x| h(g(f(x)))`, the deferred form of
/// [`pipe!`](crate::pipe). Every step must implement [`Fn`] because the
/// resulting closure can be called repeatedly.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::flow;
/// use fp_prelude::maybe::Maybe;
/// use fp_prelude::text;
///
/// let parse_positive = flow!(text::to_int, |value: Maybe<i64>| value.filter(|number| *number > 0));
///
/// assert_eq!(parse_positive("12"), Maybe::Just(12));
/// assert_eq!(parse_positive("-3"), Maybe::Nothing);
/// assert_eq!(parse_positive("twelve"), Maybe::Nothing);
/// ```
#[macro_export]
macro_rules! flow {
    ($step:expr $(,)?) => {
        $step
    };

    ($first:expr, $second:expr $(,)?) => {{
        let first = $first;
        let second = $second;
        move |input| second(first(input))
    }};

    ($first:expr, $($rest:expr),+ $(,)?) => {{
        let first = $first;
        let rest = $crate::flow!($($rest),+);
        move |input| rest(first(input))
    }};
}
