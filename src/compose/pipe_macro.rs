//! The `pipe!` macro.

/// Feeds a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` evaluates to `h(g(f(x)))`. Each step is called
/// once, so closures that consume their captures are accepted.
///
/// # Examples
///
/// ```rust
/// use fp_prelude::pipe;
/// use fp_prelude::list;
///
/// let total = pipe!(
///     vec![3, 1, 2],
///     |numbers: Vec<i32>| list::sort(&numbers),
///     |sorted: Vec<i32>| list::take(2, &sorted),
///     |smallest: Vec<i32>| list::sum(&smallest),
/// );
/// assert_eq!(total, 3);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $step:expr $(,)?) => {
        $step($value)
    };

    ($value:expr, $step:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($step($value), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn test_pipe_without_steps_returns_value() {
        assert_eq!(pipe!("unchanged"), "unchanged");
    }

    #[rstest]
    fn test_pipe_applies_steps_in_order() {
        let subtract_three = |value: i32| value - 3;
        let halve = |value: i32| value / 2;
        assert_eq!(pipe!(11, subtract_three, halve), 4);
        assert_eq!(pipe!(11, halve, subtract_three), 2);
    }

    #[rstest]
    fn test_pipe_accepts_consuming_steps() {
        let suffix = String::from("!");
        let shout = move |word: String| word + &suffix;
        assert_eq!(pipe!(String::from("go"), shout), "go!");
    }
}
