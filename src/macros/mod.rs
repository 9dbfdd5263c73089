//! Failure-construction macros.

/// Creates a [`Failure`](crate::Failure) from a format string.
///
/// Shorthand for `Failure::new(format!(...))`, handy inside failure
/// producers.
///
/// # Examples
///
/// ```
/// use step_rail::fail;
///
/// let user_id = 42;
/// let failure = fail!("no account for user {}", user_id);
/// assert_eq!(failure.message(), "no account for user 42");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Failure::new($crate::__private::format!($($arg)*))
    };
}
