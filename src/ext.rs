//! Extension trait for Result types.

use std::error::Error as StdError;

use crate::error::Error;

/// Extension trait for raising the error of a `Result` as a panic.
///
/// Lets `?`-style code run inside [`r#try`](crate::r#try), where the
/// callback returns nothing:
///
/// ```
/// use catch_this::{r#try, ThrowExt};
/// use std::num::ParseIntError;
///
/// let mut total = 0;
/// let mut bad_input = false;
/// r#try(|| {
///     total += "40".parse::<i32>().or_throw();
///     total += "two".parse::<i32>().or_throw();
/// })
/// .catch(|_: ParseIntError| bad_input = true)
/// .finally(());
///
/// assert_eq!(total, 40);
/// assert!(bad_input);
/// ```
pub trait ThrowExt<T> {
    /// Return the value, or throw the error with its type intact.
    fn or_throw(self) -> T;

    /// Return the value, or throw a generic error with `msg` as message.
    fn or_throw_msg(self, msg: impl Into<String>) -> T;
}

impl<T, E: StdError + Send + Sync + 'static> ThrowExt<T> for Result<T, E> {
    #[track_caller]
    fn or_throw(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => Error::new(e).raise(),
        }
    }

    #[track_caller]
    fn or_throw_msg(self, msg: impl Into<String>) -> T {
        match self {
            Ok(v) => v,
            Err(_) => Error::msg(msg).raise(),
        }
    }
}

impl<T> ThrowExt<T> for Option<T> {
    #[track_caller]
    fn or_throw(self) -> T {
        match self {
            Some(v) => v,
            None => Error::msg("called `or_throw` on a `None` value").raise(),
        }
    }

    #[track_caller]
    fn or_throw_msg(self, msg: impl Into<String>) -> T {
        match self {
            Some(v) => v,
            None => Error::msg(msg).raise(),
        }
    }
}
