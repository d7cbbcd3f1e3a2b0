//! The `try_catch!` macro - block syntax over the `r#try` chain.
//!
//! This declarative macro catches the `try` keyword and routes to the
//! proc macro with a pattern marker and the `$crate` path.

/// try/catch/finally block syntax.
///
/// Expands to [`r#try`](crate::r#try) followed by one `catch`/`catch_all`
/// call per clause and a closing `finally`. Every clause body becomes a
/// closure, so `return`, `break` and `?` inside them act on the closure.
///
/// # Clauses
///
/// | Clause | Expands to |
/// |--------|------------|
/// | `catch Type(e) { }` | `.catch(\|e: Type\| { })` |
/// | `catch Type { }` | `.catch(\|_: Type\| { })` |
/// | `catch e { }` | `.catch_all(\|e: Error\| { })` |
/// | `catch { }` | `.catch_all(\|_: Error\| { })` |
/// | `finally { }` | `.finally((\|\| { },))` |
///
/// Without a `finally` clause the chain still ends in `.finally(())`, so an
/// error no clause claims is raised again.
///
/// ## Typed catch
/// ```
/// use catch_this::{throw, try_catch};
/// use std::num::ParseIntError;
///
/// let mut parsed = 0;
/// let mut failed = false;
/// try_catch! {
///     try {
///         parsed = match "nine".parse::<i32>() {
///             Ok(n) => n,
///             Err(e) => throw(e),
///         };
///     }
///     catch ParseIntError { failed = true }
/// }
/// assert_eq!(parsed, 0);
/// assert!(failed);
/// ```
///
/// ## Unhandled errors are raised again
/// ```should_panic
/// use catch_this::try_catch;
///
/// try_catch! {
///     try { panic!("boom") }
///     catch std::io::Error(e) { println!("io: {}", e) }
///     finally { println!("cleanup runs first") }
/// }
/// ```
///
/// ## A catch-all must come last
/// ```compile_fail
/// use catch_this::try_catch;
///
/// try_catch! {
///     try { }
///     catch e { }
///     catch std::io::Error(e) { }
/// }
/// ```
#[macro_export]
macro_rules! try_catch {
    // try { } clauses...
    (try { $($body:tt)* } $($rest:tt)*) => {
        $crate::catch_this_macros::__try_catch_proc!($crate; SYNC { $($body)* } $($rest)*)
    };

    // Catch-all: first token preserved with span, proc macro reports the error
    ($first:tt $($rest:tt)*) => {
        $crate::catch_this_macros::__try_catch_proc!($crate; ERROR $first $($rest)*)
    };

    // Empty input
    () => {
        $crate::catch_this_macros::__try_catch_proc!($crate; ERROR_EMPTY)
    };
}
