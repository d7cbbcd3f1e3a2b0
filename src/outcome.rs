//! Protected invocation and the catch chain.

use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, trace};

use crate::cleanup::Cleanup;
use crate::error::Error;

// ============================================================
// State
// ============================================================

/// What a protected call left behind.
#[derive(Debug)]
enum State {
    /// The callback returned normally.
    Clean,
    /// A panic was captured and no handler has claimed it.
    Pending(Error),
    /// A handler claimed the captured error.
    Handled,
}

impl State {
    fn error(&self) -> Option<&Error> {
        match self {
            State::Pending(err) => Some(err),
            _ => None,
        }
    }

    fn is_handled(&self) -> bool {
        matches!(self, State::Handled)
    }

    /// Run the cleanup actions, then re-raise a still pending error.
    fn finish(self, actions: impl Cleanup) {
        trace!("running cleanup actions");
        actions.run();
        if let State::Pending(err) = self {
            debug!("re-raising unhandled {}: {}", err.type_name(), err.message());
            err.resume();
        }
    }
}

// ============================================================
// Entry point
// ============================================================

/// Run `callback`, capturing any panic it raises.
///
/// Never panics itself. The returned [`Outcome`] records whether a panic
/// was captured; chain `catch`/`catch_all` on it and finish with `finally`.
///
/// Panic payloads are converted as follows:
/// - an [`Error`] (from [`throw`], [`Error::raise`] or a re-raise) is kept as-is
/// - a `Box<dyn Error + Send + Sync>` is wrapped without losing its type
/// - `&str` and `String` payloads (from `panic!`) become a [`StringError`](crate::StringError)
/// - anything else becomes a `StringError` with message `"Box<dyn Any>"`
///
/// That last case includes a concrete error passed straight to
/// `std::panic::panic_any(MyError)`: its type and message are lost, since
/// a payload can only be recognized by the types listed above. Raise
/// errors with [`throw`] or [`ThrowExt::or_throw`](crate::ThrowExt::or_throw)
/// instead so that they stay matchable.
///
/// An error that is still unhandled after `finally` continues unwinding
/// without invoking the panic hook again.
///
/// ```
/// use catch_this::{r#try, StringError};
/// use std::cell::Cell;
///
/// let message = Cell::new(String::new());
/// let cleaned = Cell::new(false);
///
/// r#try(|| panic!("oops"))
///     .catch(|e: StringError| message.set(e.message().to_string()))
///     .finally((|| cleaned.set(true),));
///
/// assert_eq!(message.take(), "oops");
/// assert!(cleaned.get());
/// ```
pub fn r#try<F: FnOnce()>(callback: F) -> Outcome {
    let state = match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(()) => State::Clean,
        Err(payload) => {
            let err = Error::from_panic(payload);
            debug!("captured {}: {}", err.type_name(), err.message());
            State::Pending(err)
        }
    };
    Outcome { state }
}

/// Raise `err` as a panic that [`r#try`] captures with its type intact.
///
/// ```
/// use catch_this::{r#try, throw};
/// use std::num::ParseIntError;
///
/// let mut caught = false;
/// r#try(|| {
///     let n: i32 = match "x".parse() {
///         Ok(n) => n,
///         Err(e) => throw::<ParseIntError>(e),
///     };
///     println!("{n}");
/// })
/// .catch(|_: ParseIntError| caught = true)
/// .finally(());
/// assert!(caught);
/// ```
#[track_caller]
pub fn throw<E: StdError + Send + Sync + 'static>(err: E) -> ! {
    Error::new(err).raise()
}

// ============================================================
// Outcome - catch chain handle
// ============================================================

/// Handle returned by [`r#try`].
///
/// Typed handlers are tried in call order; the first exact type match
/// wins and every later `catch`/`catch_all` becomes a no-op.
#[must_use = "call `finally` to run cleanup and re-raise unhandled errors"]
#[derive(Debug)]
pub struct Outcome {
    state: State,
}

impl Outcome {
    /// Handle the captured error if its concrete type is exactly `E`.
    ///
    /// `E` is usually named by the handler's parameter. Only the exact type
    /// matches; a wrapper around `E` or an error whose `source()` is `E`
    /// does not.
    ///
    /// ```
    /// use catch_this::{r#try, throw};
    /// use std::fmt;
    ///
    /// #[derive(Debug)]
    /// struct NotFound(&'static str);
    ///
    /// impl fmt::Display for NotFound {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         write!(f, "{} not found", self.0)
    ///     }
    /// }
    ///
    /// impl std::error::Error for NotFound {}
    ///
    /// let mut missing = None;
    /// r#try(|| throw(NotFound("config.toml")))
    ///     .catch(|e: std::io::Error| panic!("wrong handler: {e}"))
    ///     .catch(|e: NotFound| missing = Some(e.0))
    ///     .finally(());
    /// assert_eq!(missing, Some("config.toml"));
    /// ```
    pub fn catch<E, F>(mut self, handler: F) -> Self
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce(E),
    {
        self.state = match self.state {
            State::Pending(err) => match err.downcast::<E>() {
                Ok(e) => {
                    debug!("{} claimed by typed catch", core::any::type_name::<E>());
                    handler(e);
                    State::Handled
                }
                Err(err) => State::Pending(err),
            },
            other => other,
        };
        self
    }

    /// Same as [`catch`](Self::catch), with the type given by a sentinel value.
    ///
    /// The sentinel is only used for its type.
    ///
    /// ```
    /// use catch_this::{r#try, throw, StringError};
    ///
    /// let mut seen = String::new();
    /// r#try(|| throw(StringError::new("bad")))
    ///     .catch_like(&StringError::new(""), |e| seen = e.message().to_string())
    ///     .finally(());
    /// assert_eq!(seen, "bad");
    /// ```
    pub fn catch_like<E, F>(self, _sentinel: &E, handler: F) -> Self
    where
        E: StdError + Send + Sync + 'static,
        F: FnOnce(E),
    {
        self.catch(handler)
    }

    /// Handle the captured error whatever its type.
    ///
    /// Does nothing if no error was captured or a `catch` already claimed
    /// it. Only `finally` can follow:
    ///
    /// ```compile_fail
    /// use catch_this::r#try;
    ///
    /// r#try(|| {})
    ///     .catch_all(|_| {})
    ///     .catch(|_: std::io::Error| {})
    ///     .finally(());
    /// ```
    pub fn catch_all<F>(self, handler: F) -> Settled
    where
        F: FnOnce(Error),
    {
        let state = match self.state {
            State::Pending(err) => {
                debug!("{} claimed by catch-all", err.type_name());
                handler(err);
                State::Handled
            }
            other => other,
        };
        Settled { state }
    }

    /// Run `actions` in order, then re-raise the captured error if no
    /// handler claimed it.
    ///
    /// The actions run on every path, before the re-raise.
    ///
    /// ```
    /// use catch_this::r#try;
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// r#try(|| {
    ///     r#try(|| panic!("inner")).finally((|| log.borrow_mut().push("cleanup"),));
    /// })
    /// .catch_all(|e| log.borrow_mut().push(if e.message() == "inner" { "caught" } else { "?" }))
    /// .finally(());
    /// assert_eq!(*log.borrow(), vec!["cleanup", "caught"]);
    /// ```
    pub fn finally(self, actions: impl Cleanup) {
        self.state.finish(actions)
    }

    /// The captured error, while no handler has claimed it.
    pub fn error(&self) -> Option<&Error> {
        self.state.error()
    }

    /// Whether a handler claimed the captured error.
    pub fn is_handled(&self) -> bool {
        self.state.is_handled()
    }
}

// ============================================================
// Settled - final-only handle
// ============================================================

/// Handle returned by [`Outcome::catch_all`]; only `finally` remains.
#[must_use = "call `finally` to run cleanup"]
#[derive(Debug)]
pub struct Settled {
    state: State,
}

impl Settled {
    /// Run `actions` in order. A catch-all leaves nothing to re-raise.
    pub fn finally(self, actions: impl Cleanup) {
        self.state.finish(actions)
    }

    /// Whether a handler claimed the captured error.
    pub fn is_handled(&self) -> bool {
        self.state.is_handled()
    }
}
