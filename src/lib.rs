//! catch-this - try/catch/finally over panics
//!
//! # Overview
//!
//! `catch-this` runs a block under a panic boundary, dispatches a captured
//! panic to handlers matched by exact error type, and always runs cleanup.
//! An error no handler claims is raised again after the cleanup ran.
//!
//! # Quick Start
//!
//! ```
//! use catch_this::{r#try, throw, StringError};
//! use std::cell::RefCell;
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct ValueError(String);
//!
//! impl fmt::Display for ValueError {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(&self.0)
//!     }
//! }
//!
//! impl std::error::Error for ValueError {}
//!
//! let log = RefCell::new(Vec::new());
//!
//! r#try(|| throw(ValueError("bad".into())))
//!     .catch(|_: StringError| log.borrow_mut().push("plain panic".to_string()))
//!     .catch_all(|e| log.borrow_mut().push(format!("caught {}", e)))
//!     .finally((|| log.borrow_mut().push("cleanup".to_string()),));
//!
//! assert_eq!(*log.borrow(), vec!["caught bad", "cleanup"]);
//! ```
//!
//! # Operations
//!
//! | Operation | Description |
//! |-----------|-------------|
//! | `r#try(f)` | Run `f`, capture a panic as an [`Error`] |
//! | `.catch(\|e: T\| { })` | Handle only if the error's type is exactly `T` |
//! | `.catch_like(&sentinel, \|e\| { })` | Same, type taken from a sentinel value |
//! | `.catch_all(\|e\| { })` | Handle any error; only `finally` may follow |
//! | `.finally(actions)` | Run cleanup in order, re-raise if unhandled |
//! | `throw(err)` | Panic with an error [`r#try`] captures by type |
//! | `result.or_throw()` | Unwrap or throw, see [`ThrowExt`] |
//!
//! # Block syntax
//!
//! ```
//! use catch_this::{try_catch, StringError};
//!
//! let mut seen = None;
//! let mut cleaned = false;
//! try_catch! {
//!     try { panic!("oops") }
//!     catch StringError(e) { seen = Some(e.message().to_string()) }
//!     catch e { unreachable!("already handled: {}", e) }
//!     finally { cleaned = true }
//! }
//! assert_eq!(seen.as_deref(), Some("oops"));
//! assert!(cleaned);
//! ```
//!
//! # Panics
//!
//! Handlers and cleanup actions run outside the boundary; a panic inside
//! them propagates to the caller. The crate needs `panic = "unwind"`.

// ============================================================
// Modules
// ============================================================

mod cleanup;
mod error;
mod ext;
mod macros;
mod outcome;

// ============================================================
// Re-exports
// ============================================================

pub use cleanup::Cleanup;
pub use error::{Error, StringError};
pub use ext::ThrowExt;
pub use outcome::{r#try, throw, Outcome, Settled};

// Re-export proc-macro crate for `try_catch!` expansion
#[doc(hidden)]
pub use catch_this_macros;
