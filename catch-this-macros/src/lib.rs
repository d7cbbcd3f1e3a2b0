//! Proc macros for the catch-this crate.
//!
//! A single entry point routes the marker emitted by `try_catch!` to the
//! pattern handler, which uses the shared keyword modules.

use proc_macro::TokenStream;

mod router;
mod keywords;
mod patterns;

/// Single proc macro entry point for `try_catch!`.
///
/// Input is `<crate path>; <MARKER> ...`, where the declarative macro
/// converts keywords to markers:
/// - `try { }` -> `SYNC { }`
/// - anything else -> `ERROR` / `ERROR_EMPTY`
#[proc_macro]
pub fn __try_catch_proc(input: TokenStream) -> TokenStream {
    router::route(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
