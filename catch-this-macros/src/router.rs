//! Pattern router - splits off the crate path and routes on the marker token.

use proc_macro2::{Span, TokenStream, TokenTree};
use syn::{Error, Result};

use crate::patterns::sync;

/// Route input to the appropriate pattern handler based on marker token.
///
/// Input: `<crate path> ; MARKER rest...`
pub fn route(input: TokenStream) -> Result<TokenStream> {
    let mut iter = input.into_iter().peekable();

    // Crate path (`$crate` from the declarative macro) up to the first `;`
    let mut krate = TokenStream::new();
    loop {
        match iter.next() {
            Some(TokenTree::Punct(p)) if p.as_char() == ';' => break,
            Some(tt) => krate.extend(core::iter::once(tt)),
            None => {
                return Err(Error::new(
                    Span::call_site(),
                    "missing crate path in __try_catch_proc input",
                ));
            }
        }
    }

    // Next token should be the pattern marker
    let marker = match iter.next() {
        Some(TokenTree::Ident(id)) => id,
        Some(other) => {
            return Err(Error::new_spanned(other, "expected pattern marker"));
        }
        None => {
            return Err(Error::new(Span::call_site(), "empty input to __try_catch_proc"));
        }
    };

    let rest: TokenStream = iter.collect();

    match marker.to_string().as_str() {
        "SYNC" => sync::process(krate, rest),
        // Unified error handler with proper spans
        "ERROR" => {
            let first = rest.into_iter().next();
            let (span, token_str) = first
                .map(|t| (t.span(), t.to_string()))
                .unwrap_or_else(|| (Span::call_site(), "?".to_string()));

            if token_str == "try" {
                Err(Error::new(span, "`try` requires a body: `try { ... }`"))
            } else {
                Err(Error::new(span, format!("expected `try`, found `{}`", token_str)))
            }
        }
        "ERROR_EMPTY" => Err(Error::new(Span::call_site(), "empty try_catch! block")),
        other => Err(Error::new(
            marker.span(),
            format!("unknown pattern marker: {}", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_routes_sync() {
        let out = route(quote! { ::catch_this; SYNC { run(); } }).unwrap();
        let out = out.to_string();
        assert!(out.contains(":: catch_this"));
        assert!(out.contains("finally"));
    }

    #[test]
    fn test_missing_body() {
        let err = route(quote! { ::catch_this; ERROR try }).unwrap_err();
        assert!(err.to_string().contains("requires a body"));
    }

    #[test]
    fn test_wrong_first_token() {
        let err = route(quote! { ::catch_this; ERROR catch }).unwrap_err();
        assert!(err.to_string().contains("expected `try`, found `catch`"));
    }

    #[test]
    fn test_empty() {
        let err = route(quote! { ::catch_this; ERROR_EMPTY }).unwrap_err();
        assert_eq!(err.to_string(), "empty try_catch! block");
    }

    #[test]
    fn test_missing_crate_path() {
        assert!(route(quote! { SYNC { } }).is_err());
    }
}
