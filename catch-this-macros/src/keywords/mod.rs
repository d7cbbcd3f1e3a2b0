//! Keyword modules - each handles parsing and code generation for one keyword.
//!
//! ## Architecture
//!
//! - `parsing` - Shared parsing utilities (type paths, bindings)
//! - `catch` - typed and catch-all handlers
//! - `finally` - cleanup

pub mod parsing;

pub mod catch;
pub mod finally;

use syn::Ident;

/// Helper to check if an identifier is a binding (for catch-all detection).
/// Returns true for lowercase identifiers (e.g., `e`) or underscore-prefixed (e.g., `_e`).
pub fn is_lowercase_ident(ident: &Ident) -> bool {
    let s = ident.to_string();
    s.chars().next().map(|c| c.is_lowercase() || c == '_').unwrap_or(false)
}

/// Helper to peek for a keyword without consuming.
pub fn peek_keyword(input: syn::parse::ParseStream, keyword: &str) -> bool {
    input.peek(Ident) && input.fork().parse::<Ident>().map(|id| id == keyword).unwrap_or(false)
}

/// Parse a keyword, returning error if not found.
pub fn parse_keyword(input: syn::parse::ParseStream, keyword: &str) -> syn::Result<Ident> {
    let ident: Ident = input.parse()?;
    if ident == keyword {
        Ok(ident)
    } else {
        Err(syn::Error::new(ident.span(), format!("expected `{}`", keyword)))
    }
}
