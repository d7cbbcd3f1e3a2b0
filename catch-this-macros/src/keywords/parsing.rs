//! Shared parsing utilities for keyword modules.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::ParseStream;
use syn::{braced, token, Ident, Result};

/// Parse type path (handles paths like `std::io::Error`).
pub fn parse_type_path(input: ParseStream) -> Result<TokenStream> {
    let mut tokens = Vec::new();

    // Leading `::` for absolute paths
    if input.peek(syn::Token![::]) {
        input.parse::<syn::Token![::]>()?;
        tokens.push(quote! { :: });
    }

    // First segment
    let ident: Ident = input.parse()?;
    tokens.push(quote! { #ident });

    // Additional path segments
    while input.peek(syn::Token![::]) {
        input.parse::<syn::Token![::]>()?;
        let seg: Ident = input.parse()?;
        tokens.push(quote! { :: #seg });
    }

    Ok(tokens.into_iter().collect())
}

/// Parse binding: `(e)` or `(_)`.
pub fn parse_binding(input: ParseStream) -> Result<Ident> {
    let content;
    syn::parenthesized!(content in input);
    let binding = if content.peek(syn::Token![_]) {
        content.parse::<syn::Token![_]>()?;
        underscore_ident()
    } else {
        content.parse()?
    };
    if !content.is_empty() {
        return Err(content.error("expected a single binding: `Type(e)`"));
    }
    Ok(binding)
}

/// Parse a braced body, returning its contents.
pub fn parse_body(input: ParseStream) -> Result<TokenStream> {
    let content;
    braced!(content in input);
    content.parse()
}

/// Whether the next token is a `{ }` block.
pub fn peek_brace(input: ParseStream) -> bool {
    input.peek(token::Brace)
}

/// The `_` binding used when a clause names no binding.
pub fn underscore_ident() -> Ident {
    Ident::new("_", Span::call_site())
}
