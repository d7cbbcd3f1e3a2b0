//! Sync try pattern: `try { body } [catch ...]* [finally { }]`
//!
//! Every clause becomes a closure in one `r#try(..).catch(..).finally(..)`
//! chain. Clause order is checked here so that misplaced clauses are
//! compile errors instead of handlers that can never fire.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Ident, Result};

use crate::keywords::catch::CatchClause;
use crate::keywords::finally::FinallyClause;
use crate::keywords::{self, peek_keyword};

/// Parsed sync try input.
struct SyncTryInput {
    body: TokenStream,
    /// Catch clauses in declaration order
    catches: Vec<CatchClause>,
    finally: Option<FinallyClause>,
}

impl Parse for SyncTryInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // Parse try body: { ... }
        let content;
        braced!(content in input);
        let body: TokenStream = content.parse()?;

        let mut catches: Vec<CatchClause> = Vec::new();
        let mut finally: Option<FinallyClause> = None;

        while !input.is_empty() {
            if finally.is_some() {
                if peek_keyword(input, "finally") {
                    return Err(input.error(
                        "multiple `finally` blocks are not allowed; combine into a single block",
                    ));
                }
                return Err(input.error("`finally` must be the last clause"));
            }

            if peek_keyword(input, "catch") {
                let clause = keywords::catch::parse(input)?;
                if catches.iter().any(CatchClause::is_catch_all) {
                    return Err(syn::Error::new(
                        clause.catch_span,
                        "unreachable `catch`: an earlier catch-all already handles every error",
                    ));
                }
                let typed = !clause.is_catch_all();
                let catch_span = clause.catch_span;
                catches.push(clause);

                // `catch Type { } else { }` - catch-all after a typed catch
                if typed && input.peek(syn::Token![else]) {
                    input.parse::<syn::Token![else]>()?;
                    catches.push(CatchClause {
                        catch_span,
                        type_path: None,
                        binding: keywords::parsing::underscore_ident(),
                        body: keywords::parsing::parse_body(input)?,
                    });
                }
            } else if peek_keyword(input, "finally") {
                finally = Some(keywords::finally::parse(input)?);
            } else if input.peek(syn::Token![else]) {
                return Err(input.error("`else` must follow a typed catch: `catch Type { } else { }`"));
            } else if input.peek(Ident) {
                let ident: Ident = input.parse()?;
                return Err(syn::Error::new(
                    ident.span(),
                    format!("expected `catch` or `finally`, found `{}`", ident),
                ));
            } else {
                return Err(input.error("expected `catch` or `finally`"));
            }
        }

        Ok(SyncTryInput {
            body,
            catches,
            finally,
        })
    }
}

/// Process a sync try pattern into the combinator chain.
pub fn process(krate: TokenStream, input: TokenStream) -> Result<TokenStream> {
    let parsed: SyncTryInput = syn::parse2(input)?;
    Ok(generate(&krate, &parsed))
}

fn generate(krate: &TokenStream, input: &SyncTryInput) -> TokenStream {
    let try_fn = Ident::new_raw("try", Span::call_site());
    let body = &input.body;
    let catches = input.catches.iter().map(|clause| clause.to_call(krate));
    let finally = keywords::finally::to_call(input.finally.as_ref());

    quote! {
        #krate::#try_fn(|| { #body })
            #(#catches)*
            #finally
    }
}
