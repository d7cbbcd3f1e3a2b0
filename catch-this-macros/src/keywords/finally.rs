//! Finally keyword - cleanup that always runs.
//!
//! Syntax: `finally { cleanup_code }`

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::ParseStream;
use syn::Result;

use super::parse_keyword;
use super::parsing::parse_body;

/// A parsed finally clause.
#[derive(Debug, Clone)]
pub struct FinallyClause {
    /// Cleanup body
    pub body: TokenStream,
}

/// Parse a finally clause.
pub fn parse(input: ParseStream) -> Result<FinallyClause> {
    parse_keyword(input, "finally")?;
    Ok(FinallyClause {
        body: parse_body(input)?,
    })
}

/// Generate the terminal `.finally(..)` call.
///
/// With no clause the chain still ends in `.finally(())`, which re-raises
/// an error no catch claimed.
pub fn to_call(clause: Option<&FinallyClause>) -> TokenStream {
    match clause {
        Some(clause) => {
            let body = &clause.body;
            quote! { .finally((|| { #body },)) }
        }
        None => quote! { .finally(()) },
    }
}
