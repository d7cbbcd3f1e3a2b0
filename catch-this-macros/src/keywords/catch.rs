//! Catch keyword - error recovery.
//!
//! Syntax variants:
//! - `catch { recovery }` - catch-all, no binding
//! - `catch e { recovery }` - catch-all with binding
//! - `catch Type(e) { recovery }` - typed catch
//! - `catch Type { recovery }` - typed catch, no binding

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::ParseStream;
use syn::{Ident, Result};

use super::parsing::{parse_binding, parse_body, parse_type_path, peek_brace, underscore_ident};
use super::{is_lowercase_ident, parse_keyword};

/// A parsed catch clause.
#[derive(Debug, Clone)]
pub struct CatchClause {
    /// Span of the `catch` keyword (for error reporting)
    pub catch_span: Span,
    /// Type path (None for catch-all)
    pub type_path: Option<TokenStream>,
    /// Error binding identifier
    pub binding: Ident,
    /// Recovery body
    pub body: TokenStream,
}

impl CatchClause {
    /// Whether this clause claims every error.
    pub fn is_catch_all(&self) -> bool {
        self.type_path.is_none()
    }

    /// Generate the chained handler call.
    pub fn to_call(&self, krate: &TokenStream) -> TokenStream {
        let binding = &self.binding;
        let body = &self.body;
        match &self.type_path {
            Some(ty) => quote! {
                .catch(|#binding: #ty| { #body })
            },
            None => quote! {
                .catch_all(|#binding: #krate::Error| { #body })
            },
        }
    }
}

/// Parse a catch clause.
pub fn parse(input: ParseStream) -> Result<CatchClause> {
    let catch_kw = parse_keyword(input, "catch")?;
    let catch_span = catch_kw.span();

    // catch { } - catch-all without binding
    if peek_brace(input) {
        return Ok(CatchClause {
            catch_span,
            type_path: None,
            binding: underscore_ident(),
            body: parse_body(input)?,
        });
    }

    // catch _ { } - catch-all, explicit discard
    if input.peek(syn::Token![_]) {
        input.parse::<syn::Token![_]>()?;
        return Ok(CatchClause {
            catch_span,
            type_path: None,
            binding: underscore_ident(),
            body: parse_body(input)?,
        });
    }

    // catch e { } - catch-all with binding
    let fork = input.fork();
    if let Ok(ident) = fork.parse::<Ident>() {
        if is_lowercase_ident(&ident) && peek_brace(&fork) {
            input.parse::<Ident>()?;
            return Ok(CatchClause {
                catch_span,
                type_path: None,
                binding: ident,
                body: parse_body(input)?,
            });
        }
    }

    // catch Type(e) { } or catch Type { }
    let type_path = parse_type_path(input)?;
    let binding = if input.peek(syn::token::Paren) {
        parse_binding(input)?
    } else if peek_brace(input) {
        underscore_ident()
    } else {
        return Err(input.error("expected `(binding)` or `{` after the catch type"));
    };

    Ok(CatchClause {
        catch_span,
        type_path: Some(type_path),
        binding,
        body: parse_body(input)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse_test(tokens: TokenStream) -> Result<CatchClause> {
        syn::parse::Parser::parse2(parse, tokens)
    }

    #[test]
    fn test_catch_no_binding() {
        let clause = parse_test(parse_quote! { catch { 42 } }).unwrap();
        assert!(clause.is_catch_all());
        assert_eq!(clause.binding.to_string(), "_");
    }

    #[test]
    fn test_catch_with_binding() {
        let clause = parse_test(parse_quote! { catch e { log(e) } }).unwrap();
        assert!(clause.is_catch_all());
        assert_eq!(clause.binding.to_string(), "e");
    }

    #[test]
    fn test_catch_underscore() {
        let clause = parse_test(parse_quote! { catch _ { } }).unwrap();
        assert!(clause.is_catch_all());
    }

    #[test]
    fn test_typed_catch() {
        let clause = parse_test(parse_quote! { catch std::io::Error(e) { 42 } }).unwrap();
        assert_eq!(clause.type_path.unwrap().to_string(), "std :: io :: Error");
        assert_eq!(clause.binding.to_string(), "e");
    }

    #[test]
    fn test_typed_shorthand() {
        let clause = parse_test(parse_quote! { catch ParseIntError { 42 } }).unwrap();
        assert!(!clause.is_catch_all());
        // Shorthand gets underscore binding
        assert_eq!(clause.binding.to_string(), "_");
    }

    #[test]
    fn test_lowercase_path_is_typed() {
        let clause = parse_test(parse_quote! { catch errors::Timeout(t) { } }).unwrap();
        assert_eq!(clause.type_path.unwrap().to_string(), "errors :: Timeout");
    }

    #[test]
    fn test_missing_body() {
        assert!(parse_test(parse_quote! { catch Timeout(t) }).is_err());
    }

    #[test]
    fn test_extra_binding_tokens() {
        assert!(parse_test(parse_quote! { catch Timeout(a, b) { } }).is_err());
    }

    #[test]
    fn test_catch_all_call() {
        let clause = parse_test(parse_quote! { catch e { drop(e) } }).unwrap();
        let call = clause.to_call(&quote! { ::catch_this }).to_string();
        assert!(call.contains("catch_all"));
        assert!(call.contains("catch_this"));
    }

    #[test]
    fn test_typed_call() {
        let clause = parse_test(parse_quote! { catch Timeout(t) { drop(t) } }).unwrap();
        let call = clause.to_call(&quote! { ::catch_this }).to_string();
        assert!(call.contains("Timeout"));
        assert!(!call.contains("catch_all"));
    }
}
