//! Common parsing utilities
//!
//! Shared parsing helpers for consistent attribute syntax.

use syn::{
    parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Member, Token,
};

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

/// Parse `(a, b, 0, ...)` as a list of struct members
pub fn parse_member_list(input: ParseStream) -> syn::Result<Vec<Member>> {
    let content;
    parenthesized!(content in input);
    parse_comma_separated(&content)
}

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}

/// Consume an identifier if it matches the keyword
pub fn try_parse_keyword(input: ParseStream, keyword: &str) -> syn::Result<bool> {
    if peek_keyword(input, keyword) {
        let _: Ident = input.parse()?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Consume the `=` after a key, with an error naming the key
pub fn expect_eq(input: ParseStream, key: &Ident) -> syn::Result<()> {
    if input.peek(Token![=]) {
        input.parse::<Token![=]>()?;
        Ok(())
    } else {
        Err(syn::Error::new(key.span(), format!("expected `{} = ...`", key)))
    }
}

// =============================================================================
// Duplicate Detection
// =============================================================================

/// Error on the second occurrence of any member
pub fn check_duplicate_members(members: &[Member]) -> syn::Result<()> {
    for (i, member) in members.iter().enumerate() {
        if members[..i].contains(member) {
            return Err(syn::Error::new_spanned(member, "field listed twice"));
        }
    }
    Ok(())
}
