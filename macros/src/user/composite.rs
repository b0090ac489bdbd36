//! `#[derive(Composite)]`
//!
//! ```ignore
//! #[derive(Composite)]
//! #[composite(base = base, fields(name, age), strength = Weak, eq = independent(name), std)]
//! struct Employee {
//!     base: Person,
//!     name: String,
//!     age: u32,
//! }
//! ```
//!
//! Expands to:
//! - `Field<Employee>` for `At<I>` of every member mentioned (base, fields, eq)
//! - `Composite` with `Fields = Inherit<At<0>, Cons<At<1>, Cons<At<2>, Nil>>>`
//! - `Compare` through `compare_fields` / `equivalent_fields`
//! - `Equality` with `Consistent` or `Independent<..>`
//! - with `std`: `PartialEq` + `PartialOrd`, and `Eq` + `Ord` when a total
//!   strength is requested and equality is consistent

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Data, DeriveInput, Fields, Ident, Index, LitStr, Member, Token, Type,
};

use crate::common::{
    check_duplicate_members, expect_eq, parse_member_list, peek_keyword, try_parse_keyword,
};

// =============================================================================
// Attribute Syntax
// =============================================================================

const KEYS: &[&str] = &["fields", "base", "strength", "eq", "std"];

enum EqDecl {
    Consistent,
    Independent(Vec<Member>),
}

/// Parsed `#[composite(...)]`.
struct CompositeArgs {
    fields: Vec<Member>,
    base: Option<Member>,
    strength: Option<Ident>,
    eq: EqDecl,
    std: bool,
}

impl Parse for CompositeArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut fields = None;
        let mut base = None;
        let mut strength = None;
        let mut eq = None;
        let mut with_std = false;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            let name = key.to_string();
            if !KEYS.contains(&name.as_str()) {
                return Err(syn::Error::new(
                    key.span(),
                    format!("unknown key `{}`, expected one of: {}", name, KEYS.join(", ")),
                ));
            }

            let duplicate = match name.as_str() {
                "fields" => fields.replace(parse_member_list(input)?).is_some(),
                "base" => {
                    expect_eq(input, &key)?;
                    base.replace(input.parse::<Member>()?).is_some()
                }
                "strength" => {
                    expect_eq(input, &key)?;
                    strength.replace(parse_strength(input)?).is_some()
                }
                "eq" => eq.replace(parse_eq(input, &key)?).is_some(),
                _ => std::mem::replace(&mut with_std, true),
            };
            if duplicate {
                return Err(syn::Error::new(key.span(), format!("`{}` given twice", name)));
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(CompositeArgs {
            fields: fields.unwrap_or_default(),
            base,
            strength,
            eq: eq.unwrap_or(EqDecl::Consistent),
            std: with_std,
        })
    }
}

fn parse_strength(input: ParseStream) -> syn::Result<Ident> {
    let ident: Ident = input.parse()?;
    match ident.to_string().as_str() {
        "Strong" | "Weak" | "Partial" => Ok(ident),
        other => Err(syn::Error::new(
            ident.span(),
            format!("unknown strength `{}`, expected `Strong`, `Weak` or `Partial`", other),
        )),
    }
}

/// `eq = consistent` or `eq = independent(a, b)`.
///
/// A bare `eq(a, b)` is rejected: an equality field list that can disagree
/// with the ordering must be spelled out as independent.
fn parse_eq(input: ParseStream, key: &Ident) -> syn::Result<EqDecl> {
    if input.peek(syn::token::Paren) {
        return Err(syn::Error::new(
            key.span(),
            "equality over its own fields can disagree with the ordering; \
             write `eq = independent(..)` to declare it",
        ));
    }
    expect_eq(input, key)?;

    if try_parse_keyword(input, "consistent")? {
        return Ok(EqDecl::Consistent);
    }
    if peek_keyword(input, "independent") {
        let kw: Ident = input.parse()?;
        let members = parse_member_list(input)?;
        if members.is_empty() {
            return Err(syn::Error::new(kw.span(), "`independent()` needs at least one field"));
        }
        check_duplicate_members(&members)?;
        return Ok(EqDecl::Independent(members));
    }
    Err(input.error("expected `consistent` or `independent(..)`"))
}

// =============================================================================
// Struct Members
// =============================================================================

/// A struct member resolved to its declaration position.
struct Resolved {
    index: usize,
    member: Member,
    name: String,
    ty: Type,
}

fn resolve(data: &Fields, member: &Member) -> syn::Result<Resolved> {
    let found = match member {
        Member::Named(ident) => data
            .iter()
            .enumerate()
            .find(|(_, f)| f.ident.as_ref() == Some(ident)),
        Member::Unnamed(index) => data
            .iter()
            .enumerate()
            .nth(index.index as usize)
            .filter(|(_, f)| f.ident.is_none()),
    };
    let (index, field) =
        found.ok_or_else(|| syn::Error::new_spanned(member, "no such field on this struct"))?;

    let name = match member {
        Member::Named(ident) => ident.to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    };
    Ok(Resolved { index, member: member.clone(), name, ty: field.ty.clone() })
}

/// `Cons<At<i>, Cons<At<j>, Nil>>`, optionally behind `Inherit<At<b>, ..>`.
fn field_list(own: &[Resolved], base: Option<&Resolved>) -> TokenStream2 {
    let mut list = quote! { ::tola_ord::Nil };
    for field in own.iter().rev() {
        let at = Index::from(field.index);
        list = quote! { ::tola_ord::Cons<::tola_ord::At<#at>, #list> };
    }
    if let Some(base) = base {
        let at = Index::from(base.index);
        list = quote! { ::tola_ord::Inherit<::tola_ord::At<#at>, #list> };
    }
    list
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_derive_composite(input: DeriveInput) -> syn::Result<TokenStream2> {
    let data = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Composite)] supports structs only",
            ))
        }
    };

    let mut attrs = input.attrs.iter().filter(|a| a.path().is_ident("composite"));
    let attr = attrs.next().ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "missing #[composite(fields(..))]: comparable fields must be listed explicitly",
        )
    })?;
    if let Some(extra) = attrs.next() {
        return Err(syn::Error::new_spanned(extra, "#[composite] given twice"));
    }
    let args: CompositeArgs = attr.parse_args()?;

    if args.fields.is_empty() && args.base.is_none() {
        return Err(syn::Error::new_spanned(
            attr,
            "a composite needs at least one field or a base",
        ));
    }
    check_duplicate_members(&args.fields)?;
    if let Some(base) = &args.base {
        if args.fields.contains(base) {
            return Err(syn::Error::new_spanned(base, "the base is already compared first"));
        }
    }

    let own = args
        .fields
        .iter()
        .map(|m| resolve(data, m))
        .collect::<syn::Result<Vec<_>>>()?;
    let base = args.base.as_ref().map(|m| resolve(data, m)).transpose()?;
    let eq_fields = match &args.eq {
        EqDecl::Consistent => Vec::new(),
        EqDecl::Independent(members) => members
            .iter()
            .map(|m| resolve(data, m))
            .collect::<syn::Result<Vec<_>>>()?,
    };

    let name = &input.ident;
    let name_str = LitStr::new(&name.to_string(), name.span());
    let generic = !input.generics.params.is_empty();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let this = quote! { #name #ty_generics };

    // One accessor per distinct position.
    let mut accessors: Vec<&Resolved> = Vec::new();
    for field in base.iter().chain(&own).chain(&eq_fields) {
        if !accessors.iter().any(|a| a.index == field.index) {
            accessors.push(field);
        }
    }

    // Generic structs carry their field bounds on every impl.
    let mut bounds: Vec<TokenStream2> = where_clause
        .map(|w| w.predicates.iter().map(|p| quote! { #p }).collect())
        .unwrap_or_default();
    if generic {
        for field in &accessors {
            let ty = &field.ty;
            bounds.push(quote! { #ty: ::tola_ord::Compare });
        }
        if let Some(base) = &base {
            let ty = &base.ty;
            bounds.push(quote! { #ty: ::tola_ord::Composite + 'static });
        }
    }
    let where_all = quote! { where #(#bounds,)* };

    let field_impls = accessors.iter().map(|field| {
        let at = Index::from(field.index);
        let ty = &field.ty;
        let member = &field.member;
        let field_name = LitStr::new(&field.name, name.span());
        quote! {
            impl #impl_generics ::tola_ord::Field<#this> for ::tola_ord::At<#at> #where_all {
                type Value = #ty;
                const OWNER: &'static str = #name_str;
                const NAME: &'static str = #field_name;

                #[inline(always)]
                fn get(value: &#this) -> &#ty {
                    &value.#member
                }
            }
        }
    });

    let fields_ty = field_list(&own, base.as_ref());
    let strength = match &args.strength {
        Some(ident) => quote! { ::tola_ord::#ident },
        None => quote! { <#fields_ty as ::tola_ord::FieldList<#this>>::Strength },
    };

    let lexicographic = if generic {
        quote! {
            #fields_ty: ::tola_ord::Lexicographic<#this, <#this as ::tola_ord::Composite>::Strength>,
        }
    } else {
        TokenStream2::new()
    };

    let mode = match &args.eq {
        EqDecl::Consistent => quote! { ::tola_ord::Consistent },
        EqDecl::Independent(_) => {
            let list = field_list(&eq_fields, None);
            quote! { ::tola_ord::Independent<#list> }
        }
    };

    let std_impls = if args.std {
        expand_std_impls(&input, &args, &where_all, &lexicographic)
    } else {
        TokenStream2::new()
    };

    Ok(quote! {
        #(#field_impls)*

        impl #impl_generics ::tola_ord::Composite for #this #where_all {
            type Fields = #fields_ty;
            type Strength = #strength;
            const NAME: &'static str = #name_str;
        }

        impl #impl_generics ::tola_ord::Compare for #this #where_all #lexicographic {
            type Strength = <Self as ::tola_ord::Composite>::Strength;

            #[inline]
            fn compare(&self, other: &Self) -> ::tola_ord::ResultOf<Self> {
                ::tola_ord::compare_fields(self, other)
            }

            #[inline]
            fn equivalent(&self, other: &Self) -> bool {
                ::tola_ord::equivalent_fields(self, other)
            }
        }

        impl #impl_generics ::tola_ord::Equality for #this #where_all #lexicographic {
            type Mode = #mode;
        }

        #std_impls
    })
}

/// `PartialEq`/`PartialOrd`, plus `Eq`/`Ord` for requested total strengths
/// with consistent equality.
fn expand_std_impls(
    input: &DeriveInput,
    args: &CompositeArgs,
    where_all: &TokenStream2,
    lexicographic: &TokenStream2,
) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();

    let partial = quote! {
        impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #where_all #lexicographic {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::tola_ord::equals(self, other)
            }
        }

        impl #impl_generics ::core::cmp::PartialOrd for #name #ty_generics #where_all #lexicographic {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::tola_ord::OrderingResult::to_std(::tola_ord::Compare::compare(self, other))
            }
        }
    };

    let total = matches!(
        args.strength.as_ref().map(Ident::to_string).as_deref(),
        Some("Strong" | "Weak")
    );
    if !total || !matches!(args.eq, EqDecl::Consistent) {
        return partial;
    }

    quote! {
        #partial

        impl #impl_generics ::core::cmp::Eq for #name #ty_generics #where_all #lexicographic {}

        impl #impl_generics ::core::cmp::Ord for #name #ty_generics #where_all #lexicographic {
            #[inline]
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                <<Self as ::tola_ord::Compare>::Strength as ::tola_ord::Total>::to_ordering(
                    ::tola_ord::Compare::compare(self, other),
                )
            }
        }
    }
}
