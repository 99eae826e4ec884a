//! Macros for SeedForge entity shapes.

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{parse_macro_input, Attribute, DeriveInput, Expr, ItemStruct, Lit, Meta};

mod seed_entity;

/// Marks a struct as a seed entity shape.
///
/// Adds `Clone`, `Debug`, `PartialEq` and the `SeedEntity` derive.
#[proc_macro_attribute]
pub fn seed_entity(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    let name = &input.ident;
    let vis = &input.vis;
    let generics = &input.generics;
    let attrs: Vec<_> = input.attrs.iter().collect();
    let fields = &input.fields;
    let semi = input.semi_token;

    let expanded = quote! {
        #[derive(Clone, Debug, PartialEq, ::seedforge::SeedEntity)]
        #(#attrs)*
        #vis struct #name #generics #fields #semi
    };
    expanded.into()
}

/// Derives `SeedEntity`, generating the shape descriptor.
///
/// Field attributes:
/// - `#[seed(id)]` marks the identifier field (default: the field named `id`)
/// - `#[seed(rename = "...")]` matches the field under another seed name
#[proc_macro_derive(SeedEntity, attributes(seed))]
pub fn derive_seed_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    seed_entity::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn get_attribute<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name))
}

fn parse_attribute_metas(attr: &Attribute) -> syn::Result<Vec<Meta>> {
    let meta_list = attr.meta.require_list()?;
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let nested = parser.parse2(meta_list.tokens.clone())?;
    Ok(nested.into_iter().collect())
}

fn parse_attribute_flag(metas: &[Meta], key: &str) -> bool {
    metas
        .iter()
        .any(|meta| matches!(meta, Meta::Path(path) if path.is_ident(key)))
}

fn parse_attribute_string(metas: &[Meta], key: &str) -> Option<String> {
    for meta in metas {
        if let Meta::NameValue(nv) = meta {
            if nv.path.is_ident(key) {
                if let Expr::Lit(expr_lit) = &nv.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value());
                    }
                }
            }
        }
    }
    None
}
