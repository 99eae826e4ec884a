//! #[derive(SeedEntity)] implementation

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, Meta};

use crate::{get_attribute, parse_attribute_flag, parse_attribute_metas, parse_attribute_string};

/// A named field together with its parsed `#[seed(...)]` options.
struct SeedField<'a> {
    field: &'a Field,
    ident: &'a Ident,
    seed_name: String,
    is_id: bool,
}

impl<'a> SeedField<'a> {
    fn parse(field: &'a Field) -> Result<Self, Error> {
        let ident = field.ident.as_ref().ok_or_else(|| {
            Error::new_spanned(field, "#[derive(SeedEntity)] requires named fields")
        })?;

        let metas = match get_attribute(&field.attrs, "seed") {
            Some(attr) => parse_attribute_metas(attr)?,
            None => Vec::new(),
        };
        for meta in &metas {
            let known = match meta {
                Meta::Path(path) => path.is_ident("id"),
                Meta::NameValue(nv) => nv.path.is_ident("rename"),
                Meta::List(_) => false,
            };
            if !known {
                return Err(Error::new_spanned(
                    meta,
                    "unknown seed attribute, expected `id` or `rename = \"...\"`",
                ));
            }
        }

        Ok(Self {
            field,
            ident,
            seed_name: parse_attribute_string(&metas, "rename")
                .unwrap_or_else(|| ident.to_string()),
            is_id: parse_attribute_flag(&metas, "id"),
        })
    }
}

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "#[derive(SeedEntity)] does not support generic shapes",
        ));
    }

    let fields: Vec<&Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            other => {
                return Err(Error::new_spanned(
                    other,
                    "#[derive(SeedEntity)] requires named fields",
                ))
            }
        },
        Data::Enum(data) => {
            return Err(Error::new_spanned(
                data.enum_token,
                "#[derive(SeedEntity)] only works on structs",
            ))
        }
        Data::Union(data) => {
            return Err(Error::new_spanned(
                data.union_token,
                "#[derive(SeedEntity)] only works on structs",
            ))
        }
    };

    let seed_fields = fields
        .iter()
        .copied()
        .map(SeedField::parse)
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for sf in &seed_fields {
        if !seen.insert(sf.seed_name.as_str()) {
            return Err(Error::new_spanned(
                sf.ident,
                format!("duplicate seed field name `{}`", sf.seed_name),
            ));
        }
    }

    let id_name = identifier_field(&input, &seed_fields)?;

    let field_idents: Vec<_> = seed_fields.iter().map(|sf| sf.ident).collect();
    let constructor = quote! {
        Self { #( #field_idents: ::core::default::Default::default(), )* }
    };

    let field_descriptors: Vec<_> = seed_fields
        .iter()
        .map(|sf| {
            let field_name = sf.ident;
            let field_type = &sf.field.ty;
            let seed_name = &sf.seed_name;
            quote! {
                ::seedforge::__internal::FieldDescriptor::new(
                    #seed_name,
                    ::seedforge::__internal::TypedFieldAccessor::<Self, #field_type>::new(
                        |e: &Self| &e.#field_name,
                        |e: &mut Self| &mut e.#field_name,
                    ),
                )
            }
        })
        .collect();

    let name_str = name.to_string();

    let expanded = quote! {
        impl ::seedforge::__internal::SeedEntity for #name {
            fn descriptor() -> ::seedforge::__internal::ShapeDescriptor<Self> {
                ::seedforge::__internal::ShapeDescriptor::new(
                    ::core::concat!(::core::module_path!(), "::", #name_str),
                )
                .with_id_field(#id_name)
                .with_constructor(|| #constructor)
                #( .with_field(#field_descriptors) )*
            }
        }
    };

    Ok(expanded)
}

/// Resolves the seed name of the identifier field: the single field marked
/// `#[seed(id)]`, otherwise the field named `id`.
fn identifier_field(input: &DeriveInput, fields: &[SeedField<'_>]) -> Result<String, Error> {
    let marked: Vec<_> = fields.iter().filter(|sf| sf.is_id).collect();
    match marked.as_slice() {
        [single] => Ok(single.seed_name.clone()),
        [] => fields
            .iter()
            .find(|sf| sf.ident == "id")
            .map(|sf| sf.seed_name.clone())
            .ok_or_else(|| {
                Error::new_spanned(
                    &input.ident,
                    "#[derive(SeedEntity)] requires an `id` field or a field marked #[seed(id)]",
                )
            }),
        [_, second, ..] => Err(Error::new_spanned(
            second.ident,
            "only one field may be marked #[seed(id)]",
        )),
    }
}
