//! Implementation of the `#[derive(Record)]` macro.
//!
//! This macro generates an implementation of the `Record` trait, a static
//! schema table, and field name constants for type-safe sort fields.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_container_attrs, parse_field_attrs, FieldKind};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.span(),
            "Record cannot be derived for generic structs",
        ));
    }

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let container = parse_container_attrs(&input.attrs)?;

    let mut field_defs: Vec<TokenStream> = Vec::new();
    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_field_attrs(&field.attrs)?;

        if attrs.skip {
            continue;
        }

        // Fields without a declared kind are not part of the schema
        let kind = match attrs.kind {
            Some(kind) => kind,
            None if attrs.searchable || attrs.rename.is_some() => {
                return Err(Error::new(
                    field.span(),
                    "record field needs a kind: String, Number, or Date",
                ))
            }
            None => continue,
        };

        let raw_name = field_name.to_string();
        let raw_name = raw_name.strip_prefix("r#").unwrap_or(&raw_name);
        let query_name = match attrs.rename {
            Some(name) => name,
            None => match container.rename_all {
                Some(rule) => rule.apply(raw_name),
                None => raw_name.to_string(),
            },
        };

        if !seen_names.insert(query_name.clone()) {
            return Err(Error::new(
                attrs.span,
                format!("duplicate record field name '{}'", query_name),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));
        field_constants.push(quote! {
            /// Field name constant for sort fields.
            pub const #const_name: &'static str = #query_name;
        });

        let searchable = attrs.searchable;
        let (kind_tokens, value_expr) = match kind {
            FieldKind::String => (
                quote! { ::leaderboard_query::FieldKind::String },
                quote! {
                    ::leaderboard_query::Value::String(
                        ::core::convert::AsRef::<str>::as_ref(&self.#field_name)
                    )
                },
            ),
            FieldKind::Number => (
                quote! { ::leaderboard_query::FieldKind::Number },
                quote! {
                    ::leaderboard_query::Value::Number(
                        ::leaderboard_query::Number::from(self.#field_name)
                    )
                },
            ),
            FieldKind::Date => (
                quote! { ::leaderboard_query::FieldKind::Date },
                quote! {
                    ::leaderboard_query::Value::Date(
                        ::core::convert::AsRef::<str>::as_ref(&self.#field_name)
                    )
                },
            ),
        };

        field_defs.push(quote! {
            ::leaderboard_query::FieldDef {
                name: #query_name,
                kind: #kind_tokens,
                searchable: #searchable,
            },
        });

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*
        }

        impl ::leaderboard_query::Record for #struct_name {
            fn schema() -> &'static ::leaderboard_query::Schema {
                static SCHEMA: ::leaderboard_query::Schema =
                    ::leaderboard_query::Schema::new(&[#(#field_defs)*]);
                &SCHEMA
            }

            fn field_value(&self, field: &str) -> ::leaderboard_query::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::leaderboard_query::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
