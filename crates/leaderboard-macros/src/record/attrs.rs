//! Attribute parsing for the Record derive macro.
//!
//! Field attributes: `#[record(String | Number | Date, searchable, rename = "...")]`
//! or `#[record(skip)]`. Container attribute: `#[record(rename_all = "camelCase")]`.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

const UNKNOWN_FIELD_ATTRIBUTE: &str =
    "unknown record attribute. Expected: String, Number, Date, searchable, skip, or rename";

/// The declared kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String field: `#[record(String)]`
    String,
    /// Number field: `#[record(Number)]`
    Number,
    /// Timestamp string field: `#[record(Date)]`
    Date,
}

impl FieldKind {
    /// Parse a field kind from an identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "String" | "string" | "Text" | "text" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Date" | "date" | "Timestamp" | "timestamp" => Ok(FieldKind::Date),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown record field kind: '{}'. Expected one of: String, Number, Date",
                    other
                ),
            )),
        }
    }
}

/// Renaming applied to every field name by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `last_active` -> `lastActive`
    CamelCase,
    /// Field names used as written.
    SnakeCase,
}

impl RenameRule {
    fn from_str(s: &str, span: Span) -> Result<Self> {
        match s {
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            other => Err(Error::new(
                span,
                format!(
                    "unknown rename_all rule: '{}'. Expected camelCase or snake_case",
                    other
                ),
            )),
        }
    }

    /// Applies the rule to a Rust field name.
    pub fn apply(self, name: &str) -> String {
        match self {
            RenameRule::SnakeCase => name.to_string(),
            RenameRule::CamelCase => {
                let mut result = String::with_capacity(name.len());
                let mut upper_next = false;
                for c in name.chars() {
                    if c == '_' {
                        upper_next = !result.is_empty();
                    } else if upper_next {
                        result.push(c.to_ascii_uppercase());
                        upper_next = false;
                    } else {
                        result.push(c);
                    }
                }
                result
            }
        }
    }
}

/// Field-level attributes from `#[record(...)]`.
#[derive(Debug, Clone)]
pub struct FieldAttr {
    /// The declared kind of this field.
    pub kind: Option<FieldKind>,
    /// Match the search term against this field.
    pub searchable: bool,
    /// Leave this field out of the schema.
    pub skip: bool,
    /// Custom field name for queries (default: field name after `rename_all`).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for FieldAttr {
    fn default() -> Self {
        FieldAttr {
            kind: None,
            searchable: false,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

fn string_literal(expr: &syn::Expr, what: &str) -> Result<syn::LitStr> {
    if let syn::Expr::Lit(syn::ExprLit {
        lit: Lit::Str(s), ..
    }) = expr
    {
        Ok(s.clone())
    } else {
        Err(Error::new(
            expr.span(),
            format!("{} must be a string literal", what),
        ))
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Kind identifier or flag: record(String), record(searchable), ...
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if p.is_ident("searchable") {
                        attr.searchable = true;
                    } else if let Some(ident) = p.get_ident() {
                        if attr.kind.is_some() {
                            return Err(Error::new(ident.span(), "field kind given twice"));
                        }
                        attr.kind = Some(FieldKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected field kind: String, Number, Date, searchable, or skip",
                        ));
                    }
                }

                // rename = "custom_name"
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(string_literal(&nv.value, "rename")?.value());
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(meta.span(), UNKNOWN_FIELD_ATTRIBUTE));
                }
            }
        }

        Ok(attr)
    }
}

/// Container-level attributes from `#[record(...)]` on the struct.
#[derive(Debug, Clone, Default)]
pub struct ContainerAttr {
    /// Renaming applied to fields without an explicit `rename`.
    pub rename_all: Option<RenameRule>,
}

impl Parse for ContainerAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ContainerAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::NameValue(nv) if nv.path.is_ident("rename_all") => {
                    let lit = string_literal(&nv.value, "rename_all")?;
                    attr.rename_all = Some(RenameRule::from_str(&lit.value(), lit.span())?);
                }
                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown record container attribute. Expected: rename_all = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract `#[record(...)]` attributes from a field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("record") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}

/// Extract `#[record(...)]` attributes from the struct's attributes.
pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttr> {
    for attr in attrs {
        if attr.path().is_ident("record") {
            return attr.parse_args::<ContainerAttr>();
        }
    }
    Ok(ContainerAttr::default())
}
