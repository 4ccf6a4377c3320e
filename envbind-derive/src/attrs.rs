//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates binding attributes from structs and
//! their fields during macro expansion.

use proc_macro2::Span;
use syn::{Attribute, ExprPath, Field, LitStr};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Explicit variable name.
    ///
    /// If `None`, the name is derived from the field identifier at runtime.
    pub name: Option<String>,

    /// Span of `skip` if the field must never be bound.
    pub skip: Option<Span>,

    /// Conversion function path (e.g. `serde_json::from_str`).
    ///
    /// When specified, the field type's own conversion rules are bypassed.
    pub with: Option<ExprPath>,
}

impl FieldAttrs {
    /// Extract and validate `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes of other macros are left alone; unknown `env` options are
    /// reported as errors.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.name = Some(lit.value());
                    return Ok(());
                }

                // skip
                if meta.path.is_ident("skip") {
                    attrs.skip = Some(meta.path.require_ident()?.span());
                    return Ok(());
                }

                // with = "function::path"
                if meta.path.is_ident("with") {
                    let lit: LitStr = meta.value()?.parse()?;
                    attrs.with = Some(lit.parse()?);
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `name`, `skip` or `with`"))
            })?;
        }

        if let Some(span) = attrs.skip {
            if attrs.name.is_some() || attrs.with.is_some() {
                return Err(syn::Error::new(
                    span,
                    "`skip` cannot be combined with `name` or `with`",
                ));
            }
        }

        Ok(attrs)
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to the variable name of every field of this struct.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in env_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.prefix = lit.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute, expected `prefix`"))
            })?;
        }

        Ok(parsed)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[env(name = "CUSTOM_NAME")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("CUSTOM_NAME".to_string()));
        assert!(attrs.skip.is_none());
    }

    #[test]
    fn test_parse_skip() {
        let field: Field = parse_quote! {
            #[env(skip)]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.skip.is_some());
    }

    #[test]
    fn test_parse_with() {
        let field: Field = parse_quote! {
            #[env(with = "serde_json::from_str")]
            pub field_name: Vec<String>
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        let path = attrs.with.unwrap();
        assert_eq!(quote::quote!(#path).to_string(), "serde_json :: from_str");
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let field: Field = parse_quote! {
            #[env(name = "TAGS")]
            #[env(with = "parse_tags")]
            pub tag_list: Vec<String>
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("TAGS".to_string()));
        assert!(attrs.with.is_some());
    }

    #[test]
    fn test_ignores_other_attributes() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.name.is_none());
    }

    #[test]
    fn test_rejects_unknown_option() {
        let field: Field = parse_quote! {
            #[env(default = 5)]
            pub field_name: u32
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_rejects_skip_with_name() {
        let field: Field = parse_quote! {
            #[env(skip, name = "X")]
            pub field_name: u32
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn test_parse_prefix() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[env(prefix = "APP_")])];
        let parsed = StructAttrs::from_attrs(&attrs).unwrap();
        assert_eq!(parsed.prefix, "APP_");
    }
}
