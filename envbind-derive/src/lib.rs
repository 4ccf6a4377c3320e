//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Visibility};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `Bind` derive macro
///
/// Implements `envbind::Field` and `envbind::Bind` for a struct with named
/// fields, so it can be passed to `envbind::bind_with` or built with
/// `Config::from_env()`. The struct must implement `Default`.
///
/// Only `pub` fields are bound, in declaration order.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to the variable names of this struct's fields
///
/// **Field-level**:
/// - `#[env(name = "CUSTOM_NAME")]`: Custom variable name
/// - `#[env(skip)]`: Never bind this field
/// - `#[env(with = "func")]`: Convert with `func(&str) -> Result<T, E>`
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Bind, attributes(env))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive(&input) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn impl_derive(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;
    let prefix = &struct_attrs.prefix;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "Bind only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "Bind only supports structs",
            ));
        }
    };

    let mut checks = Vec::new();
    let mut binds = Vec::new();
    let mut field_types = Vec::new();

    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;
        if attrs.skip.is_some() || !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let ident_str = field_name.to_string();
        let name = match &attrs.name {
            Some(name) => quote!(::core::option::Option::Some(#name)),
            None => quote!(::core::option::Option::None),
        };
        let key = quote! {
            let __key = ::envbind::__private::key(#prefix, #name, #ident_str);
        };

        match &attrs.with {
            // Custom conversion: a leaf, no structural check
            Some(func) => binds.push(quote! {
                {
                    #key
                    if let ::core::option::Option::Some(__raw) =
                        ::envbind::__private::lookup_non_empty(__env, &__key)
                    {
                        self.#field_name = #func(__raw.as_str()).map_err(|e| {
                            ::envbind::BindError::invalid_value::<#field_type>(&__key, __raw.as_str(), e)
                        })?;
                        __assigned = true;
                    }
                }
            }),
            None => {
                checks.push(quote! {
                    <#field_type as ::envbind::Field>::check()?;
                });
                binds.push(quote! {
                    {
                        #key
                        __assigned |= ::envbind::Field::bind_field(&mut self.#field_name, &__key, __env)?;
                    }
                });
                field_types.push(field_type);
            }
        }
    }

    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        where_clause
            .predicates
            .push(parse_quote!(Self: ::core::default::Default));
        for ty in &field_types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::envbind::Field));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envbind::Field for #struct_name #ty_generics #where_clause {
            const SHAPE: ::envbind::Shape = ::envbind::Shape::Record;

            fn check() -> ::core::result::Result<(), ::envbind::BindError> {
                #(#checks)*
                ::core::result::Result::Ok(())
            }

            fn bind_field(
                &mut self,
                _key: &str,
                __env: &dyn ::envbind::Env,
            ) -> ::core::result::Result<bool, ::envbind::BindError> {
                #[allow(unused_mut)]
                let mut __assigned = false;
                #(#binds)*
                ::core::result::Result::Ok(__assigned)
            }

            fn bind_new(
                __key: &str,
                __env: &dyn ::envbind::Env,
            ) -> ::core::result::Result<::core::option::Option<Self>, ::envbind::BindError> {
                let mut __value = <Self as ::core::default::Default>::default();
                let __assigned = ::envbind::Field::bind_field(&mut __value, __key, __env)?;
                ::core::result::Result::Ok(__assigned.then_some(__value))
            }

            fn from_element(
                _key: &str,
                _raw: &str,
            ) -> ::core::result::Result<Self, ::envbind::BindError> {
                ::core::result::Result::Err(::envbind::BindError::unsupported::<Self>())
            }
        }

        impl #impl_generics ::envbind::Bind for #struct_name #ty_generics #where_clause {}
    })
}
