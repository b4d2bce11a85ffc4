// File: rusty-validator-derive/src/reflect.rs
// Purpose: Reflect derive expansion and #[validator] attribute processing

use crate::classify::{classify, value_expr};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Expr, ExprLit, Fields, Lit, Member, Meta};

/// Read the rule string from `#[validator = "..."]`
///
/// Fields without the attribute have an empty rule.
pub fn extract_rule(attrs: &[syn::Attribute]) -> syn::Result<String> {
    let mut rule: Option<String> = None;

    for attr in attrs {
        if !attr.path().is_ident("validator") {
            continue;
        }

        let value = match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => s.value(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "validator rule must be a string literal",
                    ))
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    attr,
                    r#"expected #[validator = "rule,..."]"#,
                ))
            }
        };

        if rule.replace(value).is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate #[validator] attribute",
            ));
        }
    }

    Ok(rule.unwrap_or_default())
}

fn visibility(vis: &syn::Visibility) -> proc_macro2::Ident {
    match vis {
        syn::Visibility::Public(_) => format_ident!("Public"),
        syn::Visibility::Restricted(_) => format_ident!("Restricted"),
        syn::Visibility::Inherited => format_ident!("Private"),
    }
}

/// Generate `Reflect` (and `Record` for structs)
pub fn impl_reflect(input: &DeriveInput) -> syn::Result<TokenStream> {
    match &input.data {
        Data::Struct(data) => impl_struct(input, &data.fields),
        Data::Enum(_) => Ok(impl_enum(input)),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect cannot be derived for unions",
        )),
    }
}

fn impl_enum(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::rusty_validator::Reflect for #name #ty_generics #where_clause {
            fn kind(&self) -> ::rusty_validator::Kind {
                ::rusty_validator::Kind::Enum
            }
        }
    }
}

fn impl_struct(input: &DeriveInput, fields: &Fields) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut descriptors = Vec::new();
    let mut value_arms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let (member, field_name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(index.into()), index.to_string()),
        };

        let rule = extract_rule(&field.attrs)?;
        let classified = classify(&field.ty);
        let kind = classified.kind.variant();
        let vis = visibility(&field.vis);

        descriptors.push(quote! {
            ::rusty_validator::FieldDescriptor::new(
                #field_name,
                ::rusty_validator::Kind::#kind,
                #rule,
                ::rusty_validator::Visibility::#vis,
            )
        });

        // Only public fields are ever read
        if matches!(field.vis, syn::Visibility::Public(_)) {
            let value = value_expr(classified, &quote!(self.#member));
            value_arms.push(quote! {
                #index => #value,
            });
        }
    }

    Ok(quote! {
        impl #impl_generics ::rusty_validator::Reflect for #name #ty_generics #where_clause {
            fn kind(&self) -> ::rusty_validator::Kind {
                ::rusty_validator::Kind::Struct
            }

            fn as_record(&self) -> ::core::option::Option<&dyn ::rusty_validator::Record> {
                ::core::option::Option::Some(self)
            }
        }

        impl #impl_generics ::rusty_validator::Record for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #name_str
            }

            fn fields(&self) -> &'static [::rusty_validator::FieldDescriptor] {
                const FIELDS: &[::rusty_validator::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            #[allow(clippy::unnecessary_cast, clippy::match_single_binding)]
            fn field_value(&self, index: usize) -> ::rusty_validator::FieldValue<'_> {
                match index {
                    #(#value_arms)*
                    _ => ::rusty_validator::FieldValue::Opaque,
                }
            }
        }
    })
}
