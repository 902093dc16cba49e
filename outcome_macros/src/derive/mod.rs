//! Expansion of `#[derive(Kind)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput};

mod parse;

pub(crate) use parse::{KindAttrs, parse_kind_attrs};

/// Generate the `Kind` implementation for `input`.
///
/// Generic types are rejected because `Kind` needs a single `'static`
/// concrete type to identify; those implement the trait by hand.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if let Data::Union(data) = &input.data {
        return Err(syn::Error::new_spanned(
            data.union_token,
            "Kind can only be derived for structs and enums",
        ));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Kind cannot be derived for generic types; implement it manually",
        ));
    }

    let attrs = parse_kind_attrs(&input.attrs)?;
    Ok(generate(&input.ident, &attrs))
}

fn generate(ident: &syn::Ident, attrs: &KindAttrs) -> TokenStream {
    let krate = attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { ::outcome }, |path| quote! { #path });
    let body = attrs.parent.as_ref().map(|parent| {
        quote! {
            fn is_a(kind: ::core::any::TypeId) -> bool {
                kind == ::core::any::TypeId::of::<Self>()
                    || <#parent as #krate::Kind>::is_a(kind)
            }
        }
    });
    quote! {
        impl #krate::Kind for #ident {
            #body
        }
    }
}
