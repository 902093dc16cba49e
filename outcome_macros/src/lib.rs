//! Procedural macros for `outcome`.
//!
//! `#[derive(Kind)]` implements `outcome::Kind` for a failure type. Without
//! attributes the type becomes a root kind. `#[kind(parent = Path)]`
//! declares the immediate supertype, so an outcome holding the type also
//! matches the parent and, transitively, the parent's own supertypes.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `outcome::Kind`.
///
/// Recognised attributes, all inside `#[kind(...)]`:
///
/// - `parent = Path`: the supertype of this kind.
/// - `crate = "path"`: the path generated code uses to reach the `outcome`
///   crate, for dependency aliasing.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
