//! Parsing of `#[kind(...)]` attributes.

use syn::{Attribute, LitStr, meta::ParseNestedMeta};

/// Attributes recognised by `#[derive(Kind)]`.
///
/// - `parent` names the immediate supertype.
/// - `crate_path` overrides the path to the `outcome` crate; set via
///   `#[kind(crate = "my_alias")]`.
#[derive(Default, Clone)]
pub(crate) struct KindAttrs {
    pub parent: Option<syn::Path>,
    pub crate_path: Option<syn::Path>,
}

/// Extracts `#[kind(...)]` metadata applied to a type.
///
/// Several `#[kind]` attributes may be combined, but each key may appear
/// only once. Unknown keys are errors so typos surface at compile time.
pub(crate) fn parse_kind_attrs(attrs: &[Attribute]) -> syn::Result<KindAttrs> {
    let mut out = KindAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("kind")) {
        attr.parse_nested_meta(|meta| apply_meta(&meta, &mut out))?;
    }
    Ok(out)
}

fn apply_meta(meta: &ParseNestedMeta, out: &mut KindAttrs) -> syn::Result<()> {
    if meta.path.is_ident("parent") {
        let parent = meta.value()?.parse::<syn::Path>()?;
        assign_once(&mut out.parent, parent, meta, "parent")
    } else if meta.path.is_ident("crate") {
        let lit = meta.value()?.parse::<LitStr>()?;
        let path = lit.parse::<syn::Path>()?;
        assign_once(&mut out.crate_path, path, meta, "crate")
    } else {
        Err(meta.error("unknown kind attribute; expected `parent` or `crate`"))
    }
}

fn assign_once(
    target: &mut Option<syn::Path>,
    value: syn::Path,
    meta: &ParseNestedMeta,
    key: &str,
) -> syn::Result<()> {
    if target.is_some() {
        return Err(meta.error(format!("duplicate `{key}` in kind attribute")));
    }
    *target = Some(value);
    Ok(())
}
