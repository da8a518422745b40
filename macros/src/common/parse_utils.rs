//! Common parsing utilities
//!
//! Attribute helpers shared by the declaration macros.

use syn::{spanned::Spanned, Attribute, Expr, ExprLit, Ident, Lit, LitStr, Meta};

// =============================================================================
// Marker Attributes: `#[flags]`
// =============================================================================

/// Remove a bare `#[name]` marker from `attrs`, reporting whether it was there.
///
/// `#[flags(..)]` or `#[flags = ..]` are rejected on their span.
pub fn take_marker(attrs: &mut Vec<Attribute>, name: &str) -> syn::Result<bool> {
    let mut found = false;
    let mut error = None;
    attrs.retain(|attr| {
        if !attr.path().is_ident(name) {
            return true;
        }
        match &attr.meta {
            Meta::Path(_) if !found => found = true,
            Meta::Path(_) => {
                error.get_or_insert_with(|| {
                    syn::Error::new(attr.span(), format!("duplicate `#[{}]` attribute", name))
                });
            }
            _ => {
                error.get_or_insert_with(|| {
                    syn::Error::new(attr.span(), format!("`#[{}]` takes no arguments", name))
                });
            }
        }
        false
    });
    match error {
        Some(err) => Err(err),
        None => Ok(found),
    }
}

// =============================================================================
// Value Attributes: `#[label = "..."]`
// =============================================================================

/// Remove a `#[name = "string"]` attribute from `attrs` and return its value.
pub fn take_str_value(attrs: &mut Vec<Attribute>, name: &str) -> syn::Result<Option<LitStr>> {
    let Some(idx) = attrs.iter().position(|attr| attr.path().is_ident(name)) else {
        return Ok(None);
    };
    let attr = attrs.remove(idx);
    if attrs.iter().any(|other| other.path().is_ident(name)) {
        return Err(syn::Error::new(
            attr.span(),
            format!("duplicate `#[{}]` attribute", name),
        ));
    }
    match &attr.meta {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Ok(Some(s.clone())),
            other => Err(syn::Error::new(other.span(), "expected a string literal")),
        },
        _ => Err(syn::Error::new(
            attr.span(),
            format!("expected `#[{} = \"...\"]`", name),
        )),
    }
}

// =============================================================================
// Derive Conflicts
// =============================================================================

/// Reject user derives of traits the macro implements itself.
pub fn reject_derives(attrs: &[Attribute], generated: &[&str]) -> syn::Result<()> {
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                let name = ident.to_string();
                if generated.contains(&name.as_str()) {
                    return Err(meta.error(format!(
                        "`{}` is implemented by `symbolic!`; remove it from the derive list",
                        name
                    )));
                }
            }
            Ok(())
        })?;
    }
    Ok(())
}

// =============================================================================
// Duplicate Detection
// =============================================================================

/// Check for duplicate identifiers in a declaration list
pub fn check_duplicates(names: &[&Ident]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.to_string()) {
            return Err(syn::Error::new_spanned(
                name,
                format!(
                    "duplicate symbol `{}`\n\
                     \n\
                     Each symbol name should appear only once in a declaration.",
                    name
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_take_marker() {
        let mut attrs: Vec<Attribute> = vec![parse_quote!(#[flags]), parse_quote!(#[doc = "x"])];
        assert!(take_marker(&mut attrs, "flags").unwrap());
        assert_eq!(attrs.len(), 1);
        assert!(!take_marker(&mut attrs, "flags").unwrap());
    }

    #[test]
    fn test_take_marker_rejects_arguments() {
        let mut attrs: Vec<Attribute> = vec![parse_quote!(#[flags(strict)])];
        assert!(take_marker(&mut attrs, "flags").is_err());
    }

    #[test]
    fn test_take_str_value() {
        let mut attrs: Vec<Attribute> = vec![parse_quote!(#[label = "read access"])];
        let label = take_str_value(&mut attrs, "label").unwrap().unwrap();
        assert_eq!(label.value(), "read access");
        assert!(attrs.is_empty());

        let mut attrs: Vec<Attribute> = vec![parse_quote!(#[label = 3])];
        assert!(take_str_value(&mut attrs, "label").is_err());
    }

    #[test]
    fn test_reject_derives() {
        let ok: Vec<Attribute> = vec![parse_quote!(#[derive(PartialOrd, Ord)])];
        assert!(reject_derives(&ok, &["Debug", "Clone"]).is_ok());

        let clash: Vec<Attribute> = vec![parse_quote!(#[derive(Ord, Debug)])];
        assert!(reject_derives(&clash, &["Debug", "Clone"]).is_err());
    }

    #[test]
    fn test_check_duplicates() {
        let a: Ident = parse_quote!(READ);
        let b: Ident = parse_quote!(WRITE);
        let c: Ident = parse_quote!(READ);
        assert!(check_duplicates(&[&a, &b]).is_ok());
        assert!(check_duplicates(&[&a, &b, &c]).is_err());
    }
}
