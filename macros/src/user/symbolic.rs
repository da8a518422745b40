//! `symbolic!` declaration macro
//!
//! Input grammar (repeatable):
//!
//! ```text
//! #[flags]?  #[attrs]*
//! VIS struct NAME: REPR {
//!     #[label = "..."]? #[attrs]* SYMBOL = EXPR,
//!     ...
//! }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    braced,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Expr, Ident, LitStr, Token, Type, Visibility,
};

use crate::common::{check_duplicates, reject_derives, take_marker, take_str_value};

/// Traits every symbolic type gets from the expansion.
const GENERATED_TRAITS: &[&str] = &["Clone", "Copy", "PartialEq", "Eq", "Hash", "Default", "Debug"];

// =============================================================================
// Input Parser
// =============================================================================

/// One declared constant: `#[label = ".."] NAME = EXPR`
pub struct SymbolDef {
    pub attrs: Vec<Attribute>,
    pub label: Option<LitStr>,
    pub name: Ident,
    pub value: Expr,
}

impl Parse for SymbolDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = input.call(Attribute::parse_outer)?;
        let label = take_str_value(&mut attrs, "label")?;
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value: Expr = input.parse()?;
        Ok(SymbolDef { attrs, label, name, value })
    }
}

/// One symbolic type declaration.
pub struct SymbolicDecl {
    pub attrs: Vec<Attribute>,
    pub combinable: bool,
    pub vis: Visibility,
    pub name: Ident,
    pub repr: Type,
    pub symbols: Punctuated<SymbolDef, Token![,]>,
}

impl Parse for SymbolicDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = input.call(Attribute::parse_outer)?;
        let combinable = take_marker(&mut attrs, "flags")?;
        reject_derives(&attrs, GENERATED_TRAITS)?;

        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let repr: Type = input.parse()?;

        let content;
        braced!(content in input);
        let symbols: Punctuated<SymbolDef, Token![,]> = Punctuated::parse_terminated(&content)?;

        let names: Vec<&Ident> = symbols.iter().map(|s| &s.name).collect();
        check_duplicates(&names)?;

        Ok(SymbolicDecl { attrs, combinable, vis, name, repr, symbols })
    }
}

/// Whole macro input: any number of declarations.
pub struct SymbolicInput {
    pub decls: Vec<SymbolicDecl>,
}

impl Parse for SymbolicInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut decls = Vec::new();
        while !input.is_empty() {
            decls.push(input.parse()?);
        }
        Ok(SymbolicInput { decls })
    }
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_symbolic(input: SymbolicInput) -> TokenStream2 {
    let decls = input.decls.iter().map(expand_decl);
    quote! { #(#decls)* }
}

fn expand_decl(decl: &SymbolicDecl) -> TokenStream2 {
    let SymbolicDecl { attrs, combinable, vis, name, repr, symbols } = decl;
    let name_str = name.unraw().to_string();

    let kind = if *combinable {
        quote! { ::tola_flags::Combinable }
    } else {
        quote! { ::tola_flags::Discrete }
    };

    let consts = symbols.iter().map(|symbol| {
        let SymbolDef { attrs, name, value, .. } = symbol;
        quote! {
            #(#attrs)*
            #vis const #name: Self = Self(#value);
        }
    });

    let table = symbols.iter().map(|symbol| {
        let ident = &symbol.name;
        let symbol_name = ident.unraw().to_string();
        match &symbol.label {
            Some(label) => quote! {
                ::tola_flags::Symbol::labeled(#symbol_name, Self::#ident, #label)
            },
            None => quote! {
                ::tola_flags::Symbol::new(#symbol_name, Self::#ident)
            },
        }
    });

    let width_msg = format!("`{}`: symbolic representations are at most 8 bytes wide", name_str);
    let flag_ops = if *combinable { expand_flag_ops(name) } else { quote! {} };

    quote! {
        #(#attrs)*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        #vis struct #name(#repr);

        impl #name {
            #(#consts)*

            /// Wrap a raw representation without validation.
            #[inline(always)]
            #vis const fn from_repr(repr: #repr) -> Self {
                Self(repr)
            }

            /// The raw representation.
            #[inline(always)]
            #vis const fn to_repr(self) -> #repr {
                self.0
            }
        }

        const _: () = ::core::assert!(
            <#repr as ::tola_flags::Repr>::WIDTH <= 8,
            #width_msg
        );

        impl ::tola_flags::Symbolic for #name {
            type Repr = #repr;
            type Kind = #kind;

            const SYMBOLS: &'static [::tola_flags::Symbol<Self>] = &[
                #(#table),*
            ];

            #[inline(always)]
            fn from_repr(repr: #repr) -> Self {
                Self(repr)
            }

            #[inline(always)]
            fn to_repr(self) -> #repr {
                self.0
            }
        }

        impl ::core::default::Default for #name {
            #[inline]
            fn default() -> Self {
                Self(<#repr as ::tola_flags::Repr>::ZERO)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::tola_flags::names::write_symbolic(*self, f)
            }
        }

        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#name_str)?;
                f.write_str("(")?;
                ::tola_flags::names::write_symbolic(*self, f)?;
                f.write_str(")")
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::tola_flags::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                ::tola_flags::names::parse(s)
            }
        }

        #flag_ops
    }
}

/// Bit operators, `FromIterator` and `Extend` for combinable types.
fn expand_flag_ops(name: &Ident) -> TokenStream2 {
    let binary = [
        (quote! { BitOr }, quote! { bitor }, quote! { BitOrAssign }, quote! { bitor_assign }, quote! { | }),
        (quote! { BitAnd }, quote! { bitand }, quote! { BitAndAssign }, quote! { bitand_assign }, quote! { & }),
        (quote! { BitXor }, quote! { bitxor }, quote! { BitXorAssign }, quote! { bitxor_assign }, quote! { ^ }),
    ]
    .into_iter()
    .map(|(op, method, assign_op, assign_method, token)| {
        quote! {
            impl ::core::ops::#op for #name {
                type Output = Self;

                #[inline]
                fn #method(self, rhs: Self) -> Self {
                    <Self as ::tola_flags::Symbolic>::from_bits(
                        ::tola_flags::Symbolic::bits(self) #token ::tola_flags::Symbolic::bits(rhs),
                    )
                }
            }

            impl ::core::ops::#assign_op for #name {
                #[inline]
                fn #assign_method(&mut self, rhs: Self) {
                    *self = ::core::ops::#op::#method(*self, rhs);
                }
            }
        }
    });

    quote! {
        #(#binary)*

        impl ::core::ops::Not for #name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                <Self as ::tola_flags::Symbolic>::from_bits(!::tola_flags::Symbolic::bits(self))
            }
        }

        impl ::core::iter::FromIterator<#name> for #name {
            fn from_iter<I: ::core::iter::IntoIterator<Item = #name>>(iter: I) -> Self {
                <Self as ::tola_flags::Flags>::combine(iter)
            }
        }

        impl ::core::iter::Extend<#name> for #name {
            fn extend<I: ::core::iter::IntoIterator<Item = #name>>(&mut self, iter: I) {
                for flag in iter {
                    *self |= flag;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: TokenStream2) -> syn::Result<SymbolicInput> {
        syn::parse2(tokens)
    }

    #[test]
    fn test_parse_flags_declaration() {
        let input = parse(quote! {
            /// Access rights.
            #[flags]
            pub struct Access: u8 {
                #[label = "read access"]
                READ = 1,
                WRITE = 2,
                RW = Self::READ.0 | Self::WRITE.0,
            }
        })
        .unwrap();
        assert_eq!(input.decls.len(), 1);
        let decl = &input.decls[0];
        assert!(decl.combinable);
        assert_eq!(decl.name, "Access");
        assert_eq!(decl.attrs.len(), 1);
        assert_eq!(decl.symbols.len(), 3);
        assert_eq!(decl.symbols[0].label.as_ref().unwrap().value(), "read access");
        assert!(decl.symbols[0].attrs.is_empty());
        assert!(decl.symbols[1].label.is_none());
    }

    #[test]
    fn test_parse_multiple_declarations() {
        let input = parse(quote! {
            struct Mode: u16 { A = 1, B = 2 }
            #[flags]
            pub(crate) struct Bits: i32 {}
        })
        .unwrap();
        assert_eq!(input.decls.len(), 2);
        assert!(!input.decls[0].combinable);
        assert!(input.decls[1].combinable);
        assert!(input.decls[1].symbols.is_empty());
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let result = parse(quote! {
            struct Mode: u8 { A = 1, A = 2 }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_derive_rejected() {
        let result = parse(quote! {
            #[derive(Debug)]
            struct Mode: u8 { A = 1 }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_flag_ops_only_for_combinable() {
        let flags = parse(quote! { #[flags] struct F: u8 { A = 1 } }).unwrap();
        let discrete = parse(quote! { struct D: u8 { A = 1 } }).unwrap();
        let flags_out = expand_symbolic(flags).to_string();
        let discrete_out = expand_symbolic(discrete).to_string();
        assert!(flags_out.contains("BitOr"));
        assert!(flags_out.contains("Combinable"));
        assert!(!discrete_out.contains("BitOr"));
        assert!(discrete_out.contains("Discrete"));
    }
}
