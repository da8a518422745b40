//! # Layer 4: Names and Labels
//!
//! Optional pass-through of the names and `#[label = ".."]` annotations
//! recorded in `Symbolic::SYMBOLS`, plus the text form used by the generated
//! `Display` and `Debug` impls.
//!
//! Text form:
//!
//! ```text
//! discrete     READ            | 0x7            (undeclared)
//! combinable   READ | WRITE    | READ | 0x40    | 0
//! ```

use core::fmt;

use crate::algebra::covers;
use crate::classify::is_combinable;
use crate::error::{Error, Result};
use crate::primitives::{width_mask, Repr};
use crate::symbolic::{Symbol, Symbolic};

fn symbol_of<T: Symbolic>(value: T) -> Option<&'static Symbol<T>> {
    let bits = value.bits();
    T::SYMBOLS.iter().find(|symbol| symbol.value.bits() == bits)
}

/// Name of the declared symbol equal to `value`.
pub fn name_of<T: Symbolic>(value: T) -> Option<&'static str> {
    symbol_of(value).map(|symbol| symbol.name)
}

/// Label of the declared symbol equal to `value`, if it carries one.
pub fn label_of<T: Symbolic>(value: T) -> Option<&'static str> {
    symbol_of(value).and_then(|symbol| symbol.label)
}

/// Declared symbol called `name`.
pub fn from_name<T: Symbolic>(name: &str) -> Result<T> {
    T::SYMBOLS
        .iter()
        .find(|symbol| symbol.name == name)
        .map(|symbol| symbol.value)
        .ok_or(Error::UnknownSymbol { type_name: T::type_name() })
}

/// Parse the text form.
///
/// Combinable types accept `A | B | 0x40`; discrete types accept one term.
/// A term is a declared name or an integer literal (`0x` hex or decimal)
/// that fits the representation. Literals are not validated against the
/// declared set.
pub fn parse<T: Symbolic>(text: &str) -> Result<T> {
    let text = text.trim();
    if !is_combinable::<T>() {
        return parse_term(text);
    }
    text.split('|')
        .try_fold(0u64, |acc, term| -> Result<u64> {
            Ok(acc | parse_term::<T>(term.trim())?.bits())
        })
        .map(T::from_bits)
}

fn parse_term<T: Symbolic>(term: &str) -> Result<T> {
    let unknown = Error::UnknownSymbol { type_name: T::type_name() };
    let literal = if let Some(hex) = term.strip_prefix("0x").or_else(|| term.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).map_err(|_| unknown)?
    } else if term.starts_with(|c: char| c.is_ascii_digit()) {
        term.parse::<u64>().map_err(|_| unknown)?
    } else {
        return from_name(term);
    };
    if literal & !width_mask(<T::Repr as Repr>::WIDTH) != 0 {
        return Err(unknown);
    }
    Ok(T::from_bits(literal))
}

/// Write the text form of `value`.
pub fn write_symbolic<T: Symbolic>(value: T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(name) = name_of(value) {
        return f.write_str(name);
    }
    let bits = value.bits();
    if !is_combinable::<T>() {
        return write!(f, "{bits:#x}");
    }

    let mut remaining = bits;
    let mut first = true;
    let mut sep = |f: &mut fmt::Formatter<'_>| {
        if first {
            first = false;
            Ok(())
        } else {
            f.write_str(" | ")
        }
    };
    for symbol in T::SYMBOLS {
        let part = symbol.value.bits();
        if part != 0 && covers(bits, part) && part & remaining != 0 {
            sep(f)?;
            f.write_str(symbol.name)?;
            remaining &= !part;
        }
    }
    if remaining != 0 {
        sep(f)?;
        write!(f, "{remaining:#x}")?;
    }
    if bits == 0 {
        f.write_str("0")?;
    }
    Ok(())
}

/// Names of the declared symbols making up `value`.
///
/// Discrete: the exact match, if any. Combinable: every declared constituent,
/// in declaration order.
#[cfg(feature = "alloc")]
pub fn to_names<T: Symbolic>(value: T) -> alloc::vec::Vec<&'static str> {
    if !is_combinable::<T>() {
        return name_of(value).into_iter().collect();
    }
    let bits = value.bits();
    T::SYMBOLS
        .iter()
        .filter(|symbol| covers(bits, symbol.value.bits()))
        .map(|symbol| symbol.name)
        .collect()
}
