//! # Layer 3: Validity Oracle
//!
//! Decides whether a value belongs to its declared symbol set.
//!
//! | Kind | Valid when |
//! |------|------------|
//! | combinable | every set bit lies inside the union mask of the declared symbols |
//! | discrete | the value equals one declared symbol exactly |

use crate::algebra::covers;
use crate::classify::{is_combinable, require_combinable};
use crate::error::{Error, Result};
use crate::symbolic::Symbolic;

/// OR of the bits of every declared symbol of `T`.
pub fn mask<T: Symbolic>() -> u64 {
    T::SYMBOLS.iter().fold(0, |acc, symbol| acc | symbol.value.bits())
}

/// `value` is a legal value of its type.
pub fn is_valid<T: Symbolic>(value: T) -> bool {
    let bits = value.bits();
    if is_combinable::<T>() {
        covers(mask::<T>(), bits)
    } else {
        T::SYMBOLS.iter().any(|symbol| symbol.value.bits() == bits)
    }
}

/// Mask check for combinable types only.
pub fn is_valid_combination<T: Symbolic>(value: T) -> Result<bool> {
    require_combinable::<T>()?;
    Ok(covers(mask::<T>(), value.bits()))
}

/// Bits of `value` that no declared symbol covers.
pub fn undeclared_bits<T: Symbolic>(value: T) -> Result<u64> {
    require_combinable::<T>()?;
    Ok(value.bits() & !mask::<T>())
}

/// Boundary check for caller-supplied values.
///
/// Returns `value` unchanged when valid, otherwise
/// [`Error::InvalidSymbol`] naming `argument`.
pub fn check_has_value<T: Symbolic>(value: T, argument: &'static str) -> Result<T> {
    if is_valid(value) {
        return Ok(value);
    }
    let bits = value.bits();
    let type_name = T::type_name();
    tracing::debug!(type_name, argument, bits, "rejected value outside the declared symbol set");
    Err(Error::InvalidSymbol { type_name, argument, bits })
}
