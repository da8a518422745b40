//! # Layer 3: Flag Algebra
//!
//! Bit-level operations over combinable symbolic types.
//!
//! Two surfaces:
//!
//! - Free functions (`bit_position`, `is_flag_set`, ...) accept any
//!   [`Symbolic`] type and fail with [`Error::NotCombinable`] on a discrete
//!   one.
//! - The [`Flags`] extension trait is only implemented for combinable types,
//!   so the same misuse is rejected at compile time.
//!
//! ```ignore
//! use tola_flags::prelude::*;
//!
//! symbolic! {
//!     #[flags]
//!     pub struct Access: u8 { READ = 1, WRITE = 2, EXEC = 4 }
//! }
//!
//! let rw = Access::combine([Access::READ, Access::WRITE]);
//! assert!(rw.contains(Access::WRITE));
//! assert_eq!(rw.iter().count(), 2);
//! ```

use core::iter::FusedIterator;

use crate::classify::require_combinable;
use crate::error::{Error, Result};
use crate::primitives::Combinable;
use crate::symbolic::{Symbol, Symbolic};

/// `inner` is a subset of `outer`.
#[inline(always)]
pub(crate) const fn covers(outer: u64, inner: u64) -> bool {
    outer & inner == inner
}

fn single_bit_index<T: Symbolic>(value: T) -> Result<u8> {
    let bits = value.bits();
    match bits.count_ones() {
        0 => Err(Error::ZeroValue { type_name: T::type_name() }),
        1 => Ok(bits.trailing_zeros() as u8),
        count => Err(Error::MultipleBits { type_name: T::type_name(), bits, count }),
    }
}

#[inline(always)]
fn apply<T: Symbolic>(flags: T, flag: T, set: bool) -> T {
    let bits = if set {
        flags.bits() | flag.bits()
    } else {
        flags.bits() & !flag.bits()
    };
    T::from_bits(bits)
}

#[inline]
fn fold<T: Symbolic, I: IntoIterator<Item = T>>(flags: I) -> T {
    T::from_bits(flags.into_iter().fold(0, |acc, flag| acc | flag.bits()))
}

// =============================================================================
// Checked free functions
// =============================================================================

/// Zero-based index of the single set bit of `value` (`0b1000` is 3).
pub fn bit_position<T: Symbolic>(value: T) -> Result<u8> {
    require_combinable::<T>()?;
    single_bit_index(value)
}

/// Every bit of `flag` is set in `flags`. A zero `flag` is always set.
pub fn is_flag_set<T: Symbolic>(flags: T, flag: T) -> Result<bool> {
    require_combinable::<T>()?;
    Ok(covers(flags.bits(), flag.bits()))
}

/// `flags` with the bits of `flag` set or cleared.
pub fn set_flags<T: Symbolic>(flags: T, flag: T, set: bool) -> Result<T> {
    require_combinable::<T>()?;
    Ok(apply(flags, flag, set))
}

/// In-place form of [`set_flags`]. `flags` is untouched on error.
pub fn set_flags_in_place<T: Symbolic>(flags: &mut T, flag: T, set: bool) -> Result<()> {
    *flags = set_flags(*flags, flag, set)?;
    Ok(())
}

/// OR of every value in `flags`; zero when empty.
pub fn combine_flags<T, I>(flags: I) -> Result<T>
where
    T: Symbolic,
    I: IntoIterator<Item = T>,
{
    require_combinable::<T>()?;
    Ok(fold(flags))
}

/// Declared symbols contained in `value`, in declaration order.
pub fn get_flags<T: Symbolic>(value: T) -> Result<FlagIter<T>> {
    require_combinable::<T>()?;
    Ok(FlagIter::new(value))
}

// =============================================================================
// Decomposition
// =============================================================================

/// Iterator over the declared symbols contained in a value.
///
/// Walks `T::SYMBOLS` once. Undeclared bits are skipped; a declared zero
/// symbol is always yielded.
#[derive(Debug, Clone)]
pub struct FlagIter<T: Symbolic> {
    bits: u64,
    symbols: core::slice::Iter<'static, Symbol<T>>,
}

impl<T: Symbolic> FlagIter<T> {
    fn new(value: T) -> Self {
        FlagIter { bits: value.bits(), symbols: T::SYMBOLS.iter() }
    }

    /// Same walk, yielding the declarations instead of the values.
    pub fn symbols(self) -> impl Iterator<Item = &'static Symbol<T>> {
        let bits = self.bits;
        self.symbols.filter(move |symbol| covers(bits, symbol.value.bits()))
    }
}

impl<T: Symbolic> Iterator for FlagIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let bits = self.bits;
        self.symbols
            .find(|symbol| covers(bits, symbol.value.bits()))
            .map(|symbol| symbol.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.symbols.len()))
    }
}

impl<T: Symbolic> FusedIterator for FlagIter<T> {}

// =============================================================================
// Statically checked surface
// =============================================================================

/// Flag operations for combinable types.
///
/// Blanket-implemented for every `Symbolic<Kind = Combinable>`; discrete types
/// simply do not have these methods.
///
/// ```
/// use tola_flags::prelude::*;
///
/// symbolic! {
///     #[flags]
///     pub struct Access: u8 { READ = 1, WRITE = 2 }
/// }
///
/// assert!(Access::READ.union(Access::WRITE).contains(Access::WRITE));
/// ```
///
/// A discrete type is rejected at compile time:
///
/// ```compile_fail,E0599
/// use tola_flags::prelude::*;
///
/// symbolic! {
///     pub struct Mode: u16 { ASCII = 1, BINARY = 2 }
/// }
///
/// let _ = Mode::ASCII.contains(Mode::BINARY);
/// ```
pub trait Flags: Symbolic<Kind = Combinable> {
    /// No bits set.
    #[inline]
    fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Union of every declared symbol.
    #[inline]
    fn all() -> Self {
        Self::from_bits(crate::validity::mask::<Self>())
    }

    #[inline]
    fn is_empty(self) -> bool {
        self.bits() == 0
    }

    /// Every bit of `flag` is set in `self`.
    #[inline]
    fn contains(self, flag: Self) -> bool {
        covers(self.bits(), flag.bits())
    }

    /// At least one bit of `flag` is set in `self`.
    #[inline]
    fn intersects(self, flag: Self) -> bool {
        self.bits() & flag.bits() != 0
    }

    /// Copy of `self` with `flag` set or cleared.
    #[inline]
    fn with(self, flag: Self, set: bool) -> Self {
        apply(self, flag, set)
    }

    #[inline]
    fn set(&mut self, flag: Self, set: bool) {
        *self = apply(*self, flag, set);
    }

    #[inline]
    fn insert(&mut self, flag: Self) {
        self.set(flag, true);
    }

    #[inline]
    fn remove(&mut self, flag: Self) {
        self.set(flag, false);
    }

    #[inline]
    fn toggle(&mut self, flag: Self) {
        *self = Self::from_bits(self.bits() ^ flag.bits());
    }

    #[inline]
    fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits() | other.bits())
    }

    #[inline]
    fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits() & other.bits())
    }

    #[inline]
    fn difference(self, other: Self) -> Self {
        apply(self, other, false)
    }

    /// OR of every value in `flags`.
    #[inline]
    fn combine<I: IntoIterator<Item = Self>>(flags: I) -> Self {
        fold(flags)
    }

    /// Declared symbols contained in `self`.
    #[inline]
    fn iter(self) -> FlagIter<Self> {
        FlagIter::new(self)
    }

    /// Index of the single set bit.
    #[inline]
    fn bit_position(self) -> Result<u8> {
        single_bit_index(self)
    }
}

impl<T: Symbolic<Kind = Combinable>> Flags for T {}
