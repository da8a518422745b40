//! Fixed-width integer representations.
//!
//! A [`Repr`] is the integer that backs a symbolic value. `to_bits` yields
//! the raw bit pattern zero-extended to 64 bits; sign extension is left to
//! callers that read [`Repr::SIGNED`].

use core::fmt::Debug;
use core::hash::Hash;

/// Underlying fixed-width integer of a symbolic type.
///
/// Implemented for every primitive integer from 8 to 64 bits. The trait is
/// open: a consumer may back a symbolic type with its own integer (for
/// example a 3-byte wire code), provided `WIDTH <= 8`.
pub trait Repr: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Width in bytes.
    const WIDTH: usize;

    /// Width in bits.
    const BITS: u32 = (Self::WIDTH * 8) as u32;

    /// Whether the integer is signed. Widening a signed source into a
    /// symbolic type sign-extends.
    const SIGNED: bool;

    /// The all-zero pattern.
    const ZERO: Self;

    /// Raw bit pattern, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Rebuild from the low `WIDTH` bytes of `bits`. Higher bits are dropped.
    fn from_bits(bits: u64) -> Self;
}

/// Mask selecting the low `width` bytes of a 64-bit pattern.
#[inline(always)]
pub const fn width_mask(width: usize) -> u64 {
    if width >= 8 { u64::MAX } else { (1u64 << (width * 8)) - 1 }
}

macro_rules! impl_repr {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();
                const SIGNED: bool = <$ty>::MIN != 0;
                const ZERO: Self = 0;

                #[inline(always)]
                fn to_bits(self) -> u64 {
                    self as $unsigned as u64
                }

                #[inline(always)]
                fn from_bits(bits: u64) -> Self {
                    bits as $unsigned as $ty
                }
            }
        )*
    };
}

impl_repr! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
}
