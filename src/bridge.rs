//! # Layer 3: Reinterpretation Bridge
//!
//! Bit-exact conversion between a symbolic value and a fixed-width integer,
//! plus the little-endian byte codec built on it.
//!
//! Outbound conversion copies the raw pattern: an `i8` symbol holding `-1`
//! reinterpreted as `u32` is `0x0000_00FF`, not `0xFFFF_FFFF`. Inbound
//! conversion widens by the source's signedness: `-1i8` into an `i16`
//! symbolic type is `0xFFFF`. Narrowing is refused with
//! [`Error::WidthTooSmall`] instead of truncating.

use crate::error::{Error, Result};
use crate::primitives::{width_mask, Repr};
use crate::symbolic::Symbolic;

fn ensure_fits(from_width: usize, to_width: usize) -> Result<()> {
    if to_width >= from_width {
        return Ok(());
    }
    tracing::debug!(from_width, to_width, "refused narrowing reinterpretation");
    Err(Error::WidthTooSmall { from_width, to_width })
}

/// Copy the pattern of `value` into a `Dest` at least as wide.
pub fn reinterpret_to<Dest: Repr, T: Symbolic>(value: T) -> Result<Dest> {
    ensure_fits(<T::Repr as Repr>::WIDTH, Dest::WIDTH)?;
    Ok(Dest::from_bits(value.bits()))
}

/// Pattern of `value` widened to `to_width` bytes, sign-filled for a
/// negative signed source.
fn widen<Src: Repr>(value: Src, to_width: usize) -> u64 {
    let bits = value.to_bits();
    let negative = Src::SIGNED && Src::BITS > 0 && (bits >> (Src::BITS - 1)) & 1 == 1;
    if negative {
        bits | (width_mask(to_width) & !width_mask(Src::WIDTH))
    } else {
        bits
    }
}

/// Widen `value` into a symbolic type at least as wide.
///
/// Signed sources are sign-extended, unsigned ones zero-extended.
pub fn reinterpret_from<T: Symbolic, Src: Repr>(value: Src) -> Result<T> {
    let to_width = <T::Repr as Repr>::WIDTH;
    ensure_fits(Src::WIDTH, to_width)?;
    Ok(T::from_bits(widen(value, to_width)))
}

/// Byte width of `T` if the codec supports it.
fn codec_width<T: Symbolic>() -> Result<usize> {
    match <T::Repr as Repr>::WIDTH {
        width @ (1 | 2 | 4 | 8) => Ok(width),
        width => Err(Error::UnsupportedWidth { type_name: T::type_name(), width }),
    }
}

fn read_le<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes
        .get(..N)
        .and_then(|head| <[u8; N]>::try_from(head).ok())
        .ok_or(Error::BufferTooShort { needed: N, actual: bytes.len() })
}

/// Decode a value from the first bytes of `bytes`, little-endian.
///
/// Reads exactly the representation's width; trailing bytes are ignored.
pub fn decode_from_bytes<T: Symbolic>(bytes: &[u8]) -> Result<T> {
    match codec_width::<T>()? {
        1 => reinterpret_from(u8::from_le_bytes(read_le(bytes)?)),
        2 => reinterpret_from(u16::from_le_bytes(read_le(bytes)?)),
        4 => reinterpret_from(u32::from_le_bytes(read_le(bytes)?)),
        _ => reinterpret_from(u64::from_le_bytes(read_le(bytes)?)),
    }
}

/// Write the little-endian pattern of `value` to the front of `out`.
///
/// Returns the number of bytes written.
pub fn encode_to_bytes<T: Symbolic>(value: T, out: &mut [u8]) -> Result<usize> {
    let width = codec_width::<T>()?;
    let actual = out.len();
    let head = out
        .get_mut(..width)
        .ok_or(Error::BufferTooShort { needed: width, actual })?;
    head.copy_from_slice(&value.bits().to_le_bytes()[..width]);
    Ok(width)
}
