//! Error surface shared by every fallible operation.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failures reported by the flag algebra, validity oracle and bridge.
///
/// Every variant is `Copy` and carries only `'static` data so the enum works
/// without an allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Flag-only operation invoked on a discrete type.
    #[error("`{type_name}` is not declared as a combinable flag set")]
    NotCombinable { type_name: &'static str },

    /// Bit position requested for a zero value.
    #[error("bit position requested for a zero value of `{type_name}`")]
    ZeroValue { type_name: &'static str },

    /// Bit position requested for a value with several bits set.
    #[error("value {bits:#x} of `{type_name}` has {count} bits set, expected exactly one")]
    MultipleBits {
        type_name: &'static str,
        bits: u64,
        count: u32,
    },

    /// Value outside the declared symbol set.
    #[error("argument `{argument}`: {bits:#x} is not a valid value of `{type_name}`")]
    InvalidSymbol {
        type_name: &'static str,
        argument: &'static str,
        bits: u64,
    },

    /// Destination representation narrower than the source.
    #[error("cannot reinterpret a {from_width}-byte pattern into {to_width} bytes")]
    WidthTooSmall { from_width: usize, to_width: usize },

    /// Byte codec asked for a width other than 1, 2, 4 or 8.
    #[error("`{type_name}` has a {width}-byte representation; only 1, 2, 4 and 8 are supported")]
    UnsupportedWidth { type_name: &'static str, width: usize },

    /// Byte buffer shorter than the representation.
    #[error("buffer holds {actual} bytes, {needed} required")]
    BufferTooShort { needed: usize, actual: usize },

    /// Name or literal that does not resolve to a value of the type.
    #[error("no symbol of `{type_name}` matches the given text")]
    UnknownSymbol { type_name: &'static str },
}

impl Error {
    /// Caller bugs rather than bad data: retrying with other data cannot help.
    pub const fn is_programming_error(&self) -> bool {
        matches!(self, Error::NotCombinable { .. } | Error::WidthTooSmall { .. })
    }
}
