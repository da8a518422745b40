//! # Layer 1: Symbolic Types
//!
//! A symbolic type is a closed set of named integer constants that share one
//! [`Repr`]. Types are normally declared with [`symbolic!`](crate::symbolic!),
//! which generates the [`Symbolic`] impl below.

use crate::primitives::{Kind, Repr};

/// One declared constant of a symbolic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol<T: 'static> {
    /// Declared identifier.
    pub name: &'static str,
    /// Declared value.
    pub value: T,
    /// Optional human-readable label, passed through untouched.
    pub label: Option<&'static str>,
}

impl<T> Symbol<T> {
    pub const fn new(name: &'static str, value: T) -> Self {
        Symbol { name, value, label: None }
    }

    pub const fn labeled(name: &'static str, value: T, label: &'static str) -> Self {
        Symbol { name, value, label: Some(label) }
    }
}

/// Symbolic Type trait
///
/// Implemented by `#[repr(transparent)]` newtypes over a [`Repr`]. Instances
/// may hold undeclared patterns; the validity oracle is what rejects them.
pub trait Symbolic: Copy + Eq + Send + Sync + 'static {
    /// Backing integer.
    type Repr: Repr;

    /// Combinable or discrete declaration.
    type Kind: Kind;

    /// Declared constants, in declaration order.
    const SYMBOLS: &'static [Symbol<Self>];

    fn from_repr(repr: Self::Repr) -> Self;

    fn to_repr(self) -> Self::Repr;

    /// Raw pattern, zero-extended.
    #[inline(always)]
    fn bits(self) -> u64 {
        self.to_repr().to_bits()
    }

    /// Rebuild from a raw pattern, keeping the representation's low bytes.
    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        Self::from_repr(<Self::Repr as Repr>::from_bits(bits))
    }

    /// Type name used in diagnostics.
    fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }
}
