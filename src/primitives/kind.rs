//! Type-level symbol set declaration.
//!
//! Core types: `Combinable` (independent bits), `Discrete` (exclusive codes),
//! `Kind` trait.

/// Declared intent of a symbolic type.
pub trait Kind: Send + Sync + 'static {
    /// `true` when members may be OR-combined.
    const COMBINABLE: bool;
}

/// Members are independent bits and may be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Combinable;

/// Members are mutually exclusive codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Discrete;

impl Kind for Combinable {
    const COMBINABLE: bool = true;
}

impl Kind for Discrete {
    const COMBINABLE: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combinable<K: Kind>() -> bool {
        K::COMBINABLE
    }

    #[test]
    fn test_kind_markers() {
        assert!(combinable::<Combinable>());
        assert!(!combinable::<Discrete>());
    }
}
