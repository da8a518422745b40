//! # Layer 0: Primitives
//!
//! Basic building blocks for symbolic types:
//! - `repr.rs`: fixed-width integer representations and raw bit patterns.
//! - `kind.rs`: type-level combinable/discrete declaration markers.

pub mod kind;
pub mod repr;

// Re-export key types at this level
pub use kind::{Combinable, Discrete, Kind};
pub use repr::{width_mask, Repr};
