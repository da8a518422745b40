#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and the classifier memo table
// - alloc: enables alloc types in no_std
// - macros: default, re-exports `symbolic!`

//! # tola-flags
//!
//! Symbolic flag-set algebra over fixed-width integer codes.
//!
//! **Closed sets of named integer constants, treated as algebraic values.**
//!
//! ## Architecture
//!
//! A *symbolic type* is a `#[repr(transparent)]` newtype over one of the
//! primitive integers, with a declared list of named constants. Each type is
//! declared either **combinable** (members are independent bits) or
//! **discrete** (members are mutually exclusive codes).
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Repr (u8..i64, raw bit patterns), Kind (Combinable/Discrete)   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Symbolic                                                |
//! |  - Symbolic trait, Symbol declarations                            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Classifier                                              |
//! |  - is_combinable, require_combinable                              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Algebra / Validity / Bridge                             |
//! |  - bit_position, is_flag_set, set_flags, combine_flags, get_flags |
//! |  - is_valid, check_has_value                                      |
//! |  - reinterpret_to, reinterpret_from, decode_from_bytes            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Names                                                   |
//! |  - name_of, label_of, parse, Display                              |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_flags::prelude::*;
//!
//! symbolic! {
//!     /// File access rights.
//!     #[flags]
//!     pub struct Access: u8 {
//!         #[label = "read access"]
//!         READ = 0b001,
//!         WRITE = 0b010,
//!         EXEC = 0b100,
//!     }
//!
//!     /// Transfer mode, one at a time.
//!     pub struct Mode: u16 {
//!         ASCII = 1,
//!         BINARY = 2,
//!     }
//! }
//!
//! let rw = Access::READ | Access::WRITE;
//! assert!(rw.contains(Access::READ));
//! assert_eq!(rw.to_string(), "READ | WRITE");
//! assert!(is_valid(Mode::BINARY));
//! assert_eq!(decode_from_bytes::<Mode>(&[2, 0])?, Mode::BINARY);
//! ```

// Allow `::tola_flags` to work inside the crate itself
extern crate self as tola_flags;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Symbolic Types
// =============================================================================
pub mod symbolic;

// =============================================================================
// Layer 2: Capability Classifier
// =============================================================================
pub mod classify;

// =============================================================================
// Layer 3: Algebra, Validity, Bridge
// =============================================================================
pub mod algebra;
pub mod bridge;
pub mod validity;

// =============================================================================
// Layer 4: Names
// =============================================================================
pub mod names;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use algebra::{
    bit_position, combine_flags, get_flags, is_flag_set, set_flags, set_flags_in_place, FlagIter,
    Flags,
};
pub use bridge::{decode_from_bytes, encode_to_bytes, reinterpret_from, reinterpret_to};
pub use classify::{is_combinable, require_combinable};
pub use error::{Error, Result};
pub use primitives::{Combinable, Discrete, Kind, Repr};
pub use symbolic::{Symbol, Symbolic};
pub use validity::{check_has_value, is_valid, is_valid_combination, mask, undeclared_bits};

// Re-export proc-macros
#[cfg(feature = "macros")]
pub use macros::symbolic;

/// Common items for the flag algebra.
pub mod prelude {
    pub use crate::algebra::{
        // Checked operations
        bit_position, combine_flags, get_flags, is_flag_set, set_flags, set_flags_in_place,
        // Typed surface
        Flags,
    };
    pub use crate::bridge::{decode_from_bytes, encode_to_bytes, reinterpret_from, reinterpret_to};
    pub use crate::classify::{is_combinable, require_combinable};
    pub use crate::error::{Error, Result};
    pub use crate::primitives::{Combinable, Discrete, Repr};
    pub use crate::symbolic::{Symbol, Symbolic};
    pub use crate::validity::{check_has_value, is_valid};
    #[cfg(feature = "macros")]
    pub use macros::symbolic;
}
