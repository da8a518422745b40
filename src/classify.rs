//! # Layer 2: Capability Classifier
//!
//! Answers "may members of `T` be combined?" from the type's declared
//! [`Kind`]. The answer never changes for a type. With the `std` feature it is
//! memoized in a process-wide table keyed by `TypeId`.

use crate::error::{Error, Result};
use crate::primitives::Kind;
use crate::symbolic::Symbolic;

#[cfg(feature = "std")]
mod memo {
    use core::any::TypeId;
    use std::collections::HashMap;

    use once_cell::sync::Lazy;
    use parking_lot::RwLock;

    static TABLE: Lazy<RwLock<HashMap<TypeId, bool>>> = Lazy::new(|| RwLock::new(HashMap::new()));

    pub(super) fn classify(id: TypeId, type_name: &'static str, compute: impl FnOnce() -> bool) -> bool {
        if let Some(&known) = TABLE.read().get(&id) {
            return known;
        }
        let combinable = compute();
        // Racing first lookups all store the same answer.
        TABLE.write().insert(id, combinable);
        tracing::trace!(type_name, combinable, "classified symbolic type");
        combinable
    }

    pub(super) fn len() -> usize {
        TABLE.read().len()
    }
}

/// `true` when `T` is declared combinable.
pub fn is_combinable<T: Symbolic>() -> bool {
    #[cfg(feature = "std")]
    {
        memo::classify(core::any::TypeId::of::<T>(), T::type_name(), || {
            <T::Kind as Kind>::COMBINABLE
        })
    }
    #[cfg(not(feature = "std"))]
    {
        <T::Kind as Kind>::COMBINABLE
    }
}

/// Guard for flag-only operations.
pub fn require_combinable<T: Symbolic>() -> Result<()> {
    if is_combinable::<T>() {
        Ok(())
    } else {
        Err(Error::NotCombinable { type_name: T::type_name() })
    }
}

/// Number of types classified so far in this process.
#[cfg(feature = "std")]
pub fn classified_count() -> usize {
    memo::len()
}
