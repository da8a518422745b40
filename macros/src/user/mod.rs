//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `symbolic!` | function macro | Declare symbolic types |

pub mod symbolic;

pub use symbolic::{expand_symbolic, SymbolicInput};
