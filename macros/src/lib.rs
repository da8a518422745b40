//! Procedural macros for the tola-flags symbolic flag-set algebra
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `symbolic!{}` | - | Declare combinable or discrete symbolic types |

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

/// Declare one or more symbolic types.
///
/// Each declaration becomes a `#[repr(transparent)]` newtype over the given
/// integer, with one associated constant per symbol and an implementation of
/// `tola_flags::Symbolic`. `#[flags]` marks the type combinable and adds the
/// bit operators; without it the type is discrete.
///
/// # Usage
/// ```ignore
/// symbolic! {
///     /// File access rights.
///     #[flags]
///     pub struct Access: u32 {
///         #[label = "read access"]
///         READ = 0b001,
///         WRITE = 0b010,
///         EXEC = 1 << 2,
///         RW = Self::READ.0 | Self::WRITE.0,
///     }
///
///     pub struct Mode: u8 {
///         ASCII = 1,
///         BINARY = 2,
///     }
/// }
///
/// let rw = Access::READ | Access::WRITE;
/// assert_eq!(rw, Access::RW);
/// assert_eq!(Mode::BINARY.to_string(), "BINARY");
/// ```
///
/// Generated for every type: `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Default` (zero), `Debug`, `Display`, `FromStr`, plus `from_repr` and
/// `to_repr` const constructors. Further derives may be added with
/// `#[derive(..)]`.
#[proc_macro]
pub fn symbolic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::SymbolicInput);
    user::expand_symbolic(input).into()
}
