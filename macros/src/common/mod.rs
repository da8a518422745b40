// Common utilities shared by the declaration macros
//
// This module contains:
// - parse_utils: attribute extraction and duplicate checks

mod parse_utils;

pub use parse_utils::*;
