//! Form-input validation for the Deriv client
//!
//! A table of validation rules keyed by [`ValidationKind`], each combining
//! a compiled regex with the supplementary checks the pattern cannot carry.

pub mod patterns;

pub use patterns::{ValidationKind, ADDRESS_PERMITTED_SPECIAL_CHARACTERS};
