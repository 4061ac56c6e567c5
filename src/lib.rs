//! # CodyMath
//!
//! Pure mathematical utility functions over `f64`, plus two read-only tables
//!
//! ## Architecture
//!
//! - **Algebra**: arithmetic folds, powers/roots/logarithms, number theory,
//!   rounding and range utilities
//! - **Constants**: ten named constants (π, e, γ, Γ(1/3), ...)
//! - **Alphabets**: the Greek alphabet keyed by English letter name
//! - **Runtime**: name-based dispatch used by the `codymath` binary
//!
//! `divide` is the only function that reports an error. All other domain
//! violations return NaN or an infinity so results can be chained.

pub mod algebra;
pub mod alphabets;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod runtime;

// Re-export commonly used types
pub use crate::algebra::*;
pub use crate::alphabets::greek::{greek_letter, GreekLetter, GREEK_ALPHABET};
pub use crate::constants::{constant, Constants, CONSTANTS};
pub use crate::error::{MathError, Result};
