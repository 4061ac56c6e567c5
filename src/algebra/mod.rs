//! # Algebra
//!
//! Arithmetic, powers and logarithms, number theory and numeric utilities.
//! Every function works on `f64` and follows IEEE-754: invalid input yields
//! NaN or an infinity. `divide` is the one exception and returns an error.

pub mod arithmetic;
pub mod number_theory;
pub mod powers;
pub mod utils;

pub use arithmetic::*;
pub use number_theory::*;
pub use powers::*;
pub use utils::*;
