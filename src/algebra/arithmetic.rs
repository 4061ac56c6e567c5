//! # Arithmetic
//!
//! Folds and the four basic operations

use crate::error::{MathError, Result};

/// Sum of a sequence. Returns 0 for an empty slice.
pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |total, n| total + n)
}

/// Difference `a - b`
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of a sequence. Returns 1 for an empty slice.
pub fn multiply(numbers: &[f64]) -> f64 {
    numbers.iter().fold(1.0, |total, n| total * n)
}

/// Quotient `a / b`.
///
/// Fails with [`MathError::DivisionByZero`] when `b` is zero of either sign,
/// including `0 / 0`.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Arithmetic mean. Returns NaN for an empty slice.
pub fn mean(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return f64::NAN;
    }
    sum(numbers) / numbers.len() as f64
}
