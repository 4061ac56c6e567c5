//! # Numeric Utilities
//!
//! Rounding, sign handling, clamping, interpolation and modular arithmetic

/// Significant decimal digits kept by [`round`] after descaling
const ROUND_PRECISION: usize = 15;

/// Absolute value
pub fn absolute(n: f64) -> f64 {
    n.abs()
}

/// Largest integer less than or equal to `n`
pub fn floor(n: f64) -> f64 {
    n.floor()
}

/// Smallest integer greater than or equal to `n`
pub fn ceil(n: f64) -> f64 {
    n.ceil()
}

/// Integer part of `n`, rounding toward zero
pub fn trunc(n: f64) -> f64 {
    n.trunc()
}

/// Sign of `n`: 1, -1, or `n` itself for zeros of either sign and NaN.
pub fn sign(n: f64) -> f64 {
    if n == 0.0 || n.is_nan() {
        return n;
    }
    n.signum()
}

/// Round `n` to `decimals` decimal places.
///
/// Negative `decimals` round to tens, hundreds and so on. Midpoints round away
/// from zero. The descaled result is cut back to 15 significant digits, which
/// drops representation noise such as `1230.0000000000002`.
pub fn round(n: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (n * factor).round() / factor;
    to_significant_digits(rounded, ROUND_PRECISION)
}

fn to_significant_digits(n: f64, digits: usize) -> f64 {
    if n == 0.0 || !n.is_finite() {
        return n;
    }
    format!("{:.*e}", digits - 1, n).parse().unwrap_or(n)
}

/// Clamp `value` into `[min, max]`, computed as `min(max(value, min), max)`.
///
/// With inverted bounds (`min > max`) every value collapses to `max`. NaN in
/// any argument yields NaN.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    ordered_min(ordered_max(value, min), max)
}

/// Larger of two non-NaN values, treating `+0` as greater than `-0`
fn ordered_max(a: f64, b: f64) -> f64 {
    if a > b || (a == b && b.is_sign_negative()) {
        a
    } else {
        b
    }
}

/// Smaller of two non-NaN values, treating `-0` as less than `+0`
fn ordered_min(a: f64, b: f64) -> f64 {
    if a < b || (a == b && a.is_sign_negative()) {
        a
    } else {
        b
    }
}

/// Linear interpolation between `a` and `b`. `t` outside `[0, 1]` extrapolates.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Whether `start <= n <= end`
pub fn is_in_range(n: f64, start: f64, end: f64) -> bool {
    n >= start && n <= end
}

/// Floored modulo: the result takes the sign of the divisor `b`.
/// NaN when `b` is zero.
pub fn modulo(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

/// Whether `n` is `-0.0`
pub fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && 1.0 / n == f64::NEG_INFINITY
}
