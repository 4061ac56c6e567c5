//! # Powers, Roots and Logarithms

use super::arithmetic::divide;
use crate::constants::Constants;

/// `base` raised to `exponent`. `0^0` is 1; a negative base with a
/// fractional exponent is NaN.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root. NaN for negative input.
pub fn sqrt(n: f64) -> f64 {
    n.sqrt()
}

/// Real cube root, sign-preserving.
pub fn cbrt(n: f64) -> f64 {
    n.cbrt()
}

/// The `root`-th root of `n`.
///
/// A negative radicand with an even degree is NaN. A negative radicand with
/// any other degree takes the root of `-n` and negates it. Parity is tested on
/// the raw `root`, so a fractional degree takes the odd path.
pub fn nth_root(n: f64, root: f64) -> f64 {
    if n < 0.0 && root % 2.0 == 0.0 {
        return f64::NAN;
    }

    if n < 0.0 {
        return -power(-n, 1.0 / root);
    }

    power(n, 1.0 / root)
}

/// `e^n`, computed from the stored value of e.
pub fn exp(n: f64) -> f64 {
    power(Constants::E, n)
}

/// Natural logarithm. NaN for negative input, -Infinity for zero.
pub fn ln(n: f64) -> f64 {
    n.ln()
}

/// Base-10 logarithm. NaN for negative input, -Infinity for zero.
pub fn log10(n: f64) -> f64 {
    n.log10()
}

/// Base-2 logarithm. NaN for negative input, -Infinity for zero.
pub fn log2(n: f64) -> f64 {
    n.log2()
}

/// Logarithm of `n` in an arbitrary `base`.
///
/// Bases that are not positive, and base 1, yield NaN.
pub fn log(n: f64, base: f64) -> f64 {
    if base <= 0.0 || base == 1.0 {
        return f64::NAN;
    }

    // ln(base) is only zero for base 1, which is rejected above
    divide(ln(n), ln(base)).unwrap_or(f64::NAN)
}
