//! # Number Theory
//!
//! Divisibility, primality, parity and factorials. Inputs are truncated toward
//! zero before use, so `gcd(48.9, 18.2)` is `gcd(48, 18)`.

use super::utils::{absolute, trunc};

/// Largest exact integer whose factorial is still a finite `f64`
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Greatest common divisor of `trunc(|a|)` and `trunc(|b|)` by Euclid's
/// algorithm. `gcd(x, 0)` is `x` and `gcd(0, 0)` is 0. Non-finite input
/// yields NaN.
pub fn gcd(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }

    let mut a = trunc(absolute(a));
    let mut b = trunc(absolute(b));
    while b != 0.0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple of `trunc(|a|)` and `trunc(|b|)`. 0 when either is 0.
pub fn lcm(a: f64, b: f64) -> f64 {
    let a = trunc(absolute(a));
    let b = trunc(absolute(b));
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    (a * b) / gcd(a, b)
}

/// Primality of `trunc(n)` by trial division over odd divisors up to `√n`.
pub fn is_prime(n: f64) -> bool {
    if !n.is_finite() {
        return false;
    }

    let n = trunc(n);
    if n <= 1.0 {
        return false;
    }
    if n == 2.0 {
        return true;
    }
    if n % 2.0 == 0.0 {
        return false;
    }

    let limit = n.sqrt();
    let mut divisor = 3.0;
    while divisor <= limit {
        if n % divisor == 0.0 {
            return false;
        }
        divisor += 2.0;
    }
    true
}

/// Whether `trunc(n)` is even
pub fn is_even(n: f64) -> bool {
    trunc(n) % 2.0 == 0.0
}

/// Whether `trunc(n)` is odd. Always the negation of [`is_even`].
pub fn is_odd(n: f64) -> bool {
    !is_even(n)
}

/// Factorial of `trunc(n)`.
///
/// NaN for negative or NaN input, 1 for 0. Results past 170! overflow to
/// Infinity.
pub fn factorial(n: f64) -> f64 {
    let n = trunc(n);
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}
