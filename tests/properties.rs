//! Cross-function properties of the public API
//!
//! Each test checks a relation between functions rather than a single value.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use codymath::*;

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn empty_folds_return_identities() {
    assert_eq!(sum(&[]), 0.0);
    assert_eq!(multiply(&[]), 1.0);
    assert!(mean(&[]).is_nan());
}

#[test]
fn mean_times_count_is_sum() {
    let samples: [&[f64]; 3] = [&[5.0, 10.0, 15.0, 20.0], &[-3.5, 7.25], &[1e6, 1e-6, 42.0]];
    for xs in samples {
        assert_relative_eq!(multiply(&[mean(xs), xs.len() as f64]), sum(xs), max_relative = 1e-12);
    }
}

#[test]
fn divide_by_zero_always_errors() {
    for a in [0.0, 1.0, -1.0, 1e300, -7.25] {
        assert_eq!(divide(a, 0.0), Err(MathError::DivisionByZero));
    }
}

// ============================================================================
// Powers and logarithms
// ============================================================================

#[test]
fn square_root_of_square_is_absolute() {
    for x in [-12.5, -2.0, 0.0, 0.5, 3.0, 1e5] {
        assert_relative_eq!(power(x, 2.0), x * x);
        assert_relative_eq!(sqrt(power(x, 2.0)), absolute(x));
    }
    assert!(sqrt(-1.0).is_nan());
}

#[test]
fn nth_root_edge_cases() {
    assert_eq!(nth_root(81.0, 2.0), sqrt(81.0));
    assert_relative_eq!(nth_root(125.0, 3.0), cbrt(125.0), epsilon = 1e-12);
    assert_eq!(nth_root(-27.0, 3.0), cbrt(-27.0));
    assert_eq!(nth_root(0.0625, 4.0), 0.5);
    assert!(nth_root(-16.0, 4.0).is_nan());
    assert_relative_eq!(nth_root(-32.0, 5.0), -2.0, epsilon = 1e-12);
}

#[test]
fn ln_inverts_exp() {
    for x in [-5.0, -0.5, 0.0, 0.5, 3.0, 10.0] {
        assert_abs_diff_eq!(ln(exp(x)), x, epsilon = 1e-12);
    }
    assert_eq!(ln(0.0), f64::NEG_INFINITY);
    assert!(ln(-1.0).is_nan());
}

#[test]
fn log_is_ratio_of_natural_logs() {
    for (n, base) in [(8.0, 2.0), (1000.0, 10.0), (50.0, 3.0), (0.25, 0.5)] {
        assert_relative_eq!(log(n, base), ln(n) / ln(base));
    }
    assert!(log(10.0, 1.0).is_nan());
    assert!(log(10.0, 0.0).is_nan());
    assert!(log(10.0, -2.0).is_nan());
}

// ============================================================================
// Number theory
// ============================================================================

#[test]
fn gcd_properties() {
    assert_eq!(gcd(48.0, 18.0), 6.0);
    assert_eq!(gcd(0.0, 0.0), 0.0);
    assert_eq!(gcd(-48.0, 18.0), gcd(48.0, 18.0));
    for a in [-9.5, 0.0, 7.0, 120.0] {
        assert_eq!(gcd(a, 0.0), absolute(trunc(a)));
    }
}

#[test]
fn lcm_gcd_product_identity() {
    for a in [-12.0, 3.0, 8.0, 35.0] {
        for b in [4.0, -9.0, 14.0] {
            assert_eq!(lcm(a, b) * gcd(a, b), absolute(a * b));
        }
    }
    assert_eq!(lcm(5.0, 0.0), 0.0);
}

#[test]
fn primality_reference_points() {
    assert!(!is_prime(1.0));
    assert!(!is_prime(-13.0));
    assert!(is_prime(2.0));
    assert!(!is_prime(9409.0));
    assert!(is_prime(997.0));
}

#[test]
fn odd_is_not_even() {
    for n in -25..=25 {
        let n = n as f64;
        assert_eq!(is_odd(n), !is_even(n));
    }
}

#[test]
fn factorial_boundaries() {
    assert_eq!(factorial(0.0), 1.0);
    assert!(factorial(-1.0).is_nan());
    assert!(factorial(170.0).is_finite());
    assert_eq!(factorial(171.0), f64::INFINITY);
}

// ============================================================================
// Utilities
// ============================================================================

#[test]
fn rounding_reference_points() {
    assert_eq!(round(1234.0, -1), 1230.0);
    assert_eq!(round(1238.0, -1), 1240.0);
    assert_eq!(round(5.5, 0), 6.0);
}

#[test]
fn clamp_reference_points() {
    assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
    assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(50.0, 100.0, 0.0), 0.0);
}

#[test]
fn floored_modulo_sign() {
    assert_eq!(modulo(-10.0, 3.0), 2.0);
    assert_eq!(modulo(10.0, -3.0), -2.0);
    assert!(modulo(1.0, 0.0).is_nan());
}

#[test]
fn negative_zero() {
    assert!(is_negative_zero(-0.0));
    assert!(!is_negative_zero(0.0));
}

#[test]
fn nan_propagates_through_chains() {
    let chained = sum(&[sqrt(-4.0), 1.0]);
    assert!(chained.is_nan());
    assert!(lerp(0.0, chained, 0.5).is_nan());
    assert!(round(chained, 2).is_nan());
}
