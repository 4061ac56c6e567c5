//! # Builtins
//!
//! Name-based dispatch over the library functions, used by the command line
//! front end. Names are snake_case; camelCase spellings (`nthRoot`,
//! `isPrime`) and `mod` are accepted as aliases.

use crate::algebra::*;
use crate::error::{MathError, Result};
use crate::runtime::values::Value;
use tracing::debug;

/// Canonical names accepted by [`call`]
pub const BUILTIN_NAMES: &[&str] = &[
    "sum",
    "subtract",
    "multiply",
    "divide",
    "mean",
    "power",
    "sqrt",
    "cbrt",
    "nth_root",
    "exp",
    "ln",
    "log10",
    "log2",
    "log",
    "gcd",
    "lcm",
    "is_prime",
    "is_even",
    "is_odd",
    "factorial",
    "absolute",
    "floor",
    "ceil",
    "trunc",
    "sign",
    "round",
    "clamp",
    "lerp",
    "is_in_range",
    "modulo",
    "is_negative_zero",
];

/// List the canonical builtin names.
pub fn builtin_names() -> &'static [&'static str] {
    BUILTIN_NAMES
}

/// Map an alias to its canonical snake_case name.
pub fn canonical_name(name: &str) -> String {
    if name == "mod" {
        return "modulo".to_string();
    }

    let mut canonical = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !canonical.is_empty() && !canonical.ends_with('_') {
                canonical.push('_');
            }
            canonical.push(c.to_ascii_lowercase());
        } else {
            canonical.push(c);
        }
    }
    canonical
}

fn expect_args(name: &str, args: &[f64], expected: usize) -> Result<()> {
    if args.len() != expected {
        let plural = if expected == 1 { "argument" } else { "arguments" };
        return Err(MathError::ArgumentMismatch(format!(
            "{}() expects {} {}, got {}",
            name,
            expected,
            plural,
            args.len()
        )));
    }
    Ok(())
}

fn unary(name: &str, args: &[f64], f: fn(f64) -> f64) -> Result<Value> {
    expect_args(name, args, 1)?;
    Ok(Value::Number(f(args[0])))
}

fn binary(name: &str, args: &[f64], f: fn(f64, f64) -> f64) -> Result<Value> {
    expect_args(name, args, 2)?;
    Ok(Value::Number(f(args[0], args[1])))
}

fn ternary(name: &str, args: &[f64], f: fn(f64, f64, f64) -> f64) -> Result<Value> {
    expect_args(name, args, 3)?;
    Ok(Value::Number(f(args[0], args[1], args[2])))
}

fn predicate(name: &str, args: &[f64], f: fn(f64) -> bool) -> Result<Value> {
    expect_args(name, args, 1)?;
    Ok(Value::Bool(f(args[0])))
}

/// Apply the builtin called `name` to `args`.
pub fn call(name: &str, args: &[f64]) -> Result<Value> {
    let canonical = canonical_name(name);
    debug!("calling {}({:?})", canonical, args);

    let name = canonical.as_str();
    let value = match name {
        "sum" => Value::Number(sum(args)),
        "multiply" => Value::Number(multiply(args)),
        "mean" => Value::Number(mean(args)),
        "subtract" => binary(name, args, subtract)?,
        "divide" => {
            expect_args(name, args, 2)?;
            Value::Number(divide(args[0], args[1])?)
        }
        "power" => binary(name, args, power)?,
        "sqrt" => unary(name, args, sqrt)?,
        "cbrt" => unary(name, args, cbrt)?,
        "nth_root" => binary(name, args, nth_root)?,
        "exp" => unary(name, args, exp)?,
        "ln" => unary(name, args, ln)?,
        "log10" => unary(name, args, log10)?,
        "log2" => unary(name, args, log2)?,
        "log" => binary(name, args, log)?,
        "gcd" => binary(name, args, gcd)?,
        "lcm" => binary(name, args, lcm)?,
        "is_prime" => predicate(name, args, is_prime)?,
        "is_even" => predicate(name, args, is_even)?,
        "is_odd" => predicate(name, args, is_odd)?,
        "factorial" => unary(name, args, factorial)?,
        "absolute" => unary(name, args, absolute)?,
        "floor" => unary(name, args, floor)?,
        "ceil" => unary(name, args, ceil)?,
        "trunc" => unary(name, args, trunc)?,
        "sign" => unary(name, args, sign)?,
        "round" => match args {
            [n] => Value::Number(round(*n, 0)),
            [n, decimals] => Value::Number(round(*n, decimal_places(*decimals)?)),
            _ => {
                return Err(MathError::ArgumentMismatch(format!(
                    "round() expects 1 or 2 arguments, got {}",
                    args.len()
                )))
            }
        },
        "clamp" => ternary(name, args, clamp)?,
        "lerp" => ternary(name, args, lerp)?,
        "is_in_range" => {
            expect_args(name, args, 3)?;
            Value::Bool(is_in_range(args[0], args[1], args[2]))
        }
        "modulo" => binary(name, args, modulo)?,
        "is_negative_zero" => predicate(name, args, is_negative_zero)?,
        _ => return Err(MathError::UndefinedFunction(name.to_string())),
    };

    debug!("{} returned {}", name, value);
    Ok(value)
}

fn decimal_places(decimals: f64) -> Result<i32> {
    if decimals.fract() != 0.0 || decimals.abs() > f64::from(i16::MAX) {
        return Err(MathError::ValueError(format!(
            "round() decimals must be a whole number, got {}",
            decimals
        )));
    }
    Ok(decimals as i32)
}
