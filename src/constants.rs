//! # Mathematical Constants
//!
//! Fundamental constants stored at full double precision: transcendental
//! numbers, number-theoretic constants and angle conversion factors.
//! Values are cross-checked against the NIST DLMF and Wolfram MathWorld.

use std::collections::HashMap;

/// Mathematical constants
pub struct Constants;

impl Constants {
    /// Pi, the ratio of a circle's circumference to its diameter.
    pub const PI: f64 = std::f64::consts::PI;

    /// Euler's number, the base of the natural logarithm.
    pub const E: f64 = std::f64::consts::E;

    /// The Euler-Mascheroni constant (γ).
    pub const EULER_MASCHERONI: f64 = 0.5772156649015327;

    /// e raised to γ, one of Mertens' constants.
    pub const E_TO_THE_GAMMA: f64 = 1.781072417990198;

    /// Square root of e.
    pub const SQRT_E: f64 = 1.6487212707001282;

    /// Square root of pi, also Γ(1/2).
    pub const SQRT_PI: f64 = 1.772453850905516;

    /// Γ(1/3)
    pub const GAMMA_ONE_THIRD: f64 = 2.678938534707748;

    /// Γ(1/4)
    pub const GAMMA_ONE_FOURTH: f64 = 3.625609908221908;

    /// Radians to degrees (180/π).
    pub const RAD_TO_DEG: f64 = 57.29577951308232;

    /// Degrees to radians (π/180).
    pub const DEG_TO_RAD: f64 = 0.017453292519943295;
}

lazy_static::lazy_static! {
    /// Read-only table of every constant, keyed by snake_case name
    pub static ref CONSTANTS: HashMap<&'static str, f64> = {
        let mut table = HashMap::with_capacity(10);
        table.insert("pi", Constants::PI);
        table.insert("e", Constants::E);
        table.insert("euler_mascheroni", Constants::EULER_MASCHERONI);
        table.insert("e_to_the_gamma", Constants::E_TO_THE_GAMMA);
        table.insert("sqrt_e", Constants::SQRT_E);
        table.insert("sqrt_pi", Constants::SQRT_PI);
        table.insert("gamma_one_third", Constants::GAMMA_ONE_THIRD);
        table.insert("gamma_one_fourth", Constants::GAMMA_ONE_FOURTH);
        table.insert("rad_to_deg", Constants::RAD_TO_DEG);
        table.insert("deg_to_rad", Constants::DEG_TO_RAD);
        table
    };
}

/// Look up a constant by name.
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

/// All constants sorted by name.
pub fn sorted_constants() -> Vec<(&'static str, f64)> {
    let mut entries: Vec<_> = CONSTANTS.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
