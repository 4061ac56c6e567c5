//! # Greek Alphabet
//!
//! The 24 letters of the classical Greek alphabet, keyed by lowercase English
//! name for programmatic access.

use serde::Serialize;
use std::collections::HashMap;

/// A single Greek letter with its display name and both glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GreekLetter {
    /// English name, capitalized for display.
    pub name: &'static str,
    /// Lowercase glyph.
    pub lower: &'static str,
    /// Uppercase glyph.
    pub upper: &'static str,
}

const fn letter(name: &'static str, lower: &'static str, upper: &'static str) -> GreekLetter {
    GreekLetter { name, lower, upper }
}

/// Letters in alphabet order
static LETTERS: [(&str, GreekLetter); 24] = [
    ("alpha", letter("Alpha", "α", "Α")),
    ("beta", letter("Beta", "β", "Β")),
    ("gamma", letter("Gamma", "γ", "Γ")),
    ("delta", letter("Delta", "δ", "Δ")),
    ("epsilon", letter("Epsilon", "ε", "Ε")),
    ("zeta", letter("Zeta", "ζ", "Ζ")),
    ("eta", letter("Eta", "η", "Η")),
    ("theta", letter("Theta", "θ", "Θ")),
    ("iota", letter("Iota", "ι", "Ι")),
    ("kappa", letter("Kappa", "κ", "Κ")),
    ("lambda", letter("Lambda", "λ", "Λ")),
    ("mu", letter("Mu", "μ", "Μ")),
    ("nu", letter("Nu", "ν", "Ν")),
    ("xi", letter("Xi", "ξ", "Ξ")),
    ("omicron", letter("Omicron", "ο", "Ο")),
    ("pi", letter("Pi", "π", "Π")),
    ("rho", letter("Rho", "ρ", "Ρ")),
    ("sigma", letter("Sigma", "σ", "Σ")),
    ("tau", letter("Tau", "τ", "Τ")),
    ("upsilon", letter("Upsilon", "υ", "Υ")),
    ("phi", letter("Phi", "φ", "Φ")),
    ("chi", letter("Chi", "χ", "Χ")),
    ("psi", letter("Psi", "ψ", "Ψ")),
    ("omega", letter("Omega", "ω", "Ω")),
];

lazy_static::lazy_static! {
    /// Read-only Greek alphabet keyed by lowercase English name
    pub static ref GREEK_ALPHABET: HashMap<&'static str, GreekLetter> =
        LETTERS.iter().copied().collect();
}

/// Look up a letter by its lowercase English name.
pub fn greek_letter(name: &str) -> Option<&'static GreekLetter> {
    GREEK_ALPHABET.get(name)
}

/// Iterate the alphabet from alpha to omega.
pub fn letters() -> impl Iterator<Item = (&'static str, &'static GreekLetter)> {
    LETTERS.iter().map(|(key, letter)| (*key, letter))
}
