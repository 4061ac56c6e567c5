//! # Errors
//!
//! Division by zero is the only failure the math functions themselves report.
//! Every other domain violation is signalled with NaN or an infinity. The
//! remaining variants belong to the name-based dispatch layer and the CLI.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Undefined function: {0}")]
    UndefinedFunction(String),

    #[error("Undefined constant: {0}")]
    UndefinedConstant(String),

    #[error("Undefined letter: {0}")]
    UndefinedLetter(String),

    #[error("Argument mismatch: {0}")]
    ArgumentMismatch(String),

    #[error("Value error: {0}")]
    ValueError(String),
}

pub type Result<T> = std::result::Result<T, MathError>;
