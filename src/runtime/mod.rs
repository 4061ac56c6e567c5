//! # Runtime
//!
//! Values and name-based dispatch over the library functions

pub mod builtins;
pub mod values;
