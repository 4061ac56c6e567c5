//! # Alphabets
//!
//! Symbol tables used in mathematical notation

pub mod greek;
