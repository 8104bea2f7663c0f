//! Error types and diagnostics for the front end.
//!
//! This module defines the error types produced while scanning and parsing:
//!
//! - Error structures with source position information
//! - Specific error variants for each failure class
//! - The append-only diagnostics collector filled by the parser
//! - Helpful hints attached to each error

pub mod diagnostics;
pub mod errors;
