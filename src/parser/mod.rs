//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (let bindings, returns, expression statements)
//! - Expression parsing (prefix and binary operators, calls, literals)
//! - Error collection and recovery at statement boundaries
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. The
//! handlers live in lookup tables keyed by token kind, so new forms are added
//! by registering a handler rather than by editing the parsing loop.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
