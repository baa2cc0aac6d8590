//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::statements::Program). It uses a Pratt
//! parser with explicit binding powers and handles:
//!
//! - Statement parsing (declarations, loops, if chains, imports)
//! - Expression parsing (operators, calls, member access, literals)
//! - Type parsing for type annotations, on the same engine
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. The
//! first error ends the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
