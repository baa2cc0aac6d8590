//! Error types and error reporting for the front end.
//!
//! This module defines the single error value that aborts a run:
//!
//! - Error structures carrying the source span of the failure
//! - Specific error variants for lexing and parsing
//! - The diagnostic content handed to whoever renders it

pub mod errors;

#[cfg(test)]
mod tests;
