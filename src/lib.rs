#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc, time::Instant};

use log::debug;

use crate::{
    ast::statements::Program,
    errors::errors::Diagnostic,
    lexer::lexer::tokenize,
    parser::{lookups::Grammar, parser::parse},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line and column inside a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Position { line, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// First and last character covered by a token or node, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// A span covering a single character.
    pub fn point(position: Position) -> Self {
        Span {
            start: position,
            end: position,
        }
    }

    /// Union of two spans where `first` was consumed before `last`.
    pub fn merge(first: &Span, last: &Span) -> Self {
        Span {
            start: first.start,
            end: last.end,
        }
    }

    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Returns the text of a 1-based line, without its line terminator.
///
/// Lines past the end of the source yield an empty string so a diagnostic
/// pointing at the end-of-input marker still has something to show.
pub fn get_line_at_position(source: &str, line: u32) -> &str {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, Position, Span};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }";
        assert_eq!(get_line_at_position(source, 1), "Hello, world!");
        assert_eq!(get_line_at_position(source, 2), "second");
        assert_eq!(get_line_at_position(source, 3), "");
        assert_eq!(get_line_at_position(source, 4), "Testing { }");
        assert_eq!(get_line_at_position(source, 9), "");
    }

    #[test]
    fn test_span_merge_and_contains() {
        let a = Span::new(Position::new(1, 1), Position::new(1, 3));
        let b = Span::new(Position::new(2, 4), Position::new(2, 9));
        let merged = Span::merge(&a, &b);

        assert_eq!(merged.start, Position::new(1, 1));
        assert_eq!(merged.end, Position::new(2, 9));
        assert!(merged.contains(&a));
        assert!(merged.contains(&b));
        assert!(!a.contains(&merged));
    }
}

/// Tokenizes and parses a complete source text with the default grammar.
///
/// `tag` names the source in diagnostics (a file path, or `console`). The
/// first lexical or syntax error stops the run and is returned as a
/// [`Diagnostic`]; no partial tree is ever produced.
pub fn run_source(tag: &str, source: &str) -> Result<Program, Diagnostic> {
    let start = Instant::now();

    let tokens = tokenize(source, Some(String::from(tag)))
        .map_err(|error| error.to_diagnostic(tag, source))?;
    debug!("tokenized {} in {:?}", tag, start.elapsed());

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(Grammar::new()), Rc::new(String::from(tag)))
        .map_err(|error| error.to_diagnostic(tag, source))?;
    debug!("parsed {} in {:?}", tag, parse_start.elapsed());

    Ok(program)
}
