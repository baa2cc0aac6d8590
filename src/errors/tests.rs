//! Unit tests for error handling.
//!
//! This module contains tests for error types, tips and diagnostic rendering.

use crate::errors::errors::{Diagnostic, Error, ErrorImpl, ErrorTip, GrammarKind};
use crate::lexer::tokens::TokenKind;
use crate::{Position, Span};

fn at(line: u32, col: u32) -> Span {
    Span::point(Position::new(line, col))
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, at(1, 3));

    assert_eq!(error.get_error_name(), "Unrecognised Character");
    assert_eq!(error.get_position(), &Position::new(1, 3));
    assert_eq!(error.get_span(), &at(1, 3));
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::UnterminatedString { delimiter: '"' }, "Unterminated String"),
        (
            ErrorImpl::MissingPrimary {
                grammar: GrammarKind::Expression,
                found: TokenKind::Semicolon,
            },
            "Unknown Token",
        ),
        (
            ErrorImpl::MissingContinuation {
                grammar: GrammarKind::Expression,
                found: TokenKind::Identifier,
            },
            "Unknown Token",
        ),
        (
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseParen,
                found: TokenKind::EOF,
            },
            "Unexpected Token",
        ),
        (ErrorImpl::MissingSemicolon, "Missing Semicolon"),
        (
            ErrorImpl::InvalidArrayBound {
                token: "1.5".to_string(),
            },
            "Invalid Array Bound",
        ),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, at(1, 1)).get_error_name(), name);
    }
}

#[test]
fn test_missing_primary_tip() {
    let error = Error::new(
        ErrorImpl::MissingPrimary {
            grammar: GrammarKind::Expression,
            found: TokenKind::Semicolon,
        },
        at(1, 10),
    );

    let ErrorTip::Suggestion(tip) = error.get_tip();
    assert_eq!(tip, "expected a value/primary production but found `SEMICOLON`");
}

#[test]
fn test_unexpected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Arrow,
            found: TokenKind::OpenCurly,
        },
        at(2, 4),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "expected `RIGHT_ARROW` but found `LBRACE`"
    );
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::MissingSemicolon, at(3, 7));

    assert_eq!(error.to_string(), "missing semicolon at 3:7");
}

#[test]
fn test_to_diagnostic() {
    let source = "var a := 1;\nx = 1";
    let error = Error::new(ErrorImpl::MissingSemicolon, at(2, 5));

    let diagnostic = error.to_diagnostic("main.zl", source);

    assert_eq!(
        diagnostic,
        Diagnostic {
            tag: "main.zl".to_string(),
            line: 2,
            line_text: "x = 1".to_string(),
            col: 5,
            title: "Missing Semicolon".to_string(),
            explanation: "a semicolon was expected after the expression/statement".to_string(),
        }
    );
}

#[test]
fn test_diagnostic_past_end_of_source() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
        },
        at(4, 1),
    );

    let diagnostic = error.to_diagnostic("console", "fn f() {\n");

    assert_eq!(diagnostic.line, 4);
    assert_eq!(diagnostic.line_text, "");
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic {
        tag: "main.zl".to_string(),
        line: 2,
        line_text: "x = 1".to_string(),
        col: 5,
        title: "Missing Semicolon".to_string(),
        explanation: "a semicolon was expected after the expression/statement".to_string(),
    };

    let expected = [
        "  ┌── (main.zl) [2:5] Missing Semicolon",
        "2 | x = 1",
        "  ├~~~~~^",
        "  └── a semicolon was expected after the expression/statement",
    ]
    .join("\n");

    assert_eq!(diagnostic.to_string(), expected);
}
