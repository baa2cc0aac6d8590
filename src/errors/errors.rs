use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, lexer::tokens::TokenKind, Position, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "Unterminated String",
            ErrorImpl::UnrecognisedCharacter { .. } => "Unrecognised Character",
            ErrorImpl::MissingPrimary { .. } => "Unknown Token",
            ErrorImpl::MissingContinuation { .. } => "Unknown Token",
            ErrorImpl::UnexpectedToken { .. } => "Unexpected Token",
            ErrorImpl::MissingSemicolon => "Missing Semicolon",
            ErrorImpl::InvalidVarDecl { .. } => "Unexpected Token",
            ErrorImpl::InvalidArrayBound { .. } => "Invalid Array Bound",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { delimiter } => ErrorTip::Suggestion(format!(
                "An unterminated string was found at the end of the file. Strings must be terminated with a matching `{}`.",
                delimiter
            )),
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "The character `{}` does not start any token.",
                character
            )),
            ErrorImpl::MissingPrimary { grammar, found } => ErrorTip::Suggestion(format!(
                "expected {} but found `{}`",
                grammar.primary_description(),
                found
            )),
            ErrorImpl::MissingContinuation { grammar, found } => ErrorTip::Suggestion(format!(
                "expected {} but found `{}`",
                grammar.continuation_description(),
                found
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected `{}` but found `{}`", expected, found))
            }
            ErrorImpl::MissingSemicolon => ErrorTip::Suggestion(String::from(
                "a semicolon was expected after the expression/statement",
            )),
            ErrorImpl::InvalidVarDecl { found } => ErrorTip::Suggestion(format!(
                "found `{}` in a variable declaration, either `:`, `:=` or `;` was expected",
                found
            )),
            ErrorImpl::InvalidArrayBound { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid array bound, it must be a whole number",
                token
            )),
        }
    }

    /// Resolves the error against the source it came from.
    ///
    /// `tag` is the label the run was started with and `source` the full
    /// text, which supplies the offending line's preview.
    pub fn to_diagnostic(&self, tag: &str, source: &str) -> Diagnostic {
        let position = self.get_position();

        Diagnostic {
            tag: String::from(tag),
            line: position.line,
            line_text: String::from(get_line_at_position(source, position.line)),
            col: position.col,
            title: String::from(self.get_error_name()),
            explanation: self.get_tip().to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.span.start)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Which of the two precedence grammars raised a dispatch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    Expression,
    Type,
}

impl GrammarKind {
    fn primary_description(&self) -> &'static str {
        match self {
            GrammarKind::Expression => "a value/primary production",
            GrammarKind::Type => "a type production",
        }
    }

    fn continuation_description(&self) -> &'static str {
        match self {
            GrammarKind::Expression => "a continuation production",
            GrammarKind::Type => "a type continuation production",
        }
    }
}

impl Display for GrammarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarKind::Expression => write!(f, "expression"),
            GrammarKind::Type => write!(f, "type"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string literal opened with {delimiter:?}")]
    UnterminatedString { delimiter: char },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("no {grammar} primary production for {found}")]
    MissingPrimary { grammar: GrammarKind, found: TokenKind },
    #[error("no {grammar} continuation production for {found}")]
    MissingContinuation { grammar: GrammarKind, found: TokenKind },
    #[error("expected {expected} but found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("missing semicolon")]
    MissingSemicolon,
    #[error("invalid variable declaration, found {found}")]
    InvalidVarDecl { found: TokenKind },
    #[error("invalid array bound: {token:?}")]
    InvalidArrayBound { token: String },
}

/// The content of a fatal report: everything a renderer needs, nothing about
/// how it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub tag: String,
    pub line: u32,
    pub line_text: String,
    pub col: u32,
    pub title: String,
    pub explanation: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        /*
              ┌── (main.zl) [2:5] Missing Semicolon
            2 | x = 1
              ├~~~~~^
              └── a semicolon was expected after the expression/statement
        */
        let gutter = " ".repeat(self.line.to_string().len());

        writeln!(
            f,
            "{} ┌── ({}) [{}:{}] {}",
            gutter, self.tag, self.line, self.col, self.title
        )?;
        writeln!(f, "{} | {}", self.line, self.line_text)?;
        writeln!(f, "{} ├{}^", gutter, "~".repeat(self.col as usize))?;
        write!(f, "{} └── {}", gutter, self.explanation)
    }
}
