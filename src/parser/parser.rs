//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct, the shared precedence
//! climbing engine, and the block/capture productions every grammar reuses.
//! The parser walks a fully materialised token sequence with a forward-only
//! cursor and dispatches through an immutable [`Grammar`]:
//! - Statement handlers
//! - NUD (null denotation) handlers that start an expression or type
//! - LED (left denotation) handlers that extend one
//! - Binding powers for operator precedence

use std::rc::Rc;

use log::{debug, trace};

use crate::{
    ast::statements::{BlockStmt, Program, ScopeCapture},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Span, MK_TOKEN,
};

use super::{
    lookups::{BindingPower, Grammar, Production},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the grammar it dispatches through.
/// It tracks the current position in the token stream and provides methods
/// for token consumption.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The tag of the source being parsed
    file: Rc<String>,
    /// Handler tables, shared and read-only
    grammar: Rc<Grammar>,
    /// Cleared while parsing an `if` condition, where `{` opens the body
    struct_literals: bool,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A token sequence that does not end in `EOF` gets one appended, so the
    /// cursor always has a current token to look at.
    pub fn new(mut tokens: Vec<Token>, grammar: Rc<Grammar>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let span = tokens
                .last()
                .map(|token| Span::point(token.span.end))
                .unwrap_or(Span::point(crate::Position::new(1, 1)));
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), span));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            grammar,
            struct_literals: true,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token, or the current one at the start.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if index + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    pub fn curr_is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_token_kind())
    }

    /// True once the cursor reached `EOF` or `kind`, the usual end of a list.
    pub fn at_list_end(&self, kind: TokenKind) -> bool {
        self.is_one_of_many(&[TokenKind::EOF, kind])
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind,
                        found: token.kind,
                    },
                    token.span,
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Consumes the `;` ending a statement.
    ///
    /// A missing terminator is reported at the token it should have followed.
    pub fn expect_semicolon(&mut self) -> Result<Token, Error> {
        let error = Error::new(ErrorImpl::MissingSemicolon, self.previous().span);
        self.expect_error(TokenKind::Semicolon, Some(error))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn struct_literals_allowed(&self) -> bool {
        self.struct_literals
    }

    /// Runs `parse` with struct literals allowed or not, restoring the
    /// previous setting afterwards.
    pub fn with_struct_literals<T>(
        &mut self,
        allowed: bool,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let previous = std::mem::replace(&mut self.struct_literals, allowed);
        let result = parse(self);
        self.struct_literals = previous;
        result
    }

    pub fn get_grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }
}

/// Parses one production of grammar `N` binding no weaker than `bp`.
///
/// A primary (NUD) handler starts the node; while the current token binds
/// tighter than `bp` its continuation (LED) handler extends it. With `once`
/// set only the primary production runs.
pub fn parse_production<N: Production>(
    parser: &mut Parser,
    bp: BindingPower,
    once: bool,
) -> Result<N, Error> {
    let grammar = Rc::clone(&parser.grammar);
    let table = N::table(&grammar);

    let token = parser.current_token();
    let Some(nud_fn) = table.get_nud(token.kind) else {
        return Err(Error::new(
            ErrorImpl::MissingPrimary {
                grammar: N::GRAMMAR,
                found: token.kind,
            },
            token.span,
        ));
    };

    let mut left = nud_fn(parser)?;

    if once {
        return Ok(left);
    }

    while table.get_bp(parser.current_token_kind()) > bp {
        if N::halts(parser, parser.current_token_kind()) {
            break;
        }

        let token = parser.current_token();
        let Some(led_fn) = table.get_led(token.kind) else {
            return Err(Error::new(
                ErrorImpl::MissingContinuation {
                    grammar: N::GRAMMAR,
                    found: token.kind,
                },
                token.span,
            ));
        };

        let operator_bp = table.get_bp(token.kind);
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

/// `{ stmt* }`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span;

    let body = parser.with_struct_literals(true, |parser| {
        let mut body = Vec::new();
        while !parser.at_list_end(TokenKind::CloseCurly) {
            body.push(parse_stmt(parser)?);
        }
        Ok(body)
    })?;

    let end = parser.expect(TokenKind::CloseCurly)?.span;

    Ok(BlockStmt {
        body,
        span: Span::merge(&start, &end),
    })
}

/// `|a, b|`; an empty `||` lexes as one token and is accepted too.
pub fn parse_scope_capture(parser: &mut Parser) -> Result<ScopeCapture, Error> {
    if parser.curr_is(TokenKind::DoublePipe) {
        let span = parser.advance().span;
        return Ok(ScopeCapture {
            names: Vec::new(),
            span,
        });
    }

    let start = parser.expect(TokenKind::Pipe)?.span;

    let mut names = Vec::new();
    while !parser.at_list_end(TokenKind::Pipe) {
        names.push(parser.expect(TokenKind::Identifier)?.value);
        if !parser.at_list_end(TokenKind::Pipe) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    let end = parser.expect(TokenKind::Pipe)?.span;

    Ok(ScopeCapture {
        names,
        span: Span::merge(&start, &end),
    })
}

/// Parses a token stream into a [`Program`].
///
/// This is the main entry point for parsing. It dispatches statements until
/// `EOF`; the first error ends the parse and no program is returned.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `grammar` - The tables to dispatch through
/// * `file` - The tag of the source, kept on the program
pub fn parse(tokens: Vec<Token>, grammar: Rc<Grammar>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, grammar, Rc::clone(&file));
    let start = parser.current_token().span;

    let mut body = vec![];

    while parser.has_tokens() {
        trace!("{}: statement at {}", file, parser.current_token().span.start);
        body.push(parse_stmt(&mut parser)?);
    }

    let span = match body.last() {
        Some(last) => Span::merge(&start, last.get_span()),
        None => start,
    };
    debug!("{}: parsed {} top-level statements", file, body.len());

    Ok(Program {
        tag: file.to_string(),
        body,
        span,
    })
}
