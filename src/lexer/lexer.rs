use std::rc::Rc;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{
    Token, TokenKind, DOUBLE_OPERATOR_LOOKUP, RESERVED_LOOKUP, SINGLE_OPERATOR_LOOKUP,
};

pub type RegexHandler = fn(&mut Lexer<'_>, &Regex) -> Result<(), Error>;

/// A scan rule: `starts` classifies the current character, `regex` (anchored
/// at the cursor) decides the rule applies and measures the lexeme.
pub struct RegexPattern {
    starts: fn(char) -> bool,
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { starts: is_whitespace, regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { starts: |c| c == '/', regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { starts: is_alpha, regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { starts: is_digit, regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { starts: is_quote, regex: Regex::new("^[\"'`]").unwrap(), handler: string_handler },
    ];
}

pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    line: u32,
    col: u32,
    /// Position of the most recently consumed character.
    last: Position,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("console"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            col: 1,
            last: Position::new(1, 1),
            file: file_name,
        }
    }

    /// Consumes one character, keeping line and column in step.
    ///
    /// A newline starts the next line at column 1; tabs and carriage returns
    /// do not move the column.
    pub fn advance(&mut self) -> Option<char> {
        let current = self.at()?;
        self.last = self.position();
        self.pos += current.len_utf8();

        match current {
            '\n' => {
                self.line += 1;
                self.col = 1;
            }
            '\t' | '\r' => {}
            _ => self.col += 1,
        }

        Some(current)
    }

    /// Consumes characters until `n` bytes have been read.
    pub fn advance_n(&mut self, n: usize) {
        let target = self.pos + n;
        while self.pos < target && self.advance().is_some() {}
    }

    pub fn push(&mut self, token: Token) {
        trace!("{}: {} at {}", self.file, token, token.span.start);
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    /// Span from `start` up to the last consumed character.
    fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.last)
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, regex: &Regex) -> Result<(), Error> {
    if let Some(matched) = regex.find(lexer.remainder()) {
        lexer.advance_n(matched.end());
    }
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer<'_>, regex: &Regex) -> Result<(), Error> {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return Ok(());
    };
    let value = String::from(matched.as_str());
    let start = lexer.position();
    lexer.advance_n(matched.end());

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);
    let span = lexer.span_from(start);
    lexer.push(MK_TOKEN!(kind, value, span));
    Ok(())
}

fn number_handler(lexer: &mut Lexer<'_>, regex: &Regex) -> Result<(), Error> {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return Ok(());
    };
    let value = String::from(matched.as_str());
    let start = lexer.position();
    lexer.advance_n(matched.end());

    // Fractional numbers are tagged as integers too.
    let span = lexer.span_from(start);
    lexer.push(MK_TOKEN!(TokenKind::Integer, value, span));
    Ok(())
}

fn string_handler(lexer: &mut Lexer<'_>, _regex: &Regex) -> Result<(), Error> {
    let start = lexer.position();
    let Some(delimiter) = lexer.advance() else {
        return Ok(());
    };
    let content_start = lexer.pos;

    loop {
        match lexer.at() {
            None => {
                return Err(Error::new(
                    ErrorImpl::UnterminatedString { delimiter },
                    Span::point(start),
                ))
            }
            Some(current) if current == delimiter => break,
            Some(_) => {
                lexer.advance();
            }
        }
    }

    let value = String::from(&lexer.source[content_start..lexer.pos]);
    lexer.advance();

    let kind = if delimiter == '`' {
        TokenKind::FormatString
    } else {
        TokenKind::String
    };
    let span = lexer.span_from(start);
    lexer.push(MK_TOKEN!(kind, value, span));
    Ok(())
}

/// Emits a two-character operator if one starts here, else a single one.
fn operator_handler(lexer: &mut Lexer<'_>) -> bool {
    let remainder = lexer.remainder();
    let start = lexer.position();

    let double_end = remainder
        .char_indices()
        .nth(2)
        .map(|(index, _)| index)
        .unwrap_or(remainder.len());
    let double = &remainder[..double_end];

    let (kind, value) = if let Some(kind) = DOUBLE_OPERATOR_LOOKUP.get(double) {
        (*kind, double)
    } else {
        let Some(current) = lexer.at() else {
            return false;
        };
        match SINGLE_OPERATOR_LOOKUP.get(&current) {
            Some(kind) => (*kind, &remainder[..current.len_utf8()]),
            None => return false,
        }
    };

    let value = String::from(value);
    lexer.advance_n(value.len());
    let span = lexer.span_from(start);
    lexer.push(MK_TOKEN!(kind, value, span));
    true
}

/// Turns a complete source text into its token sequence.
///
/// The sequence always ends with exactly one `EOF` token positioned at the
/// final cursor. The first malformed lexeme aborts the whole scan.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    'scan: while let Some(current) = lex.at() {
        for pattern in PATTERNS.iter() {
            if (pattern.starts)(current) && pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                continue 'scan;
            }
        }

        if !operator_handler(&mut lex) {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character: current },
                Span::point(lex.position()),
            ));
        }
    }

    let end = Span::point(lex.position());
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), end));
    debug!("{}: {} tokens", lex.file, lex.tokens.len());

    Ok(lex.tokens)
}
