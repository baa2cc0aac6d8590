//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Named types (identifiers, `nil`, `udef`)
//! - Tuple types, `(int, str)`
//! - Array types with an optional bound, `[5]int` and `[]int`
//!
//! It runs on the same precedence engine as expressions, through its own
//! table. Every production here is primary; callers use the single
//! production mode so a type never reaches into the tokens after it.

use crate::{
    ast::{
        ast::Type,
        types::{ArraySymbolType, MultiSymbolType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{BindingPower, GrammarTable},
    parser::{parse_production, Parser},
};

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(types: &mut GrammarTable<Type>) {
    types.nud(TokenKind::Identifier, parse_symbol_type);
    types.nud(TokenKind::Nil, parse_symbol_type);
    types.nud(TokenKind::Udef, parse_symbol_type);

    types.nud(TokenKind::OpenParen, parse_multi_symbol_type);
    types.nud(TokenKind::OpenBracket, parse_array_symbol_type);
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower, once: bool) -> Result<Type, Error> {
    parse_production(parser, bp, once)
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.advance().clone();

    Ok(Type::Symbol(SymbolType {
        name: token.value,
        span: token.span,
    }))
}

pub fn parse_multi_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.span;

    let mut symbols = vec![];
    while !parser.at_list_end(TokenKind::CloseParen) {
        symbols.push(parse_type(parser, BindingPower::Primary, true)?);
        if !parser.at_list_end(TokenKind::CloseParen) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    let end = parser.expect(TokenKind::CloseParen)?.span;

    Ok(Type::MultiSymbol(MultiSymbolType {
        symbols,
        span: Span::merge(&start, &end),
    }))
}

pub fn parse_array_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span;

    let mut limit = 0;
    if parser.curr_is(TokenKind::Integer) {
        let token = parser.advance().clone();
        limit = token.value.parse::<u64>().map_err(|_| {
            Error::new(
                ErrorImpl::InvalidArrayBound {
                    token: token.value.clone(),
                },
                token.span,
            )
        })?;
    }

    parser.expect(TokenKind::CloseBracket)?;
    let underlying = parse_type(parser, BindingPower::Primary, true)?;

    Ok(Type::ArraySymbol(ArraySymbolType {
        span: Span::merge(&start, underlying.get_span()),
        underlying: Box::new(underlying),
        limit,
    }))
}
