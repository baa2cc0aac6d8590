use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayInitExpr, AssignmentExpr, BinaryExpr, CallExpr, CatchExpr, CatchFallback,
            CompoundAssignmentExpr, ComputedExpr, FunctionExpr, LiteralExpr, LiteralKind,
            MemberExpr, PackageAccessExpr, PostfixExpr, PrefixExpr, RangeExpr, StructInitExpr,
            StructInitField, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl, GrammarKind},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::BindingPower,
    parser::{parse_block, parse_production, Parser},
    stmt::parse_signature,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parse_production(parser, bp, false)
}

/// An expression between brackets, where a `{` can no longer be mistaken
/// for the start of an `if` body.
fn parse_nested_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.with_struct_literals(true, |parser| parse_expr(parser, BindingPower::Default))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    let kind = match token.kind {
        TokenKind::Identifier => {
            return Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::String => LiteralKind::String,
        TokenKind::FormatString => LiteralKind::FormatString,
        TokenKind::Integer => LiteralKind::Integer,
        TokenKind::Float => LiteralKind::Float,
        TokenKind::True | TokenKind::False => LiteralKind::Boolean,
        TokenKind::Nil => LiteralKind::Nil,
        TokenKind::Udef => LiteralKind::Udef,
        _ => {
            return Err(Error::new(
                ErrorImpl::MissingPrimary {
                    grammar: GrammarKind::Expression,
                    found: token.kind,
                },
                token.span,
            ))
        }
    };

    Ok(Expr::Literal(LiteralExpr {
        kind,
        value: token.value,
        span: token.span,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span::merge(&operator_token.span, rhs.get_span()),
        operator: operator_token.value,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_nested_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_array_init_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenBracket)?.span;

    let mut elements = vec![];
    while !parser.at_list_end(TokenKind::CloseBracket) {
        elements.push(parse_nested_expr(parser)?);
        if !parser.at_list_end(TokenKind::CloseBracket) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    let end = parser.expect(TokenKind::CloseBracket)?.span;

    Ok(Expr::ArrayInit(ArrayInitExpr {
        elements,
        span: Span::merge(&start, &end),
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span;
    let (parameters, return_type) = parse_signature(parser)?;
    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionExpr {
        span: Span::merge(&start, &body.span),
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span::merge(left.get_span(), right.get_span()),
        left: Box::new(left),
        operator: operator_token.value,
        right: Box::new(right),
    }))
}

/// `a = b`, right associative so `a = b = c` assigns `b = c` first.
pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: Span::merge(left.get_span(), rhs.get_span()),
        assignee: Box::new(left),
        value: Box::new(rhs),
    }))
}

pub fn parse_compound_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::CompoundAssignment(CompoundAssignmentExpr {
        span: Span::merge(left.get_span(), rhs.get_span()),
        assignee: Box::new(left),
        operator: operator_token.value,
        value: Box::new(rhs),
    }))
}

pub fn parse_postfix_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    Ok(Expr::Postfix(PostfixExpr {
        span: Span::merge(left.get_span(), &operator_token.span),
        operator: operator_token.value,
        left_expr: Box::new(left),
    }))
}

/// `a.b` or `a[b]`, depending on which token introduced it.
pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let is_computed = parser.advance().kind == TokenKind::OpenBracket;

    if is_computed {
        let property = parse_nested_expr(parser)?;
        let end = parser.expect(TokenKind::CloseBracket)?.span;

        return Ok(Expr::Computed(ComputedExpr {
            span: Span::merge(left.get_span(), &end),
            member: Box::new(left),
            property: Box::new(property),
        }));
    }

    let property = parser.expect(TokenKind::Identifier)?;

    Ok(Expr::Member(MemberExpr {
        span: Span::merge(left.get_span(), &property.span),
        member: Box::new(left),
        property: property.value,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let mut arguments = vec![];
    while !parser.at_list_end(TokenKind::CloseParen) {
        arguments.push(parse_nested_expr(parser)?);
        if !parser.at_list_end(TokenKind::CloseParen) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    let end = parser.expect(TokenKind::CloseParen)?.span;

    Ok(Expr::Call(CallExpr {
        span: Span::merge(left.get_span(), &end),
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_struct_init_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    // Point { x: 1, y }
    parser.expect(TokenKind::OpenCurly)?;

    let mut fields = vec![];
    while !parser.at_list_end(TokenKind::CloseCurly) {
        let name = parser.expect(TokenKind::Identifier)?.value;

        let value = if parser.curr_is(TokenKind::Colon) {
            parser.advance();
            Some(parse_nested_expr(parser)?)
        } else {
            None
        };
        fields.push(StructInitField { name, value });

        if !parser.at_list_end(TokenKind::CloseCurly) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span;

    Ok(Expr::StructInit(StructInitExpr {
        span: Span::merge(left.get_span(), &end),
        target: Box::new(left),
        fields,
    }))
}

pub fn parse_package_access_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let content = parse_expr(parser, bp)?;

    Ok(Expr::PackageAccess(PackageAccessExpr {
        span: Span::merge(left.get_span(), content.get_span()),
        package: Box::new(left),
        content: Box::new(content),
    }))
}

pub fn parse_range_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let max = parse_expr(parser, bp)?;

    Ok(Expr::Range(RangeExpr {
        span: Span::merge(left.get_span(), max.get_span()),
        min: Box::new(left),
        max: Box::new(max),
    }))
}

/// `value catch fallback` where the fallback is an expression or a block.
pub fn parse_catch_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();

    let right = if parser.curr_is(TokenKind::OpenCurly) {
        CatchFallback::Block(parse_block(parser)?)
    } else {
        CatchFallback::Expr(Box::new(parse_expr(parser, bp)?))
    };

    Ok(Expr::Catch(CatchExpr {
        span: Span::merge(left.get_span(), right.get_span()),
        left: Box::new(left),
        right,
    }))
}
