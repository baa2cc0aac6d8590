use log::trace;

use crate::{
    ast::{
        ast::{Stmt, Type},
        statements::{
            BreakStmt, ContinueStmt, ElseBranch, EnumDeclStmt, ExpressionStmt, FnDeclStmt,
            ForStmt, IfStmt, ImportStmt, Parameter, PublicStmt, StructDeclStmt, StructField,
            StructMember, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{
    parser::{parse_block, parse_scope_capture, Parser},
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    let stmt_fn = parser.get_grammar().get_stmt(kind);

    if let Some(stmt_fn) = stmt_fn {
        trace!("{}: {} statement", parser.get_file(), kind);
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    let end = parser.expect_semicolon()?.span;

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span::merge(expression.get_span(), &end),
        expression,
    }))
}

/// `var x;`, `var x: T = v;`, `var x := v;` and the `const` forms, which
/// must carry a value.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();
    let is_constant = start_token.kind == TokenKind::Const;
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let (explicit_type, assigned_value) = if is_constant {
        if parser.curr_is(TokenKind::Colon) {
            parser.advance();
            let ty = parse_type(parser, BindingPower::Default, true)?;
            parser.expect(TokenKind::Equal)?;
            (Some(ty), Some(parse_expr(parser, BindingPower::Default)?))
        } else {
            parser.expect(TokenKind::Walrus)?;
            (None, Some(parse_expr(parser, BindingPower::Default)?))
        }
    } else {
        match parser.current_token_kind() {
            TokenKind::Semicolon => (None, None),
            TokenKind::Colon => {
                parser.advance();
                let ty = parse_type(parser, BindingPower::Default, true)?;
                parser.expect(TokenKind::Equal)?;
                (Some(ty), Some(parse_expr(parser, BindingPower::Default)?))
            }
            TokenKind::Walrus => {
                parser.advance();
                (None, Some(parse_expr(parser, BindingPower::Default)?))
            }
            found => {
                return Err(Error::new(
                    ErrorImpl::InvalidVarDecl { found },
                    parser.current_token().span,
                ))
            }
        }
    };

    let end = parser.expect_semicolon()?.span;

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: Span::merge(&start_token.span, &end),
        identifier,
        is_constant,
        explicit_type,
        assigned_value,
    }))
}

/// `import "a";` or `import ("a", "b");`
pub fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    let mut paths = vec![];
    if parser.curr_is(TokenKind::OpenParen) {
        parser.advance();
        while !parser.at_list_end(TokenKind::CloseParen) {
            paths.push(parser.expect(TokenKind::String)?.value);
            if !parser.at_list_end(TokenKind::CloseParen) {
                parser.expect(TokenKind::Comma)?;
            }
        }
        parser.expect(TokenKind::CloseParen)?;
    } else {
        paths.push(parser.expect(TokenKind::String)?.value);
    }

    let end = parser.expect_semicolon()?.span;

    Ok(Stmt::Import(ImportStmt {
        paths,
        span: Span::merge(&start, &end),
    }))
}

pub fn parse_public_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;
    let exported = parse_stmt(parser)?;

    Ok(Stmt::Public(PublicStmt {
        span: Span::merge(&start, exported.get_span()),
        exported: Box::new(exported),
    }))
}

/// `(<type> <name>, ...)` followed by an optional `-> <type>`.
pub fn parse_signature(parser: &mut Parser) -> Result<(Vec<Parameter>, Option<Type>), Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while !parser.at_list_end(TokenKind::CloseParen) {
        let ty = parse_type(parser, BindingPower::Default, true)?;
        let name = parser.expect(TokenKind::Identifier)?.value;
        parameters.push(Parameter { name, ty });

        if !parser.at_list_end(TokenKind::CloseParen) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.curr_is(TokenKind::Arrow) {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default, true)?)
    } else {
        None
    };

    Ok((parameters, return_type))
}

pub fn parse_fn_decl(parser: &mut Parser) -> Result<FnDeclStmt, Error> {
    let start = parser.expect(TokenKind::Fn)?.span;
    let identifier = parser.expect(TokenKind::Identifier)?.value;
    let (parameters, return_type) = parse_signature(parser)?;
    let body = parse_block(parser)?;

    Ok(FnDeclStmt {
        span: Span::merge(&start, &body.span),
        identifier,
        parameters,
        return_type,
        body,
    })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::FnDecl(parse_fn_decl(parser)?))
}

/// `if`/`elif` share this; an `elif` becomes the alternative of the `if`
/// before it. Inside the condition a `{` always opens the body, so a struct
/// literal there has to be parenthesised.
pub fn parse_if(parser: &mut Parser) -> Result<IfStmt, Error> {
    let start = parser.advance().span;
    let condition =
        parser.with_struct_literals(false, |parser| parse_expr(parser, BindingPower::Assignment))?;

    let capture = if parser.curr_is(TokenKind::Pipe) {
        Some(parse_scope_capture(parser)?)
    } else {
        None
    };

    let then_body = parse_block(parser)?;

    let else_body = match parser.current_token_kind() {
        TokenKind::Elif => Some(ElseBranch::Elif(Box::new(parse_if(parser)?))),
        TokenKind::Else => {
            parser.advance();
            Some(ElseBranch::Else(parse_block(parser)?))
        }
        _ => None,
    };

    Ok(IfStmt {
        span: Span::merge(&start, &parser.previous().span),
        condition,
        capture,
        then_body,
        else_body,
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::If(parse_if(parser)?))
}

/// Fields are `<type> <name>`; methods are nested `fn` declarations.
pub fn parse_struct_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenCurly)?;

    let mut fields = Vec::new();
    while !parser.at_list_end(TokenKind::CloseCurly) {
        if parser.curr_is(TokenKind::Fn) {
            let method = parse_fn_decl(parser)?;
            fields.push(StructField {
                name: method.identifier.clone(),
                member: StructMember::Method(method),
            });

            if parser.curr_is(TokenKind::Comma) {
                parser.advance();
            }
        } else {
            let ty = parse_type(parser, BindingPower::Default, true)?;
            let field_name = parser.expect(TokenKind::Identifier)?.value;
            fields.push(StructField {
                name: field_name,
                member: StructMember::Field(ty),
            });

            if !parser.at_list_end(TokenKind::CloseCurly) {
                parser.expect(TokenKind::Comma)?;
            }
        }
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span;

    Ok(Stmt::StructDecl(StructDeclStmt {
        name,
        fields,
        span: Span::merge(&start, &end),
    }))
}

pub fn parse_enum_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = Vec::new();
    while !parser.at_list_end(TokenKind::CloseCurly) {
        members.push(parser.expect(TokenKind::Identifier)?.value);
        if !parser.at_list_end(TokenKind::CloseCurly) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span;

    Ok(Stmt::EnumDecl(EnumDeclStmt {
        name,
        members,
        span: Span::merge(&start, &end),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        span: Span::merge(&start, &body.span),
        condition,
        body,
    }))
}

/// `for (expr) |captures| { ... }`, the capture is mandatory.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let capture = parse_scope_capture(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::For(ForStmt {
        span: Span::merge(&start, &body.span),
        condition,
        capture,
        body,
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;
    let end = parser.expect_semicolon()?.span;

    Ok(Stmt::Break(BreakStmt {
        span: Span::merge(&start, &end),
    }))
}

pub fn parse_continue_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span;
    let end = parser.expect_semicolon()?.span;

    Ok(Stmt::Continue(ContinueStmt {
        span: Span::merge(&start, &end),
    }))
}
