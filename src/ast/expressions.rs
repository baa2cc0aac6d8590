use crate::Span;

use super::{
    ast::{Expr, Type},
    statements::{BlockStmt, Parameter},
};

// LITERALS

/// Symbol Expression
/// Represents an identifier reference in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    FormatString,
    Integer,
    Float,
    Boolean,
    Nil,
    Udef,
}

/// Literal Expression
/// Keeps the raw source text; strings arrive with their delimiters stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub kind: LiteralKind,
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Function Expression
/// An anonymous `fn(<type> <name>, ...) -> <type> { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: BlockStmt,
    pub span: Span,
}

/// Computed Member Expression, `member[property]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedExpr {
    pub member: Box<Expr>,
    pub property: Box<Expr>,
    pub span: Span,
}

/// Member Expression, `member.property`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub member: Box<Expr>,
    pub property: String,
    pub span: Span,
}

/// Package Access Expression, `package:content`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageAccessExpr {
    pub package: Box<Expr>,
    pub content: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// One `name` or `name: value` entry of a struct literal.
#[derive(Debug, Clone, PartialEq)]
pub struct StructInitField {
    pub name: String,
    pub value: Option<Expr>,
}

/// Struct Init Expression
/// `target { a: 1, b }` where `target` is any expression that was parsed
/// before the brace.
#[derive(Debug, Clone, PartialEq)]
pub struct StructInitExpr {
    pub target: Box<Expr>,
    pub fields: Vec<StructInitField>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayInitExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Prefix Expression, one of `+ - !` applied to the operand on its right.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

/// Postfix step, `x++` or `x--`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpr {
    pub operator: String,
    pub left_expr: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
    pub span: Span,
}

/// `+= -= *= /= %=`
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundAssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: String,
    pub value: Box<Expr>,
    pub span: Span,
}

/// Range Expression, `min..max`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeExpr {
    pub min: Box<Expr>,
    pub max: Box<Expr>,
    pub span: Span,
}

/// Right-hand side of `catch`.
#[derive(Debug, Clone, PartialEq)]
pub enum CatchFallback {
    Expr(Box<Expr>),
    Block(BlockStmt),
}

impl CatchFallback {
    pub fn get_span(&self) -> &Span {
        match self {
            CatchFallback::Expr(expr) => expr.get_span(),
            CatchFallback::Block(block) => &block.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchExpr {
    pub left: Box<Expr>,
    pub right: CatchFallback,
    pub span: Span,
}
