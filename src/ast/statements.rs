use std::slice::Iter;

use crate::Span;

use super::ast::{Expr, Stmt, Type};

/// The root of a parsed source: its diagnostic tag and top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub tag: String,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// A brace delimited statement sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

/// `|a, b|` names bound by an `if` or `for`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeCapture {
    pub names: Vec<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_constant: bool,
    pub explicit_type: Option<Type>,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

/// `<type> <name>` in a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StructMember {
    Field(Type),
    Method(FnDeclStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub member: StructMember,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDeclStmt {
    pub name: String,
    pub fields: Vec<StructField>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDeclStmt {
    pub name: String,
    pub members: Vec<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub condition: Expr,
    pub capture: ScopeCapture,
    pub body: BlockStmt,
    pub span: Span,
}

/// What follows an `if` body: an `elif` chain link or a final `else` block.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    Elif(Box<IfStmt>),
    Else(BlockStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub capture: Option<ScopeCapture>,
    pub then_body: BlockStmt,
    pub else_body: Option<ElseBranch>,
    pub span: Span,
}

/// `pub` in front of exactly one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicStmt {
    pub exported: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub paths: Vec<String>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub span: Span,
}
