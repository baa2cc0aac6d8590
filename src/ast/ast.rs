use crate::Span;

use super::{
    expressions::{
        ArrayInitExpr, AssignmentExpr, BinaryExpr, CallExpr, CatchExpr, CompoundAssignmentExpr,
        ComputedExpr, FunctionExpr, LiteralExpr, MemberExpr, PackageAccessExpr, PostfixExpr,
        PrefixExpr, RangeExpr, StructInitExpr, SymbolExpr,
    },
    statements::{
        BreakStmt, ContinueStmt, EnumDeclStmt, ExpressionStmt, FnDeclStmt, ForStmt, IfStmt,
        ImportStmt, PublicStmt, StructDeclStmt, VarDeclStmt, WhileStmt,
    },
    types::{ArraySymbolType, MultiSymbolType, SymbolType},
};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    VarDeclStmt,
    StructDeclStmt,
    EnumDeclStmt,
    FnDeclStmt,
    WhileStmt,
    ForStmt,
    IfStmt,
    PublicStmt,
    ImportStmt,
    BreakStmt,
    ContinueStmt,
}

/// Statement
///
/// Every statement form the parser produces. Each payload owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    StructDecl(StructDeclStmt),
    EnumDecl(EnumDeclStmt),
    FnDecl(FnDeclStmt),
    While(WhileStmt),
    For(ForStmt),
    If(IfStmt),
    Public(PublicStmt),
    Import(ImportStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
}

impl Stmt {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::VarDecl(_) => StmtType::VarDeclStmt,
            Stmt::StructDecl(_) => StmtType::StructDeclStmt,
            Stmt::EnumDecl(_) => StmtType::EnumDeclStmt,
            Stmt::FnDecl(_) => StmtType::FnDeclStmt,
            Stmt::While(_) => StmtType::WhileStmt,
            Stmt::For(_) => StmtType::ForStmt,
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::Public(_) => StmtType::PublicStmt,
            Stmt::Import(_) => StmtType::ImportStmt,
            Stmt::Break(_) => StmtType::BreakStmt,
            Stmt::Continue(_) => StmtType::ContinueStmt,
        }
    }

    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::StructDecl(stmt) => &stmt.span,
            Stmt::EnumDecl(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Public(stmt) => &stmt.span,
            Stmt::Import(stmt) => &stmt.span,
            Stmt::Break(stmt) => &stmt.span,
            Stmt::Continue(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Symbol,
    Literal,
    Function,
    Computed,
    Member,
    PackageAccess,
    Call,
    StructInit,
    ArrayInit,
    Binary,
    Prefix,
    Postfix,
    Assignment,
    CompoundAssignment,
    Range,
    Catch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Literal(LiteralExpr),
    Function(FunctionExpr),
    Computed(ComputedExpr),
    Member(MemberExpr),
    PackageAccess(PackageAccessExpr),
    Call(CallExpr),
    StructInit(StructInitExpr),
    ArrayInit(ArrayInitExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Postfix(PostfixExpr),
    Assignment(AssignmentExpr),
    CompoundAssignment(CompoundAssignmentExpr),
    Range(RangeExpr),
    Catch(CatchExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Literal(_) => ExprType::Literal,
            Expr::Function(_) => ExprType::Function,
            Expr::Computed(_) => ExprType::Computed,
            Expr::Member(_) => ExprType::Member,
            Expr::PackageAccess(_) => ExprType::PackageAccess,
            Expr::Call(_) => ExprType::Call,
            Expr::StructInit(_) => ExprType::StructInit,
            Expr::ArrayInit(_) => ExprType::ArrayInit,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Prefix(_) => ExprType::Prefix,
            Expr::Postfix(_) => ExprType::Postfix,
            Expr::Assignment(_) => ExprType::Assignment,
            Expr::CompoundAssignment(_) => ExprType::CompoundAssignment,
            Expr::Range(_) => ExprType::Range,
            Expr::Catch(_) => ExprType::Catch,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Symbol(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
            Expr::Function(expr) => &expr.span,
            Expr::Computed(expr) => &expr.span,
            Expr::Member(expr) => &expr.span,
            Expr::PackageAccess(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::StructInit(expr) => &expr.span,
            Expr::ArrayInit(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Prefix(expr) => &expr.span,
            Expr::Postfix(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::CompoundAssignment(expr) => &expr.span,
            Expr::Range(expr) => &expr.span,
            Expr::Catch(expr) => &expr.span,
        }
    }
}

/// Type Types
///
/// Defines the kinds of type annotation the type grammar builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeType {
    Symbol,
    MultiSymbol,
    ArraySymbol,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Symbol(SymbolType),
    MultiSymbol(MultiSymbolType),
    ArraySymbol(ArraySymbolType),
}

impl Type {
    /// Returns the type type of the type.
    pub fn get_type_type(&self) -> TypeType {
        match self {
            Type::Symbol(_) => TypeType::Symbol,
            Type::MultiSymbol(_) => TypeType::MultiSymbol,
            Type::ArraySymbol(_) => TypeType::ArraySymbol,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Type::Symbol(ty) => &ty.span,
            Type::MultiSymbol(ty) => &ty.span,
            Type::ArraySymbol(ty) => &ty.span,
        }
    }
}
