use crate::Span;

use super::ast::Type;

/// A bare type name such as `int`, `nil` or `Point`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
    pub span: Span,
}

/// A parenthesised tuple of types, `(int, str)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSymbolType {
    pub symbols: Vec<Type>,
    pub span: Span,
}

/// `[N]T` or `[]T`; a `limit` of 0 means unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySymbolType {
    pub underlying: Box<Type>,
    pub limit: u64,
    pub span: Span,
}
