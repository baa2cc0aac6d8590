/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree the parser builds
///
/// Submodules:
/// - ast: The closed statement, expression and type enums
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants, blocks and captures
/// - types: Payloads of the type annotation variants
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
