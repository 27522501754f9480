/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The tree-builder contract, the concrete builder and the translation unit
/// - expressions: Expression node variants
/// - statements: Statement node variants
/// - types: Type node variants
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
