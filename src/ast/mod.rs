/// AST (Abstract Syntax Tree) module
/// Contains the expression tree produced by the parser
///
/// Submodules:
/// - expressions: The expression node type and its canonical rendering
pub mod expressions;
