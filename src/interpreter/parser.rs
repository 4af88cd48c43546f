/// Parser entry points.
///
/// Defines the parser's result type, the expression entry point and the
/// whole-program parser that splits source text into statements.
pub mod core;

/// Statement parsing.
///
/// A statement is an expression, optionally followed by `=` and a second
/// expression, which becomes a call to `define`.
pub mod statement;

/// Binary operator parsing.
///
/// Implements every left-associative precedence level, from comparisons down
/// to multiplication.
pub mod binary;

/// Unary, power, postfix and primary parsing.
///
/// Handles prefix signs, `~`, right-associative `^`, postfix `!`, literals,
/// variables, function calls and parenthesized expressions.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides argument list parsing and binding of calls to built-in functions.
pub mod utils;
