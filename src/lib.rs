//! # decalc
//!
//! decalc is an arbitrary-precision decimal expression interpreter written in
//! Rust. It parses expressions into trees of numbers, variables, operators and
//! calls to a fixed library of built-in functions, then evaluates or
//! simplifies those trees against a mutable environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use bigdecimal::BigDecimal;

use crate::{
    error::Error,
    interpreter::{environment::Environment, parser::core::parse_program},
};

/// Defines the expression tree.
///
/// This module declares the `Node` enum and the `Operator` tags. The tree is
/// built by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the four node kinds and their constructors.
/// - Renders nodes back to parseable input text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers to parse errors.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, environment and evaluator.
/// - Hosts the built-in function library.
pub mod interpreter;
/// Decimal conversion helpers and the decimal context.
pub mod util;

/// Parses and evaluates every statement in `source`.
///
/// Statements run in order against `env`, so definitions made by earlier
/// statements are visible to later ones and remain in `env` afterwards.
///
/// # Returns
/// The value of the last statement, or `None` if the source contains no
/// statements.
///
/// # Errors
/// Returns the parse error if the source does not parse (nothing is
/// evaluated in that case), otherwise the first runtime error.
///
/// # Examples
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::{evaluate_source, interpreter::environment::Environment};
///
/// let mut env = Environment::new();
///
/// let result = evaluate_source("x = 2\nsum(1, 4, x * i)", &mut env).unwrap();
/// assert_eq!(result, Some(BigDecimal::from(20)));
///
/// // Example with an intentional error (unknown variable).
/// assert!(evaluate_source("y + 1", &mut env).is_err());
/// ```
pub fn evaluate_source(source: &str, env: &mut Environment) -> Result<Option<BigDecimal>, Error> {
    let statements = parse_program(source)?;

    let mut result = None;
    for statement in &statements {
        result = Some(statement.value(env)?);
    }

    Ok(result)
}
