use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, unknown
/// function names and calls with the wrong number of arguments.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error type raised during evaluation: unknown variables, arity
/// mismatches, invalid arguments to built-in functions, division by zero and
/// failed numeric conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while turning source text into a value.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A parsed statement failed to evaluate.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
