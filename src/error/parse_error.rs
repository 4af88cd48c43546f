use thiserror::Error;

use crate::error::RuntimeError;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal's exponent was too large to compute with.
    #[error("Error on line {line}: Number out of range: {literal}.")]
    NumberOutOfRange {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call named a function that is not in the built-in library.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after parsing should have completed.
    #[error("Error on line {line}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A call could not be bound, usually because of its argument count.
    #[error("Error on line {line}: {source}")]
    InvalidCall {
        /// Why binding failed.
        source: RuntimeError,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Places an `UnexpectedEndOfInput` on `line`; other errors keep their own
    /// line.
    #[must_use]
    pub(crate) fn at_end_of_input(self, line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { .. } => Self::UnexpectedEndOfInput { line },
            other => other,
        }
    }
}
