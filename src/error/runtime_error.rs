use bigdecimal::BigDecimal;
use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Every failure aborts the current top-level evaluation; nothing inside the
/// evaluator recovers from one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Tried to use a variable that has no binding.
    #[error("unknown variable \"{name}\"")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A function was bound to the wrong number of arguments.
    #[error("wrong number of arguments to function \"{name}\"; need {expected} but got {found}{}",
            format_arguments(.arguments))]
    ArityMismatch {
        /// The name of the function.
        name:      String,
        /// The declared arity.
        expected:  usize,
        /// The number of arguments supplied.
        found:     usize,
        /// Input forms of the supplied arguments.
        arguments: Vec<String>,
    },
    /// The left-hand side of `define` was not a plain variable name.
    #[error("lhs of an assignment must be a variable name (user-defined functions are not supported); got {target}")]
    InvalidAssignmentTarget {
        /// Input form of the rejected target.
        target: String,
    },
    /// Tried to assign to a built-in constant such as `pi`.
    #[error("cannot redefine the constant \"{name}\"")]
    ConstantRedefinition {
        /// The name of the constant.
        name: String,
    },
    /// `factorial` received a value with a fractional part.
    #[error("factorial requires an integer argument; got {value} instead")]
    FactorialNotInteger {
        /// The rejected argument.
        value: BigDecimal,
    },
    /// `factorial` received a negative integer.
    #[error("factorial requires a non-negative integer argument; got {value} instead")]
    FactorialNegative {
        /// The rejected argument.
        value: BigDecimal,
    },
    /// `is_prime` received an integer too large for trial division.
    #[error("is_prime uses a naive algorithm unsuitable for huge numbers; got {value}")]
    PrimeTooLarge {
        /// The rejected argument.
        value: BigDecimal,
    },
    /// The lower bound of a `sum` or `product` exceeded the upper bound.
    #[error("minimum ({min}) greater than maximum ({max})")]
    InvalidSeriesBounds {
        /// The evaluated lower bound.
        min: BigDecimal,
        /// The evaluated upper bound.
        max: BigDecimal,
    },
    /// An operator node was built with an operand shape it does not support.
    ///
    /// The bundled parser never produces one; seeing this error indicates a
    /// malformed tree rather than bad user input.
    #[error("operator {operator} not implemented for {operands} operand(s)")]
    UnsupportedOperator {
        /// The operator symbol.
        operator: String,
        /// How many operands the node carried.
        operands: usize,
    },
    /// Attempted division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A floating-point result had no decimal representation.
    #[error("{value} cannot be represented as a decimal number")]
    NotRepresentable {
        /// The offending floating-point value.
        value: f64,
    },
    /// A decimal argument was too large in magnitude for an `f64`.
    #[error("{value} does not fit in a 64-bit floating-point number")]
    OutOfFloatRange {
        /// The rejected argument.
        value: BigDecimal,
    },
    /// A result's decimal exponent fell outside the 64-bit range.
    #[error("decimal exponent out of range")]
    ExponentOverflow,
    /// A bit shift amount did not fit in 32 bits.
    #[error("shift amount {amount} is out of range")]
    ShiftOutOfRange {
        /// The requested shift amount.
        amount: BigDecimal,
    },
}

fn format_arguments(arguments: &[String]) -> String {
    if arguments.is_empty() {
        String::new()
    } else {
        format!(": {}", arguments.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_lists_arguments() {
        let err = RuntimeError::ArityMismatch { name:      "abs".into(),
                                                expected:  1,
                                                found:     2,
                                                arguments: vec!["x".into(), "(1 + 2)".into()], };
        assert_eq!(err.to_string(),
                   "wrong number of arguments to function \"abs\"; need 1 but got 2: x, (1 + 2)");
    }

    #[test]
    fn arity_message_without_arguments() {
        let err = RuntimeError::ArityMismatch { name:      "sum".into(),
                                                expected:  3,
                                                found:     0,
                                                arguments: Vec::new(), };
        assert_eq!(err.to_string(),
                   "wrong number of arguments to function \"sum\"; need 3 but got 0");
    }
}
