use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
    util::num::{from_bigint, to_exact_integer},
};

/// Evaluates the argument and computes its factorial.
pub fn factorial(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let x = args[0].value(env)?;
    factorial_of(&x)
}

/// Computes `n!` exactly for a non-negative integral decimal.
///
/// `0! = 1`. Values such as `5.00` count as integers.
///
/// # Errors
/// - `FactorialNotInteger` if `value` has a fractional part.
/// - `FactorialNegative` if `value` is below zero.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::{error::RuntimeError, interpreter::evaluator::function::factorial::factorial_of};
///
/// let twenty = BigDecimal::from(20);
/// assert_eq!(factorial_of(&twenty).unwrap(),
///            BigDecimal::from_str("2432902008176640000").unwrap());
///
/// let err = factorial_of(&BigDecimal::from_str("2.5").unwrap()).unwrap_err();
/// assert!(matches!(err, RuntimeError::FactorialNotInteger { .. }));
/// ```
pub fn factorial_of(value: &BigDecimal) -> EvalResult<BigDecimal> {
    let n = to_exact_integer(value).ok_or_else(|| RuntimeError::FactorialNotInteger { value: value.clone() })?;

    if n.is_negative() {
        return Err(RuntimeError::FactorialNegative { value: value.clone() });
    }
    if n.is_zero() {
        return Ok(BigDecimal::one());
    }

    Ok(from_bigint(split_product(&n, &BigInt::one())))
}

/// Product of `n, n - m, n - 2m, ...` over the terms greater than zero.
///
/// Splitting into the odd and even strides keeps both halves of similar
/// size, so the big multiplications stay balanced.
fn split_product(n: &BigInt, m: &BigInt) -> BigInt {
    if n <= m {
        return n.clone();
    }

    let stride = m << 1usize;
    split_product(n, &stride) * split_product(&(n - m), &stride)
}
