use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::One;

use crate::{
    ast::{Node, Operator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, function::core::eval_pair, operator::apply_binary},
    },
    util::num::{from_f64, to_exact_i32, to_f64},
};

/// Generates a two-argument function that applies an operator.
///
/// These are the function forms of `+ - * / %`; they share the operator
/// node's semantics exactly, including rounding of `/`.
macro_rules! operator_builtin {
    ($fname:ident, $op:expr) => {
        pub fn $fname(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
            let (lhs, rhs) = eval_pair(args, env)?;
            apply_binary($op, &lhs, &rhs, env.context())
        }
    };
}

operator_builtin!(plus, Operator::Plus);
operator_builtin!(subtract, Operator::Minus);
operator_builtin!(times, Operator::Times);
operator_builtin!(divide, Operator::Divide);
operator_builtin!(modulo, Operator::Mod);

/// Computes the absolute value, rounded to the context precision.
pub fn abs(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let x = args[0].value(env)?;
    Ok(env.context().round(&x.abs()))
}

/// Raises the first argument to the power of the second.
///
/// An exponent that is an exact `i32` is applied exactly; negative exponents
/// take the reciprocal through the context's division. Any other exponent
/// falls back to `f64::powf`.
///
/// # Errors
/// - `DivisionByZero` for a zero base with a negative integer exponent.
/// - `NotRepresentable` when the floating-point fallback is not finite.
/// - `ExponentOverflow` when the exact result's scale does not fit in an
///   `i64`.
///
/// # Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use decalc::{
///     ast::Node,
///     interpreter::{environment::Environment, evaluator::function::arithmetic::power},
/// };
///
/// let mut env = Environment::new();
///
/// let r = power(&[Node::number(2), Node::number(100)], &mut env).unwrap();
/// assert_eq!(r, BigDecimal::from_str("1267650600228229401496703205376").unwrap());
///
/// let r = power(&[Node::number(2), Node::number(-2)], &mut env).unwrap();
/// assert_eq!(r, BigDecimal::from_str("0.25").unwrap());
/// ```
pub fn power(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let (base, exponent) = eval_pair(args, env)?;

    match to_exact_i32(&exponent) {
        Some(n) if n >= 0 => exact_pow(&base, n.unsigned_abs()),
        Some(n) => {
            let denominator = exact_pow(&base, n.unsigned_abs())?;
            env.context().divide(&BigDecimal::one(), &denominator)
        },
        None => from_f64(to_f64(&base)?.powf(to_f64(&exponent)?)),
    }
}

/// Computes `base^n` without rounding.
fn exact_pow(base: &BigDecimal, n: u32) -> EvalResult<BigDecimal> {
    let (digits, scale) = base.as_bigint_and_exponent();
    let scale = scale.checked_mul(i64::from(n))
                     .ok_or(RuntimeError::ExponentOverflow)?;
    Ok(BigDecimal::new(digits.pow(n), scale))
}

/// Rounds toward negative infinity.
pub fn floor(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    Ok(args[0].value(env)?.with_scale_round(0, RoundingMode::Floor))
}

/// Rounds toward positive infinity.
pub fn ceiling(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    Ok(args[0].value(env)?.with_scale_round(0, RoundingMode::Ceiling))
}

/// Rounds to the nearest integer, halves toward positive infinity.
pub fn round(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let half = BigDecimal::new(5.into(), 1);
    Ok((args[0].value(env)? + half).with_scale_round(0, RoundingMode::Floor))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::util::context::DecimalContext;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn num(s: &str) -> Node {
        Node::Number(dec(s))
    }

    #[test]
    fn rounding_functions() {
        let mut env = Environment::new();
        let cases = [("2.5", "2", "3", "3"),
                     ("-2.5", "-3", "-2", "-2"),
                     ("-2.6", "-3", "-2", "-3"),
                     ("7", "7", "7", "7")];
        for (x, f, c, r) in cases {
            assert_eq!(floor(&[num(x)], &mut env).unwrap(), dec(f), "floor({x})");
            assert_eq!(ceiling(&[num(x)], &mut env).unwrap(), dec(c), "ceiling({x})");
            assert_eq!(round(&[num(x)], &mut env).unwrap(), dec(r), "round({x})");
        }
    }

    #[test]
    fn power_of_decimal_base_is_exact() {
        let mut env = Environment::new();
        let r = power(&[num("1.1"), num("3")], &mut env).unwrap();
        assert_eq!(r, dec("1.331"));
    }

    #[test]
    fn power_with_fractional_exponent_uses_floating_point() {
        let mut env = Environment::new();
        let r = power(&[num("2"), num("0.5")], &mut env).unwrap();
        assert_eq!(r, dec("1.4142135623730951"));
    }

    #[test]
    fn power_of_zero_to_negative_exponent_fails() {
        let mut env = Environment::new();
        let err = power(&[num("0"), num("-1")], &mut env).unwrap_err();
        assert_eq!(err, RuntimeError::DivisionByZero);
    }

    #[test]
    fn power_with_scale_beyond_i64_fails() {
        let mut env = Environment::new();
        let tiny = Node::Number(BigDecimal::new(1.into(), i64::MAX / 2 + 1));
        let err = power(&[tiny.clone(), num("2")], &mut env).unwrap_err();
        assert_eq!(err, RuntimeError::ExponentOverflow);

        let err = power(&[tiny, num("-3")], &mut env).unwrap_err();
        assert_eq!(err, RuntimeError::ExponentOverflow);
    }

    #[test]
    fn abs_rounds_to_context() {
        let ctx = DecimalContext::with_precision(3).unwrap();
        let mut env = Environment::with_context(ctx);
        assert_eq!(abs(&[num("-1.2345")], &mut env).unwrap(), dec("1.23"));
    }

    #[test]
    fn operator_functions_match_operators() {
        let mut env = Environment::new();
        assert_eq!(divide(&[num("1"), num("4")], &mut env).unwrap(), dec("0.25"));
        assert_eq!(modulo(&[num("10"), num("3")], &mut env).unwrap(), dec("1"));
        assert_eq!(subtract(&[num("1"), num("4")], &mut env).unwrap(), dec("-3"));
    }
}
