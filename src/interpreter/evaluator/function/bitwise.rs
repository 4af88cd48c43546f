use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, function::core::eval_pair},
    },
    util::num::{from_bigint, truncate_to_integer},
};

/// Evaluates both arguments and truncates them toward zero.
fn integer_pair(args: &[Node], env: &mut Environment) -> EvalResult<(BigInt, BigInt)> {
    let (lhs, rhs) = eval_pair(args, env)?;
    Ok((truncate_to_integer(&lhs), truncate_to_integer(&rhs)))
}

/// Generates a two-argument bitwise builtin.
///
/// Arguments are truncated to integers and combined in two's complement, so
/// negative operands behave like infinitely sign-extended integers.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::{
///     ast::Node,
///     interpreter::{environment::Environment, evaluator::function::bitwise::bit_and},
/// };
///
/// let mut env = Environment::new();
/// let r = bit_and(&[Node::number(12), Node::number(10)], &mut env).unwrap();
///
/// assert_eq!(r, BigDecimal::from(8));
/// ```
macro_rules! bitwise_builtin {
    ($fname:ident, $op:tt) => {
        pub fn $fname(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
            let (lhs, rhs) = integer_pair(args, env)?;
            Ok(from_bigint(&lhs $op &rhs))
        }
    };
}

bitwise_builtin!(bit_and, &);
bitwise_builtin!(bit_or, |);
bitwise_builtin!(bit_xor, ^);

/// Bitwise complement of the truncated argument, `-x - 1`.
pub fn bit_not(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let x = truncate_to_integer(&args[0].value(env)?);
    Ok(from_bigint(!x))
}

/// Shifts the first argument left by the second.
pub fn bit_shift_left(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    shift(args, env, true)
}

/// Shifts the first argument right by the second, rounding toward negative
/// infinity.
pub fn bit_shift_right(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    shift(args, env, false)
}

/// Shifts a truncated value by a truncated amount.
///
/// A negative amount shifts in the opposite direction.
///
/// # Errors
/// Returns `ShiftOutOfRange` if the amount's magnitude exceeds `u32::MAX`.
fn shift(args: &[Node], env: &mut Environment, left: bool) -> EvalResult<BigDecimal> {
    let value = truncate_to_integer(&args[0].value(env)?);
    let amount_value = args[1].value(env)?;
    let amount = truncate_to_integer(&amount_value);

    let bits = amount.magnitude()
                     .to_u32()
                     .ok_or(RuntimeError::ShiftOutOfRange { amount: amount_value })?;
    let bits = bits as usize;

    if left != amount.is_negative() {
        Ok(from_bigint(value << bits))
    } else {
        Ok(from_bigint(value >> bits))
    }
}
