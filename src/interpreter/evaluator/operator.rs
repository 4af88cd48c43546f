use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    ast::{Node, Operator},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
    util::context::DecimalContext,
};

impl Node {
    /// Evaluates an operator node.
    ///
    /// Operands are evaluated eagerly, left before right. `+`, `-`, `*` and
    /// `%` are exact; `/` rounds through the environment's decimal context.
    /// With the right operand absent, `-` negates and `+` is the identity.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `ExponentOverflow` for a `*` or `/` result whose scale does not fit
    ///   in an `i64`.
    /// - `UnsupportedOperator` for unary `*`, `/` or `%`, which no parser
    ///   should produce.
    ///
    /// # Example
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use decalc::{
    ///     ast::{Node, Operator},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let seven = Node::number(7);
    /// let two = Node::number(2);
    ///
    /// let q = Node::eval_operator(Operator::Divide, &seven, Some(&two), &mut env).unwrap();
    /// assert_eq!(q.to_string(), "3.5");
    ///
    /// let r = Node::eval_operator(Operator::Mod, &seven, Some(&two), &mut env).unwrap();
    /// assert_eq!(r, BigDecimal::from(1));
    /// ```
    pub fn eval_operator(op: Operator,
                         lhs: &Self,
                         rhs: Option<&Self>,
                         env: &mut Environment)
                         -> EvalResult<BigDecimal> {
        let left = lhs.value(env)?;

        let Some(rhs) = rhs else {
            return match op {
                Operator::Plus => Ok(left),
                Operator::Minus => Ok(-left),
                Operator::Times | Operator::Divide | Operator::Mod => {
                    Err(RuntimeError::UnsupportedOperator { operator: op.to_string(),
                                                            operands: 1, })
                },
            };
        };

        let right = rhs.value(env)?;
        apply_binary(op, &left, &right, env.context())
    }
}

/// Applies a binary operator to two decimals.
pub(crate) fn apply_binary(op: Operator,
                           left: &BigDecimal,
                           right: &BigDecimal,
                           context: &DecimalContext)
                           -> EvalResult<BigDecimal> {
    match op {
        Operator::Plus => Ok(left + right),
        Operator::Minus => Ok(left - right),
        Operator::Times => {
            let (_, lhs_scale) = left.as_bigint_and_exponent();
            let (_, rhs_scale) = right.as_bigint_and_exponent();
            if lhs_scale.checked_add(rhs_scale).is_none() {
                return Err(RuntimeError::ExponentOverflow);
            }
            Ok(left * right)
        },
        Operator::Divide => context.divide(left, right),
        Operator::Mod => {
            if right.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left % right)
        },
    }
}
