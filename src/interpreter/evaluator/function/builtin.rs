use bigdecimal::BigDecimal;

use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, function::core::eval_pair},
    },
    util::num::{from_f64, to_f64},
};

/// Applies a unary `f64` function to a decimal argument.
///
/// The generated functions evaluate their single argument, convert it to the
/// nearest `f64`, apply the real function and convert the result back to the
/// shortest decimal that round-trips to the same `f64`.
///
/// Results that are not finite (`sqrt(-1)`, `logE(0)`, ...) produce a
/// `NotRepresentable` error.
///
/// # Parameters
/// - `args`: Slice containing one argument node.
/// - `env`: Environment used to evaluate the argument.
///
/// # Returns
/// An `EvalResult<BigDecimal>` containing the computed value.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::{
///     ast::Node,
///     interpreter::{environment::Environment, evaluator::function::builtin::sqrt},
/// };
///
/// let mut env = Environment::new();
/// let r = sqrt(&[Node::number(9)], &mut env).unwrap();
///
/// assert_eq!(r, BigDecimal::from(3));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
            let x = to_f64(&args[0].value(env)?)?;
            from_f64(x.$real_fn())
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(exp, exp);
real_builtin!(log_e, ln);
real_builtin!(log2, log2);
real_builtin!(log10, log10);
real_builtin!(sqrt, sqrt);
real_builtin!(cbrt, cbrt);

/// Evaluates both arguments, left before right, as `f64`.
fn real_pair(args: &[Node], env: &mut Environment) -> EvalResult<(f64, f64)> {
    let (lhs, rhs) = eval_pair(args, env)?;
    Ok((to_f64(&lhs)?, to_f64(&rhs)?))
}

/// Computes the angle of the point `(x, y)`, called as `atan2(y, x)`.
pub fn atan2(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let (y, x) = real_pair(args, env)?;
    from_f64(y.atan2(x))
}

/// Computes `sqrt(x^2 + y^2)` without intermediate overflow.
pub fn hypot(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let (x, y) = real_pair(args, env)?;
    from_f64(x.hypot(y))
}

/// Computes the logarithm of a value with respect to a given base.
///
/// Called as `log(base, n)` and computed as `ln(n) / ln(base)`.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::{
///     ast::Node,
///     interpreter::{environment::Environment, evaluator::function::builtin::log},
/// };
///
/// let mut env = Environment::new();
/// let r = log(&[Node::number(2), Node::number(8)], &mut env).unwrap();
///
/// assert_eq!(r, BigDecimal::from(3));
/// ```
pub fn log(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let (base, n) = real_pair(args, env)?;
    from_f64(n.ln() / base.ln())
}

/// Returns a uniformly distributed number in `[0, 1)`.
pub fn random(_args: &[Node], _env: &mut Environment) -> EvalResult<BigDecimal> {
    from_f64(rand::random::<f64>())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn float_results_are_shortest_round_trip_decimals() {
        let mut env = Environment::new();
        let r = sqrt(&[Node::number(2)], &mut env).unwrap();
        assert_eq!(r, BigDecimal::from_str("1.4142135623730951").unwrap());
    }

    #[test]
    fn non_finite_results_are_errors() {
        let mut env = Environment::new();
        assert!(matches!(sqrt(&[Node::number(-1)], &mut env),
                         Err(RuntimeError::NotRepresentable { .. })));
        assert!(matches!(log_e(&[Node::number(0)], &mut env),
                         Err(RuntimeError::NotRepresentable { .. })));
    }

    #[test]
    fn atan2_takes_y_first() {
        let mut env = Environment::new();
        let r = atan2(&[Node::number(1), Node::number(0)], &mut env).unwrap();
        assert_eq!(r, from_f64(std::f64::consts::FRAC_PI_2).unwrap());
    }

    #[test]
    fn random_stays_in_unit_interval() {
        let mut env = Environment::new();
        for _ in 0..100 {
            let r = random(&[], &mut env).unwrap();
            assert!(r >= BigDecimal::from(0) && r < BigDecimal::from(1));
        }
    }

    #[test]
    fn trigonometry_reads_constants_from_environment() {
        let mut env = Environment::new();
        let r = cos(&[Node::variable("pi")], &mut env).unwrap();
        assert_eq!(r, BigDecimal::from(-1));
    }
}
