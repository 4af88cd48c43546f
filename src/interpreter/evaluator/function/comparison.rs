use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, function::core::eval_pair},
    },
    util::num::{from_bool, truncate_to_integer},
};

/// Compares the two arguments numerically; `2` and `2.00` are equal.
fn compare(args: &[Node], env: &mut Environment) -> EvalResult<Ordering> {
    let (lhs, rhs) = eval_pair(args, env)?;
    Ok(lhs.cmp(&rhs))
}

/// Generates a comparison builtin returning `1` when the ordering of its two
/// arguments matches `$pattern` and `0` otherwise.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::{
///     ast::Node,
///     interpreter::{environment::Environment, evaluator::function::comparison::less_equal},
/// };
///
/// let mut env = Environment::new();
/// let r = less_equal(&[Node::number(2), Node::number(2)], &mut env).unwrap();
///
/// assert_eq!(r, BigDecimal::from(1));
/// ```
macro_rules! comparison_builtin {
    ($fname:ident, $pattern:pat) => {
        pub fn $fname(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
            Ok(from_bool(matches!(compare(args, env)?, $pattern)))
        }
    };
}

comparison_builtin!(equal, Ordering::Equal);
comparison_builtin!(unequal, Ordering::Less | Ordering::Greater);
comparison_builtin!(less, Ordering::Less);
comparison_builtin!(less_equal, Ordering::Less | Ordering::Equal);
comparison_builtin!(greater, Ordering::Greater);
comparison_builtin!(greater_equal, Ordering::Greater | Ordering::Equal);

/// Logical negation: `1` if the argument truncates to zero, else `0`.
pub fn not(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let x = args[0].value(env)?;
    Ok(from_bool(truncate_to_integer(&x).is_zero()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn num(s: &str) -> Node {
        Node::Number(BigDecimal::from_str(s).unwrap())
    }

    fn truth(result: EvalResult<BigDecimal>) -> bool {
        let value = result.unwrap();
        assert!(value == BigDecimal::from(0) || value == BigDecimal::from(1));
        value == BigDecimal::from(1)
    }

    #[test]
    fn equality_ignores_scale() {
        let mut env = Environment::new();
        assert!(truth(equal(&[num("2"), num("2.000")], &mut env)));
        assert!(!truth(unequal(&[num("2"), num("2.000")], &mut env)));
    }

    #[test]
    fn orderings() {
        let mut env = Environment::new();
        let (a, b) = (num("-1.5"), num("0.25"));
        assert!(truth(less(&[a.clone(), b.clone()], &mut env)));
        assert!(truth(less_equal(&[a.clone(), b.clone()], &mut env)));
        assert!(!truth(greater(&[a.clone(), b.clone()], &mut env)));
        assert!(truth(greater_equal(&[b.clone(), a.clone()], &mut env)));
        assert!(truth(unequal(&[a, b], &mut env)));
    }

    #[test]
    fn not_truncates_before_testing() {
        let mut env = Environment::new();
        assert!(truth(not(&[num("0")], &mut env)));
        assert!(truth(not(&[num("0.9")], &mut env)));
        assert!(truth(not(&[num("-0.9")], &mut env)));
        assert!(!truth(not(&[num("1.2")], &mut env)));
        assert!(!truth(not(&[num("-3")], &mut env)));
    }
}
