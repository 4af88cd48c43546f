use bigdecimal::BigDecimal;
use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

/// Assigns a value to a variable: `define(name, value)`, written `name = value`.
///
/// The right-hand side is evaluated once and the variable is bound to the
/// resulting literal, so later changes to the variables it referenced do not
/// affect it. Returns the assigned value.
///
/// # Errors
/// - `InvalidAssignmentTarget` if the first argument is not a variable node.
/// - `ConstantRedefinition` if it names a built-in constant.
/// - Any error from evaluating the right-hand side; the environment is left
///   unchanged in that case.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::{
///     ast::Node,
///     interpreter::{environment::Environment, evaluator::function::define::define},
/// };
///
/// let mut env = Environment::new();
/// let r = define(&[Node::variable("x"), Node::number(3)], &mut env).unwrap();
///
/// assert_eq!(r, BigDecimal::from(3));
/// assert_eq!(env.get_variable("x"), Some(&Node::number(3)));
/// ```
pub fn define(args: &[Node], env: &mut Environment) -> EvalResult<BigDecimal> {
    let Node::Variable(name) = &args[0] else {
        return Err(RuntimeError::InvalidAssignmentTarget { target: args[0].to_input_string() });
    };

    if env.is_constant(name) {
        return Err(RuntimeError::ConstantRedefinition { name: name.clone() });
    }

    let value = args[1].value(env)?;
    debug!(name = %name, value = %value, "defining variable");
    env.set_variable(name.clone(), Node::Number(value.clone()));

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    #[test]
    fn binds_the_value_not_the_expression() {
        let mut env = Environment::new();
        env.set_variable("y", Node::number(2));
        let rhs = Node::binary(Operator::Plus, Node::variable("y"), Node::number(1));

        define(&[Node::variable("x"), rhs], &mut env).unwrap();
        env.set_variable("y", Node::number(100));

        assert_eq!(Node::variable("x").value(&mut env).unwrap(), BigDecimal::from(3));
    }

    #[test]
    fn rejects_non_variable_targets() {
        let mut env = Environment::new();
        let err = define(&[Node::number(1), Node::number(2)], &mut env).unwrap_err();
        assert_eq!(err, RuntimeError::InvalidAssignmentTarget { target: "1".into() });
    }

    #[test]
    fn rejects_constants() {
        let mut env = Environment::new();
        let err = define(&[Node::variable("pi"), Node::number(3)], &mut env).unwrap_err();
        assert_eq!(err, RuntimeError::ConstantRedefinition { name: "pi".into() });
    }

    #[test]
    fn failed_right_hand_side_leaves_environment_alone() {
        let mut env = Environment::new();
        let rhs = Node::binary(Operator::Divide, Node::number(1), Node::number(0));
        assert!(define(&[Node::variable("x"), rhs], &mut env).is_err());
        assert!(env.get_variable("x").is_none());
    }
}
