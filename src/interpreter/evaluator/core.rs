use bigdecimal::BigDecimal;

use crate::{ast::Node, error::RuntimeError, interpreter::environment::Environment};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Node {
    /// Evaluates the node to a decimal.
    ///
    /// This is the main entry point for expression evaluation. Literals are
    /// returned as-is, variables evaluate whatever node they are bound to,
    /// operators evaluate their operands left to right, and function calls
    /// run the bound function.
    ///
    /// The environment is only modified by functions that are defined to do
    /// so (`define`, and the temporary index binding of `sum`/`product`).
    ///
    /// # Errors
    /// - `UnknownVariable` if a referenced variable has no binding.
    /// - Any error raised by an operator or function further down the tree.
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
    /// env.set_variable("x", Node::number(4));
    ///
    /// let expr = Node::binary(Operator::Times, Node::variable("x"), Node::number(10));
    /// assert_eq!(expr.value(&mut env).unwrap(), BigDecimal::from(40));
    /// ```
    pub fn value(&self, env: &mut Environment) -> EvalResult<BigDecimal> {
        match self {
            Self::Number(n) => Ok(n.clone()),
            Self::Variable(name) => {
                let bound = env.get_variable(name)
                               .cloned()
                               .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?;
                bound.value(env)
            },
            Self::Operator { op, lhs, rhs } => Self::eval_operator(*op, lhs, rhs.as_deref(), env),
            Self::Function(function) => function.value(env),
        }
    }

    /// Reduces the node to another node.
    ///
    /// Function calls delegate to their bound function's `apply`; every other
    /// kind reduces to the number literal of its value.
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Self> {
        match self {
            Self::Number(_) => Ok(self.clone()),
            Self::Function(function) => function.evaluate(env),
            Self::Variable(_) | Self::Operator { .. } => Ok(Self::Number(self.value(env)?)),
        }
    }

    /// Returns an equivalent, possibly smaller tree.
    ///
    /// Simplification recurses into every subtree and never applies algebraic
    /// identities. It folds a subtree into a literal only when:
    /// - a variable names a built-in constant (`pi`, `e`);
    /// - an operator's operands all simplified to literals;
    /// - an exact built-in function's arguments all simplified to literals.
    ///
    /// A fold whose evaluation fails is skipped, leaving the subtree in place
    /// so the error surfaces when the tree is evaluated.
    ///
    /// # Example
    /// ```
    /// use decalc::{
    ///     ast::{Node, Operator},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let sum = Node::binary(Operator::Plus, Node::number(2), Node::number(3));
    /// let expr = Node::binary(Operator::Times, Node::variable("x"), sum);
    ///
    /// assert_eq!(expr.simplify(&mut env).to_input_string(), "(x * 5)");
    /// ```
    #[must_use]
    pub fn simplify(&self, env: &mut Environment) -> Self {
        match self {
            Self::Number(_) => self.clone(),
            Self::Variable(name) => {
                if env.is_constant(name)
                   && let Some(constant @ Self::Number(_)) = env.get_variable(name)
                {
                    return constant.clone();
                }
                self.clone()
            },
            Self::Operator { op, lhs, rhs } => {
                let lhs = lhs.simplify(env);
                let rhs = rhs.as_ref().map(|rhs| rhs.simplify(env));

                let rebuilt = Self::Operator { op:  *op,
                                               lhs: Box::new(lhs),
                                               rhs: rhs.map(Box::new), };
                fold_literal_operands(rebuilt, env)
            },
            Self::Function(function) => function.simplify(env),
        }
    }
}

/// Replaces an operator node by its value when every operand is a literal.
fn fold_literal_operands(node: Node, env: &mut Environment) -> Node {
    let Node::Operator { lhs, rhs, .. } = &node else {
        return node;
    };
    let literal_operands = lhs.as_number().is_some()
                           && rhs.as_deref().is_none_or(|rhs| rhs.as_number().is_some());
    if !literal_operands {
        return node;
    }

    match node.value(env) {
        Ok(value) => Node::Number(value),
        Err(_) => node,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    #[test]
    fn unbound_variable_is_reported_by_name() {
        let mut env = Environment::new();
        let err = Node::variable("y").value(&mut env).unwrap_err();
        assert_eq!(err, RuntimeError::UnknownVariable { name: "y".into() });
    }

    #[test]
    fn bound_but_failing_variable_propagates_inner_error() {
        let mut env = Environment::new();
        env.set_variable("y",
                         Node::binary(Operator::Divide, Node::number(1), Node::number(0)));
        let err = Node::variable("y").value(&mut env).unwrap_err();
        assert_eq!(err, RuntimeError::DivisionByZero);
    }

    #[test]
    fn evaluate_reduces_to_literal() {
        let mut env = Environment::new();
        let expr = Node::binary(Operator::Minus, Node::number(10), Node::number(4));
        assert_eq!(expr.evaluate(&mut env).unwrap(), Node::number(6));
    }

    #[test]
    fn simplify_leaves_failing_fold_in_place() {
        let mut env = Environment::new();
        let expr = Node::binary(Operator::Divide, Node::number(1), Node::number(0));
        assert_eq!(expr.simplify(&mut env), expr);
    }

    #[test]
    fn simplify_replaces_constants_only() {
        let mut env = Environment::new();
        env.set_variable("x", Node::number(2));
        assert!(matches!(Node::variable("pi").simplify(&mut env), Node::Number(_)));
        assert_eq!(Node::variable("x").simplify(&mut env), Node::variable("x"));
    }
}
