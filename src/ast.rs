use bigdecimal::BigDecimal;
use num_traits::Signed;

use crate::interpreter::evaluator::function::core::BoundFunction;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Node` is a closed set of four variants. Trees are immutable values: every
/// rewriting operation ([`Node::simplify`]) builds a new tree, and no node
/// refers back to its parent.
///
/// Evaluation lives in [`crate::interpreter::evaluator`]; this module only
/// defines the shapes and their textual input form.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A decimal literal.
    Number(BigDecimal),
    /// Reference to a variable by name.
    Variable(String),
    /// An arithmetic operator applied to one or two operands.
    Operator {
        /// The operator to apply.
        op:  Operator,
        /// Left operand, or the only operand of a unary operator.
        lhs: Box<Self>,
        /// Right operand; absent for unary operators.
        rhs: Option<Box<Self>>,
    },
    /// A built-in function bound to its arguments.
    Function(BoundFunction),
}

/// Represents an arithmetic operator tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`), or unary plus.
    Plus,
    /// Subtraction (`-`), or negation.
    Minus,
    /// Multiplication (`*`)
    Times,
    /// Division (`/`)
    Divide,
    /// Remainder (`%`)
    Mod,
}

impl Node {
    /// Builds a number literal from anything convertible to `BigDecimal`.
    pub fn number(value: impl Into<BigDecimal>) -> Self {
        Self::Number(value.into())
    }

    /// Builds a variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Builds a binary operator node.
    #[must_use]
    pub fn binary(op: Operator, lhs: Self, rhs: Self) -> Self {
        Self::Operator { op,
                         lhs: Box::new(lhs),
                         rhs: Some(Box::new(rhs)) }
    }

    /// Builds a unary operator node.
    #[must_use]
    pub fn unary(op: Operator, operand: Self) -> Self {
        Self::Operator { op,
                         lhs: Box::new(operand),
                         rhs: None }
    }

    /// Returns the literal value if this node is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<&BigDecimal> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Renders the node as source text that parses back to an equivalent
    /// tree.
    ///
    /// Operators are fully parenthesized and negative literals are wrapped in
    /// parentheses, so the output never depends on precedence rules.
    ///
    /// ## Example
    /// ```
    /// use decalc::ast::{Node, Operator};
    ///
    /// let expr = Node::binary(Operator::Times,
    ///                         Node::variable("x"),
    ///                         Node::binary(Operator::Plus, Node::number(1), Node::number(-2)));
    ///
    /// assert_eq!(expr.to_input_string(), "(x * (1 + (-2)))");
    /// ```
    #[must_use]
    pub fn to_input_string(&self) -> String {
        match self {
            Self::Number(n) if n.is_negative() => format!("({n})"),
            Self::Number(n) => n.to_string(),
            Self::Variable(name) => name.clone(),
            Self::Operator { op, lhs, rhs: Some(rhs) } => {
                format!("({} {op} {})", lhs.to_input_string(), rhs.to_input_string())
            },
            Self::Operator { op, lhs, rhs: None } => format!("({op}{})", lhs.to_input_string()),
            Self::Function(function) => function.to_input_string(),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_input_string())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Divide => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
