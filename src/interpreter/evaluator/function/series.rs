use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopedBinding},
        evaluator::core::EvalResult,
    },
};

/// The variable bound to the current index while a series runs.
pub const INDEX_VARIABLE: &str = "i";

/// Which accumulation a series performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    /// `sum(min, max, expr)`: starts at `0` and adds each term.
    Sum,
    /// `product(min, max, expr)`: starts at `1` and multiplies each term.
    Product,
}

impl Series {
    fn identity(self) -> BigDecimal {
        match self {
            Self::Sum => BigDecimal::zero(),
            Self::Product => BigDecimal::one(),
        }
    }

    fn accumulate(self, total: BigDecimal, term: BigDecimal) -> BigDecimal {
        match self {
            Self::Sum => total + term,
            Self::Product => total * term,
        }
    }
}

/// Evaluates `expr` once for each index from `min` to `max` and combines the
/// terms.
///
/// The bounds are evaluated first, in the caller's environment. The index
/// starts at `min` and steps by one while it does not exceed `max`; a
/// fractional `min` keeps its fraction. During the loop `i` is bound to the
/// index, and afterwards it is restored to whatever it was before (or removed
/// if it was unbound), even when a term fails.
///
/// Terms are accumulated exactly.
///
/// # Errors
/// - `InvalidSeriesBounds` if `min > max`.
/// - Any error from evaluating a bound or a term.
///
/// # Example
/// ```
/// use bigdecimal::BigDecimal;
/// use decalc::{
///     ast::{Node, Operator},
///     interpreter::{
///         environment::Environment,
///         evaluator::function::series::{Series, series},
///     },
/// };
///
/// let mut env = Environment::new();
/// let square = Node::binary(Operator::Times, Node::variable("i"), Node::variable("i"));
/// let args = [Node::number(1), Node::number(4), square];
///
/// assert_eq!(series(&args, &mut env, Series::Sum).unwrap(), BigDecimal::from(30));
/// assert!(env.get_variable("i").is_none());
/// ```
pub fn series(args: &[Node], env: &mut Environment, kind: Series) -> EvalResult<BigDecimal> {
    let min = args[0].value(env)?;
    let max = args[1].value(env)?;

    if min > max {
        return Err(RuntimeError::InvalidSeriesBounds { min, max });
    }

    debug!(?kind, min = %min, max = %max, "running series");

    let mut scope = ScopedBinding::new(env, INDEX_VARIABLE);
    let mut total = kind.identity();
    let mut index = min;

    while index <= max {
        scope.set(Node::Number(index.clone()));
        let term = args[2].value(&mut scope)?;
        total = kind.accumulate(total, term);
        index += BigDecimal::one();
    }

    Ok(total)
}
