/// Core evaluation logic.
///
/// Implements `value`, `evaluate` and `simplify` for every node kind and
/// defines the evaluator's result type.
pub mod core;

/// Operator node evaluation.
///
/// Applies `+ - * / %` to eagerly evaluated operands, plus unary plus and
/// negation.
pub mod operator;

/// Function evaluation.
///
/// Holds the prototype/bind/apply protocol and every built-in function.
pub mod function;
