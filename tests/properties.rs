//! Property-based tests for the parser and the tree operations.
//!
//! These tests use proptest to generate random trees and sources and verify
//! that:
//! 1. The lexer and parser never panic on arbitrary input
//! 2. Re-parsing a tree's input form gives a tree with the same value
//! 3. Simplification is idempotent

use bigdecimal::BigDecimal;
use decalc::{
    ast::{Node, Operator},
    interpreter::{
        environment::Environment,
        evaluator::function::core::lookup,
        parser::core::parse_program,
    },
};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the lexer or parser
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,200}").unwrap()
}

/// Generate decimal literals with up to three fractional digits
fn literal() -> impl Strategy<Value = Node> {
    (-1000i64..1000, 0i64..4).prop_map(|(digits, scale)| {
                                 Node::Number(BigDecimal::new(digits.into(), scale))
                             })
}

/// Generate leaves: literals, bound variables and constants
fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        4 => literal(),
        1 => Just(Node::variable("x")),
        1 => Just(Node::variable("y")),
        1 => Just(Node::variable("pi")),
    ]
}

fn call(name: &str, args: Vec<Node>) -> Node {
    Node::Function(lookup(name).unwrap().bind(args).unwrap())
}

/// Generate trees mixing operators with exact and floating-point functions
fn tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 32, 2, |inner| {
              let op = prop_oneof![Just(Operator::Plus),
                                   Just(Operator::Minus),
                                   Just(Operator::Times),
                                   Just(Operator::Divide),
                                   Just(Operator::Mod)];
              prop_oneof![
                  (op, inner.clone(), inner.clone()).prop_map(|(op, l, r)| Node::binary(op, l, r)),
                  inner.clone().prop_map(|n| Node::unary(Operator::Minus, n)),
                  (inner.clone(), inner.clone()).prop_map(|(l, r)| call("Less", vec![l, r])),
                  (inner.clone(), inner.clone()).prop_map(|(l, r)| call("BitAnd", vec![l, r])),
                  inner.clone().prop_map(|n| call("floor", vec![n])),
                  inner.clone().prop_map(|n| call("abs", vec![n])),
                  inner.prop_map(|n| call("sin", vec![n])),
              ]
          })
}

fn environment() -> Environment {
    let mut env = Environment::new();
    env.set_variable("x", Node::number(7));
    env.set_variable("y", Node::Number(BigDecimal::new((-25).into(), 1)));
    env
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// The lexer and parser should never panic on arbitrary input
    #[test]
    fn parser_never_panics(source in arbitrary_source_string()) {
        let _ = parse_program(&source);
    }

    /// Re-parsing the input form reproduces a tree with the same value
    #[test]
    fn input_form_round_trips(node in tree()) {
        let source = node.to_input_string();
        let program = parse_program(&source).map_err(|e| TestCaseError::fail(format!("{source}: {e}")))?;
        prop_assert_eq!(program.len(), 1);

        let expected = node.value(&mut environment());
        let actual = program[0].value(&mut environment());
        prop_assert_eq!(expected, actual, "{}", source);
    }

    /// Simplifying twice gives the same tree as simplifying once
    #[test]
    fn simplify_is_idempotent(node in tree()) {
        let mut env = environment();
        let once = node.simplify(&mut env);
        let twice = once.simplify(&mut env);
        prop_assert_eq!(once, twice);
    }

    /// Simplification never changes a tree's value
    #[test]
    fn simplify_preserves_value(node in tree()) {
        let simplified = node.simplify(&mut environment());
        prop_assert_eq!(node.value(&mut environment()), simplified.value(&mut environment()));
    }
}
