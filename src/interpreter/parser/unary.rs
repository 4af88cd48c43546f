use std::iter::Peekable;

use crate::{
    ast::{Node, Operator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{bind_call, parse_comma_separated},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (negation)
/// - `+`  (identity)
/// - `~`  (bitwise complement, a call to `BitNot`)
///
/// Unary operators are right-associative, so an input like `-~x` is parsed as
/// `-(~x)`. They bind looser than `^` and postfix `!`, so `-2^2` is `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "~") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A unary operator node, a `BitNot` call, or the power expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Minus, _)) => {
            tokens.next();
            Ok(Node::unary(Operator::Minus, parse_unary(tokens)?))
        },
        Some((Token::Plus, _)) => {
            tokens.next();
            Ok(Node::unary(Operator::Plus, parse_unary(tokens)?))
        },
        Some((Token::Tilde, line)) => {
            tokens.next();
            let operand = parse_unary(tokens)?;
            bind_call("BitNot", vec![operand], *line)
        },
        _ => parse_power(tokens),
    }
}

/// Parses exponentiation.
///
/// `^` is right-associative and its exponent may carry a sign, so `2^3^2` is
/// `2^(3^2)` and `2^-1` is accepted.
///
/// Grammar: `power := postfix ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_postfix(tokens)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return bind_call("power", vec![base, exponent], *line);
    }

    Ok(base)
}

/// Parses any number of postfix `!` operators, each a call to `factorial`.
///
/// Grammar: `postfix := primary "!"*`
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens)?;

    while let Some((Token::Bang, line)) = tokens.peek() {
        tokens.next();
        node = bind_call("factorial", vec![node], *line)?;
    }

    Ok(node)
}

/// Parses a primary expression.
///
/// Primary expressions include:
/// - decimal literals,
/// - identifiers (variables),
/// - function calls `name(arg, ...)`,
/// - parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier "(" arguments ")"
///              | identifier
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnknownFunction` or `InvalidCall` for a call that cannot be bound.
/// - `ExpectedClosingParen` if a parenthesized expression is not closed.
/// - `UnexpectedToken` for any token that cannot start an expression.
/// - `UnexpectedEndOfInput` if the input ends here.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Node::Number(n.clone())),
        Some((Token::Identifier(name), line)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                bind_call(name, args, *line)
            } else {
                Ok(Node::variable(name.clone()))
            }
        },
        Some((Token::LParen, line)) => {
            let inner = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(inner),
                _ => Err(ParseError::ExpectedClosingParen { line: *line }),
            }
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        // `parse_program` supplies the line of the last token.
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
