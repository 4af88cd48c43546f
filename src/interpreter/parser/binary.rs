use std::iter::Peekable;

use crate::{
    ast::{Node, Operator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::bind_call},
    },
};

/// The left-associative precedence levels, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Comparison,
    BitOr,
    BitAnd,
    Shift,
    Additive,
    Multiplicative,
}

/// What an infix token builds: an operator node or a built-in call.
#[derive(Debug, Clone, Copy)]
enum BinaryForm {
    Operator(Operator),
    Function(&'static str),
}

impl BinaryForm {
    fn combine(self, left: Node, right: Node, line: usize) -> ParseResult<Node> {
        match self {
            Self::Operator(op) => Ok(Node::binary(op, left, right)),
            Self::Function(name) => bind_call(name, vec![left, right], line),
        }
    }
}

/// Maps an infix token to its precedence level and the node it builds.
///
/// # Parameters
/// - `token`: The token to classify.
///
/// # Returns
/// `None` if the token is not an infix operator handled at these levels.
fn token_to_binary_form(token: &Token) -> Option<(Level, BinaryForm)> {
    let classified = match token {
        Token::EqualEqual => (Level::Comparison, BinaryForm::Function("Equal")),
        Token::BangEqual => (Level::Comparison, BinaryForm::Function("Unequal")),
        Token::Less => (Level::Comparison, BinaryForm::Function("Less")),
        Token::LessEqual => (Level::Comparison, BinaryForm::Function("LessEqual")),
        Token::Greater => (Level::Comparison, BinaryForm::Function("Greater")),
        Token::GreaterEqual => (Level::Comparison, BinaryForm::Function("GreaterEqual")),
        Token::Pipe => (Level::BitOr, BinaryForm::Function("BitOr")),
        Token::Ampersand => (Level::BitAnd, BinaryForm::Function("BitAnd")),
        Token::ShiftLeft => (Level::Shift, BinaryForm::Function("BitShiftLeft")),
        Token::ShiftRight => (Level::Shift, BinaryForm::Function("BitShiftRight")),
        Token::Plus => (Level::Additive, BinaryForm::Operator(Operator::Plus)),
        Token::Minus => (Level::Additive, BinaryForm::Operator(Operator::Minus)),
        Token::Star => (Level::Multiplicative, BinaryForm::Operator(Operator::Times)),
        Token::Slash => (Level::Multiplicative, BinaryForm::Operator(Operator::Divide)),
        Token::Percent => (Level::Multiplicative, BinaryForm::Operator(Operator::Mod)),
        _ => return None,
    };
    Some(classified)
}

/// Parses one left-associative level: `next (op next)*` for the operators
/// belonging to `level`.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      level: Level,
                      next: impl Fn(&mut Peekable<I>) -> ParseResult<Node>)
                      -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = next(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some((found, form)) = token_to_binary_form(token)
           && found == level
        {
            tokens.next();
            let right = next(tokens)?;
            left = form.combine(left, right, *line)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// `==`, `!=`, `<`, `<=`, `>` and `>=` become calls to `Equal`, `Unequal`,
/// `Less`, `LessEqual`, `Greater` and `GreaterEqual`.
///
/// The rule is: `comparison := bit_or (("==" | "!=" | "<" | "<=" | ">" |
/// ">=") bit_or)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_level(tokens, Level::Comparison, parse_bit_or)
}

/// Parses `|` as `BitOr`.
///
/// The rule is: `bit_or := bit_and ("|" bit_and)*`
pub fn parse_bit_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_level(tokens, Level::BitOr, parse_bit_and)
}

/// Parses `&` as `BitAnd`.
///
/// The rule is: `bit_and := shift ("&" shift)*`
pub fn parse_bit_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_level(tokens, Level::BitAnd, parse_shift)
}

/// Parses `<<` and `>>` as `BitShiftLeft` and `BitShiftRight`.
///
/// The rule is: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_level(tokens, Level::Shift, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An operator tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_level(tokens, Level::Additive, parse_multiplicative)
}

/// Parses multiplication-level expressions: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_level(tokens, Level::Multiplicative, parse_unary)
}
