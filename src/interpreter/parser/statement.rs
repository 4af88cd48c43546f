use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::bind_call,
        },
    },
};

/// Parses a single statement and the newline that ends it.
///
/// A statement is an expression, or an assignment `target = value`, which is
/// parsed as `define(target, value)`. The target is parsed as a full
/// expression; whether it is a plain variable is checked when `define` runs.
///
/// Grammar: `statement := expression ("=" expression)?`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// The statement's tree.
///
/// # Errors
/// Returns `UnexpectedTrailingTokens` if anything other than a newline or the
/// end of input follows the statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let target = parse_expression(tokens)?;

    let statement = if let Some((Token::Equals, line)) = tokens.peek() {
        tokens.next();
        let value = parse_expression(tokens)?;
        bind_call("define", vec![target, value], *line)?
    } else {
        target
    };

    match tokens.next() {
        None | Some((Token::NewLine, _)) => Ok(statement),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}
