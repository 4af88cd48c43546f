use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{binary::parse_comparison, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens)
}

/// Parses source text into one tree per statement.
///
/// Statements are separated by newlines; blank lines and comment-only lines
/// produce nothing. Every function call in the result is already bound to its
/// arguments.
///
/// # Errors
/// Returns the first lexing or parsing error, including unknown functions and
/// calls with the wrong number of arguments.
///
/// # Example
/// ```
/// use decalc::interpreter::parser::core::parse_program;
///
/// let program = parse_program("x = 2 ^ 10\n\n// done\nx % 7").unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[0].to_input_string(), "define(x, power(2, 10))");
/// assert_eq!(program[1].to_input_string(), "(x % 7)");
/// ```
pub fn parse_program(source: &str) -> ParseResult<Vec<Node>> {
    let tokens = tokenize(source)?;
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        let statement = parse_statement(&mut iter).map_err(|e| e.at_end_of_input(last_line))?;
        statements.push(statement);
    }

    Ok(statements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(source: &str) -> String {
        let program = parse_program(source).unwrap();
        assert_eq!(program.len(), 1, "{source}");
        program[0].to_input_string()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(parse_one("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(parse_one("8 - 3 - 2"), "((8 - 3) - 2)");
        assert_eq!(parse_one("2 ^ 3 ^ 2"), "power(2, power(3, 2))");
        assert_eq!(parse_one("-2 ^ 2"), "(-power(2, 2))");
        assert_eq!(parse_one("-4!"), "(-factorial(4))");
        assert_eq!(parse_one("2 ^ -1"), "power(2, (-1))");
        assert_eq!(parse_one("3!!"), "factorial(factorial(3))");
    }

    #[test]
    fn infix_forms_become_builtin_calls() {
        assert_eq!(parse_one("a < b == c"), "Equal(Less(a, b), c)");
        assert_eq!(parse_one("1 | 2 & 3"), "BitOr(1, BitAnd(2, 3))");
        assert_eq!(parse_one("1 << 2 + 3"), "BitShiftLeft(1, (2 + 3))");
        assert_eq!(parse_one("~x >> 1"), "BitShiftRight(BitNot(x), 1)");
        assert_eq!(parse_one("a != b"), "Unequal(a, b)");
    }

    #[test]
    fn calls_and_assignment() {
        assert_eq!(parse_one("sum(1, 10, i * i)"), "sum(1, 10, (i * i))");
        assert_eq!(parse_one("random()"), "random()");
        assert_eq!(parse_one("y = (x + 1) * 2"), "define(y, ((x + 1) * 2))");
    }

    #[test]
    fn errors() {
        assert_eq!(parse_program("foo(1)").unwrap_err(),
                   ParseError::UnknownFunction { name: "foo".into(),
                                                 line: 1, });
        assert!(matches!(parse_program("\nabs(1, 2)").unwrap_err(),
                         ParseError::InvalidCall { line: 2, .. }));
        assert!(matches!(parse_program("(1 + 2").unwrap_err(),
                         ParseError::ExpectedClosingParen { line: 1 }));
        assert!(matches!(parse_program("1 2").unwrap_err(),
                         ParseError::UnexpectedTrailingTokens { line: 1, .. }));
        assert_eq!(parse_program("1 +").unwrap_err(),
                   ParseError::UnexpectedEndOfInput { line: 1 });
        assert_eq!(parse_program("x = 1\n\nabs(x,").unwrap_err(),
                   ParseError::UnexpectedEndOfInput { line: 3 });
        assert!(matches!(parse_program(")").unwrap_err(),
                         ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn empty_program() {
        assert!(parse_program("").unwrap().is_empty());
        assert!(parse_program("\n// only a comment\n").unwrap().is_empty());
    }
}
